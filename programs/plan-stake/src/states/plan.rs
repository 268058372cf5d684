use crate::error::ErrorCode;
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Plan Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive a plan account:
/// `PLAN_SEED + stake_config + plan_id (le)`.
pub const PLAN_SEED: &str = "plan";

/// Maximum plan name length in bytes.
pub const MAX_PLAN_NAME_LEN: usize = 32;

/// Seconds in one lock unit.
#[cfg(not(feature = "devnet"))]
pub const LOCK_UNIT_SECONDS: i64 = 86_400;
#[cfg(feature = "devnet")]
pub const LOCK_UNIT_SECONDS: i64 = 60;

/// A staking offer in the append-only plan catalog.
///
/// Plans are written once by `add_plan` and never updated or closed. The
/// `rate` is stored for off-chain consumers; no reward is paid on chain.
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct Plan {
    /// PDA bump for this account.
    pub bump: u8,

    /// Dense, zero-based catalog index.
    pub id: u64,

    /// Display name, at most `MAX_PLAN_NAME_LEN` bytes.
    pub name: String,

    /// Reward rate as a whole percentage.
    pub rate: u64,

    /// Lock duration, counted in `LOCK_UNIT_SECONDS`.
    pub lock_duration_units: u64,

    /// UNIX timestamp (seconds) of registration.
    pub created_at: i64,
}

impl Plan {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 8: id
    /// - 4 + MAX_PLAN_NAME_LEN: borsh string
    /// - 8 * 2: rate, lock units
    /// - 8: created_at
    pub const LEN: usize = 8 + 1 + 8 + 4 + MAX_PLAN_NAME_LEN + 8 * 2 + 8;

    pub fn validate_name(name: &str) -> Result<()> {
        require!(!name.is_empty(), ErrorCode::EmptyPlanName);
        require!(name.len() <= MAX_PLAN_NAME_LEN, ErrorCode::PlanNameTooLong);
        Ok(())
    }

    /// Lock length in seconds.
    pub fn lock_seconds(&self) -> Result<i64> {
        let units = i64::try_from(self.lock_duration_units).map_err(|_| ErrorCode::MathOverflow)?;
        units
            .checked_mul(LOCK_UNIT_SECONDS)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    }

    /// First timestamp at which a position deposited at `deposited_at` may be withdrawn.
    pub fn unlock_timestamp(&self, deposited_at: i64) -> Result<i64> {
        deposited_at
            .checked_add(self.lock_seconds()?)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    }
}

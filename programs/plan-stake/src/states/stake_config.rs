use crate::error::ErrorCode;
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Stake Configuration Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive the token pool's configuration account.
pub const STAKE_CONFIG_SEED: &str = "stake_config";

/// PDA seed string used to derive the native (lamport) pool's configuration.
pub const NATIVE_STAKE_CONFIG_SEED: &str = "native_stake_config";

/// Stores one pool's staking configuration, plan catalog size and custody
/// totals.
///
/// Created once by `initialise_config` (token pool) or
/// `initialise_native_config` (native pool). The owner and token mint are
/// written at that point and never change afterwards; only the counters move.
#[account]
#[derive(Default, Debug)]
pub struct StakeConfig {
    /// PDA bump for this account (for seed derivation).
    pub bump: u8,

    /// Bump of the PDA that signs custody releases: the token authority, or
    /// the native vault itself.
    pub authority_bump: u8,

    /// Administrator identity. Only this key may register plans and it may
    /// not stake itself.
    pub owner: Pubkey,

    /// Mint of the token accepted for staking. The default key marks the
    /// native pool, which has no external token ledger.
    pub token_mint: Pubkey,

    /// Program-owned vault holding every depositor's principal.
    pub custody_vault: Pubkey,

    /// Number of registered plans. Plan ids are `0..plan_count`.
    pub plan_count: u64,

    /// Sum of all stake record amounts (base units).
    pub total_staked: u64,

    /// Number of successful stake calls since initialization.
    pub total_deposits: u64,
}

impl StakeConfig {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1 + 1: two bumps
    /// - 32 * 3: three Pubkeys
    /// - 8 * 3: three u64 fields
    pub const LEN: usize = 8 + 1 + 1 + 32 * 3 + 8 * 3;

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }

    pub fn is_native(&self) -> bool {
        self.token_mint == Pubkey::default()
    }

    /// Resolves a plan id against the append-only catalog.
    pub fn check_plan_index(&self, plan_id: u64) -> Result<()> {
        require!(plan_id < self.plan_count, ErrorCode::InvalidPlanIndex);
        Ok(())
    }

    /// Reserves the next dense plan id and bumps the catalog size.
    pub fn allocate_plan_id(&mut self) -> Result<u64> {
        let plan_id = self.plan_count;
        self.plan_count = self
            .plan_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(plan_id)
    }

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        self.total_deposits = self
            .total_deposits
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    pub fn record_withdrawal(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }
}

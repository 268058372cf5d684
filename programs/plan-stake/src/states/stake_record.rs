use crate::error::ErrorCode;
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// StakeRecord Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive a position:
/// `STAKE_RECORD_SEED + stake_config + owner + plan_id (le)`.
pub const STAKE_RECORD_SEED: &str = "stake_record";

/// A depositor's position in one plan.
///
/// Repeated stakes into the same plan accumulate here. Positions in different
/// plans live in different records.
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct StakeRecord {
    /// PDA bump for this account.
    pub bump: u8,

    /// Depositor who controls withdrawal of this position.
    pub owner: Pubkey,

    /// Plan the position is held under.
    pub plan_id: u64,

    /// Principal currently held for the owner (base units).
    pub amount: u64,

    /// UNIX timestamp (seconds) of the first deposit.
    pub first_staked_at: i64,

    /// UNIX timestamp (seconds) of the latest deposit. The plan lock runs from here.
    pub last_staked_at: i64,

    /// Number of deposits made into this position.
    pub deposit_count: u64,
}

impl StakeRecord {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32: owner pubkey
    /// - 8 * 2: plan id, amount
    /// - 8 * 2: two timestamps
    /// - 8: deposit count
    pub const LEN: usize = 8 + 1 + 32 + 8 * 2 + 8 * 2 + 8;

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Adds a deposit, initializing the position on first use.
    pub fn credit(&mut self, owner: Pubkey, plan_id: u64, amount: u64, now: i64) -> Result<()> {
        let amount = self
            .amount
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let deposit_count = self
            .deposit_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;

        if !self.is_initialized() {
            self.owner = owner;
            self.plan_id = plan_id;
            self.first_staked_at = now;
        }
        self.amount = amount;
        self.deposit_count = deposit_count;
        self.last_staked_at = now;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(ErrorCode::InsufficientStake)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn first_credit_initializes_position() {
        let owner = Pubkey::new_unique();
        let mut record = StakeRecord::default();
        record.credit(owner, 2, 100, 50).unwrap();
        assert_eq!(record.owner, owner);
        assert_eq!(record.plan_id, 2);
        assert_eq!(record.amount, 100);
        assert_eq!(record.first_staked_at, 50);
        assert_eq!(record.last_staked_at, 50);
        assert_eq!(record.deposit_count, 1);

        record.credit(owner, 2, 40, 90).unwrap();
        assert_eq!(record.amount, 140);
        assert_eq!(record.first_staked_at, 50);
        assert_eq!(record.last_staked_at, 90);
        assert_eq!(record.deposit_count, 2);
    }

    #[test]
    fn overflowing_credit_leaves_record_untouched() {
        let owner = Pubkey::new_unique();
        let mut record = StakeRecord::default();
        record.credit(owner, 0, u64::MAX, 1).unwrap();
        let before = record.clone();
        assert!(record.credit(owner, 0, 1, 2).is_err());
        assert_eq!(record, before);
    }

    #[test]
    fn debit_beyond_principal_fails() {
        let mut record = StakeRecord::default();
        record.credit(Pubkey::new_unique(), 0, 10, 1).unwrap();
        assert!(record.debit(11).is_err());
        assert_eq!(record.amount, 10);
        record.debit(10).unwrap();
        assert_eq!(record.amount, 0);
    }

    quickcheck! {
        fn credit_then_debit_restores_amount(start: u32, delta: u32) -> bool {
            let mut record = StakeRecord::default();
            record.credit(Pubkey::new_unique(), 0, start as u64, 0).unwrap();
            record.credit(record.owner, 0, delta as u64, 1).unwrap();
            record.debit(delta as u64).unwrap();
            record.amount == start as u64
        }
    }
}

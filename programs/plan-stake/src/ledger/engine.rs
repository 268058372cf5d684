//! Stake accounting: validation, custody movement and record updates.

use super::{CustodyLedger, PlanRegistry};
use crate::error::ErrorCode;
use crate::states::{Plan, StakeConfig, StakeRecord, StakedSuccessfully, WithdrawnSuccessfully};
use anchor_lang::prelude::*;

pub struct StakingLedger;

impl StakingLedger {
    /// Checks a stake request without touching any state.
    ///
    /// Order: zero amount, owner restriction, plan index, balance/allowance.
    pub fn validate_stake<L: CustodyLedger>(
        config: &StakeConfig,
        ledger: &L,
        caller: &Pubkey,
        amount: u64,
        plan_id: u64,
    ) -> Result<()> {
        require_gt!(amount, 0, ErrorCode::ZeroAmount);
        require!(!config.is_owner(caller), ErrorCode::Unauthorized);
        config.check_plan_index(plan_id)?;
        require_gte!(
            ledger.balance_of(caller),
            amount,
            ErrorCode::InsufficientBalance
        );
        require_gte!(
            ledger.allowance(caller),
            amount,
            ErrorCode::InsufficientBalance
        );
        Ok(())
    }

    /// Moves `amount` from `caller` into custody under `plan_id`.
    ///
    /// All checks and arithmetic run before the custody pull; `config` and
    /// `record` are only written once custody has grown by exactly `amount`.
    pub fn stake<L: CustodyLedger>(
        config: &mut StakeConfig,
        record: &mut StakeRecord,
        ledger: &mut L,
        caller: Pubkey,
        amount: u64,
        plan_id: u64,
        now: i64,
    ) -> Result<StakedSuccessfully> {
        Self::validate_stake(config, ledger, &caller, amount, plan_id)?;
        if record.is_initialized() {
            require_keys_eq!(record.owner, caller, ErrorCode::Unauthorized);
            require_eq!(record.plan_id, plan_id, ErrorCode::InvalidPlanIndex);
        }

        let mut next_config = config.clone();
        next_config.record_deposit(amount)?;
        let mut next_record = record.clone();
        next_record.credit(caller, plan_id, amount, now)?;

        let received = ledger.pull_into_custody(&caller, amount)?;
        require_eq!(received, amount, ErrorCode::CustodyMismatch);

        *config = next_config;
        *record = next_record;

        #[cfg(feature = "enable-log")]
        msg!(
            "stake: account={} plan={} amount={} position={} custody={}",
            caller,
            plan_id,
            amount,
            record.amount,
            config.total_staked
        );

        Ok(StakedSuccessfully {
            account: caller,
            amount,
            plan_id,
        })
    }

    /// Returns `amount` of principal from custody to the record's owner once
    /// the plan lock, counted from the latest deposit, has elapsed.
    pub fn withdraw<L: CustodyLedger>(
        config: &mut StakeConfig,
        record: &mut StakeRecord,
        plan: &Plan,
        ledger: &mut L,
        caller: Pubkey,
        amount: u64,
        now: i64,
    ) -> Result<WithdrawnSuccessfully> {
        require_gt!(amount, 0, ErrorCode::ZeroAmount);
        require!(record.is_initialized(), ErrorCode::InsufficientStake);
        require_keys_eq!(record.owner, caller, ErrorCode::Unauthorized);
        let plan = PlanRegistry::resolve(config, plan, record.plan_id)?;
        require_gte!(record.amount, amount, ErrorCode::InsufficientStake);
        require_gte!(
            now,
            plan.unlock_timestamp(record.last_staked_at)?,
            ErrorCode::StakeLocked
        );

        let mut next_config = config.clone();
        next_config.record_withdrawal(amount)?;
        let mut next_record = record.clone();
        next_record.debit(amount)?;

        ledger.release_from_custody(&caller, amount)?;

        *config = next_config;
        *record = next_record;

        #[cfg(feature = "enable-log")]
        msg!(
            "withdraw: account={} plan={} amount={} position={} custody={}",
            caller,
            plan.id,
            amount,
            record.amount,
            config.total_staked
        );

        Ok(WithdrawnSuccessfully {
            account: caller,
            amount,
            plan_id: plan.id,
        })
    }
}

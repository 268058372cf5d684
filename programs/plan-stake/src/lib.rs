use anchor_lang::prelude::*;

declare_id!("5tKQcmJ8fXzNw4rPLvhn3eVGd9TAy2EbZkRu1sM6qWpo");

pub mod admin {
    use anchor_lang::prelude::declare_id;
    declare_id!("Gomr65jvEH7ALXsqa1DKweWBUExtBZudtdh68gqyNyrt");
}

pub const AUTH_SEED: &str = "stake_custody_auth";
pub const CUSTODY_VAULT_SEED: &str = "custody_vault";
pub const NATIVE_VAULT_SEED: &str = "native_vault";

pub mod error;
pub mod instructions;
pub mod ledger;
pub mod states;
pub mod utils;

use instructions::*;
use states::{Plan, StakeRecord};

#[program]
pub mod plan_stake {

    use super::*;

    pub fn initialise_config(ctx: Context<InitialiseConfig>) -> Result<()> {
        instructions::initialise_config(ctx)
    }

    pub fn initialise_native_config(ctx: Context<InitialiseNativeConfig>) -> Result<()> {
        instructions::initialise_native_config(ctx)
    }

    pub fn add_plan(
        ctx: Context<AddPlan>,
        name: String,
        rate: u64,
        lock_duration_units: u64,
    ) -> Result<u64> {
        instructions::add_plan(ctx, name, rate, lock_duration_units)
    }

    pub fn stake(ctx: Context<Stake>, amount: u64, plan_id: u64) -> Result<()> {
        instructions::stake(ctx, amount, plan_id)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64, plan_id: u64) -> Result<()> {
        instructions::withdraw(ctx, amount, plan_id)
    }

    pub fn stake_native(ctx: Context<StakeNative>, amount: u64, plan_id: u64) -> Result<()> {
        instructions::stake_native(ctx, amount, plan_id)
    }

    pub fn withdraw_native(
        ctx: Context<WithdrawNative>,
        amount: u64,
        plan_id: u64,
    ) -> Result<()> {
        instructions::withdraw_native(ctx, amount, plan_id)
    }

    pub fn get_owner(ctx: Context<ReadConfig>) -> Result<Pubkey> {
        instructions::get_owner(ctx)
    }

    pub fn get_token_address(ctx: Context<ReadConfig>) -> Result<Pubkey> {
        instructions::get_token_address(ctx)
    }

    pub fn get_contract_balance(ctx: Context<ReadConfig>) -> Result<u64> {
        instructions::get_contract_balance(ctx)
    }

    pub fn get_plan(ctx: Context<ReadPlan>, plan_id: u64) -> Result<Plan> {
        instructions::get_plan(ctx, plan_id)
    }

    pub fn get_stake(ctx: Context<ReadStake>, owner: Pubkey, plan_id: u64) -> Result<StakeRecord> {
        instructions::get_stake(ctx, owner, plan_id)
    }
}

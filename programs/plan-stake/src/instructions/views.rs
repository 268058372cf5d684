use crate::error::ErrorCode;
use crate::ledger::PlanRegistry;
use crate::states::*;
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Read-only views over either pool. Values are returned through Anchor
// return data.
// ──────────────────────────────────────────────────────────────────────────────
//

#[derive(Accounts)]
pub struct ReadConfig<'info> {
    pub stake_config: Account<'info, StakeConfig>,
}

#[derive(Accounts)]
#[instruction(plan_id: u64)]
pub struct ReadPlan<'info> {
    #[account(constraint = plan_id < stake_config.plan_count @ ErrorCode::InvalidPlanIndex)]
    pub stake_config: Account<'info, StakeConfig>,

    #[account(
        seeds = [
            PLAN_SEED.as_bytes(),
            stake_config.key().as_ref(),
            plan_id.to_le_bytes().as_ref(),
        ],
        bump = plan.bump,
    )]
    pub plan: Account<'info, Plan>,
}

#[derive(Accounts)]
#[instruction(owner: Pubkey, plan_id: u64)]
pub struct ReadStake<'info> {
    pub stake_config: Account<'info, StakeConfig>,

    #[account(
        seeds = [
            STAKE_RECORD_SEED.as_bytes(),
            stake_config.key().as_ref(),
            owner.as_ref(),
            plan_id.to_le_bytes().as_ref(),
        ],
        bump = stake_record.bump,
    )]
    pub stake_record: Account<'info, StakeRecord>,
}

/// Administrator identity fixed at initialization.
pub fn get_owner(ctx: Context<ReadConfig>) -> Result<Pubkey> {
    Ok(ctx.accounts.stake_config.owner)
}

/// Mint accepted for staking; the default key for the native pool.
pub fn get_token_address(ctx: Context<ReadConfig>) -> Result<Pubkey> {
    Ok(ctx.accounts.stake_config.token_mint)
}

/// Total principal held in custody; equals the sum of all stake records.
pub fn get_contract_balance(ctx: Context<ReadConfig>) -> Result<u64> {
    Ok(ctx.accounts.stake_config.total_staked)
}

pub fn get_plan(ctx: Context<ReadPlan>, plan_id: u64) -> Result<Plan> {
    let plan = PlanRegistry::resolve(&ctx.accounts.stake_config, &ctx.accounts.plan, plan_id)?;
    Ok(plan.clone())
}

pub fn get_stake(ctx: Context<ReadStake>, _owner: Pubkey, _plan_id: u64) -> Result<StakeRecord> {
    Ok(StakeRecord::clone(&ctx.accounts.stake_record))
}

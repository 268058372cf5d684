use crate::ledger::PlanRegistry;
use crate::states::*;
use anchor_lang::prelude::*;

/// Accounts for appending a plan to a pool's catalog.
///
/// Works on either pool configuration. The new plan PDA is derived from the
/// pool and its current `plan_count`, so ids stay dense and a plan can never
/// be overwritten.
#[derive(Accounts)]
pub struct AddPlan<'info> {
    /// Configuration owner; pays for the plan account.
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(mut)]
    pub stake_config: Account<'info, StakeConfig>,

    #[account(
        init,
        seeds = [
            PLAN_SEED.as_bytes(),
            stake_config.key().as_ref(),
            stake_config.plan_count.to_le_bytes().as_ref(),
        ],
        bump,
        payer = owner,
        space = Plan::LEN
    )]
    pub plan: Account<'info, Plan>,

    pub system_program: Program<'info, System>,
}

/// Registers a plan and returns its id.
///
/// # Fails
/// - `Unauthorized` if the signer is not the configuration owner.
/// - `EmptyPlanName` / `PlanNameTooLong` for names outside `1..=MAX_PLAN_NAME_LEN` bytes.
pub fn add_plan(
    ctx: Context<AddPlan>,
    name: String,
    rate: u64,
    lock_duration_units: u64,
) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.owner.key();
    let plan = &mut ctx.accounts.plan;

    let added = PlanRegistry::register(
        &mut ctx.accounts.stake_config,
        plan,
        &caller,
        name,
        rate,
        lock_duration_units,
        now,
    )?;
    plan.bump = ctx.bumps.plan;

    msg!("Plan {} registered: {}", added.plan_id, added.name);
    let plan_id = added.plan_id;
    emit!(added);
    Ok(plan_id)
}

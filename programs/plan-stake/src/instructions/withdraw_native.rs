use crate::error::ErrorCode;
use crate::ledger::{NativeCustody, StakingLedger};
use crate::{states::*, NATIVE_VAULT_SEED};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(amount: u64, plan_id: u64)]
pub struct WithdrawNative<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [NATIVE_STAKE_CONFIG_SEED.as_bytes()],
        bump = stake_config.bump,
        constraint = plan_id < stake_config.plan_count @ ErrorCode::InvalidPlanIndex,
    )]
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

    #[account(
        mut,
        seeds = [NATIVE_VAULT_SEED.as_bytes()],
        bump = stake_config.authority_bump,
        address = stake_config.custody_vault @ ErrorCode::InvalidVault,
    )]
    pub custody_vault: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [
            STAKE_RECORD_SEED.as_bytes(),
            stake_config.key().as_ref(),
            depositor.key().as_ref(),
            plan_id.to_le_bytes().as_ref(),
        ],
        bump = stake_record.bump,
    )]
    pub stake_record: Account<'info, StakeRecord>,

    pub system_program: Program<'info, System>,
}

/// Withdraw `amount` lamports of principal from the signer's native position.
pub fn withdraw_native(ctx: Context<WithdrawNative>, amount: u64, _plan_id: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let depositor = ctx.accounts.depositor.key();

    let vault_bump = [ctx.accounts.stake_config.authority_bump];
    let seeds: &[&[u8]] = &[NATIVE_VAULT_SEED.as_bytes(), &vault_bump];
    let signer_seeds = &[seeds];

    let mut custody = NativeCustody {
        depositor: ctx.accounts.depositor.to_account_info(),
        custody_vault: ctx.accounts.custody_vault.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
        signer_seeds,
    };

    let event = StakingLedger::withdraw(
        &mut ctx.accounts.stake_config,
        &mut ctx.accounts.stake_record,
        &ctx.accounts.plan,
        &mut custody,
        depositor,
        amount,
        now,
    )?;

    msg!(
        "Withdrew {} lamports from plan {}, custody now {}",
        event.amount,
        event.plan_id,
        ctx.accounts.stake_config.total_staked
    );
    emit!(event);
    Ok(())
}

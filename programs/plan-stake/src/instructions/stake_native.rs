use crate::error::ErrorCode;
use crate::ledger::{NativeCustody, StakingLedger};
use crate::{states::*, NATIVE_VAULT_SEED};
use anchor_lang::prelude::*;

/// Accounts for staking lamports under a native pool plan.
///
/// The depositor signs the transfer into the vault, so no approval step
/// precedes it.
#[derive(Accounts)]
#[instruction(amount: u64, plan_id: u64)]
pub struct StakeNative<'info> {
    /// Depositor; funds the stake and pays for the record on first use.
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [NATIVE_STAKE_CONFIG_SEED.as_bytes()],
        bump = stake_config.bump,
    )]
    pub stake_config: Account<'info, StakeConfig>,

    #[account(
        mut,
        seeds = [NATIVE_VAULT_SEED.as_bytes()],
        bump = stake_config.authority_bump,
        address = stake_config.custody_vault @ ErrorCode::InvalidVault,
    )]
    pub custody_vault: SystemAccount<'info>,

    #[account(
        init_if_needed,
        seeds = [
            STAKE_RECORD_SEED.as_bytes(),
            stake_config.key().as_ref(),
            depositor.key().as_ref(),
            plan_id.to_le_bytes().as_ref(),
        ],
        bump,
        payer = depositor,
        space = StakeRecord::LEN
    )]
    pub stake_record: Account<'info, StakeRecord>,

    pub system_program: Program<'info, System>,
}

/// Stake `amount` lamports under `plan_id` of the native pool.
///
/// Fails the same way as `stake`, with `InsufficientBalance` covering a
/// depositor whose lamports fall short of `amount`.
pub fn stake_native(ctx: Context<StakeNative>, amount: u64, plan_id: u64) -> Result<()> {
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

    let event = StakingLedger::stake(
        &mut ctx.accounts.stake_config,
        &mut ctx.accounts.stake_record,
        &mut custody,
        depositor,
        amount,
        plan_id,
        now,
    )?;
    ctx.accounts.stake_record.bump = ctx.bumps.stake_record;

    msg!(
        "Staked {} lamports into plan {}, custody now {}",
        event.amount,
        event.plan_id,
        ctx.accounts.stake_config.total_staked
    );
    emit!(event);
    Ok(())
}

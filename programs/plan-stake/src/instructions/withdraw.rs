use crate::error::ErrorCode;
use crate::ledger::{StakingLedger, TokenCustody};
use crate::{states::*, AUTH_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts for returning staked principal to its owner.
///
/// The record PDA is derived from the signer, so only the position owner can
/// reach their own record. The plan account supplies the lock length.
#[derive(Accounts)]
#[instruction(amount: u64, plan_id: u64)]
pub struct Withdraw<'info> {
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKE_CONFIG_SEED.as_bytes()],
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

    /// CHECK: PDA derivation is enforced by seeds; signs custody transfers.
    #[account(
        seeds = [AUTH_SEED.as_bytes()],
        bump = stake_config.authority_bump,
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(address = stake_config.token_mint @ ErrorCode::InvalidMint)]
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Receives the withdrawn principal.
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = depositor,
        token::token_program = token_program,
    )]
    pub depositor_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        address = stake_config.custody_vault @ ErrorCode::InvalidVault,
    )]
    pub custody_vault: Box<InterfaceAccount<'info, TokenAccount>>,

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

    pub token_program: Interface<'info, TokenInterface>,
}

/// Withdraw `amount` of principal from the signer's position in `plan_id`.
///
/// Principal only; the plan's `rate` is not paid out. The lock runs from the
/// position's latest deposit.
pub fn withdraw(ctx: Context<Withdraw>, amount: u64, _plan_id: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let depositor = ctx.accounts.depositor.key();

    let authority_bump = [ctx.accounts.stake_config.authority_bump];
    let seeds: &[&[u8]] = &[AUTH_SEED.as_bytes(), &authority_bump];
    let signer_seeds = &[seeds];

    let mut custody = TokenCustody {
        depositor_token: &ctx.accounts.depositor_token,
        custody_vault: &mut ctx.accounts.custody_vault,
        mint: &ctx.accounts.token_mint,
        authority: ctx.accounts.authority.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
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
        "Withdrew {} from plan {}, custody now {}",
        event.amount,
        event.plan_id,
        ctx.accounts.stake_config.total_staked
    );
    emit!(event);
    Ok(())
}

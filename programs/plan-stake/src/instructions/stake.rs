use crate::error::ErrorCode;
use crate::ledger::{StakingLedger, TokenCustody};
use crate::{states::*, AUTH_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts required for staking tokens under a plan.
///
/// Flow summary:
/// 1) Validate amount, caller, plan id and the depositor's balance/allowance.
/// 2) Pull `amount` from the depositor's token account into the custody vault,
///    signed by the authority PDA acting as approved delegate.
/// 3) Create or augment the depositor's record for the plan.
/// 4) Emit `StakedSuccessfully`.
#[derive(Accounts)]
#[instruction(amount: u64, plan_id: u64)]
pub struct Stake<'info> {
    /// Depositor; pays for the stake record on first use.
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKE_CONFIG_SEED.as_bytes()],
        bump = stake_config.bump,
    )]
    pub stake_config: Account<'info, StakeConfig>,

    /// Program authority PDA (custody owner and depositor delegate).
    ///
    /// CHECK: PDA derivation is enforced by seeds; used as a signing PDA.
    #[account(
        seeds = [AUTH_SEED.as_bytes()],
        bump = stake_config.authority_bump,
    )]
    pub authority: UncheckedAccount<'info>,

    /// Staking mint pinned in the configuration.
    #[account(address = stake_config.token_mint @ ErrorCode::InvalidMint)]
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Depositor's token account; must have approved `authority` as delegate.
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = depositor,
        token::token_program = token_program,
    )]
    pub depositor_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Program custody vault.
    #[account(
        mut,
        address = stake_config.custody_vault @ ErrorCode::InvalidVault,
    )]
    pub custody_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Depositor's position in `plan_id` (created lazily).
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

    /// SPL Token / Token-2022 interface program.
    pub token_program: Interface<'info, TokenInterface>,

    /// System Program (for record creation).
    pub system_program: Program<'info, System>,
}

/// Stake `amount` base units of the configured mint under `plan_id`.
///
/// # Fails
/// - `ZeroAmount` if `amount == 0`.
/// - `Unauthorized` if the depositor is the configuration owner.
/// - `InvalidPlanIndex` if `plan_id >= plan_count`.
/// - `InsufficientBalance` if the depositor's balance or approved allowance
///   is below `amount`.
pub fn stake(ctx: Context<Stake>, amount: u64, plan_id: u64) -> Result<()> {
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
        "Staked {} into plan {}, custody now {}",
        event.amount,
        event.plan_id,
        ctx.accounts.stake_config.total_staked
    );
    emit!(event);
    Ok(())
}

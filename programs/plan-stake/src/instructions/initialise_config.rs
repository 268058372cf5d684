use crate::error::ErrorCode;
use crate::utils::is_supported_mint;
use crate::{states::*, AUTH_SEED, CUSTODY_VAULT_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use std::ops::DerefMut;

/// Accounts context for `initialise_config`.
///
/// This handler:
/// - Creates the stake configuration PDA and records the deploying admin as
///   its immutable owner.
/// - Creates the custody vault for the staking mint, owned by the program
///   authority PDA.
#[derive(Accounts)]
pub struct InitialiseConfig<'info> {
    /// Admin signer (must match the program-level admin id). Becomes the
    /// configuration owner.
    #[account(
        mut,
        address = crate::admin::id() @ ErrorCode::Unauthorized
    )]
    pub owner: Signer<'info>,

    /// Program authority PDA. Owns the custody vault and is the delegate
    /// depositors approve on their token accounts.
    ///
    /// CHECK: PDA derivation enforced via seeds. Not read as an account; used as Pubkey.
    #[account(
        seeds = [AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    /// Stake configuration holding owner, mint and custody totals.
    #[account(
        init,
        seeds = [STAKE_CONFIG_SEED.as_bytes()],
        bump,
        payer = owner,
        space = StakeConfig::LEN
    )]
    pub stake_config: Account<'info, StakeConfig>,

    /// Mint accepted for staking (fixed for the program's lifetime).
    #[account(mint::token_program = token_program)]
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Program-owned vault that holds staked principal.
    #[account(
        init,
        seeds = [CUSTODY_VAULT_SEED.as_bytes(), token_mint.key().as_ref()],
        bump,
        payer = owner,
        token::mint = token_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub custody_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program interface (Token or Token-2022).
    pub token_program: Interface<'info, TokenInterface>,

    /// Solana System Program.
    pub system_program: Program<'info, System>,
}

/// Initializes the stake configuration and custody vault.
///
/// The signer is recorded as `owner`; there is no instruction that changes
/// it afterwards.
///
/// # Fails
/// - `UnsupportedMint` if the mint withholds transfer fees or runs a
///   transfer hook.
pub fn initialise_config(ctx: Context<InitialiseConfig>) -> Result<()> {
    require!(
        is_supported_mint(&ctx.accounts.token_mint)?,
        ErrorCode::UnsupportedMint
    );

    let stake_config = ctx.accounts.stake_config.deref_mut();
    stake_config.bump = ctx.bumps.stake_config;
    stake_config.authority_bump = ctx.bumps.authority;
    stake_config.owner = ctx.accounts.owner.key();
    stake_config.token_mint = ctx.accounts.token_mint.key();
    stake_config.custody_vault = ctx.accounts.custody_vault.key();
    stake_config.plan_count = 0;
    stake_config.total_staked = 0;
    stake_config.total_deposits = 0;
    msg!("Stake config initialized");

    emit!(ConfigInitialized {
        owner: stake_config.owner,
        token_mint: stake_config.token_mint,
        custody_vault: stake_config.custody_vault,
    });
    Ok(())
}

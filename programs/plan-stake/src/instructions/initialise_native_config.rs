use crate::error::ErrorCode;
use crate::utils::transfer_lamports_into_custody;
use crate::{states::*, NATIVE_VAULT_SEED};
use anchor_lang::prelude::*;
use std::ops::DerefMut;

/// Accounts context for `initialise_native_config`.
///
/// The native pool stakes lamports instead of a token, so there is no mint
/// and no token authority. Its vault is a system-owned PDA that signs its own
/// releases.
#[derive(Accounts)]
pub struct InitialiseNativeConfig<'info> {
    /// Admin signer (must match the program-level admin id). Becomes the
    /// pool owner and funds the vault's rent-exempt floor.
    #[account(
        mut,
        address = crate::admin::id() @ ErrorCode::Unauthorized
    )]
    pub owner: Signer<'info>,

    #[account(
        init,
        seeds = [NATIVE_STAKE_CONFIG_SEED.as_bytes()],
        bump,
        payer = owner,
        space = StakeConfig::LEN
    )]
    pub stake_config: Account<'info, StakeConfig>,

    /// Lamport vault holding staked principal.
    #[account(
        mut,
        seeds = [NATIVE_VAULT_SEED.as_bytes()],
        bump,
    )]
    pub custody_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Initializes the native pool configuration and tops its vault up to the
/// rent-exempt minimum, so the first stake of any size can land in it.
pub fn initialise_native_config(ctx: Context<InitialiseNativeConfig>) -> Result<()> {
    let rent_floor = Rent::get()?.minimum_balance(0);
    let top_up = rent_floor.saturating_sub(ctx.accounts.custody_vault.lamports());
    if top_up > 0 {
        transfer_lamports_into_custody(
            ctx.accounts.owner.to_account_info(),
            ctx.accounts.custody_vault.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            top_up,
        )?;
    }

    let stake_config = ctx.accounts.stake_config.deref_mut();
    stake_config.bump = ctx.bumps.stake_config;
    stake_config.authority_bump = ctx.bumps.custody_vault;
    stake_config.owner = ctx.accounts.owner.key();
    stake_config.token_mint = Pubkey::default();
    stake_config.custody_vault = ctx.accounts.custody_vault.key();
    stake_config.plan_count = 0;
    stake_config.total_staked = 0;
    stake_config.total_deposits = 0;
    msg!("Native stake config initialized, vault floor {}", rent_floor);

    emit!(ConfigInitialized {
        owner: stake_config.owner,
        token_mint: stake_config.token_mint,
        custody_vault: stake_config.custody_vault,
    });
    Ok(())
}

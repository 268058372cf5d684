//! Custody movements against the external ledgers: an SPL token mint or the
//! native lamport balance.

use crate::error::ErrorCode;
use crate::utils::{
    transfer_from_custody_to_user, transfer_from_user_to_custody, transfer_lamports_from_custody,
    transfer_lamports_into_custody,
};
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token_2022::spl_token_2022::state::Account as SplTokenAccount;
use anchor_spl::token_interface::{Mint, TokenAccount};

/// The ledger the staking engine moves value through.
///
/// The engine never writes balances itself. It reads what a holder can spend
/// and asks the ledger to move funds into or out of the program's custody.
pub trait CustodyLedger {
    /// Spendable balance of `holder`.
    fn balance_of(&self, holder: &Pubkey) -> u64;

    /// Amount `holder` has approved the program to pull.
    fn allowance(&self, holder: &Pubkey) -> u64;

    /// Moves `amount` from `holder` into custody, consuming allowance.
    /// Returns what custody actually gained.
    fn pull_into_custody(&mut self, holder: &Pubkey, amount: u64) -> Result<u64>;

    /// Moves `amount` from custody back to `recipient`.
    fn release_from_custody(&mut self, recipient: &Pubkey, amount: u64) -> Result<()>;
}

/// Balance of a token account, counted only for its owner.
pub fn held_amount(account: &SplTokenAccount, holder: &Pubkey) -> u64 {
    if account.owner == *holder {
        account.amount
    } else {
        0
    }
}

/// What `spender` may pull from a token account owned by `holder`.
///
/// SPL tokens carry a single delegate per account, so an approval for any
/// other key counts as no approval at all.
pub fn approved_amount(account: &SplTokenAccount, holder: &Pubkey, spender: &Pubkey) -> u64 {
    if account.owner != *holder {
        return 0;
    }
    match account.delegate {
        COption::Some(delegate) if delegate == *spender => account.delegated_amount,
        _ => 0,
    }
}

/// Growth of a custody balance across a pull.
pub fn custody_gain(before: u64, after: u64) -> Result<u64> {
    after
        .checked_sub(before)
        .ok_or_else(|| error!(ErrorCode::CustodyMismatch))
}

/// `CustodyLedger` backed by token program CPIs for a single depositor.
///
/// The program authority PDA owns the custody vault and is the delegate the
/// depositor approves, so one set of signer seeds covers both directions.
pub struct TokenCustody<'a, 'info> {
    pub depositor_token: &'a InterfaceAccount<'info, TokenAccount>,
    pub custody_vault: &'a mut InterfaceAccount<'info, TokenAccount>,
    pub mint: &'a InterfaceAccount<'info, Mint>,
    pub authority: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> CustodyLedger for TokenCustody<'a, 'info> {
    fn balance_of(&self, holder: &Pubkey) -> u64 {
        held_amount(self.depositor_token, holder)
    }

    fn allowance(&self, holder: &Pubkey) -> u64 {
        approved_amount(self.depositor_token, holder, self.authority.key)
    }

    fn pull_into_custody(&mut self, holder: &Pubkey, amount: u64) -> Result<u64> {
        require_keys_eq!(self.depositor_token.owner, *holder);
        let before = self.custody_vault.amount;
        transfer_from_user_to_custody(
            self.authority.clone(),
            self.depositor_token.to_account_info(),
            self.custody_vault.to_account_info(),
            self.mint.to_account_info(),
            self.token_program.clone(),
            amount,
            self.mint.decimals,
            self.signer_seeds,
        )?;
        self.custody_vault.reload()?;
        custody_gain(before, self.custody_vault.amount)
    }

    fn release_from_custody(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(self.depositor_token.owner, *recipient);
        transfer_from_custody_to_user(
            self.authority.clone(),
            self.custody_vault.to_account_info(),
            self.depositor_token.to_account_info(),
            self.mint.to_account_info(),
            self.token_program.clone(),
            amount,
            self.mint.decimals,
            self.signer_seeds,
        )
    }
}

/// `CustodyLedger` over native lamports.
///
/// The depositor signs the pull directly, so the signer's whole balance is
/// available to it. The vault is a system-owned PDA and signs releases with
/// `signer_seeds`.
pub struct NativeCustody<'a, 'info> {
    pub depositor: AccountInfo<'info>,
    pub custody_vault: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> NativeCustody<'a, 'info> {
    fn holds(&self, holder: &Pubkey) -> bool {
        self.depositor.is_signer && self.depositor.key == holder
    }
}

impl<'a, 'info> CustodyLedger for NativeCustody<'a, 'info> {
    fn balance_of(&self, holder: &Pubkey) -> u64 {
        if self.holds(holder) {
            self.depositor.lamports()
        } else {
            0
        }
    }

    fn allowance(&self, holder: &Pubkey) -> u64 {
        if self.holds(holder) {
            u64::MAX
        } else {
            0
        }
    }

    fn pull_into_custody(&mut self, holder: &Pubkey, amount: u64) -> Result<u64> {
        require!(self.holds(holder), ErrorCode::Unauthorized);
        let before = self.custody_vault.lamports();
        transfer_lamports_into_custody(
            self.depositor.clone(),
            self.custody_vault.clone(),
            self.system_program.clone(),
            amount,
        )?;
        custody_gain(before, self.custody_vault.lamports())
    }

    fn release_from_custody(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*self.depositor.key, *recipient);
        transfer_lamports_from_custody(
            self.custody_vault.clone(),
            self.depositor.clone(),
            self.system_program.clone(),
            amount,
            self.signer_seeds,
        )
    }
}

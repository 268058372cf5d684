//! In-memory token ledger and helpers for driving the engine in tests.

use super::{custody_gain, CustodyLedger};
use crate::error::ErrorCode;
use crate::states::StakeConfig;
use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use std::collections::BTreeMap;

/// Account-balance ledger with ERC20-style allowances.
///
/// `custody` is the vault address and `spender` is the program authority
/// that depositors approve.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryLedger {
    pub custody: Pubkey,
    pub spender: Pubkey,
    balances: BTreeMap<Pubkey, u64>,
    allowances: BTreeMap<(Pubkey, Pubkey), u64>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self {
            custody: Pubkey::new_unique(),
            spender: Pubkey::new_unique(),
            ..Default::default()
        }
    }

    pub fn mint(&mut self, to: &Pubkey, amount: u64) {
        *self.balances.entry(*to).or_default() += amount;
    }

    pub fn balance(&self, holder: &Pubkey) -> u64 {
        self.balances.get(holder).copied().unwrap_or_default()
    }

    pub fn custody_balance(&self) -> u64 {
        self.balance(&self.custody)
    }

    pub fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        let from_balance = self.balance(from);
        require_gte!(from_balance, amount, ErrorCode::InsufficientBalance);
        self.balances.insert(*from, from_balance - amount);
        self.mint(to, amount);
        Ok(())
    }

    pub fn approve(&mut self, owner: &Pubkey, spender: &Pubkey, amount: u64) {
        self.allowances.insert((*owner, *spender), amount);
    }

    pub fn transfer_from(
        &mut self,
        spender: &Pubkey,
        owner: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> Result<()> {
        let allowed = self
            .allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default();
        require_gte!(allowed, amount, ErrorCode::InsufficientBalance);
        self.transfer(owner, to, amount)?;
        self.allowances.insert((*owner, *spender), allowed - amount);
        Ok(())
    }
}

impl CustodyLedger for MemoryLedger {
    fn balance_of(&self, holder: &Pubkey) -> u64 {
        self.balance(holder)
    }

    fn allowance(&self, holder: &Pubkey) -> u64 {
        self.allowances
            .get(&(*holder, self.spender))
            .copied()
            .unwrap_or_default()
    }

    fn pull_into_custody(&mut self, holder: &Pubkey, amount: u64) -> Result<u64> {
        let (spender, custody) = (self.spender, self.custody);
        let before = self.custody_balance();
        self.transfer_from(&spender, holder, &custody, amount)?;
        custody_gain(before, self.custody_balance())
    }

    fn release_from_custody(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        let custody = self.custody;
        self.transfer(&custody, recipient, amount)
    }
}

pub fn owned_config(owner: Pubkey) -> StakeConfig {
    StakeConfig {
        owner,
        token_mint: Pubkey::new_unique(),
        custody_vault: Pubkey::new_unique(),
        ..Default::default()
    }
}

pub fn assert_error(err: Error, expected: ErrorCode) {
    match err {
        Error::AnchorError(e) => assert_eq!(
            e.error_code_number,
            u32::from(expected),
            "expected {expected:?}, got {}",
            e.error_name
        ),
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}

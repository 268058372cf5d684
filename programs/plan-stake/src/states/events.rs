use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Events: Emitted for off-chain indexers/clients to track ledger changes
// ──────────────────────────────────────────────────────────────────────────────
//

/// Emitted once when the stake configuration is initialized.
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigInitialized {
    /// Administrator, fixed for the lifetime of the program.
    pub owner: Pubkey,
    /// Mint accepted for staking.
    pub token_mint: Pubkey,
    /// Program-owned custody vault.
    pub custody_vault: Pubkey,
}

/// Emitted when the administrator appends a plan to the catalog.
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct PlanAdded {
    pub plan_id: u64,
    pub name: String,
    pub rate: u64,
    pub lock_duration_units: u64,
}

/// Emitted exactly once per successful `stake` call.
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct StakedSuccessfully {
    /// The depositor.
    pub account: Pubkey,
    /// Amount moved into custody by this call (base units).
    pub amount: u64,
    /// Plan the deposit was made under.
    pub plan_id: u64,
}

/// Emitted when a depositor takes principal back out of custody.
#[event]
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawnSuccessfully {
    pub account: Pubkey,
    pub amount: u64,
    pub plan_id: u64,
}

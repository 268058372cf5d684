use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Caller is not authorized for this operation")]
    Unauthorized,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Plan id does not exist in the registry")]
    InvalidPlanIndex,

    #[msg("Token balance or approved allowance is below the requested amount")]
    InsufficientBalance,

    #[msg("Withdrawal exceeds the staked principal")]
    InsufficientStake,

    #[msg("Plan lock has not yet elapsed")]
    StakeLocked,

    #[msg("Plan name must not be empty")]
    EmptyPlanName,

    #[msg("Plan name exceeds the maximum length")]
    PlanNameTooLong,

    #[msg("Token mint does not match the configured staking mint")]
    InvalidMint,

    #[msg("Invalid custody vault account")]
    InvalidVault,

    #[msg("Mint has a transfer fee or transfer hook extension")]
    UnsupportedMint,

    #[msg("Custody did not receive the requested amount")]
    CustodyMismatch,

    #[msg("Math operation overflowed or underflowed")]
    MathOverflow,
}

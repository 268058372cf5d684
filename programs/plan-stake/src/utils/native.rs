use anchor_lang::prelude::*;
use anchor_lang::system_program;

/// Moves `amount` lamports from a signing depositor into the native vault.
pub fn transfer_lamports_into_custody<'a>(
    from: AccountInfo<'a>,
    to_vault: AccountInfo<'a>,
    system_program: AccountInfo<'a>,
    amount: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system_program,
            system_program::Transfer {
                from,
                to: to_vault,
            },
        ),
        amount,
    )
}

/// Sends `amount` lamports out of the native vault, signed by the vault PDA.
pub fn transfer_lamports_from_custody<'a>(
    from_vault: AccountInfo<'a>,
    to: AccountInfo<'a>,
    system_program: AccountInfo<'a>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    system_program::transfer(
        CpiContext::new_with_signer(
            system_program,
            system_program::Transfer {
                from: from_vault,
                to,
            },
            signer_seeds,
        ),
        amount,
    )
}

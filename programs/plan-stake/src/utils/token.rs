use anchor_lang::prelude::*;
use anchor_spl::token_2022::spl_token_2022::{
    extension::{BaseStateWithExtensions, ExtensionType, StateWithExtensions},
    state::Mint as SplMint,
};
use anchor_spl::token_interface::{self, Mint};

/// Pulls `amount` from a depositor's token account into custody.
///
/// `delegate` is the program authority PDA the depositor approved on `from`;
/// it signs with `signer_seeds`, so the transfer consumes the approved allowance.
pub fn transfer_from_user_to_custody<'a>(
    delegate: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to_vault: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    mint_decimals: u8,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            token_program,
            token_interface::TransferChecked {
                from,
                to: to_vault,
                authority: delegate,
                mint,
            },
            signer_seeds,
        ),
        amount,
        mint_decimals,
    )
}

/// Sends `amount` out of the custody vault, signed by the vault's owning PDA.
pub fn transfer_from_custody_to_user<'a>(
    authority: AccountInfo<'a>,
    from_vault: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    mint_decimals: u8,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            token_program,
            token_interface::TransferChecked {
                from: from_vault,
                to,
                authority,
                mint,
            },
            signer_seeds,
        ),
        amount,
        mint_decimals,
    )
}

/// Whether a transfer of this mint always moves exactly the requested amount.
///
/// Legacy Token mints carry no extensions. Token-2022 mints are rejected when
/// they withhold a fee or run a hook on transfer.
pub fn is_supported_mint(mint_account: &InterfaceAccount<Mint>) -> Result<bool> {
    let mint_info = mint_account.to_account_info();
    if *mint_info.owner == anchor_spl::token::ID {
        return Ok(true);
    }
    let mint_data = mint_info.try_borrow_data()?;
    let mint = StateWithExtensions::<SplMint>::unpack(&mint_data)?;
    Ok(transfers_are_exact(&mint.get_extension_types()?))
}

pub fn transfers_are_exact(extensions: &[ExtensionType]) -> bool {
    !extensions.iter().any(|extension| {
        matches!(
            extension,
            ExtensionType::TransferFeeConfig | ExtensionType::TransferHook
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_and_hook_extensions_are_not_exact() {
        assert!(transfers_are_exact(&[]));
        assert!(transfers_are_exact(&[
            ExtensionType::MetadataPointer,
            ExtensionType::MintCloseAuthority
        ]));
        assert!(!transfers_are_exact(&[ExtensionType::TransferFeeConfig]));
        assert!(!transfers_are_exact(&[
            ExtensionType::MetadataPointer,
            ExtensionType::TransferHook
        ]));
    }
}

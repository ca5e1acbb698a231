// CPI Helpers
//
// Token movements shared by the vault instructions. Reserves and claim mints
// are controlled by the vault authority PDA, so outbound calls take its seeds.

use anchor_lang::{
    prelude::*,
    system_program::{transfer as system_transfer, Transfer as SystemTransfer},
};
use anchor_spl::token::{
    burn, mint_to, sync_native, transfer, Burn, MintTo, SyncNative, Transfer,
};

// Transfer signed by the caller (deposits)
pub fn transfer_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
) -> Result<()> {
    transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}

// Transfer out of a reserve (vault authority signs)
pub fn transfer_from_reserve<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let signer_seeds = &[authority_seeds];

    transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Wrap native SOL straight into a wrapped-SOL token account
pub fn wrap_native<'info>(
    amount: u64,
    system_program: &AccountInfo<'info>,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    wrapped_account: &AccountInfo<'info>,
) -> Result<()> {
    system_transfer(
        CpiContext::new(
            system_program.clone(),
            SystemTransfer {
                from: from.clone(),
                to: wrapped_account.clone(),
            },
        ),
        amount,
    )?;

    sync_native(CpiContext::new(
        token_program.clone(),
        SyncNative {
            account: wrapped_account.clone(),
        },
    ))
}

pub fn mint_claim_shares<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[authority_seeds];

    mint_to(
        CpiContext::new_with_signer(
            token_program.clone(),
            MintTo {
                mint: mint.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Holder burns their own claim shares
pub fn burn_claim_shares<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
) -> Result<()> {
    burn(
        CpiContext::new(
            token_program.clone(),
            Burn {
                mint: mint.clone(),
                from: from.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}

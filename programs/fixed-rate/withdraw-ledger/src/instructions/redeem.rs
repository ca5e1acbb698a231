// Redeem Instructions
//
// withdraw_base / withdraw_token: the holder burns every original claim share
// they hold and receives shares * remaining_balance / remaining_shares from
// the escrow. Burned shares cannot be presented again.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{burn, transfer, Burn, Mint, Token, TokenAccount, Transfer},
};

use crate::{constants::*, errors::LedgerError, events::Redemption, state::*};

#[derive(Accounts)]
pub struct Redeem<'info> {
    #[account(mut)]
    pub holder: Signer<'info>,

    #[account(
        seeds = [LEDGER_SEED, ledger.guardian.as_ref(), ledger.vault.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    /// CHECK: PDA owner of the escrows
    #[account(
        seeds = [LEDGER_AUTHORITY_SEED, ledger.key().as_ref()],
        bump = ledger.authority_bump,
    )]
    pub ledger_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        has_one = ledger,
        has_one = claim_mint,
        has_one = asset_mint,
        has_one = escrow,
        seeds = [CLAIM_POOL_SEED, ledger.key().as_ref(), claim_pool.source.as_ref()],
        bump = claim_pool.bump,
    )]
    pub claim_pool: Box<Account<'info, ClaimPool>>,

    #[account(mut)]
    pub claim_mint: Box<Account<'info, Mint>>,

    pub asset_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub escrow: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = claim_mint,
        token::authority = holder,
    )]
    pub holder_claim: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = holder,
        associated_token::mint = asset_mint,
        associated_token::authority = holder,
    )]
    pub holder_asset: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Redeem<'info> {
    pub fn redeem(&mut self, kind: SourceKind) -> Result<()> {
        require!(self.claim_pool.kind == kind, LedgerError::WrongSourceKind);

        let shares = self.holder_claim.amount;
        let amount = self.claim_pool.redeem(shares)?;

        burn(
            CpiContext::new(
                self.token_program.to_account_info(),
                Burn {
                    mint: self.claim_mint.to_account_info(),
                    from: self.holder_claim.to_account_info(),
                    authority: self.holder.to_account_info(),
                },
            ),
            shares,
        )?;

        let ledger_key = self.ledger.key();
        let authority_seeds = &[
            LEDGER_AUTHORITY_SEED,
            ledger_key.as_ref(),
            &[self.ledger.authority_bump],
        ];
        let signer_seeds = &[&authority_seeds[..]];

        transfer(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.escrow.to_account_info(),
                    to: self.holder_asset.to_account_info(),
                    authority: self.ledger_authority.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;

        emit!(Redemption {
            claim_pool: self.claim_pool.key(),
            who: self.holder.key(),
            shares,
            amount,
        });

        msg!("Redeemed {} shares for {}", shares, amount);

        Ok(())
    }
}

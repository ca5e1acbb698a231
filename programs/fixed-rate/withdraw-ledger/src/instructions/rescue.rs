// Guardian Rescue Instructions
//
// Last-resort recovery that bypasses pro-rata claims.
// rescue_tokens: sweep a token account held by the ledger authority. A claim
//   pool's escrow can only be swept with that claim pool, which stops paying out.
// rescue_native: sweep the ledger authority's lamports above rent.

use anchor_lang::{
    prelude::*,
    system_program::{transfer as system_transfer, Transfer as SystemTransfer},
};
use anchor_spl::token::{transfer, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::LedgerError, events::Rescue, state::*};

#[derive(Accounts)]
pub struct RescueTokens<'info> {
    pub guardian: Signer<'info>,

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
        token::authority = ledger_authority,
    )]
    pub source: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        has_one = ledger,
    )]
    pub claim_pool: Option<Box<Account<'info, ClaimPool>>>,

    #[account(
        mut,
        token::mint = source.mint,
    )]
    pub destination: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> RescueTokens<'info> {
    pub fn rescue_tokens(&mut self) -> Result<()> {
        self.ledger.check_rescue(
            &self.guardian.key(),
            &self.source.key(),
            self.claim_pool.as_ref().map(|claim_pool| claim_pool.escrow),
        )?;

        let amount = self.source.amount;
        require!(amount > 0, LedgerError::NothingToRescue);

        if let Some(claim_pool) = self.claim_pool.as_mut() {
            claim_pool.rescue();
        }

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
                    from: self.source.to_account_info(),
                    to: self.destination.to_account_info(),
                    authority: self.ledger_authority.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;

        emit!(Rescue {
            ledger: ledger_key,
            source: self.source.key(),
            destination: self.destination.key(),
            amount,
        });

        msg!("Guardian rescued {} from {}", amount, self.source.key());

        Ok(())
    }
}

#[derive(Accounts)]
pub struct RescueNative<'info> {
    pub guardian: Signer<'info>,

    #[account(
        seeds = [LEDGER_SEED, ledger.guardian.as_ref(), ledger.vault.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        mut,
        seeds = [LEDGER_AUTHORITY_SEED, ledger.key().as_ref()],
        bump = ledger.authority_bump,
    )]
    pub ledger_authority: SystemAccount<'info>,

    #[account(mut)]
    pub destination: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> RescueNative<'info> {
    pub fn rescue_native(&mut self) -> Result<()> {
        self.ledger.assert_guardian(&self.guardian.key())?;

        let rent_floor = Rent::get()?.minimum_balance(0);
        let amount = self.ledger_authority.lamports().saturating_sub(rent_floor);
        require!(amount > 0, LedgerError::NothingToRescue);

        let ledger_key = self.ledger.key();
        let authority_seeds = &[
            LEDGER_AUTHORITY_SEED,
            ledger_key.as_ref(),
            &[self.ledger.authority_bump],
        ];
        let signer_seeds = &[&authority_seeds[..]];

        system_transfer(
            CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                SystemTransfer {
                    from: self.ledger_authority.to_account_info(),
                    to: self.destination.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;

        emit!(Rescue {
            ledger: ledger_key,
            source: self.ledger_authority.key(),
            destination: self.destination.key(),
            amount,
        });

        msg!("Guardian rescued {} lamports", amount);

        Ok(())
    }
}

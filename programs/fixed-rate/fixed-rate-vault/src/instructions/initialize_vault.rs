// Initialize Vault Instruction
//
// Opens a deployment cycle: creates the vault, its claim share mint and the
// base reserve, all controlled by the vault authority PDA.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, state::*};

#[derive(Accounts)]
#[instruction(vault_id: u64)]
pub struct InitializeVault<'info> {
    #[account(mut)]
    pub operator: Signer<'info>,

    #[account(
        init,
        payer = operator,
        space = ANCHOR_DISCRIMINATOR + Vault::INIT_SPACE,
        seeds = [VAULT_SEED, operator.key().as_ref(), &vault_id.to_le_bytes()],
        bump
    )]
    pub vault: Box<Account<'info, Vault>>,

    /// CHECK: PDA signer for reserves and claim mints
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, vault.key().as_ref()],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    pub base_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = operator,
        seeds = [CLAIM_MINT_SEED, vault.key().as_ref()],
        bump,
        mint::decimals = base_mint.decimals,
        mint::authority = vault_authority,
    )]
    pub claim_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = operator,
        associated_token::mint = base_mint,
        associated_token::authority = vault_authority,
    )]
    pub base_reserve: Box<Account<'info, TokenAccount>>,

    #[account(token::mint = base_mint)]
    pub fee_recipient: Box<Account<'info, TokenAccount>>,

    /// CHECK: venue program id, only stored
    #[account(executable)]
    pub venue_program: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeVault<'info> {
    pub fn initialize_vault(
        &mut self,
        vault_id: u64,
        max_base: u64,
        fee_bps: u16,
        predecessor: Option<Pubkey>,
        bumps: &InitializeVaultBumps,
    ) -> Result<()> {
        self.vault.set_inner(Vault {
            vault_id,
            operator: self.operator.key(),
            phase: Phase::Deposit,
            base_mint: self.base_mint.key(),
            claim_mint: self.claim_mint.key(),
            base_reserve: self.base_reserve.key(),
            venue_program: self.venue_program.key(),
            predecessor,
            max_base,
            bump: bumps.vault,
            authority_bump: bumps.vault_authority,
            claim_mint_bump: bumps.claim_mint,
            ..Vault::default()
        });

        self.vault.set_fee(fee_bps, self.fee_recipient.key())?;

        msg!(
            "Vault {} opened: cap {}, fee {} bps",
            vault_id,
            max_base,
            fee_bps
        );

        Ok(())
    }
}

// Swap Tokens Instruction
//
// Exact-in swap on x * y = k. The fee stays in the pool.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::VenueError, helpers::*, state::*};

#[derive(Accounts)]
pub struct SwapTokens<'info> {
    #[account(mut)]
    pub swapper: Signer<'info>,

    #[account(
        seeds = [
            AMM_CONFIG_SEED,
            pool_config.token_a_mint.as_ref(),
            pool_config.token_b_mint.as_ref(),
        ],
        bump = pool_config.config_bump,
    )]
    pub pool_config: Box<Account<'info, PoolConfig>>,

    /// CHECK: PDA signer
    #[account(
        seeds = [AMM_AUTHORITY_SEED, pool_config.key().as_ref()],
        bump = pool_config.authority_bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(address = pool_config.token_a_mint)]
    pub token_a_mint: Box<Account<'info, Mint>>,

    #[account(address = pool_config.token_b_mint)]
    pub token_b_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        token::mint = token_a_mint,
        token::authority = swapper,
    )]
    pub swapper_token_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = token_b_mint,
        token::authority = swapper,
    )]
    pub swapper_token_b: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = token_a_mint,
        associated_token::authority = pool_authority,
    )]
    pub token_a_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = token_b_mint,
        associated_token::authority = pool_authority,
    )]
    pub token_b_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> SwapTokens<'info> {
    pub fn swap_tokens(
        &mut self,
        swap_token_a_for_b: bool,
        input_amount: u64,
        min_output_amount: u64,
        expiration: i64,
    ) -> Result<()> {
        self.pool_config.assert_not_locked()?;
        validate_expiration(expiration)?;

        require!(input_amount > 0, VenueError::ZeroAmount);
        require!(min_output_amount > 0, VenueError::ZeroAmount);

        let (reserve_in, reserve_out) = if swap_token_a_for_b {
            (self.token_a_vault.amount, self.token_b_vault.amount)
        } else {
            (self.token_b_vault.amount, self.token_a_vault.amount)
        };
        require!(reserve_in > 0 && reserve_out > 0, VenueError::InsufficientLiquidity);

        let output = swap_output(
            input_amount,
            reserve_in,
            reserve_out,
            self.pool_config.fee_basis_points,
        )?;
        require!(output >= min_output_amount, VenueError::SlippageExceeded);
        require!(output < reserve_out, VenueError::InsufficientLiquidity);

        let (swapper_in, vault_in, vault_out, swapper_out) = if swap_token_a_for_b {
            (
                self.swapper_token_a.to_account_info(),
                self.token_a_vault.to_account_info(),
                self.token_b_vault.to_account_info(),
                self.swapper_token_b.to_account_info(),
            )
        } else {
            (
                self.swapper_token_b.to_account_info(),
                self.token_b_vault.to_account_info(),
                self.token_a_vault.to_account_info(),
                self.swapper_token_a.to_account_info(),
            )
        };

        let token_program = self.token_program.to_account_info();

        transfer_tokens(
            input_amount,
            &token_program,
            &swapper_in,
            &vault_in,
            &self.swapper.to_account_info(),
        )?;

        let pool_config_key = self.pool_config.key();
        let authority_seeds = &[
            AMM_AUTHORITY_SEED,
            pool_config_key.as_ref(),
            &[self.pool_config.authority_bump],
        ];

        transfer_from_vault(
            output,
            &token_program,
            &vault_out,
            &swapper_out,
            &self.pool_authority.to_account_info(),
            authority_seeds,
        )?;

        msg!(
            "Swapped {} {} -> {} {}",
            input_amount,
            if swap_token_a_for_b { "A" } else { "B" },
            output,
            if swap_token_a_for_b { "B" } else { "A" }
        );

        Ok(())
    }
}

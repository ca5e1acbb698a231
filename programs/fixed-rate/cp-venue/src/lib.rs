// Constant-Product Venue
//
// x * y = k pool with LP shares, the external AMM a fixed-rate vault pairs
// its reserves into. Reserves are the pool authority's token balances.
//
// Instructions:
// - initialize_pool: Create a pool for a token pair
// - deposit_liquidity: Add both sides at the pool ratio, receive LP
// - withdraw_liquidity: Burn LP for a proportional share of both sides
// - swap_tokens: Exact-in swap, fee taken from the input
// - lock_pool / unlock_pool: Pause switch for the pool authority

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod helpers;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("6QuWV3w2C46Yr5DvygM7HYZob68khoAJak4seHsi4Mjt");

#[program]
pub mod cp_venue {
    use super::*;

    pub fn initialize_pool(ctx: Context<InitializePool>, fee_basis_points: u16) -> Result<()> {
        ctx.accounts.initialize_pool(fee_basis_points, &ctx.bumps)
    }

    pub fn deposit_liquidity(
        ctx: Context<DepositLiquidity>,
        desired_amount_a: u64,
        desired_amount_b: u64,
        max_amount_a: u64,
        max_amount_b: u64,
        expiration: i64,
    ) -> Result<()> {
        ctx.accounts.deposit_liquidity(
            desired_amount_a,
            desired_amount_b,
            max_amount_a,
            max_amount_b,
            expiration,
        )
    }

    pub fn withdraw_liquidity(
        ctx: Context<WithdrawLiquidity>,
        lp_tokens_to_burn: u64,
        min_amount_a: u64,
        min_amount_b: u64,
        expiration: i64,
    ) -> Result<()> {
        ctx.accounts
            .withdraw_liquidity(lp_tokens_to_burn, min_amount_a, min_amount_b, expiration)
    }

    pub fn swap_tokens(
        ctx: Context<SwapTokens>,
        swap_token_a_for_b: bool,
        input_amount: u64,
        min_output_amount: u64,
        expiration: i64,
    ) -> Result<()> {
        ctx.accounts
            .swap_tokens(swap_token_a_for_b, input_amount, min_output_amount, expiration)
    }

    pub fn lock_pool(ctx: Context<SetLock>) -> Result<()> {
        ctx.accounts.set_lock(true)
    }

    pub fn unlock_pool(ctx: Context<SetLock>) -> Result<()> {
        ctx.accounts.set_lock(false)
    }
}

// Venue Helper Functions
//
// Curve math and the token CPIs shared by the instructions.

use anchor_lang::prelude::*;
use anchor_spl::token::{burn, mint_to, transfer, Burn, MintTo, Transfer};

use crate::{constants::*, errors::VenueError};

// VALIDATION

pub fn validate_expiration(expiration: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    require!(expiration > now, VenueError::TransactionExpired);
    require!(
        expiration - now <= MAX_EXPIRATION_SECONDS,
        VenueError::ExpirationTooFar
    );
    Ok(())
}

// CURVE MATH

fn isqrt(value: u128) -> u128 {
    if value < 2 {
        return value;
    }

    // Newton's method from above
    let mut x = value;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + value / x) / 2;
    }
    x
}

fn to_u64(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| VenueError::Overflow.into())
}

// First deposit: LP = sqrt(a * b) - MINIMUM_LIQUIDITY, the rest stays unminted
pub fn first_deposit(amount_a: u64, amount_b: u64) -> Result<(u64, u64, u64)> {
    let product = (amount_a as u128)
        .checked_mul(amount_b as u128)
        .ok_or(VenueError::Overflow)?;
    let liquidity = to_u64(isqrt(product))?;

    require!(liquidity > MINIMUM_LIQUIDITY, VenueError::InsufficientLiquidity);

    Ok((amount_a, amount_b, liquidity - MINIMUM_LIQUIDITY))
}

// Later deposits take both sides at the pool ratio; the excess of the
// larger side is left with the depositor
pub fn subsequent_deposit(
    desired_a: u64,
    desired_b: u64,
    vault_a: u64,
    vault_b: u64,
    lp_supply: u64,
) -> Result<(u64, u64, u64)> {
    let lp_from_a = (desired_a as u128)
        .checked_mul(lp_supply as u128)
        .ok_or(VenueError::Overflow)?
        .checked_div(vault_a as u128)
        .ok_or(VenueError::DivisionByZero)?;

    let lp_from_b = (desired_b as u128)
        .checked_mul(lp_supply as u128)
        .ok_or(VenueError::Overflow)?
        .checked_div(vault_b as u128)
        .ok_or(VenueError::DivisionByZero)?;

    let lp_to_mint = lp_from_a.min(lp_from_b);

    let (amount_a, amount_b) = withdrawal_amounts(to_u64(lp_to_mint)?, vault_a, vault_b, lp_supply)?;

    Ok((amount_a, amount_b, to_u64(lp_to_mint)?))
}

// lp / supply of each reserve, floored
pub fn withdrawal_amounts(lp: u64, vault_a: u64, vault_b: u64, lp_supply: u64) -> Result<(u64, u64)> {
    let share = |reserve: u64| -> Result<u64> {
        let amount = (lp as u128)
            .checked_mul(reserve as u128)
            .ok_or(VenueError::Overflow)?
            .checked_div(lp_supply as u128)
            .ok_or(VenueError::DivisionByZero)?;
        to_u64(amount)
    };

    Ok((share(vault_a)?, share(vault_b)?))
}

// out = in' * R_out / (R_in + in'), with in' = in * (1 - fee)
pub fn swap_output(input: u64, reserve_in: u64, reserve_out: u64, fee_basis_points: u16) -> Result<u64> {
    let in_with_fee = (input as u128)
        .checked_mul(BASIS_POINTS - fee_basis_points as u128)
        .ok_or(VenueError::Overflow)?;

    let numerator = in_with_fee
        .checked_mul(reserve_out as u128)
        .ok_or(VenueError::Overflow)?;
    let denominator = (reserve_in as u128)
        .checked_mul(BASIS_POINTS)
        .ok_or(VenueError::Overflow)?
        .checked_add(in_with_fee)
        .ok_or(VenueError::Overflow)?;

    to_u64(numerator.checked_div(denominator).ok_or(VenueError::DivisionByZero)?)
}

// CPI

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

pub fn transfer_from_vault<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
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

pub fn mint_lp_tokens<'info>(
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

pub fn burn_lp_tokens<'info>(
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

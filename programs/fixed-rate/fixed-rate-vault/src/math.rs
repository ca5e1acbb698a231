// Settlement Math
//
// Checked u128 arithmetic shared by deposits, withdrawals and the unwind.
// Every division floors unless stated otherwise, so rounding dust always
// stays with the pool and ends up with the last withdrawer.

use anchor_lang::prelude::*;

use crate::{constants::BASIS_POINTS, errors::VaultError};

// floor(shares * balance / supply)
pub fn proportional_share(shares: u64, balance: u64, supply: u64) -> Result<u64> {
    let amount = (shares as u128)
        .checked_mul(balance as u128)
        .ok_or(VaultError::Overflow)?
        .checked_div(supply as u128)
        .ok_or(VaultError::DivisionByZero)?;

    u64::try_from(amount).map_err(|_| VaultError::Overflow.into())
}

// ceil(amount * supply / balance)
// Shares burned for a partial withdrawal; rounds up so the pool never loses dust.
pub fn shares_for_amount(amount: u64, balance: u64, supply: u64) -> Result<u64> {
    require!(balance > 0, VaultError::DivisionByZero);

    let numerator = (amount as u128)
        .checked_mul(supply as u128)
        .ok_or(VaultError::Overflow)?;
    let shares = numerator
        .checked_add(balance as u128 - 1)
        .ok_or(VaultError::Overflow)?
        / balance as u128;

    u64::try_from(shares).map_err(|_| VaultError::Overflow.into())
}

// deposit * (10_000 + rate) / 10_000
pub fn fixed_rate_entitlement(deposit: u64, fixed_rate_bps: u16) -> Result<u64> {
    let owed = (deposit as u128)
        .checked_mul(BASIS_POINTS as u128 + fixed_rate_bps as u128)
        .ok_or(VaultError::Overflow)?
        / BASIS_POINTS as u128;

    u64::try_from(owed).map_err(|_| VaultError::Overflow.into())
}

// Protocol fee on the part of a payout above its principal. A payout at or
// below principal pays nothing.
pub fn fee_on_gain(payout: u64, principal: u64, fee_bps: u16) -> Result<u64> {
    let gain = payout.saturating_sub(principal);

    let fee = (gain as u128)
        .checked_mul(fee_bps as u128)
        .ok_or(VaultError::Overflow)?
        / BASIS_POINTS as u128;

    u64::try_from(fee).map_err(|_| VaultError::Overflow.into())
}

// 10_000 - fee, refusing venue fees of 100% or more
fn fee_complement(fee_bps: u16) -> Result<u128> {
    let complement = (BASIS_POINTS as u128)
        .checked_sub(fee_bps as u128)
        .ok_or(VaultError::InvalidVenueAccount)?;
    require!(complement > 0, VaultError::InvalidVenueAccount);
    Ok(complement)
}

// Constant-product output for an exact input, fee taken from the input.
pub fn amount_out_for_exact_in(
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_bps: u16,
) -> Result<u64> {
    let in_with_fee = (amount_in as u128)
        .checked_mul(fee_complement(fee_bps)?)
        .ok_or(VaultError::Overflow)?;

    let numerator = in_with_fee
        .checked_mul(reserve_out as u128)
        .ok_or(VaultError::Overflow)?;

    let denominator = (reserve_in as u128)
        .checked_mul(BASIS_POINTS as u128)
        .ok_or(VaultError::Overflow)?
        .checked_add(in_with_fee)
        .ok_or(VaultError::Overflow)?;

    let out = numerator
        .checked_div(denominator)
        .ok_or(VaultError::DivisionByZero)?;

    u64::try_from(out).map_err(|_| VaultError::Overflow.into())
}

// Smallest input that buys at least `amount_out` on a constant-product curve.
// Returns None when the reserve cannot supply that much.
pub fn amount_in_for_exact_out(
    amount_out: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_bps: u16,
) -> Result<Option<u64>> {
    let complement = fee_complement(fee_bps)?;

    if amount_out >= reserve_out {
        return Ok(None);
    }

    let numerator = (reserve_in as u128)
        .checked_mul(amount_out as u128)
        .ok_or(VaultError::Overflow)?
        .checked_mul(BASIS_POINTS as u128)
        .ok_or(VaultError::Overflow)?;

    let denominator = (reserve_out as u128 - amount_out as u128)
        .checked_mul(complement)
        .ok_or(VaultError::Overflow)?;

    let amount_in = numerator
        .checked_div(denominator)
        .ok_or(VaultError::DivisionByZero)?
        .checked_add(1)
        .ok_or(VaultError::Overflow)?;

    Ok(u64::try_from(amount_in).ok())
}

// What one holder receives for redeeming claim shares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Redemption {
    // Gross amount taken out of the reserve
    pub amount: u64,
    // Claim shares destroyed for it
    pub shares_burned: u64,
    // Part of `amount` routed to the fee recipient
    pub fee: u64,
}

impl Redemption {
    pub fn net(&self) -> u64 {
        self.amount - self.fee
    }
}

// Plan a withdrawal of `requested` (0 = everything) against a reserve.
//
// Uses pre-burn totals. A full exit burns all of the holder's shares; a
// partial one burns the rounded-up share count implied by the amount.
pub fn plan_redemption(
    holder_shares: u64,
    balance: u64,
    supply: u64,
    requested: u64,
    fee_bps: u16,
) -> Result<Redemption> {
    require!(holder_shares > 0, VaultError::NoBalanceToWithdraw);
    require!(holder_shares <= supply, VaultError::ClaimSupplyMismatch);

    let entitlement = proportional_share(holder_shares, balance, supply)?;

    let (amount, shares_burned) = if requested == 0 {
        (entitlement, holder_shares)
    } else {
        require!(requested <= entitlement, VaultError::ExceedsEntitlement);
        let shares = shares_for_amount(requested, balance, supply)?;
        require!(shares <= holder_shares, VaultError::ExceedsEntitlement);
        (requested, shares)
    };

    // Shares are minted 1:1 with deposits, so burned shares are the principal.
    let fee = fee_on_gain(amount, shares_burned, fee_bps)?;

    Ok(Redemption {
        amount,
        shares_burned,
        fee,
    })
}

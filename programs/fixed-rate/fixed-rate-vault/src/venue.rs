// Venue Seams and Position Lifecycle
//
// The AMM and the reward farm are untrusted external programs. The pairing
// and unwind logic only talks to them through these two traits, so the same
// code runs against CPI adapters on-chain and in-memory venues in tests.

use anchor_lang::prelude::*;

use crate::{errors::VaultError, math};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapDirection {
    BaseForToken,
    TokenForBase,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddedLiquidity {
    pub base_used: u64,
    pub token_used: u64,
    pub lp_minted: u64,
}

pub trait LiquidityVenue {
    // Current (base, token) reserves of the venue pool
    fn reserves(&self) -> Result<(u64, u64)>;

    fn fee_bps(&self) -> u16;

    fn add_liquidity(
        &mut self,
        base_amount: u64,
        token_amount: u64,
        min_base: u64,
        min_token: u64,
    ) -> Result<AddedLiquidity>;

    // Returns (base_out, token_out)
    fn remove_liquidity(&mut self, lp_amount: u64, min_base: u64, min_token: u64) -> Result<(u64, u64)>;

    fn swap_exact_in(&mut self, direction: SwapDirection, amount_in: u64, min_out: u64) -> Result<u64>;
}

pub trait RewardSink {
    fn deposit(&mut self, lp_amount: u64) -> Result<()>;

    fn withdraw(&mut self, lp_amount: u64) -> Result<()>;

    // LP currently staked for this position
    fn staked(&self) -> Result<u64>;
}

// Pairing: supply both sides, keep the LP (staked when a sink is configured).
// Base the venue did not consume never leaves the vault reserve.
pub fn open_position(
    venue: &mut dyn LiquidityVenue,
    sink: Option<&mut dyn RewardSink>,
    base_amount: u64,
    token_amount: u64,
    min_base: u64,
    min_token: u64,
) -> Result<AddedLiquidity> {
    let added = venue.add_liquidity(base_amount, token_amount, min_base, min_token)?;

    require!(added.base_used >= min_base, VaultError::SlippageExceeded);
    require!(added.token_used >= min_token, VaultError::SlippageExceeded);
    require!(added.base_used <= base_amount, VaultError::InvalidVenueAccount);
    require!(added.token_used <= token_amount, VaultError::InvalidVenueAccount);
    require!(added.lp_minted > 0, VaultError::SlippageExceeded);

    if let Some(sink) = sink {
        sink.deposit(added.lp_minted)?;
    }

    Ok(added)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompensationSwap {
    #[default]
    None,
    // Token side came back short; base bought the shortfall
    BoughtToken { base_in: u64, token_out: u64 },
    // Token side came back long; the excess was sold for base
    SoldToken { token_in: u64, base_out: u64 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnwindParams {
    pub lp_amount: u64,
    // Tokens the pool already held outside the position
    pub token_on_hand: u64,
    // Fixed-rate entitlement of the pool's depositors
    pub owed: u64,
    pub min_base_out: u64,
    pub min_token_out: u64,
    // |T - owed| at or below this skips the swap
    pub tolerance: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unwind {
    // B and T as removed from the venue
    pub base_removed: u64,
    pub token_removed: u64,
    // Base forwarded to the vault after compensation
    pub base_returned: u64,
    // Pool token balance after compensation
    pub token_retained: u64,
    pub swap: CompensationSwap,
}

// Unpairing with fixed-rate compensation.
//
// The token side is made whole up to `owed` and capped there; the base side
// absorbs every remaining gain or loss.
pub fn unwind_position(
    venue: &mut dyn LiquidityVenue,
    sink: Option<&mut dyn RewardSink>,
    params: &UnwindParams,
) -> Result<Unwind> {
    if let Some(sink) = sink {
        let staked = sink.staked()?;
        require!(staked >= params.lp_amount, VaultError::InvalidRewardAccounts);
        sink.withdraw(params.lp_amount)?;
    }

    let (base_removed, token_removed) = venue.remove_liquidity(params.lp_amount, 0, 0)?;

    let token_held = params
        .token_on_hand
        .checked_add(token_removed)
        .ok_or(VaultError::Overflow)?;

    let mut unwind = Unwind {
        base_removed,
        token_removed,
        base_returned: base_removed,
        token_retained: token_held,
        swap: CompensationSwap::None,
    };

    if token_held.abs_diff(params.owed) <= params.tolerance {
        return Ok(unwind);
    }

    if token_held < params.owed {
        let shortfall = params.owed - token_held;
        let (base_reserve, token_reserve) = venue.reserves()?;

        // Spend only what closes the gap, or all of B if the gap is wider
        let base_in = math::amount_in_for_exact_out(shortfall, base_reserve, token_reserve, venue.fee_bps())?
            .map_or(base_removed, |quote| quote.min(base_removed));

        if base_in == 0 {
            return Ok(unwind);
        }

        let token_out = venue.swap_exact_in(SwapDirection::BaseForToken, base_in, params.min_token_out)?;
        require!(token_out >= params.min_token_out, VaultError::SlippageExceeded);

        unwind.base_returned = base_removed - base_in;
        unwind.token_retained = token_held.checked_add(token_out).ok_or(VaultError::Overflow)?;
        unwind.swap = CompensationSwap::BoughtToken { base_in, token_out };
    } else {
        let excess = token_held - params.owed;

        let base_out = venue.swap_exact_in(SwapDirection::TokenForBase, excess, params.min_base_out)?;
        require!(base_out >= params.min_base_out, VaultError::SlippageExceeded);

        unwind.base_returned = base_removed.checked_add(base_out).ok_or(VaultError::Overflow)?;
        unwind.token_retained = params.owed;
        unwind.swap = CompensationSwap::SoldToken { token_in: excess, base_out };
    }

    Ok(unwind)
}

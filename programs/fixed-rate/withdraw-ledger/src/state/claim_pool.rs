use anchor_lang::prelude::*;

use crate::errors::LedgerError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum SourceKind {
    #[default]
    Vault,
    Pool,
}

// Frozen claim pool for one migrated source.
//
// The snapshot is the balance and claim supply the source recorded when it
// migrated, copied once when claims open. Each redemption consumes exactly the shares and balance it paid
// for, so later claimants see the same rate whatever the order.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct ClaimPool {
    pub ledger: Pubkey,
    // Vault or pool that migrated its reserve here
    pub source: Pubkey,
    pub kind: SourceKind,
    // Original claim share mint, burned on redemption
    pub claim_mint: Pubkey,
    // Asset paid out
    pub asset_mint: Pubkey,
    // Ledger authority's token account holding the migrated reserve
    pub escrow: Pubkey,

    pub snapshot_balance: u64,
    pub snapshot_shares: u64,

    pub unredeemed_balance: u64,
    pub unredeemed_shares: u64,
    pub redeemed_shares: u64,

    pub rescued: bool,
    pub bump: u8,
}

impl ClaimPool {
    pub fn open(&mut self, balance: u64, shares: u64) {
        self.snapshot_balance = balance;
        self.snapshot_shares = shares;
        self.unredeemed_balance = balance;
        self.unredeemed_shares = shares;
        self.redeemed_shares = 0;
    }

    // shares * remaining_balance / remaining_shares, floored
    pub fn quote(&self, shares: u64) -> Result<u64> {
        require!(shares > 0, LedgerError::NoLiquidity);
        require!(self.unredeemed_shares > 0, LedgerError::NoLiquidity);
        require!(shares <= self.unredeemed_shares, LedgerError::NoLiquidity);

        let amount = (shares as u128)
            .checked_mul(self.unredeemed_balance as u128)
            .ok_or(LedgerError::Overflow)?
            / self.unredeemed_shares as u128;

        u64::try_from(amount).map_err(|_| LedgerError::Overflow.into())
    }

    pub fn redeem(&mut self, shares: u64) -> Result<u64> {
        let amount = self.quote(shares)?;
        require!(amount > 0, LedgerError::NoLiquidity);

        self.unredeemed_balance = self
            .unredeemed_balance
            .checked_sub(amount)
            .ok_or(LedgerError::Underflow)?;
        self.unredeemed_shares = self
            .unredeemed_shares
            .checked_sub(shares)
            .ok_or(LedgerError::Underflow)?;
        self.redeemed_shares = self
            .redeemed_shares
            .checked_add(shares)
            .ok_or(LedgerError::Overflow)?;

        Ok(amount)
    }

    // Guardian override; pro-rata claims pay nothing afterwards
    pub fn rescue(&mut self) -> u64 {
        let remaining = self.unredeemed_balance;
        self.unredeemed_balance = 0;
        self.rescued = true;
        remaining
    }
}

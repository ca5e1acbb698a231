use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::VaultError,
    math::{self, Redemption},
    state::{Operation, Phase, RoleBook},
};

// Registry slot: one active pool per token
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct PoolEntry {
    pub token_mint: Pubkey,
    pub pool: Pubkey,
    // Venue LP mint, set once the pool has been paired
    pub lp_mint: Pubkey,
}

// Vault account
// Holds the base-asset ledger, the shared phase machine and the pool registry
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Vault {
    // Unique identifier per operator (one vault per deployment cycle)
    pub vault_id: u64,

    // Drives phases, pairing and configuration
    pub operator: Pubkey,

    pub phase: Phase,

    // Base asset mint (wrapped SOL for native deposits)
    pub base_mint: Pubkey,

    // Claim share mint, minted 1:1 with base deposits
    pub claim_mint: Pubkey,

    // Base reserve (ATA of the vault authority)
    pub base_reserve: Pubkey,

    // External constant-product program used for pairing
    pub venue_program: Pubkey,

    // Vault whose depositors may migrate positions into this one
    pub predecessor: Option<Pubkey>,

    // Deposit cap, 0 = uncapped
    pub max_base: u64,

    // Mirror of the claim mint supply
    pub total_claim_shares: u64,

    // Base currently committed to open positions (at cost)
    pub deployed_base: u64,

    // Base that came back from unwound positions
    pub returned_base: u64,

    // Positions paired but not yet unwound
    pub open_positions: u8,

    pub pool_count: u8,
    pub pools: [PoolEntry; MAX_POOLS],

    // Protocol fee on withdrawal gains
    pub fee_recipient: Pubkey,
    pub fee_bps: u16,

    // Set once the reserve has been swept to a successor
    pub migrated: bool,
    pub migrated_to: Pubkey,

    // Reserve balance and share supply at the moment of migration
    pub migrated_balance: u64,
    pub migrated_shares: u64,

    pub bump: u8,
    pub authority_bump: u8,
    pub claim_mint_bump: u8,
}

impl Vault {
    pub fn roles(&self) -> RoleBook {
        RoleBook {
            operator: Some(self.operator),
            migrator: Some(self.operator),
            guardian: None,
        }
    }

    pub fn require_phase(&self, operation: Operation) -> Result<()> {
        self.phase.require(operation)
    }

    pub fn assert_operator(&self, caller: &Pubkey) -> Result<()> {
        require!(self.roles().can_configure(caller), VaultError::OnlyOperator);
        Ok(())
    }

    pub fn assert_not_migrated(&self) -> Result<()> {
        require!(!self.migrated, VaultError::AlreadyMigrated);
        Ok(())
    }

    pub fn set_fee(&mut self, fee_bps: u16, fee_recipient: Pubkey) -> Result<()> {
        require!(fee_bps <= MAX_FEE_BPS, VaultError::InvalidFee);
        require!(
            fee_bps == 0 || fee_recipient != Pubkey::default(),
            VaultError::InvalidFee
        );
        self.fee_bps = fee_bps;
        self.fee_recipient = fee_recipient;
        Ok(())
    }

    pub fn set_max_base(&mut self, max_base: u64) -> Result<()> {
        self.require_phase(Operation::UpdateCap)?;
        self.max_base = max_base;
        Ok(())
    }

    // Moves to the next phase; `operation` names the transition being asked for
    pub fn advance(&mut self, operation: Operation) -> Result<Phase> {
        self.require_phase(operation)?;

        if operation == Operation::BeginSettlement {
            require!(self.open_positions == 0, VaultError::PositionsStillOpen);
        }

        let next = self.phase.next().ok_or(VaultError::PhaseViolation)?;
        self.phase = next;
        Ok(next)
    }

    // REGISTRY

    pub fn pool_for_token(&self, token_mint: &Pubkey) -> Option<&PoolEntry> {
        self.pools
            .iter()
            .take(self.pool_count as usize)
            .find(|entry| &entry.token_mint == token_mint)
    }

    pub fn is_registered(&self, pool: &Pubkey) -> bool {
        self.pools
            .iter()
            .take(self.pool_count as usize)
            .any(|entry| &entry.pool == pool)
    }

    pub fn assert_registered(&self, pool: &Pubkey) -> Result<()> {
        require!(self.is_registered(pool), VaultError::PoolNotRegistered);
        Ok(())
    }

    pub fn register_pool(&mut self, entry: PoolEntry, override_existing: bool) -> Result<()> {
        self.require_phase(Operation::RegisterPool)?;
        require!(entry.token_mint != self.base_mint, VaultError::InvalidBaseMint);

        if self.pool_for_token(&entry.token_mint).is_some() {
            require!(override_existing, VaultError::PoolAlreadyRegistered);
            return Ok(());
        }

        let slot = self.pool_count as usize;
        require!(slot < MAX_POOLS, VaultError::RegistryFull);

        self.pools[slot] = entry;
        self.pool_count += 1;
        Ok(())
    }

    pub fn record_lp_mint(&mut self, pool: &Pubkey, lp_mint: Pubkey) -> Result<()> {
        let count = self.pool_count as usize;
        let entry = self.pools[..count]
            .iter_mut()
            .find(|entry| &entry.pool == pool)
            .ok_or(VaultError::PoolNotRegistered)?;
        entry.lp_mint = lp_mint;
        Ok(())
    }

    // Mints the vault holds on behalf of depositors: never swept as rewards
    pub fn is_managed_mint(&self, mint: &Pubkey) -> bool {
        *mint == self.base_mint
            || self.pools[..self.pool_count as usize].iter().any(|entry| {
                entry.token_mint == *mint
                    || (entry.lp_mint != Pubkey::default() && entry.lp_mint == *mint)
            })
    }

    pub fn check_sweep(&self, mint: &Pubkey, amount: u64) -> Result<()> {
        self.require_phase(Operation::SweepRewards)?;
        require!(!self.is_managed_mint(mint), VaultError::NothingToSweep);
        require!(amount > 0, VaultError::NothingToSweep);
        Ok(())
    }

    // BASE LEDGER

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.require_phase(Operation::Deposit)?;
        require!(amount > 0, VaultError::ZeroDepositAmount);

        let total = self
            .total_claim_shares
            .checked_add(amount)
            .ok_or(VaultError::Overflow)?;

        require!(
            self.max_base == 0 || total <= self.max_base,
            VaultError::MaxBaseExceeded
        );

        self.total_claim_shares = total;
        Ok(())
    }

    // Migrated positions from the predecessor count against the cap like deposits
    pub fn accept_migrated_position(&mut self, from: &Pubkey, amount: u64) -> Result<()> {
        require!(self.predecessor == Some(*from), VaultError::InvalidSuccessor);
        self.record_deposit(amount)
    }

    pub fn plan_withdrawal(&self, holder_shares: u64, reserve_balance: u64, requested: u64) -> Result<Redemption> {
        self.require_phase(Operation::Withdraw)?;
        self.assert_not_migrated()?;

        math::plan_redemption(
            holder_shares,
            reserve_balance,
            self.total_claim_shares,
            requested,
            self.fee_bps,
        )
    }

    pub fn record_withdrawal(&mut self, redemption: &Redemption) -> Result<()> {
        self.total_claim_shares = self
            .total_claim_shares
            .checked_sub(redemption.shares_burned)
            .ok_or(VaultError::Underflow)?;
        Ok(())
    }

    // PAIRING

    pub fn check_allocation(&self, base_amount: u64) -> Result<()> {
        self.require_phase(Operation::Pair)?;

        let deployed = self
            .deployed_base
            .checked_add(base_amount)
            .ok_or(VaultError::Overflow)?;
        require!(
            deployed <= self.total_claim_shares,
            VaultError::DeploymentExceedsDeposits
        );
        Ok(())
    }

    pub fn record_pairing(&mut self, base_used: u64) -> Result<()> {
        self.check_allocation(base_used)?;
        self.deployed_base += base_used;
        self.open_positions = self.open_positions.checked_add(1).ok_or(VaultError::Overflow)?;
        Ok(())
    }

    pub fn record_unwind(&mut self, base_cost: u64, base_returned: u64) -> Result<()> {
        self.require_phase(Operation::Unpair)?;

        self.open_positions = self
            .open_positions
            .checked_sub(1)
            .ok_or(VaultError::Underflow)?;
        self.deployed_base = self
            .deployed_base
            .checked_sub(base_cost)
            .ok_or(VaultError::Underflow)?;
        self.returned_base = self
            .returned_base
            .checked_add(base_returned)
            .ok_or(VaultError::Overflow)?;
        Ok(())
    }

    // MIGRATION

    pub fn record_migration(&mut self, successor: Pubkey, balance: u64) -> Result<()> {
        self.require_phase(Operation::Migrate)?;
        self.assert_not_migrated()?;

        self.migrated = true;
        self.migrated_to = successor;
        self.migrated_balance = balance;
        self.migrated_shares = self.total_claim_shares;
        Ok(())
    }
}

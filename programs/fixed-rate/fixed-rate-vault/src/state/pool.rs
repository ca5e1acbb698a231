use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::VaultError,
    math::{self, Redemption},
    state::{Operation, RoleBook, Vault},
    venue::{AddedLiquidity, Unwind, UnwindParams},
};

// Optional farm the pool's LP is staked into while paired
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum RewardTier {
    #[default]
    None,
    Tier1,
    Tier2,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum PositionState {
    #[default]
    Idle,
    Paired,
    Settled,
}

// Pool account, one per managed token per vault
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Pool {
    pub vault: Pubkey,

    // Managed token (immutable)
    pub token_mint: Pubkey,

    // Claim share mint, minted 1:1 with token deposits
    pub claim_mint: Pubkey,

    // Token reserve (ATA of the vault authority)
    pub token_reserve: Pubkey,

    // Guaranteed return over the deployment window, in basis points
    pub fixed_rate_bps: u16,

    // Compensation swaps smaller than this are skipped
    pub swap_tolerance: u64,

    // Mirror of the claim mint supply
    pub total_claim_shares: u64,

    pub position: PositionState,

    // Venue pool config the position lives in
    pub venue_pool: Pubkey,
    pub lp_balance: u64,
    pub base_deployed: u64,
    pub token_deployed: u64,

    // Filled in at unwind
    pub base_returned: u64,
    pub token_settled: u64,

    pub reward_tier: RewardTier,
    pub reward_program: Pubkey,
    pub reward_pid: u64,

    // May redirect the settled balance to a successor
    pub migrator: Pubkey,

    pub migrated: bool,
    pub migrated_to: Pubkey,

    // Reserve balance and share supply at the moment of migration
    pub migrated_balance: u64,
    pub migrated_shares: u64,

    pub bump: u8,
    pub claim_mint_bump: u8,
}

impl Pool {
    pub fn roles(&self, vault: &Vault) -> RoleBook {
        RoleBook {
            operator: Some(vault.operator),
            migrator: Some(self.migrator),
            guardian: None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.vault != Pubkey::default()
    }

    // Applies registration parameters. Reconfiguring an existing pool is only
    // possible while nobody has deposited into it.
    pub fn configure(
        &mut self,
        fixed_rate_bps: u16,
        swap_tolerance: u64,
        reward_tier: RewardTier,
        reward_program: Pubkey,
        reward_pid: u64,
    ) -> Result<()> {
        require!(fixed_rate_bps <= MAX_FIXED_RATE_BPS, VaultError::InvalidFixedRate);

        match reward_tier {
            RewardTier::None => require!(reward_pid == 0, VaultError::InvalidPidMapping),
            RewardTier::Tier1 | RewardTier::Tier2 => require!(
                reward_program != Pubkey::default(),
                VaultError::InvalidPidMapping
            ),
        }

        require!(self.total_claim_shares == 0, VaultError::PoolHasDeposits);

        self.fixed_rate_bps = fixed_rate_bps;
        self.swap_tolerance = swap_tolerance;
        self.reward_tier = reward_tier;
        self.reward_program = match reward_tier {
            RewardTier::None => Pubkey::default(),
            _ => reward_program,
        };
        self.reward_pid = reward_pid;
        Ok(())
    }

    pub fn assert_migrator(&self, vault: &Vault, caller: &Pubkey) -> Result<()> {
        require!(self.roles(vault).can_migrate(caller), VaultError::OnlyMigrator);
        Ok(())
    }

    pub fn set_migrator(&mut self, vault: &Vault, caller: &Pubkey, new_migrator: Pubkey) -> Result<()> {
        self.assert_migrator(vault, caller)?;
        self.migrator = new_migrator;
        Ok(())
    }

    // Depositors' aggregate fixed-rate entitlement
    pub fn entitlement(&self) -> Result<u64> {
        math::fixed_rate_entitlement(self.total_claim_shares, self.fixed_rate_bps)
    }

    // TOKEN LEDGER

    pub fn record_deposit(&mut self, vault: &Vault, amount: u64) -> Result<()> {
        vault.require_phase(Operation::Deposit)?;
        require!(amount > 0, VaultError::ZeroDepositAmount);

        self.total_claim_shares = self
            .total_claim_shares
            .checked_add(amount)
            .ok_or(VaultError::Overflow)?;
        Ok(())
    }

    pub fn accept_migrated_position(&mut self, vault: &Vault, from_vault: &Pubkey, amount: u64) -> Result<()> {
        require!(vault.predecessor == Some(*from_vault), VaultError::InvalidSuccessor);
        self.record_deposit(vault, amount)
    }

    pub fn plan_withdrawal(
        &self,
        vault: &Vault,
        holder_shares: u64,
        reserve_balance: u64,
        requested: u64,
    ) -> Result<Redemption> {
        vault.require_phase(Operation::Withdraw)?;
        require!(!self.migrated, VaultError::AlreadyMigrated);

        // Token depositors are paid their fixed-rate floor; no fee on it
        math::plan_redemption(holder_shares, reserve_balance, self.total_claim_shares, requested, 0)
    }

    pub fn record_withdrawal(&mut self, redemption: &Redemption) -> Result<()> {
        self.total_claim_shares = self
            .total_claim_shares
            .checked_sub(redemption.shares_burned)
            .ok_or(VaultError::Underflow)?;
        Ok(())
    }

    // POSITION

    pub fn assert_idle(&self) -> Result<()> {
        require!(self.position == PositionState::Idle, VaultError::PositionNotIdle);
        Ok(())
    }

    pub fn record_pairing(&mut self, venue_pool: Pubkey, added: &AddedLiquidity) -> Result<()> {
        self.assert_idle()?;

        self.position = PositionState::Paired;
        self.venue_pool = venue_pool;
        self.lp_balance = added.lp_minted;
        self.base_deployed = added.base_used;
        self.token_deployed = added.token_used;
        Ok(())
    }

    pub fn unwind_params(&self, token_on_hand: u64, min_base_out: u64, min_token_out: u64) -> Result<UnwindParams> {
        require!(self.position == PositionState::Paired, VaultError::PositionNotPaired);

        Ok(UnwindParams {
            lp_amount: self.lp_balance,
            token_on_hand,
            owed: self.entitlement()?,
            min_base_out,
            min_token_out,
            tolerance: self.swap_tolerance,
        })
    }

    pub fn record_unwind(&mut self, unwind: &Unwind) -> Result<()> {
        require!(self.position == PositionState::Paired, VaultError::PositionNotPaired);

        self.position = PositionState::Settled;
        self.lp_balance = 0;
        self.base_returned = unwind.base_returned;
        self.token_settled = unwind.token_retained;
        Ok(())
    }

    // MIGRATION

    pub fn record_migration(&mut self, vault: &Vault, successor: Pubkey, balance: u64) -> Result<()> {
        vault.require_phase(Operation::Migrate)?;
        require!(!self.migrated, VaultError::AlreadyMigrated);

        self.migrated = true;
        self.migrated_to = successor;
        self.migrated_balance = balance;
        self.migrated_shares = self.total_claim_shares;
        Ok(())
    }
}

// Fixed-Rate Liquidity Vault
//
// Pairs base-asset deposits with single-token deposits in an external
// constant-product venue for one deployment window. Token depositors are
// guaranteed a fixed rate on the way out; the base side absorbs every
// remaining gain or loss.
//
// Instructions:
// - initialize_vault / register_pool: Open a cycle and its token pools
// - deposit_base / deposit_wrapped_base / deposit_token: Mint claim shares 1:1
// - begin_deployment / begin_settlement: Advance the phase machine
// - pair_liquidity_pool / unpair_liquidity_pool: Open and unwind venue positions
// - withdraw_base / withdraw_token: Redeem claim shares pro rata
// - migrate_base_position / migrate_token_position: Roll a position into the next cycle
// - migrate_vault_liquidity / migrate_pool_liquidity: Hand a reserve to a successor
// - update_max_base / update_fee / update_migrator: Configuration
// - sweep_rewards: Collect farm rewards after settlement

use anchor_lang::prelude::*;

pub mod adapters;
pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod math;
pub mod state;
pub mod venue;

use instructions::*;
use state::{Operation, RewardTier};

declare_id!("EAMv37ezsPh5acxWLXy6AS78dTyvGjYdceiDH92cYpKx");

#[program]
pub mod fixed_rate_vault {
    use super::*;

    pub fn initialize_vault(
        ctx: Context<InitializeVault>,
        vault_id: u64,
        max_base: u64,
        fee_bps: u16,
        predecessor: Option<Pubkey>,
    ) -> Result<()> {
        ctx.accounts
            .initialize_vault(vault_id, max_base, fee_bps, predecessor, &ctx.bumps)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn register_pool(
        ctx: Context<RegisterPool>,
        fixed_rate_bps: u16,
        swap_tolerance: u64,
        reward_tier: RewardTier,
        reward_program: Pubkey,
        reward_pid: u64,
        override_existing: bool,
    ) -> Result<()> {
        ctx.accounts.register_pool(
            fixed_rate_bps,
            swap_tolerance,
            reward_tier,
            reward_program,
            reward_pid,
            override_existing,
            &ctx.bumps,
        )
    }

    pub fn deposit_base(ctx: Context<DepositBase>, amount: u64) -> Result<()> {
        ctx.accounts.deposit_base(amount)
    }

    pub fn deposit_wrapped_base(ctx: Context<DepositWrappedBase>, amount: u64) -> Result<()> {
        ctx.accounts.deposit_wrapped_base(amount)
    }

    pub fn deposit_token(ctx: Context<DepositToken>, amount: u64) -> Result<()> {
        ctx.accounts.deposit_token(amount)
    }

    pub fn begin_deployment(ctx: Context<AdvancePhase>) -> Result<()> {
        ctx.accounts.advance_phase(Operation::BeginDeployment)
    }

    pub fn pair_liquidity_pool<'info>(
        ctx: Context<'_, '_, '_, 'info, PairLiquidity<'info>>,
        base_amount: u64,
        token_amount: u64,
        min_base: u64,
        min_token: u64,
    ) -> Result<()> {
        ctx.accounts.pair_liquidity(
            base_amount,
            token_amount,
            min_base,
            min_token,
            ctx.remaining_accounts,
        )
    }

    pub fn unpair_liquidity_pool<'info>(
        ctx: Context<'_, '_, '_, 'info, UnpairLiquidity<'info>>,
        min_base_out: u64,
        min_token_out: u64,
    ) -> Result<()> {
        ctx.accounts
            .unpair_liquidity(min_base_out, min_token_out, ctx.remaining_accounts)
    }

    pub fn begin_settlement(ctx: Context<AdvancePhase>) -> Result<()> {
        ctx.accounts.advance_phase(Operation::BeginSettlement)
    }

    /// Pays into the holder's base-mint ATA. For a native-mint vault that is
    /// wrapped SOL, even when the position came in through `deposit_base`;
    /// closing the account unwraps it.
    pub fn withdraw_base(ctx: Context<WithdrawBase>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw_base(amount)
    }

    pub fn withdraw_token(ctx: Context<WithdrawToken>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw_token(amount)
    }

    pub fn migrate_base_position(ctx: Context<MigrateBasePosition>, amount: u64) -> Result<()> {
        ctx.accounts.migrate_base_position(amount)
    }

    pub fn migrate_token_position(ctx: Context<MigrateTokenPosition>, amount: u64) -> Result<()> {
        ctx.accounts.migrate_token_position(amount)
    }

    pub fn migrate_vault_liquidity(ctx: Context<MigrateVaultLiquidity>) -> Result<()> {
        ctx.accounts.migrate_vault_liquidity()
    }

    pub fn migrate_pool_liquidity(ctx: Context<MigratePoolLiquidity>) -> Result<()> {
        ctx.accounts.migrate_pool_liquidity()
    }

    pub fn update_max_base(ctx: Context<UpdateMaxBase>, max_base: u64) -> Result<()> {
        ctx.accounts.update_max_base(max_base)
    }

    pub fn update_fee(ctx: Context<UpdateFee>, fee_bps: u16) -> Result<()> {
        ctx.accounts.update_fee(fee_bps)
    }

    pub fn update_migrator(ctx: Context<UpdateMigrator>, new_migrator: Pubkey) -> Result<()> {
        ctx.accounts.update_migrator(new_migrator)
    }

    pub fn sweep_rewards(ctx: Context<SweepRewards>) -> Result<()> {
        ctx.accounts.sweep_rewards()
    }
}

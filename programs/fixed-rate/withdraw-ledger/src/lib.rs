// Withdraw Ledger
//
// Takes over a vault's (and its pools') settled reserves after migration and
// pays holders of the original claim shares pro rata from a frozen snapshot.
//
// Instructions:
// - initialize_ledger: Point at a vault and its pools, name the guardian
// - open_vault_claims / open_pool_claims: Snapshot a migrated reserve
// - withdraw_base / withdraw_token: Burn original claim shares for a payout
// - rescue_tokens / rescue_native: Guardian-only recovery

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::SourceKind;

declare_id!("HqUzaqoEub8cPcoE3dUKSLb4bqHLtP6nkndKi7CetdZh");

#[program]
pub mod withdraw_ledger {
    use super::*;

    pub fn initialize_ledger(ctx: Context<InitializeLedger>, pools: Vec<Pubkey>) -> Result<()> {
        ctx.accounts.initialize_ledger(pools, &ctx.bumps)
    }

    pub fn open_vault_claims(ctx: Context<OpenVaultClaims>) -> Result<()> {
        ctx.accounts.open_vault_claims(&ctx.bumps)
    }

    pub fn open_pool_claims(ctx: Context<OpenPoolClaims>) -> Result<()> {
        ctx.accounts.open_pool_claims(&ctx.bumps)
    }

    pub fn withdraw_base(ctx: Context<Redeem>) -> Result<()> {
        ctx.accounts.redeem(SourceKind::Vault)
    }

    pub fn withdraw_token(ctx: Context<Redeem>) -> Result<()> {
        ctx.accounts.redeem(SourceKind::Pool)
    }

    pub fn rescue_tokens(ctx: Context<RescueTokens>) -> Result<()> {
        ctx.accounts.rescue_tokens()
    }

    pub fn rescue_native(ctx: Context<RescueNative>) -> Result<()> {
        ctx.accounts.rescue_native()
    }
}

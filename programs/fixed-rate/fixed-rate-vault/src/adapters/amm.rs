// Constant-product venue adapter
//
// Drives an external AMM exposing deposit_liquidity / withdraw_liquidity /
// swap_tokens. The vault authority PDA acts as the depositor and swapper;
// amounts are measured as balance deltas on its own token accounts, never
// taken from the venue's word.

use anchor_lang::{
    prelude::*,
    solana_program::{
        instruction::{AccountMeta, Instruction},
        program::invoke_signed,
    },
};
use anchor_spl::token::accessor;

use crate::{
    adapters::{account_discriminator, sighash},
    constants::*,
    errors::VaultError,
    venue::{AddedLiquidity, LiquidityVenue, SwapDirection},
};

// Venue pool configuration (mirrors the venue's account layout)
#[derive(AnchorDeserialize, Clone, Debug)]
pub struct VenuePoolConfig {
    pub authority: Pubkey,
    pub token_a_mint: Pubkey,
    pub token_b_mint: Pubkey,
    pub lp_token_mint: Pubkey,
    pub fee_basis_points: u16,
    pub locked: bool,
    pub config_bump: u8,
    pub authority_bump: u8,
    pub lp_mint_bump: u8,
}

impl VenuePoolConfig {
    pub fn load(account: &AccountInfo, venue_program: &Pubkey) -> Result<Self> {
        require_keys_eq!(*account.owner, *venue_program, VaultError::InvalidVenueAccount);

        let data = account.try_borrow_data()?;
        require!(data.len() > ANCHOR_DISCRIMINATOR, VaultError::InvalidVenueAccount);
        require!(
            data[..ANCHOR_DISCRIMINATOR] == account_discriminator("PoolConfig"),
            VaultError::InvalidVenueAccount
        );

        let config = Self::deserialize(&mut &data[ANCHOR_DISCRIMINATOR..])
            .map_err(|_| VaultError::InvalidVenueAccount)?;
        config.validate()?;
        Ok(config)
    }

    // A fee of 100% or more leaves no input to price
    pub fn validate(&self) -> Result<()> {
        require!(
            (self.fee_basis_points as u64) < BASIS_POINTS,
            VaultError::InvalidVenueAccount
        );
        Ok(())
    }

    // true when the base mint is the venue's token A
    pub fn base_is_a(&self, base_mint: &Pubkey, token_mint: &Pubkey) -> Result<bool> {
        if self.token_a_mint == *base_mint && self.token_b_mint == *token_mint {
            Ok(true)
        } else if self.token_b_mint == *base_mint && self.token_a_mint == *token_mint {
            Ok(false)
        } else {
            err!(VaultError::VenuePairMismatch)
        }
    }
}

pub struct AmmAccounts<'info> {
    pub program: AccountInfo<'info>,
    pub pool_config: AccountInfo<'info>,
    pub pool_authority: AccountInfo<'info>,
    pub lp_mint: AccountInfo<'info>,
    pub mint_a: AccountInfo<'info>,
    pub mint_b: AccountInfo<'info>,
    pub vault_a: AccountInfo<'info>,
    pub vault_b: AccountInfo<'info>,

    // Vault authority and its token accounts
    pub owner: AccountInfo<'info>,
    pub owner_base: AccountInfo<'info>,
    pub owner_token: AccountInfo<'info>,
    pub owner_lp: AccountInfo<'info>,

    pub token_program: AccountInfo<'info>,
    pub associated_token_program: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
}

pub struct AmmVenue<'a, 'info> {
    accounts: AmmAccounts<'info>,
    config: VenuePoolConfig,
    base_is_a: bool,
    signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> AmmVenue<'a, 'info> {
    pub fn new(
        accounts: AmmAccounts<'info>,
        base_mint: &Pubkey,
        token_mint: &Pubkey,
        signer_seeds: &'a [&'a [&'a [u8]]],
    ) -> Result<Self> {
        let config = VenuePoolConfig::load(&accounts.pool_config, accounts.program.key)?;
        let base_is_a = config.base_is_a(base_mint, token_mint)?;

        require_keys_eq!(*accounts.mint_a.key, config.token_a_mint, VaultError::InvalidVenueAccount);
        require_keys_eq!(*accounts.mint_b.key, config.token_b_mint, VaultError::InvalidVenueAccount);
        require_keys_eq!(*accounts.lp_mint.key, config.lp_token_mint, VaultError::InvalidVenueAccount);
        require!(!config.locked, VaultError::InvalidVenueAccount);

        Ok(Self {
            accounts,
            config,
            base_is_a,
            signer_seeds,
        })
    }

    pub fn pool_config(&self) -> Pubkey {
        self.accounts.pool_config.key()
    }

    // (base, token) -> (a, b)
    fn to_ab(&self, base: u64, token: u64) -> (u64, u64) {
        if self.base_is_a {
            (base, token)
        } else {
            (token, base)
        }
    }

    fn owner_a(&self) -> &AccountInfo<'info> {
        if self.base_is_a {
            &self.accounts.owner_base
        } else {
            &self.accounts.owner_token
        }
    }

    fn owner_b(&self) -> &AccountInfo<'info> {
        if self.base_is_a {
            &self.accounts.owner_token
        } else {
            &self.accounts.owner_base
        }
    }

    // (base, token, lp) held by the vault authority
    fn balances(&self) -> Result<(u64, u64, u64)> {
        Ok((
            accessor::amount(&self.accounts.owner_base)?,
            accessor::amount(&self.accounts.owner_token)?,
            accessor::amount(&self.accounts.owner_lp)?,
        ))
    }

    fn deadline() -> Result<i64> {
        Clock::get()?
            .unix_timestamp
            .checked_add(VENUE_DEADLINE_SECONDS)
            .ok_or(VaultError::Overflow.into())
    }

    // Account order shared by deposit_liquidity and withdraw_liquidity
    fn liquidity_accounts(&self) -> Vec<AccountInfo<'info>> {
        let a = &self.accounts;
        vec![
            a.owner.clone(),
            a.pool_config.clone(),
            a.pool_authority.clone(),
            a.lp_mint.clone(),
            a.mint_a.clone(),
            a.mint_b.clone(),
            self.owner_a().clone(),
            self.owner_b().clone(),
            a.owner_lp.clone(),
            a.vault_a.clone(),
            a.vault_b.clone(),
            a.token_program.clone(),
            a.associated_token_program.clone(),
            a.system_program.clone(),
        ]
    }

    fn swap_accounts(&self) -> Vec<AccountInfo<'info>> {
        let a = &self.accounts;
        vec![
            a.owner.clone(),
            a.pool_config.clone(),
            a.pool_authority.clone(),
            a.mint_a.clone(),
            a.mint_b.clone(),
            self.owner_a().clone(),
            self.owner_b().clone(),
            a.vault_a.clone(),
            a.vault_b.clone(),
            a.token_program.clone(),
            a.associated_token_program.clone(),
            a.system_program.clone(),
        ]
    }

    fn invoke(&self, name: &str, args: &[u8], accounts: Vec<AccountInfo<'info>>) -> Result<()> {
        let writable = [
            self.accounts.owner.key,
            self.accounts.lp_mint.key,
            self.accounts.owner_base.key,
            self.accounts.owner_token.key,
            self.accounts.owner_lp.key,
            self.accounts.vault_a.key,
            self.accounts.vault_b.key,
        ];

        let metas = accounts
            .iter()
            .map(|info| {
                let is_signer = info.key == self.accounts.owner.key;
                if writable.contains(&info.key) {
                    AccountMeta::new(*info.key, is_signer)
                } else {
                    AccountMeta::new_readonly(*info.key, is_signer)
                }
            })
            .collect();

        let mut data = sighash(name).to_vec();
        data.extend_from_slice(args);

        let ix = Instruction {
            program_id: *self.accounts.program.key,
            accounts: metas,
            data,
        };

        let mut infos = accounts;
        infos.push(self.accounts.program.clone());

        invoke_signed(&ix, &infos, self.signer_seeds)?;
        Ok(())
    }
}

impl<'a, 'info> LiquidityVenue for AmmVenue<'a, 'info> {
    fn reserves(&self) -> Result<(u64, u64)> {
        let reserve_a = accessor::amount(&self.accounts.vault_a)?;
        let reserve_b = accessor::amount(&self.accounts.vault_b)?;

        Ok(if self.base_is_a {
            (reserve_a, reserve_b)
        } else {
            (reserve_b, reserve_a)
        })
    }

    fn fee_bps(&self) -> u16 {
        self.config.fee_basis_points
    }

    fn add_liquidity(
        &mut self,
        base_amount: u64,
        token_amount: u64,
        min_base: u64,
        min_token: u64,
    ) -> Result<AddedLiquidity> {
        let (base_before, token_before, lp_before) = self.balances()?;
        let (desired_a, desired_b) = self.to_ab(base_amount, token_amount);

        // desired_a, desired_b, max_a, max_b, expiration
        let mut args = Vec::with_capacity(40);
        args.extend_from_slice(&desired_a.to_le_bytes());
        args.extend_from_slice(&desired_b.to_le_bytes());
        args.extend_from_slice(&desired_a.to_le_bytes());
        args.extend_from_slice(&desired_b.to_le_bytes());
        args.extend_from_slice(&Self::deadline()?.to_le_bytes());

        self.invoke("deposit_liquidity", &args, self.liquidity_accounts())?;

        let (base_after, token_after, lp_after) = self.balances()?;
        let added = AddedLiquidity {
            base_used: base_before.checked_sub(base_after).ok_or(VaultError::Underflow)?,
            token_used: token_before.checked_sub(token_after).ok_or(VaultError::Underflow)?,
            lp_minted: lp_after.checked_sub(lp_before).ok_or(VaultError::Underflow)?,
        };

        require!(added.base_used >= min_base, VaultError::SlippageExceeded);
        require!(added.token_used >= min_token, VaultError::SlippageExceeded);

        msg!(
            "Venue deposit: {} base, {} token -> {} LP",
            added.base_used,
            added.token_used,
            added.lp_minted
        );

        Ok(added)
    }

    fn remove_liquidity(&mut self, lp_amount: u64, min_base: u64, min_token: u64) -> Result<(u64, u64)> {
        let (base_before, token_before, _) = self.balances()?;
        let (min_a, min_b) = self.to_ab(min_base, min_token);

        // lp_tokens_to_burn, min_a, min_b, expiration
        let mut args = Vec::with_capacity(32);
        args.extend_from_slice(&lp_amount.to_le_bytes());
        args.extend_from_slice(&min_a.to_le_bytes());
        args.extend_from_slice(&min_b.to_le_bytes());
        args.extend_from_slice(&Self::deadline()?.to_le_bytes());

        self.invoke("withdraw_liquidity", &args, self.liquidity_accounts())?;

        let (base_after, token_after, _) = self.balances()?;
        let base_out = base_after.checked_sub(base_before).ok_or(VaultError::Underflow)?;
        let token_out = token_after.checked_sub(token_before).ok_or(VaultError::Underflow)?;

        require!(base_out >= min_base, VaultError::SlippageExceeded);
        require!(token_out >= min_token, VaultError::SlippageExceeded);

        msg!("Venue withdraw: {} LP -> {} base, {} token", lp_amount, base_out, token_out);

        Ok((base_out, token_out))
    }

    fn swap_exact_in(&mut self, direction: SwapDirection, amount_in: u64, min_out: u64) -> Result<u64> {
        let (base_before, token_before, _) = self.balances()?;

        let a_for_b = match direction {
            SwapDirection::BaseForToken => self.base_is_a,
            SwapDirection::TokenForBase => !self.base_is_a,
        };

        // The venue rejects a zero minimum
        let venue_min_out = min_out.max(1);

        // swap_token_a_for_b, input_amount, min_output_amount, expiration
        let mut args = Vec::with_capacity(25);
        args.push(a_for_b as u8);
        args.extend_from_slice(&amount_in.to_le_bytes());
        args.extend_from_slice(&venue_min_out.to_le_bytes());
        args.extend_from_slice(&Self::deadline()?.to_le_bytes());

        self.invoke("swap_tokens", &args, self.swap_accounts())?;

        let (base_after, token_after, _) = self.balances()?;
        let amount_out = match direction {
            SwapDirection::BaseForToken => token_after.checked_sub(token_before),
            SwapDirection::TokenForBase => base_after.checked_sub(base_before),
        }
        .ok_or(VaultError::Underflow)?;

        require!(amount_out >= min_out, VaultError::SlippageExceeded);

        msg!("Venue swap: {} in -> {} out", amount_in, amount_out);

        Ok(amount_out)
    }
}

// Reward farm adapter
//
// Tier 1 farms take (pid, amount); tier 2 farms take (pid, amount, to) and
// harvest on withdraw. The tier is fixed when the pool is registered.
//
// Farm accounts arrive as remaining accounts, in this order:
//   0. farm program
//   1. farm state
//   2. farm pool (pid)
//   3. user info (vault authority's stake record)
//   4. farm LP vault
//   5. farm reward vault
//   6. vault authority's reward token account

use anchor_lang::{
    prelude::*,
    solana_program::{
        instruction::{AccountMeta, Instruction},
        program::invoke_signed,
    },
};

use crate::{
    adapters::sighash,
    constants::ANCHOR_DISCRIMINATOR,
    errors::VaultError,
    state::RewardTier,
    venue::RewardSink,
};

pub const FARM_ACCOUNT_COUNT: usize = 7;

// Farm stake record layout
#[derive(AnchorDeserialize, Clone, Copy, Debug, Default)]
pub struct FarmUserInfo {
    pub amount: u64,
    pub reward_debt: i128,
}

pub struct FarmSink<'a, 'info> {
    tier: RewardTier,
    pid: u64,
    farm: &'a [AccountInfo<'info>],
    owner: AccountInfo<'info>,
    owner_lp: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> FarmSink<'a, 'info> {
    // None for pools that hold their LP directly
    #[allow(clippy::too_many_arguments)]
    pub fn from_remaining(
        tier: RewardTier,
        pid: u64,
        reward_program: &Pubkey,
        remaining: &'a [AccountInfo<'info>],
        owner: AccountInfo<'info>,
        owner_lp: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
        signer_seeds: &'a [&'a [&'a [u8]]],
    ) -> Result<Option<Self>> {
        if tier == RewardTier::None {
            return Ok(None);
        }

        require!(
            remaining.len() >= FARM_ACCOUNT_COUNT,
            VaultError::InvalidRewardAccounts
        );
        let farm = &remaining[..FARM_ACCOUNT_COUNT];
        require_keys_eq!(*farm[0].key, *reward_program, VaultError::InvalidRewardAccounts);

        Ok(Some(Self {
            tier,
            pid,
            farm,
            owner,
            owner_lp,
            token_program,
            signer_seeds,
        }))
    }

    fn call(&self, name: &str, amount: u64) -> Result<()> {
        let mut data = sighash(name).to_vec();
        data.extend_from_slice(&self.pid.to_le_bytes());
        data.extend_from_slice(&amount.to_le_bytes());
        if self.tier == RewardTier::Tier2 {
            data.extend_from_slice(self.owner.key.as_ref());
        }

        let ix = Instruction {
            program_id: *self.farm[0].key,
            accounts: vec![
                AccountMeta::new(*self.owner.key, true),
                AccountMeta::new_readonly(*self.farm[1].key, false),
                AccountMeta::new(*self.farm[2].key, false),
                AccountMeta::new(*self.farm[3].key, false),
                AccountMeta::new(*self.owner_lp.key, false),
                AccountMeta::new(*self.farm[4].key, false),
                AccountMeta::new(*self.farm[5].key, false),
                AccountMeta::new(*self.farm[6].key, false),
                AccountMeta::new_readonly(*self.token_program.key, false),
            ],
            data,
        };

        let infos = [
            self.owner.clone(),
            self.farm[1].clone(),
            self.farm[2].clone(),
            self.farm[3].clone(),
            self.owner_lp.clone(),
            self.farm[4].clone(),
            self.farm[5].clone(),
            self.farm[6].clone(),
            self.token_program.clone(),
            self.farm[0].clone(),
        ];

        invoke_signed(&ix, &infos, self.signer_seeds)?;
        Ok(())
    }
}

impl<'a, 'info> RewardSink for FarmSink<'a, 'info> {
    fn deposit(&mut self, lp_amount: u64) -> Result<()> {
        self.call("deposit", lp_amount)?;
        msg!("Staked {} LP in farm pid {}", lp_amount, self.pid);
        Ok(())
    }

    fn withdraw(&mut self, lp_amount: u64) -> Result<()> {
        let name = match self.tier {
            RewardTier::Tier2 => "withdraw_and_harvest",
            _ => "withdraw",
        };
        self.call(name, lp_amount)?;
        msg!("Unstaked {} LP from farm pid {}", lp_amount, self.pid);
        Ok(())
    }

    fn staked(&self) -> Result<u64> {
        let user_info = &self.farm[3];
        require_keys_eq!(*user_info.owner, *self.farm[0].key, VaultError::InvalidRewardAccounts);

        let data = user_info.try_borrow_data()?;
        require!(data.len() > ANCHOR_DISCRIMINATOR, VaultError::InvalidRewardAccounts);

        let info = FarmUserInfo::deserialize(&mut &data[ANCHOR_DISCRIMINATOR..])
            .map_err(|_| VaultError::InvalidRewardAccounts)?;
        Ok(info.amount)
    }
}

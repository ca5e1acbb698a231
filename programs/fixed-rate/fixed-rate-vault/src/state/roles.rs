use anchor_lang::prelude::*;

// Privileged roles in the pairing lifecycle
//
// Operator: drives the vault
//   - Can register pools, pair and unpair liquidity
//   - Can advance phases and update vault configuration
//
// Migrator: moves settled balances to a successor
//   - Vault liquidity is migrated by the operator
//   - Pool liquidity is migrated by the pool's migrator (defaults to the operator)
//
// Guardian: last-resort recovery on the withdraw ledger
//   - Can rescue escrowed balances, bypassing pro-rata claims
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Operator,
    Migrator,
    Guardian,
}

impl Role {
    pub fn can_pair(self) -> bool {
        matches!(self, Role::Operator)
    }

    pub fn can_configure(self) -> bool {
        matches!(self, Role::Operator)
    }

    pub fn can_migrate(self) -> bool {
        matches!(self, Role::Migrator)
    }

    pub fn can_rescue(self) -> bool {
        matches!(self, Role::Guardian)
    }
}

// Which key holds which role for one contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleBook {
    pub operator: Option<Pubkey>,
    pub migrator: Option<Pubkey>,
    pub guardian: Option<Pubkey>,
}

impl RoleBook {
    pub fn roles_of(&self, key: &Pubkey) -> impl Iterator<Item = Role> + '_ {
        let key = *key;
        [
            (self.operator, Role::Operator),
            (self.migrator, Role::Migrator),
            (self.guardian, Role::Guardian),
        ]
        .into_iter()
        .filter(move |(holder, _)| *holder == Some(key))
        .map(|(_, role)| role)
    }

    pub fn can_pair(&self, key: &Pubkey) -> bool {
        self.roles_of(key).any(Role::can_pair)
    }

    pub fn can_configure(&self, key: &Pubkey) -> bool {
        self.roles_of(key).any(Role::can_configure)
    }

    pub fn can_migrate(&self, key: &Pubkey) -> bool {
        self.roles_of(key).any(Role::can_migrate)
    }

    pub fn can_rescue(&self, key: &Pubkey) -> bool {
        self.roles_of(key).any(Role::can_rescue)
    }
}

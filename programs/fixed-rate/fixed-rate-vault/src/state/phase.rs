use anchor_lang::prelude::*;

use crate::errors::VaultError;

// Vault lifecycle. Only ever moves forward:
//
//   Deposit -> Deployed -> Settlement
//
// Migration of residual liquidity is a flag on the Vault/Pool, not a phase,
// so depositors who have not migrated can still withdraw.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, InitSpace,
)]
pub enum Phase {
    #[default]
    Deposit,
    Deployed,
    Settlement,
}

// Every phase-gated entry point names itself through one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Deposit,
    UpdateCap,
    RegisterPool,
    BeginDeployment,
    Pair,
    Unpair,
    BeginSettlement,
    Withdraw,
    Migrate,
    SweepRewards,
}

impl Operation {
    pub const ALL: [Operation; 10] = [
        Operation::Deposit,
        Operation::UpdateCap,
        Operation::RegisterPool,
        Operation::BeginDeployment,
        Operation::Pair,
        Operation::Unpair,
        Operation::BeginSettlement,
        Operation::Withdraw,
        Operation::Migrate,
        Operation::SweepRewards,
    ];
}

// Columns: Deposit, Deployed, Settlement
pub const PHASE_TABLE: [(Operation, [bool; 3]); 10] = [
    (Operation::Deposit, [true, false, false]),
    (Operation::UpdateCap, [true, false, false]),
    (Operation::RegisterPool, [true, false, false]),
    (Operation::BeginDeployment, [true, false, false]),
    (Operation::Pair, [false, true, false]),
    (Operation::Unpair, [false, true, false]),
    (Operation::BeginSettlement, [false, true, false]),
    (Operation::Withdraw, [false, false, true]),
    (Operation::Migrate, [false, false, true]),
    (Operation::SweepRewards, [false, false, true]),
];

impl Phase {
    pub fn index(self) -> usize {
        match self {
            Phase::Deposit => 0,
            Phase::Deployed => 1,
            Phase::Settlement => 2,
        }
    }

    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Deposit => Some(Phase::Deployed),
            Phase::Deployed => Some(Phase::Settlement),
            Phase::Settlement => None,
        }
    }

    pub fn allows(self, operation: Operation) -> bool {
        PHASE_TABLE
            .iter()
            .find(|(op, _)| *op == operation)
            .map(|(_, row)| row[self.index()])
            .unwrap_or(false)
    }

    pub fn require(self, operation: Operation) -> Result<()> {
        require!(self.allows(operation), VaultError::PhaseViolation);
        Ok(())
    }
}

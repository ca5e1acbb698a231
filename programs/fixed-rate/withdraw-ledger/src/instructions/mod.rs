pub mod initialize_ledger;
pub mod open_claims;
pub mod redeem;
pub mod rescue;

pub use initialize_ledger::*;
pub use open_claims::*;
pub use redeem::*;
pub use rescue::*;

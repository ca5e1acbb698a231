pub mod claim_pool;
pub mod ledger;

pub use claim_pool::*;
pub use ledger::*;

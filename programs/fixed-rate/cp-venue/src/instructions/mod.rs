pub mod deposit_liquidity;
pub mod initialize_pool;
pub mod set_lock;
pub mod swap_tokens;
pub mod withdraw_liquidity;

pub use deposit_liquidity::*;
pub use initialize_pool::*;
pub use set_lock::*;
pub use swap_tokens::*;
pub use withdraw_liquidity::*;

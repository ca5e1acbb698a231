pub mod initialize_vault;
pub mod register_pool;
pub mod deposit_base;
pub mod deposit_token;
pub mod advance_phase;
pub mod pair_liquidity;
pub mod unpair_liquidity;
pub mod withdraw;
pub mod migrate_position;
pub mod migrate_liquidity;
pub mod update_config;
pub mod sweep_rewards;

pub use initialize_vault::*;
pub use register_pool::*;
pub use deposit_base::*;
pub use deposit_token::*;
pub use advance_phase::*;
pub use pair_liquidity::*;
pub use unpair_liquidity::*;
pub use withdraw::*;
pub use migrate_position::*;
pub use migrate_liquidity::*;
pub use update_config::*;
pub use sweep_rewards::*;

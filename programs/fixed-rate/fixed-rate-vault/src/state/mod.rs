pub mod phase;
pub mod pool;
pub mod roles;
pub mod vault;

pub use phase::*;
pub use pool::*;
pub use roles::*;
pub use vault::*;

pub mod create_lobby;
pub mod initialize_platform;
pub mod join_lobby;
pub mod set_platform_wallet;
pub mod withdraw_platform_fees;

pub use create_lobby::*;
pub use initialize_platform::*;
pub use join_lobby::*;
pub use set_platform_wallet::*;
pub use withdraw_platform_fees::*;

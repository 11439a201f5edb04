pub mod lobby;
pub mod platform;

pub use lobby::*;
pub use platform::*;

#[macro_use]
mod macros;
pub mod roster_client;

pub use roster_client::*;

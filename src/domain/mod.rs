pub mod activity;
pub mod seed;

pub use activity::*;
pub use seed::*;

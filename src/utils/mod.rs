// Shared utilities

pub mod constants;
pub mod location;

pub use constants::*;
pub use location::*;

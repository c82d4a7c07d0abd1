//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod allowed;
mod check;
mod summary;

pub use allowed::Allowed;
pub use check::Check;
pub use summary::Summary;

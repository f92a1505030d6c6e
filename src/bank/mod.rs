//! Banking module for handling accounts, operations, and branch state.
mod account;
mod checking;
mod operation;
mod savings;
mod state;
mod types;

pub use account::*;
pub use checking::*;
pub use operation::*;
pub use savings::*;
pub use state::*;
pub use types::*;

//! Command handler modules for the convoca CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in so tests can capture them
//! - Errors propagated via `CliError`

pub mod cfg;
pub mod hash;
pub mod rng;
pub mod split;
pub mod verify;

pub use cfg::handle_cfg_command;
pub use hash::handle_hash_command;
pub use rng::handle_rng_command;
pub use split::{SplitArgs, handle_split_command};
pub use verify::handle_verify_command;

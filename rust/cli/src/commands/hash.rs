//! `hash` command: shows the numeric seed a seed string maps to.

use crate::error::CliError;
use convoca_engine::seed::hash_seed;
use std::io::Write;

pub fn handle_hash_command(seed: &str, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "{}", hash_seed(seed))?;
    Ok(())
}

//! Configuration command handler.
//!
//! Prints the resolved configuration with the source of each value
//! (default, file, or env).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "format": { "value": "text", "source": "default" },
//!   "rng_count": { "value": 5, "source": "env" },
//!   "log": { "value": null, "source": "default" }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(
    resolved: &config::ConfigResolved,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = resolved;

    let display = serde_json::json!({
        "format": {
            "value": config.format,
            "source": sources.format,
        },
        "rng_count": {
            "value": config.rng_count,
            "source": sources.rng_count,
        },
        "log": {
            "value": config.log,
            "source": sources.log,
        },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

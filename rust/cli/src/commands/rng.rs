//! Random number generator inspection command.
//!
//! The `rng` command prints the first values of the Mulberry32 stream that
//! drives team shuffles, so a split can be traced by hand or compared against
//! another implementation.

use crate::error::CliError;
use convoca_engine::rng::{Mulberry32, to_unit_f64};
use convoca_engine::seed::hash_seed;
use std::io::Write;

/// Handle the rng command.
///
/// With a seed string the stream is seeded exactly as `split` seeds it.
/// Without one, a random numeric seed is drawn and printed so the run can be
/// repeated.
///
/// # Arguments
///
/// * `seed` - Optional seed string
/// * `count` - Number of values to print
/// * `out` - Output stream for the samples
pub fn handle_rng_command(
    seed: Option<&str>,
    count: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let numeric = match seed {
        Some(s) => {
            let h = hash_seed(s);
            writeln!(out, "Seed: {:?} -> {}", s, h)?;
            h
        }
        None => {
            let h: u32 = rand::random();
            writeln!(out, "Seed: {} (random)", h)?;
            h
        }
    };

    let mut rng = Mulberry32::new(numeric);
    writeln!(out, "RNG sample:")?;
    for idx in 0..count {
        let raw = rng.next_raw();
        let unit = to_unit_f64(raw);
        writeln!(out, "  {:>3}  {:>10}  {:.10}", idx, raw, unit)?;
    }
    Ok(())
}

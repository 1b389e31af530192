//! Verify command handler.
//!
//! Replays every record in a split log and checks that the stored teams
//! still match what the algorithm produces for the same roster and seed.
//! A mismatch means the log was edited or the split algorithm changed.

use crate::error::CliError;
use crate::io_utils::read_text_auto;
use convoca_engine::record::read_records;
use std::io::Write;

/// Handle the verify command.
///
/// Writes one `line N: ...` diagnostic to `err` per bad record and a
/// summary to `out`.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` if the file cannot be read, and
/// `CliError::Engine` if any record fails to parse or verify.
pub fn handle_verify_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let text = read_text_auto(input).map_err(CliError::InvalidInput)?;

    let mut total = 0usize;
    let mut failed = 0usize;
    for (line, parsed) in read_records(&text) {
        total += 1;
        if let Err(e) = parsed.and_then(|record| record.verify()) {
            failed += 1;
            writeln!(err, "line {}: {}", line, e)?;
        }
    }

    writeln!(
        out,
        "Verified: {} records, {} ok, {} failed",
        total,
        total - failed,
        failed
    )?;

    if failed > 0 {
        return Err(CliError::Engine(format!(
            "{failed} of {total} records failed verification"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use convoca_engine::record::SplitRecord;
    use convoca_engine::roster::Player;

    fn record_line(seed: &str) -> String {
        let roster = vec![Player::new("a", "Ana"), Player::new("b", "Bia")];
        serde_json::to_string(&SplitRecord::new(roster, seed)).unwrap()
    }

    #[test]
    fn clean_log_verifies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("splits.jsonl");
        std::fs::write(&path, format!("{}\n{}\n", record_line("c1"), record_line("c2"))).unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_verify_command(path.to_str().unwrap(), &mut out, &mut err).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("2 records, 2 ok, 0 failed"));
        assert!(err.is_empty());
    }

    #[test]
    fn corrupt_line_fails_verification() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("splits.jsonl");
        std::fs::write(&path, format!("{}\n{{oops\n", record_line("c1"))).unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_verify_command(path.to_str().unwrap(), &mut out, &mut err);
        assert!(matches!(result, Err(CliError::Engine(_))));
        assert!(String::from_utf8(err).unwrap().starts_with("line 2:"));
    }

    #[test]
    fn missing_file_is_invalid_input() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_verify_command("/nonexistent/splits.jsonl", &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}

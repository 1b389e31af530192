//! File reading helpers for roster and record inputs.
//!
//! `.zst` files are decompressed transparently, and a leading UTF-8 BOM is
//! dropped so JSON parsing does not trip over it.

/// Reads a text file, decompressing it when the name ends in `.zst`.
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| format!("{path}: {e}"))?;
        let dec = zstd::decode_all(comp.as_slice()).map_err(|e| format!("{path}: {e}"))?;
        String::from_utf8(dec).map_err(|e| format!("{path}: {e}"))?
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

fn strip_utf8_bom(s: &mut String) {
    if s.starts_with('\u{feff}') {
        s.drain(..'\u{feff}'.len_utf8());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn strips_bom() {
        let mut s = "\u{feff}[1]".to_string();
        strip_utf8_bom(&mut s);
        assert_eq!(s, "[1]");
    }

    #[test]
    fn reads_plain_and_compressed_files() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("roster.txt");
        std::fs::write(&plain, "a\nb\n").unwrap();

        let packed = dir.path().join("roster.txt.zst");
        let mut f = std::fs::File::create(&packed).unwrap();
        f.write_all(&zstd::encode_all(&b"a\nb\n"[..], 3).unwrap())
            .unwrap();

        let a = read_text_auto(plain.to_str().unwrap()).unwrap();
        let b = read_text_auto(packed.to_str().unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_text_auto("/nonexistent/roster.txt").unwrap_err();
        assert!(err.contains("/nonexistent/roster.txt"));
    }
}

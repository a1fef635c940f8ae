//! Reading text from the source file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{AutotextError, Result};

/// Read a text file as lines joined with a single `\n`.
///
/// No trailing newline is appended, so an emptied file yields an empty
/// string. Lines that fail to decode end the read early; whatever was
/// read up to that point is the result (a partial read is not
/// distinguished from a full one).
pub fn read_joined_lines(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|source| AutotextError::Source {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = BufReader::new(file);
    let mut text = String::new();
    for line in reader.lines().map_while(std::result::Result::ok) {
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&line);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn source_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn joins_lines_with_newline() {
        let file = source_with("line1\nline2\n");
        assert_eq!(read_joined_lines(file.path()).unwrap(), "line1\nline2");
    }

    #[test]
    fn no_trailing_newline_needed() {
        let file = source_with("line1\nline2");
        assert_eq!(read_joined_lines(file.path()).unwrap(), "line1\nline2");
    }

    #[test]
    fn empty_file_yields_empty_string() {
        let file = source_with("");
        assert_eq!(read_joined_lines(file.path()).unwrap(), "");
    }

    #[test]
    fn whitespace_is_preserved() {
        let file = source_with("  \n\t\n");
        assert_eq!(read_joined_lines(file.path()).unwrap(), "  \n\t");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_joined_lines(Path::new("/nonexistent/overlay.txt")).unwrap_err();
        assert!(matches!(err, AutotextError::Source { .. }));
    }
}

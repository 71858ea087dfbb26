use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported document format: {path}")]
    Unsupported { path: PathBuf },
}

/// Text extraction collaborator. The scoring core never touches document
/// bytes itself; PDF/DOCX-aware extractors are injected behind this trait.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, source: &Path) -> Result<String, ExtractError>;
}

/// Raw-text fallback tier: reads the file as UTF-8, replacing invalid
/// sequences instead of failing on them.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, source: &Path) -> Result<String, ExtractError> {
        let bytes = std::fs::read(source).map_err(|err| ExtractError::Io {
            path: source.to_path_buf(),
            source: err,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_plain_text_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "5 years of Python").unwrap();

        let text = PlainTextExtractor.extract_text(file.path()).unwrap();
        assert_eq!(text, "5 years of Python");
    }

    #[test]
    fn replaces_invalid_utf8_instead_of_failing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'o', b'k', 0xFF, b'!']).unwrap();

        let text = PlainTextExtractor.extract_text(file.path()).unwrap();
        assert!(text.starts_with("ok"));
        assert!(text.ends_with('!'));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = PlainTextExtractor
            .extract_text(Path::new("/nonexistent/resume.txt"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/resume.txt"));
    }
}

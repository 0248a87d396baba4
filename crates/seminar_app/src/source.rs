use std::fs;
use std::path::{Path, PathBuf};

use engine_logging::engine_debug;
use seminar_engine::decode_page;

use crate::error::AppError;

/// Supplies already-fetched page HTML to the extractors.
pub trait PageSource {
    /// HTML of the page stored at `path`.
    fn overview(&self, path: &Path) -> Result<String, AppError>;
    /// HTML of a seminar's detail page, `Ok(None)` if it was never saved.
    fn detail(&self, seminar_id: &str) -> Result<Option<String>, AppError>;
}

/// Reads saved pages from disk; detail pages live at `<dir>/<seminar_id>.html`.
#[derive(Debug, Clone)]
pub struct DirectoryPageSource {
    pages_dir: PathBuf,
}

impl DirectoryPageSource {
    pub fn new(pages_dir: impl Into<PathBuf>) -> Self {
        Self {
            pages_dir: pages_dir.into(),
        }
    }

    fn detail_path(&self, seminar_id: &str) -> Option<PathBuf> {
        // Ids come from foreign query strings; keep them inside pages_dir.
        let safe = !seminar_id.is_empty()
            && seminar_id
                .chars()
                .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !seminar_id.starts_with('.');
        safe.then(|| self.pages_dir.join(format!("{seminar_id}.html")))
    }
}

impl PageSource for DirectoryPageSource {
    fn overview(&self, path: &Path) -> Result<String, AppError> {
        read_page(path)
    }

    fn detail(&self, seminar_id: &str) -> Result<Option<String>, AppError> {
        let Some(path) = self.detail_path(seminar_id) else {
            engine_debug!("skipping detail lookup for unusable id {:?}", seminar_id);
            return Ok(None);
        };
        if !path.is_file() {
            return Ok(None);
        }
        read_page(&path).map(Some)
    }
}

/// Reads and decodes a saved page.
pub fn read_page(path: &Path) -> Result<String, AppError> {
    let bytes = fs::read(path).map_err(|err| AppError::io(path, err))?;
    let decoded = decode_page(&bytes, None).map_err(|source| AppError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    engine_debug!("read {:?} as {}", path, decoded.encoding_label);
    Ok(decoded.html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_pages_are_looked_up_by_id() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("42.html"), "<p>Webinar</p>").unwrap();
        let source = DirectoryPageSource::new(dir.path());

        assert_eq!(source.detail("42").unwrap().as_deref(), Some("<p>Webinar</p>"));
        assert_eq!(source.detail("43").unwrap(), None);
    }

    #[test]
    fn path_like_ids_are_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectoryPageSource::new(dir.path().join("pages"));
        fs::write(dir.path().join("secret.html"), "x").unwrap();

        assert_eq!(source.detail("../secret").unwrap(), None);
        assert_eq!(source.detail("..").unwrap(), None);
        assert_eq!(source.detail("").unwrap(), None);
    }

    #[test]
    fn missing_overview_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectoryPageSource::new(dir.path());
        let err = source.overview(&dir.path().join("none.html")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}

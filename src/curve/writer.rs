use std::io::Write;
use std::path::{Path, PathBuf};

use strum_macros::{Display, EnumIter};
use tempfile::NamedTempFile;
use tracing::info;

use crate::curve::{CrossSectionCurve, Reaction};
use crate::error::{Result, SlbwError};

//=====================================================================
// Serializes a finished cross-section curve to the two-column table
// format the transport engine loads: one free-text header line, then
// one `<energy><delimiter><xs>` pair per line. The table is built in
// a temporary file in the destination directory and renamed into
// place, so a failed run never leaves a half-written table.
//=====================================================================

/// Column delimiter of the written table. The two historical
/// generation paths disagree: the production path wrote
/// comma-separated tables, the hand-run path double-space-separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Delimiter {
    #[strum(serialize = "comma")]
    Comma,
    #[strum(serialize = "double-space")]
    DoubleSpace,
}

impl Delimiter {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::DoubleSpace => "  ",
        }
    }
}

pub struct CrossSectionFileWriter {
    pub library_dir: PathBuf,
    pub delimiter: Delimiter,
    /// When false, refuse to clobber an existing table.
    pub overwrite: bool,
}

impl CrossSectionFileWriter {
    pub fn new<P: Into<PathBuf>>(library_dir: P, delimiter: Delimiter, overwrite: bool) -> Self {
        Self {
            library_dir: library_dir.into(),
            delimiter,
            overwrite,
        }
    }

    /// Destination path for a given isotope and reaction, e.g.
    /// `<lib>/U-238-capture.txt`.
    pub fn table_path(&self, element: &str, mass_number: f64, reaction: Reaction) -> PathBuf {
        self.library_dir
            .join(format!("{}-{}-{}.txt", element, mass_number as i64, reaction))
    }

    /// Write `curve` under the canonical table path, prepending the
    /// given descriptive header line. Returns the written path.
    pub fn write(
        &self,
        curve: &CrossSectionCurve,
        element: &str,
        mass_number: f64,
        header: &str,
    ) -> Result<PathBuf> {
        let path = self.table_path(element, mass_number, curve.reaction);
        if !self.overwrite && path.exists() {
            return Err(SlbwError::AlreadyExists { path });
        }

        let mut table = String::with_capacity(64 * (curve.len() + 1));
        table.push_str(header);
        table.push('\n');
        for (energy, xs) in curve.points() {
            table.push_str(&format!(
                "{:.18e}{}{:.18e}\n",
                energy,
                self.delimiter.as_str(),
                xs
            ));
        }

        self.persist(&path, table.as_bytes())?;
        info!("wrote {} to {}", curve, path.display());
        Ok(path)
    }

    // Buffer into a temporary file in the destination directory, then
    // rename into place.
    fn persist(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let write_error = |source: std::io::Error| SlbwError::WriteError {
            path: path.to_path_buf(),
            source,
        };
        let mut temp = NamedTempFile::new_in(&self.library_dir).map_err(write_error)?;
        temp.write_all(contents).map_err(write_error)?;
        temp.persist(path)
            .map_err(|e| write_error(e.error))
            .map(|_| ())
    }
}

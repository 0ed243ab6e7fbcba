use crate::download::DownloadSummary;
use crate::error::{EntryError, ModFetchError};
use console::style;
use reqwest::StatusCode;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

/// Human-facing console output. Colors are dropped automatically when the
/// underlying stream is not a terminal.
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn prompt(&mut self, default_manifest: &Path) -> io::Result<()> {
        writeln!(
            self.out,
            "Enter the path to the {} file",
            style("modrinth.index.json").green()
        )?;
        writeln!(
            self.out,
            "Or press Enter to use default {}:",
            style(default_manifest.display()).yellow()
        )?;
        write!(self.out, "{}", style("> ").green())?;
        self.out.flush()
    }

    pub fn saving(&mut self, status: StatusCode, name: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "[{}] Saving {}",
            style(status.as_u16()).green(),
            style(name).yellow()
        )
    }

    pub fn entry_failed(&mut self, name: &str, err: &EntryError) -> io::Result<()> {
        match err {
            EntryError::HttpStatus(status) => writeln!(
                self.out,
                "[{}] Failed to fetch {}",
                style(status.as_u16()).red(),
                style(name).yellow()
            ),
            EntryError::NoDownloadUrl => self.error_line(format!("No download URL for {name}")),
            EntryError::Fetch(source) => {
                self.error_line(format!("Failed to fetch {name}: {source}"))
            }
            EntryError::DirectoryCreate { source, .. } => {
                self.error_line(format!("Failed to create directories for {name}: {source}"))
            }
            EntryError::FileCreate { source, .. } => {
                self.error_line(format!("Failed to create file {name}: {source}"))
            }
            EntryError::Write { source, .. } => {
                self.error_line(format!("Failed to save {name}: {source}"))
            }
        }
    }

    pub fn summary(&mut self, summary: &DownloadSummary) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            style(format!("Saved {}/{} files", summary.saved, summary.total)).magenta()
        )
    }

    pub fn fatal(&mut self, err: &ModFetchError) -> io::Result<()> {
        self.error_line(err)
    }

    fn error_line(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", style(format!("[ERR] {message}")).red())
    }
}

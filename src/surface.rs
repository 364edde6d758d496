//! Display surfaces that receive rendered output

use anyhow::Context;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Receives a complete block of rendered text.
pub trait Surface {
    fn present(&mut self, text: &str) -> anyhow::Result<()>;
}

pub struct StdoutSurface;

impl Surface for StdoutSurface {
    fn present(&mut self, text: &str) -> anyhow::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Writes the output to a file, replacing any existing contents
pub struct FileSurface {
    path: PathBuf,
}

impl FileSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSurface { path: path.into() }
    }
}

impl Surface for FileSurface {
    fn present(&mut self, text: &str) -> anyhow::Result<()> {
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write output to {}", self.path.display()))?;
        log::info!("Wrote output to {}", self.path.display());
        Ok(())
    }
}

/// Keeps everything presented to it, in order.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySurface {
    pub presented: Vec<String>,
}

#[cfg(test)]
impl Surface for MemorySurface {
    fn present(&mut self, text: &str) -> anyhow::Result<()> {
        self.presented.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_surface_writes_text() {
        let path = std::env::temp_dir().join(format!("payrate-surface-{}.txt", std::process::id()));
        FileSurface::new(&path).present("hello\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn file_surface_reports_path_on_failure() {
        let path = std::env::temp_dir()
            .join("payrate-missing-dir")
            .join("nested")
            .join("out.txt");
        let err = FileSurface::new(&path).present("x").unwrap_err();
        assert!(err.to_string().contains("out.txt"));
    }

    #[test]
    fn memory_surface_keeps_blocks() {
        let mut surface = MemorySurface::default();
        surface.present("a").unwrap();
        surface.present("b").unwrap();
        assert_eq!(surface.presented, vec!["a", "b"]);
    }
}

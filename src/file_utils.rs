use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

// @module: Binary input and output streams for the converter

/// Path argument meaning standard input or standard output
pub const STDIO_PATH: &str = "-";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: Path refers to stdin/stdout
    pub fn is_stdio<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().as_os_str() == STDIO_PATH
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        }
        Ok(())
    }

    /// Open the input stream: a file, or standard input when no path or `-` is given.
    ///
    /// Bytes are read untouched; no decoding happens here.
    pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
        match path {
            Some(path) if !Self::is_stdio(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input file: {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
            _ => Ok(Box::new(io::stdin().lock())),
        }
    }

    /// Open the output stream: a file (truncated), or standard output when no path or `-` is given.
    pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
        match path {
            Some(path) if !Self::is_stdio(path) => {
                if let Some(parent) = path.parent() {
                    Self::ensure_dir(parent)?;
                }
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            _ => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        }
    }
}

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Buffered writer for `path`, or stdout when no path is given.
pub fn open_output(path: Option<&str>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

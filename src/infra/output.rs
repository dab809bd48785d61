use anyhow::Context;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub trait ManifestWriter {
    fn write_entry(&mut self, entry: &str) -> anyhow::Result<()>;
    fn finish(&mut self) -> anyhow::Result<()>;
}

/// Writes the manifest to a file.
///
/// The file is created or truncated on construction and the handle is held
/// until the writer is dropped, so an early return mid-walk still releases it.
pub struct FileWriter {
    path: PathBuf,
    inner: BufWriter<File>,
}

impl FileWriter {
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        debug!("Opening manifest for writing: {}", path.display());
        let file = File::create(path)
            .with_context(|| format!("Failed to open manifest {} for writing", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            inner: BufWriter::new(file),
        })
    }
}

impl ManifestWriter for FileWriter {
    fn write_entry(&mut self, entry: &str) -> anyhow::Result<()> {
        write_line(&mut self.inner, entry)
            .with_context(|| format!("Failed to write to manifest {}", self.path.display()))
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.inner
            .flush()
            .with_context(|| format!("Failed to flush manifest {}", self.path.display()))?;
        info!("Manifest written to file: {}", self.path.display());
        Ok(())
    }
}

pub struct ConsoleWriter;

impl ManifestWriter for ConsoleWriter {
    fn write_entry(&mut self, entry: &str) -> anyhow::Result<()> {
        write_line(&mut io::stdout().lock(), entry)?;
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        debug!("Manifest written to console");
        io::stdout().flush()?;
        Ok(())
    }
}

fn write_line<W: Write>(out: &mut W, entry: &str) -> io::Result<()> {
    writeln!(out, "{}", entry)
}

pub fn create_writer(output_file: &Path, to_stdout: bool) -> anyhow::Result<Box<dyn ManifestWriter>> {
    if to_stdout {
        return Ok(Box::new(ConsoleWriter));
    }

    Ok(Box::new(FileWriter::create(output_file)?))
}

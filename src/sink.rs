use crate::error::ExtractError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Destination for an extracted URL sequence
pub trait OutputSink {
    /// Emit the complete sequence
    fn emit(&mut self, urls: &[String]) -> Result<(), ExtractError>;
}

/// Writes the sequence to the log at `info` level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl OutputSink for LogSink {
    fn emit(&mut self, urls: &[String]) -> Result<(), ExtractError> {
        ::log::info!("Extracted {} URLs", urls.len());
        for url in urls {
            ::log::info!("{}", url);
        }
        Ok(())
    }
}

/// Writes the sequence as a pretty-printed JSON array
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn emit(&mut self, urls: &[String]) -> Result<(), ExtractError> {
        serde_json::to_writer_pretty(&mut self.writer, urls)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the sequence as JSON to a file, created only when something is emitted
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputSink for FileSink {
    fn emit(&mut self, urls: &[String]) -> Result<(), ExtractError> {
        let file = File::create(&self.path)?;
        WriterSink::new(BufWriter::new(file)).emit(urls)?;
        ::log::info!("Wrote {} URLs to {}", urls.len(), self.path.display());
        Ok(())
    }
}

/// Keeps every emitted sequence in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub emitted: Vec<Vec<String>>,
}

impl OutputSink for MemorySink {
    fn emit(&mut self, urls: &[String]) -> Result<(), ExtractError> {
        self.emitted.push(urls.to_vec());
        Ok(())
    }
}

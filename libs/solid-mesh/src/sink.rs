//! # Mesh Sinks
//!
//! Destinations for emitted mesh JSON. Where the text ends up (log, file,
//! clipboard, socket) is the host's business; the exporter only hands each
//! finished object to a [`MeshSink`].

use std::io::Write;

use thiserror::Error;

/// Errors raised by a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Writing to the underlying stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The destination refused the mesh.
    #[error("Mesh rejected: {0}")]
    Rejected(String),
}

/// Receives one JSON object per exported solid.
pub trait MeshSink {
    /// Delivers a complete mesh object.
    fn accept(&mut self, json: &str) -> Result<(), SinkError>;
}

/// Collects meshes in memory.
impl MeshSink for Vec<String> {
    fn accept(&mut self, json: &str) -> Result<(), SinkError> {
        self.push(json.to_string());
        Ok(())
    }
}

/// Writes each mesh object on its own line.
///
/// # Example
///
/// ```rust
/// use solid_mesh::sink::{MeshSink, WriterSink};
///
/// let mut sink = WriterSink::new(Vec::new());
/// sink.accept(r#"{"position":[],"normal":[],"indices":[]}"#).unwrap();
/// let out = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(out.ends_with('\n'));
/// ```
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MeshSink for WriterSink<W> {
    fn accept(&mut self, json: &str) -> Result<(), SinkError> {
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }
}

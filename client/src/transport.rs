use crate::error::ClientError;
use std::io::Write;
use tichu_api::ClientEvent;

pub trait Transport {
    fn send(&mut self, event: &ClientEvent) -> Result<(), ClientError>;
}

/// Writes each outbound event as one line of JSON.
pub struct JsonLines<W> {
    writer: W,
}

impl<W: Write> JsonLines<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Transport for JsonLines<W> {
    fn send(&mut self, event: &ClientEvent) -> Result<(), ClientError> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

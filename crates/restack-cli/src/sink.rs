use std::{
    fs::{File, OpenOptions},
    io::{self, BufWriter, Write as _},
    path::Path,
};

use restack_engine::{RecordSink, RoundRecord, SinkError};

/// Appends round records to a file, one JSON object per line.
///
/// The file is created on first use and only ever appended to; records from
/// earlier sessions are kept.
#[derive(Debug)]
pub struct JsonlSink {
    writer: BufWriter<File>,
}

impl JsonlSink {
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().append(true).create(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl RecordSink for JsonlSink {
    fn append(&mut self, record: &RoundRecord) -> Result<(), SinkError> {
        let line = serde_json::to_string(record).map_err(SinkError::new)?;
        writeln!(self.writer, "{line}").map_err(SinkError::new)?;
        self.writer.flush().map_err(SinkError::new)?;
        Ok(())
    }
}

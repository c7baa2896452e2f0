use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::LabelResult;
use crate::record::LabelRecord;

/// Which records of a frame end up in the label file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    /// Only records whose dimensions are strictly inside `(0, 1)`.
    Filtered,
    /// Every record, empty boxes included, with a blank line closing the
    /// frame block.
    Unfiltered,
}

/// Writes one label file per rendered frame.
#[derive(Debug, Clone)]
pub struct LabelWriter {
    mode: LabelMode,
}

impl LabelWriter {
    /// Create a writer with the given mode.
    pub fn new(mode: LabelMode) -> Self {
        Self { mode }
    }

    /// The configured mode.
    pub fn mode(&self) -> LabelMode {
        self.mode
    }

    /// Write a frame's records to the label file at `path`.
    ///
    /// Returns the number of label lines written.
    pub fn write_frame<P: AsRef<Path>>(
        &self,
        path: P,
        records: &[LabelRecord],
    ) -> LabelResult<usize> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        let written = self.write_records(&mut writer, records)?;
        writer.flush()?;
        Ok(written)
    }

    /// Write a frame's records to an arbitrary sink.
    pub fn write_records<W: Write>(
        &self,
        writer: &mut W,
        records: &[LabelRecord],
    ) -> LabelResult<usize> {
        let mut written = 0;

        for record in records {
            match self.mode {
                LabelMode::Filtered => {
                    if record.is_trainable() {
                        writeln!(writer, "{record}")?;
                        written += 1;
                    } else {
                        log::debug!("skipping untrainable record: {record}");
                    }
                }
                LabelMode::Unfiltered => {
                    writeln!(writer, "{record}")?;
                    written += 1;
                }
            }
        }

        if self.mode == LabelMode::Unfiltered {
            writeln!(writer)?;
        }

        Ok(written)
    }
}

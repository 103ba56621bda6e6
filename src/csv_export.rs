use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use log::info;

use crate::error::IngestError;
use crate::record::VideoMetadataRecord;

pub const HEADER: [&str; 5] = [
    "videoId",
    "title",
    "description",
    "publishedAt",
    "channelTitle",
];

/// Writes the header and one row per record. Absent fields become empty
/// cells.
pub fn write_records<W: Write>(
    records: &[VideoMetadataRecord],
    sink: W,
) -> Result<usize, IngestError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);

    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(records.len())
}

/// Saves `records` to `path`, replacing whatever was there. An empty slice
/// leaves the filesystem alone and reports zero.
pub fn save_to_csv(records: &[VideoMetadataRecord], path: &Path) -> Result<usize, IngestError> {
    if records.is_empty() {
        info!("No data to save.");
        return Ok(0);
    }

    let file = File::create(path)?;
    let written = write_records(records, file)?;

    info!("Saved {} records to {}", written, path.display());
    Ok(written)
}

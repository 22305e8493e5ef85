use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),
    #[error("required sheet {name:?} not found at {}", .path.display())]
    MissingSheet { name: String, path: PathBuf },
    #[error("sheet {sheet:?} is missing required column {column:?}")]
    MissingColumn { sheet: String, column: String },
    #[error("no candidate encoding could decode {}", .0.display())]
    UnreadableEncoding(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy)]
enum TextEncoding {
    Utf8,
    Latin1,
}

const ENCODING_PREFERENCE: [TextEncoding; 2] = [TextEncoding::Utf8, TextEncoding::Latin1];

/// Reads a text file, trying each candidate encoding in preference order and
/// keeping the first whose first line decodes to plain text.
pub fn read_text(path: &Path) -> Result<String, DataError> {
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => DataError::MissingInput(path.to_path_buf()),
        _ => DataError::Io(err),
    })?;

    for encoding in ENCODING_PREFERENCE {
        if let Some(text) = decode(&bytes, encoding) {
            if first_line_is_text(&text) {
                return Ok(text);
            }
            debug!("{:?} decoded {} but the first line is not text", encoding, path.display());
        }
    }

    Err(DataError::UnreadableEncoding(path.to_path_buf()))
}

fn decode(bytes: &[u8], encoding: TextEncoding) -> Option<String> {
    match encoding {
        TextEncoding::Utf8 => String::from_utf8(bytes.to_vec()).ok(),
        // Latin-1 maps every byte to the code point of the same value.
        TextEncoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

fn first_line_is_text(text: &str) -> bool {
    match text.lines().next() {
        Some(line) => !line.chars().any(|ch| ch.is_control() && ch != '\t'),
        None => true,
    }
}

/// Pretty-prints `value` as JSON at `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), DataError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)?;

    let size = fs::metadata(path)?.len();
    info!("wrote {} ({} bytes)", path.display(), size);

    Ok(())
}

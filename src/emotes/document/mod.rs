//! Saves the package document returned by the API next to the downloaded images.
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

pub use self::error::DocumentError;

mod error;

/// `<root>/<ids>.json`
#[inline]
pub fn document_path(root: &Path, ids: impl AsRef<OsStr>) -> PathBuf {
    let mut name = ids.as_ref().to_os_string();
    name.push(".json");
    root.join(name)
}

/// Tab-indented JSON with non-ASCII characters written as plain UTF-8.
pub fn to_pretty_bytes(document: &Value) -> Result<Vec<u8>, DocumentError> {
    let mut buf = Vec::with_capacity(4096);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    document.serialize(&mut ser)?;
    Ok(buf)
}

/// Writes `document` to `path`, replacing whatever was there.
pub async fn write_document(document: &Value, path: &Path) -> Result<(), DocumentError> {
    let data = to_pretty_bytes(document)?;

    debug!("Writing package document to {}", path.display());
    let mut file = File::create(path).await?;
    file.write_all(&data).await?;
    file.flush().await?;

    Ok(())
}

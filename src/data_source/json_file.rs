use crate::data_source::error::DataSourceError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataSourceError> {
    let data = fs::read_to_string(path).map_err(|source| DataSourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&data).map_err(|source| DataSourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Replaces the file at `path` with `value` as 2-space indented JSON.
///
/// The data goes to a sibling `.tmp` file first and is renamed over `path`
/// once synced, so readers never see a partially written file.
pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), DataSourceError> {
    let data = serde_json::to_string_pretty(value)?;
    let tmp_path = tmp_path_for(path);

    let write_err = |source: std::io::Error| DataSourceError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = tokio::fs::File::create(&tmp_path).await.map_err(write_err)?;
    file.write_all(data.as_bytes()).await.map_err(write_err)?;
    file.sync_all().await.map_err(write_err)?;
    drop(file);

    if let Err(e) = tokio::fs::rename(&tmp_path, path).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(write_err(e));
    }

    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("data"));
    name.push(".tmp");
    path.with_file_name(name)
}

use crate::exceptions::HearthError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write pretty-printed JSON using a temporary file + rename strategy.
pub fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), HearthError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    // Temp file must live in the same directory for the rename to be atomic
    let mut temp_file = NamedTempFile::new_in(dir)?;

    {
        let mut writer = std::io::BufWriter::new(&mut temp_file);
        serde_json::to_writer_pretty(&mut writer, data)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| HearthError::Io(e.error))?;

    log::debug!("wrote {}", path.display());
    Ok(())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, HearthError> {
    let file = fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Reads a JSON array store, treating a missing file as an empty store.
pub fn read_json_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, HearthError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    read_json(path)
}

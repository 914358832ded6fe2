//! JSON snapshot of the whole [`Database`] on disk.

use super::{Database, StoreError};
use std::path::{Path, PathBuf};

/// Load a snapshot. A missing file is an empty database.
pub async fn load(path: &Path) -> Result<Database, StoreError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No snapshot at {:?}, starting empty", path);
            return Ok(Database::new());
        }
        Err(e) => return Err(e.into()),
    };
    let db: Database = serde_json::from_slice(&bytes)?;
    log::info!(
        "Loaded {} players, {} tournaments, {} groups, {} matches from {:?}",
        db.players.len(),
        db.tournaments.len(),
        db.groups.len(),
        db.matches.len(),
        path
    );
    Ok(db)
}

/// Write a snapshot: serialize to `<path>.tmp`, then rename over `path`.
pub async fn save(path: &Path, db: &Database) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    let json = serde_json::to_vec_pretty(db)?;
    let tmp = tmp_path(path);
    tokio::fs::write(&tmp, &json).await?;
    tokio::fs::rename(&tmp, path).await?;
    log::debug!("Wrote snapshot ({} bytes) to {:?}", json.len(), path);
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

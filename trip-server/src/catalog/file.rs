//! Loading a catalog snapshot from a JSON file.

use std::path::Path;

use super::error::CatalogError;
use super::snapshot::CatalogSnapshot;

/// Load a snapshot from a JSON file.
///
/// The file holds an object with `destinations`, `places` and `reviews`
/// arrays. Missing arrays are treated as empty.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<CatalogSnapshot, CatalogError> {
    let path = path.as_ref();

    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let snapshot: CatalogSnapshot =
        serde_json::from_str(&json).map_err(|e| CatalogError::Json {
            message: format!("{}: {e}", path.display()),
        })?;

    tracing::info!(
        path = %path.display(),
        destinations = snapshot.destinations.len(),
        places = snapshot.places.len(),
        reviews = snapshot.reviews.len(),
        "loaded catalog snapshot"
    );

    Ok(snapshot)
}

use crate::domain::Gym;
use crate::locator::LocatorError;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::{fs, task};
use tracing::{info, instrument};

/// The read-only list of gyms searched by the locator, in the order they were loaded. Never empty.
#[derive(Clone, Debug)]
pub struct Catalog {
    gyms: Arc<[Gym]>,
}

impl Catalog {
    pub fn new(gyms: Vec<Gym>) -> Result<Self, LocatorError> {
        if gyms.is_empty() {
            return Err(LocatorError::EmptyCatalog);
        }

        Ok(Catalog { gyms: gyms.into() })
    }

    pub fn gyms(&self) -> &[Gym] {
        &self.gyms
    }
}

#[instrument]
pub async fn load_catalog_from(path: &Path) -> Result<Catalog, CatalogError> {
    info!("📍 Loading catalog...");
    let content = fs::read_to_string(path).await.map_err(|e| CatalogError::Io {
        source: e,
        path: path.to_path_buf(),
    })?;

    let owned_path = path.to_path_buf();
    let gyms = task::spawn_blocking(move || serde_json::from_str::<Vec<Gym>>(&content).map_err(|e| CatalogError::Parse { source: e, path: owned_path })).await??;

    let catalog = Catalog::new(gyms)?;
    info!("📍 Loading catalog... OK, {} gyms loaded", catalog.gyms().len());
    Ok(catalog)
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Invalid(#[from] LocatorError),
    #[error("unable to read catalog '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("unable to parse catalog '{}': {}", path.display(), source)]
    Parse { source: serde_json::Error, path: PathBuf },
    #[error(transparent)]
    JoinError(#[from] task::JoinError),
}

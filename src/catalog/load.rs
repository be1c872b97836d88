//! Loading a signature catalog from a local JSON file.
//!
//! File format:
//!
//! ```json
//! {
//!   "version": "2024-06",
//!   "signatures": [
//!     { "record": "mx", "needle": "google.com", "provider": "Google Workspace" }
//!   ],
//!   "disposable": ["mailinator.com"]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tokio::fs;

use super::{ProviderSignature, SignatureCatalog};
use crate::error_handling::CatalogError;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    version: Option<String>,
    signatures: Vec<ProviderSignature>,
    #[serde(default)]
    disposable: Vec<String>,
}

/// Parses catalog JSON. The version defaults to `source` when absent.
pub(crate) fn parse_catalog(content: &str, source: &str) -> Result<SignatureCatalog, CatalogError> {
    let file: CatalogFile = serde_json::from_str(content)?;

    if let Some(empty) = file.signatures.iter().find(|sig| sig.needle.is_empty()) {
        return Err(CatalogError::EmptyNeedle {
            provider: empty.provider.clone(),
        });
    }

    let version = file.version.unwrap_or_else(|| source.to_string());
    Ok(SignatureCatalog::new(version, file.signatures, file.disposable))
}

/// Loads a catalog from a JSON file.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read, `CatalogError::Parse`
/// if it is not valid catalog JSON, and `CatalogError::EmptyNeedle` if any
/// signature would match every record.
pub async fn load_catalog(path: &Path) -> Result<SignatureCatalog, CatalogError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let catalog = parse_catalog(&content, &path.display().to_string())?;
    log::debug!(
        "Loaded {} signatures and {} disposable domains from {}",
        catalog.signatures().len(),
        catalog.disposable_count(),
        path.display()
    );
    Ok(catalog)
}

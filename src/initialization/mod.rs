//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger
//! - DNS resolver
//! - Provider signature catalog
//!
//! All initialization functions return proper error types for error handling.

mod logger;
mod resolver;

use std::path::Path;
use std::sync::Arc;

use log::info;

use crate::catalog::{load_catalog, SignatureCatalog};
use crate::error_handling::CatalogError;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Initializes the signature catalog shared by all classifications.
///
/// Loads `path` when given, otherwise uses the built-in catalog.
///
/// # Errors
///
/// Returns a `CatalogError` if the catalog file cannot be read or parsed.
pub async fn init_catalog(path: Option<&Path>) -> Result<Arc<SignatureCatalog>, CatalogError> {
    let catalog = match path {
        Some(path) => load_catalog(path).await?,
        None => SignatureCatalog::builtin(),
    };
    info!(
        "Signature catalog {} loaded ({} signatures, {} disposable domains)",
        catalog.version(),
        catalog.signatures().len(),
        catalog.disposable_count()
    );
    Ok(Arc::new(catalog))
}

//! Application state for the Attendance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::export::{DocumentRenderer, PdfRenderer};

/// Shared application state.
///
/// Holds the loaded configuration and the renderer used by the export
/// endpoint. Record sets are never stored here; each request carries its own.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    renderer: Arc<dyn DocumentRenderer + Send + Sync>,
}

impl AppState {
    /// Creates a new application state that exports through [`PdfRenderer`].
    pub fn new(config: ConfigLoader) -> Self {
        let renderer = PdfRenderer::from_config(&config);
        Self::with_renderer(config, renderer)
    }

    /// Creates a new application state with a custom document renderer.
    pub fn with_renderer<R>(config: ConfigLoader, renderer: R) -> Self
    where
        R: DocumentRenderer + Send + Sync + 'static,
    {
        Self {
            config: Arc::new(config),
            renderer: Arc::new(renderer),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the document renderer.
    pub fn renderer(&self) -> &(dyn DocumentRenderer + Send + Sync) {
        self.renderer.as_ref()
    }
}

//! Server state shared by every handler

use std::sync::Arc;

use crate::showcase::Showcase;

/// Shared state for the showcase server
///
/// The showcase is built once at startup and never mutated, so handlers only
/// need a cheap clone of the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub showcase: Arc<Showcase>,
}

impl AppState {
    pub fn new(showcase: Showcase) -> Self {
        Self {
            showcase: Arc::new(showcase),
        }
    }
}

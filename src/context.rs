//! Application Context
//!
//! Shared state provided via Leptos Context API.

use crate::commands::HttpTaskApi;
use crate::store::AppStore;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Board state
    pub store: AppStore,
    /// Task store client
    pub api: HttpTaskApi,
}

impl AppContext {
    pub fn new(store: AppStore, api: HttpTaskApi) -> Self {
        Self { store, api }
    }
}

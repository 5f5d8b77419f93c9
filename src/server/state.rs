use std::sync::Arc;

use crate::url_to_recipe::fetchers::Fetcher;

/// Shared handler state; holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn Fetcher>,
}

impl AppState {
    pub fn new(fetcher: impl Fetcher + 'static) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
        }
    }
}

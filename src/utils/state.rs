use std::sync::Arc;

use crate::store::NewsStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn NewsStore>,
}

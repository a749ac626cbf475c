use crate::config::Config;
use crate::firebase::FirebaseClient;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub firebase_client: FirebaseClient,
    pub config: Arc<Config>,
}

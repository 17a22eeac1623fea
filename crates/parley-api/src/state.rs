use std::sync::Arc;

use parley_llm::Responder;
use parley_persist::SessionStore;

use crate::config::Config;

/// Shared application state passed to all handlers
///
/// The session store is the single owner of every user, thread and message
/// record; handlers reach it only through this state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn SessionStore>,
    pub responder: Arc<dyn Responder>,
}

impl AppState {
    pub fn new(
        config: Config,
        store: Arc<dyn SessionStore>,
        responder: Arc<dyn Responder>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            responder,
        }
    }
}

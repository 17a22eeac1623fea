use crate::dbs::memory::InMemorySessionStore;

/// Builder for an [`InMemorySessionStore`]
pub struct SessionStoreBuilder {
    lazy_threads: bool,
}

impl SessionStoreBuilder {
    pub fn new() -> Self {
        Self { lazy_threads: true }
    }

    /// Whether a chat on an id that was never created starts a message log
    /// for it on the fly. When disabled such appends fail with
    /// `ThreadNotFound`.
    pub fn lazy_threads(mut self, enabled: bool) -> Self {
        self.lazy_threads = enabled;
        self
    }

    pub fn build(self) -> InMemorySessionStore {
        InMemorySessionStore::with_lazy_threads(self.lazy_threads)
    }
}

impl Default for SessionStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

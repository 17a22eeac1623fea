mod state;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use parley_types::Turn;

use crate::error::{PersistError, Result};
use crate::models::{ChatMessage, Thread, User};
use crate::store::SessionStore;
use state::SessionState;

/// Process-wide session store kept entirely in memory
///
/// All records sit behind a single `RwLock`, so operations are serialized
/// and each one observes and mutates a consistent state. Nothing survives a
/// restart.
#[derive(Debug)]
pub struct InMemorySessionStore {
    state: RwLock<SessionState>,
    lazy_threads: bool,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::with_lazy_threads(true)
    }

    pub(crate) fn with_lazy_threads(lazy_threads: bool) -> Self {
        Self {
            state: RwLock::new(SessionState::default()),
            lazy_threads,
        }
    }

    /// Whether chatting on an unknown thread id starts its log implicitly
    pub fn lazy_threads(&self) -> bool {
        self.lazy_threads
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, SessionState>> {
        self.state
            .read()
            .map_err(|e| PersistError::Internal(format!("session state lock poisoned: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, SessionState>> {
        self.state
            .write()
            .map_err(|e| PersistError::Internal(format!("session state lock poisoned: {}", e)))
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for InMemorySessionStore {
    fn register_or_get_user(&self, email: &str, name: Option<&str>) -> Result<User> {
        let user = self.write()?.register_or_get_user(email, name)?;
        tracing::debug!(user_id = %user.id, "User logged in");
        Ok(user)
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.read()?.get_user(user_id)
    }

    fn create_thread(&self, user_id: &str) -> Result<Thread> {
        let thread = self.write()?.create_thread(user_id)?;
        tracing::info!(thread_id = %thread.id, user_id = %user_id, "Thread created");
        Ok(thread)
    }

    fn get_thread(&self, thread_id: &str) -> Result<Thread> {
        self.read()?.get_thread(thread_id)
    }

    fn rename_thread(&self, thread_id: &str, name: &str) -> Result<Thread> {
        let thread = self.write()?.rename_thread(thread_id, name)?;
        tracing::debug!(thread_id = %thread_id, name = %thread.name, "Thread renamed");
        Ok(thread)
    }

    fn delete_thread(&self, thread_id: &str) -> Result<()> {
        if self.write()?.delete_thread(thread_id) {
            tracing::info!(thread_id = %thread_id, "Thread deleted");
        } else {
            tracing::debug!(thread_id = %thread_id, "Delete of absent thread ignored");
        }
        Ok(())
    }

    fn list_threads(&self, user_id: &str) -> Result<Vec<Thread>> {
        Ok(self.read()?.list_threads(user_id))
    }

    fn append_message(
        &self,
        thread_id: &str,
        owner: Option<&str>,
        turn: Turn,
        image_url: Option<String>,
    ) -> Result<usize> {
        self.write()?
            .append_message(thread_id, owner, turn, image_url, self.lazy_threads)
    }

    fn get_memory_context(&self, thread_id: &str) -> Result<Vec<Turn>> {
        Ok(self.read()?.get_memory_context(thread_id))
    }

    fn get_messages(&self, thread_id: &str) -> Result<Vec<ChatMessage>> {
        Ok(self.read()?.get_messages(thread_id))
    }

    fn memory_size(&self, thread_id: &str) -> Result<usize> {
        Ok(self.read()?.memory_size(thread_id))
    }

    fn user_history(&self, user_id: &str) -> Result<Vec<ChatMessage>> {
        Ok(self.read()?.user_history(user_id))
    }
}

use parley_types::Turn;

use crate::error::Result;
use crate::models::{ChatMessage, Thread, User};

/// Session bookkeeping operations consumed by the HTTP layer
///
/// Every operation is atomic over the records it touches: on error nothing
/// has been mutated.
pub trait SessionStore: Send + Sync {
    /// Register a user on first login, or return the existing record unchanged
    fn register_or_get_user(&self, email: &str, name: Option<&str>) -> Result<User>;

    /// Look up a registered user
    fn get_user(&self, user_id: &str) -> Result<User>;

    /// Allocate the next process-wide thread id for a registered user
    fn create_thread(&self, user_id: &str) -> Result<Thread>;

    /// Look up a live thread record
    fn get_thread(&self, thread_id: &str) -> Result<Thread>;

    /// Rename a live thread
    fn rename_thread(&self, thread_id: &str, name: &str) -> Result<Thread>;

    /// Delete a thread with its message log and memory window.
    /// Deleting an absent thread is not an error.
    fn delete_thread(&self, thread_id: &str) -> Result<()>;

    /// Threads owned by a user, in creation order
    fn list_threads(&self, user_id: &str) -> Result<Vec<Thread>>;

    /// Append an exchange to a thread's log and memory window.
    /// Returns the memory window length after the append.
    ///
    /// With an `owner`, the thread must belong to that user; a thread that
    /// has no record yet is claimed for them and joins their thread list.
    fn append_message(
        &self,
        thread_id: &str,
        owner: Option<&str>,
        turn: Turn,
        image_url: Option<String>,
    ) -> Result<usize>;

    /// Up to the last five turns of a thread, oldest first
    fn get_memory_context(&self, thread_id: &str) -> Result<Vec<Turn>>;

    /// Full message history of a thread, oldest first
    fn get_messages(&self, thread_id: &str) -> Result<Vec<ChatMessage>>;

    /// Current memory window length of a thread
    fn memory_size(&self, thread_id: &str) -> Result<usize>;

    /// Every message across a user's live threads
    fn user_history(&self, user_id: &str) -> Result<Vec<ChatMessage>>;
}

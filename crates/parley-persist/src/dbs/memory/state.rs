use std::collections::{HashMap, HashSet};

use chrono::Utc;
use parley_types::Turn;

use crate::error::{PersistError, Result};
use crate::identity::{default_display_name, user_id_from_email};
use crate::memory::MemoryWindow;
use crate::models::{ChatMessage, Thread, User};

/// Message log and memory window of one thread
#[derive(Debug, Default)]
pub(crate) struct ThreadLog {
    pub messages: Vec<ChatMessage>,
    pub memory: MemoryWindow,
}

/// Every record the store owns. Guarded as a whole by one lock.
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    users: HashMap<String, User>,
    threads: HashMap<String, Thread>,
    user_threads: HashMap<String, Vec<String>>,
    logs: HashMap<String, ThreadLog>,
    deleted: HashSet<String>,
    thread_counter: u64,
}

impl SessionState {
    pub fn register_or_get_user(&mut self, email: &str, name: Option<&str>) -> Result<User> {
        let email = email.trim();
        if email.is_empty() {
            return Err(PersistError::InvalidInput("email is required".to_string()));
        }

        let user_id = user_id_from_email(email);
        if let Some(existing) = self.users.get(&user_id) {
            return Ok(existing.clone());
        }

        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| default_display_name(email));

        let user = User {
            id: user_id.clone(),
            email: email.to_string(),
            name,
            created_at: Utc::now(),
        };
        self.users.insert(user_id.clone(), user.clone());
        self.user_threads.entry(user_id).or_default();
        Ok(user)
    }

    pub fn get_user(&self, user_id: &str) -> Result<User> {
        self.users
            .get(user_id)
            .cloned()
            .ok_or_else(|| PersistError::UserNotFound(user_id.to_string()))
    }

    pub fn create_thread(&mut self, user_id: &str) -> Result<Thread> {
        if !self.users.contains_key(user_id) {
            return Err(PersistError::UserNotFound(user_id.to_string()));
        }

        // Ids already claimed by a lazily started log or a deleted thread are skipped.
        let (number, thread_id) = loop {
            self.thread_counter += 1;
            let candidate = self.thread_counter.to_string();
            if !self.logs.contains_key(&candidate) && !self.deleted.contains(&candidate) {
                break (self.thread_counter, candidate);
            }
        };

        let thread = Thread {
            id: thread_id.clone(),
            user_id: user_id.to_string(),
            name: Thread::default_name(number),
            created_at: Utc::now(),
        };

        self.threads.insert(thread_id.clone(), thread.clone());
        self.user_threads
            .entry(user_id.to_string())
            .or_default()
            .push(thread_id.clone());
        self.logs.insert(thread_id, ThreadLog::default());
        Ok(thread)
    }

    pub fn get_thread(&self, thread_id: &str) -> Result<Thread> {
        self.threads
            .get(thread_id)
            .cloned()
            .ok_or_else(|| PersistError::ThreadNotFound(thread_id.to_string()))
    }

    pub fn rename_thread(&mut self, thread_id: &str, name: &str) -> Result<Thread> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PersistError::InvalidInput("name is required".to_string()));
        }

        let thread = self
            .threads
            .get_mut(thread_id)
            .ok_or_else(|| PersistError::ThreadNotFound(thread_id.to_string()))?;
        thread.name = name.to_string();
        Ok(thread.clone())
    }

    /// Returns whether anything was removed.
    pub fn delete_thread(&mut self, thread_id: &str) -> bool {
        let thread = self.threads.remove(thread_id);
        if let Some(thread) = &thread {
            if let Some(ids) = self.user_threads.get_mut(&thread.user_id) {
                ids.retain(|id| id != thread_id);
            }
        }
        let log = self.logs.remove(thread_id);

        let removed = thread.is_some() || log.is_some();
        if removed {
            self.deleted.insert(thread_id.to_string());
        }
        removed
    }

    pub fn list_threads(&self, user_id: &str) -> Vec<Thread> {
        self.user_threads
            .get(user_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.threads.get(id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn append_message(
        &mut self,
        thread_id: &str,
        owner: Option<&str>,
        turn: Turn,
        image_url: Option<String>,
        lazy_threads: bool,
    ) -> Result<usize> {
        if thread_id.trim().is_empty() {
            return Err(PersistError::InvalidInput("thread_id is required".to_string()));
        }
        if self.deleted.contains(thread_id) {
            return Err(PersistError::ThreadNotFound(thread_id.to_string()));
        }
        if !lazy_threads && !self.logs.contains_key(thread_id) {
            return Err(PersistError::ThreadNotFound(thread_id.to_string()));
        }

        let recorded_owner = self.threads.get(thread_id).map(|t| t.user_id.clone());
        if let Some(owner) = owner {
            if !self.users.contains_key(owner) {
                return Err(PersistError::UserNotFound(owner.to_string()));
            }
            // Someone else's thread is reported as absent.
            if recorded_owner.as_deref().is_some_and(|o| o != owner) {
                return Err(PersistError::ThreadNotFound(thread_id.to_string()));
            }
            if recorded_owner.is_none() {
                self.claim_thread(thread_id, owner);
            }
        }

        let log = self.logs.entry(thread_id.to_string()).or_insert_with(|| {
            tracing::debug!(thread_id = %thread_id, "Lazily starting message log");
            ThreadLog::default()
        });

        log.memory.push(turn.clone());
        log.messages.push(ChatMessage::new(thread_id, turn, image_url));
        Ok(log.memory.len())
    }

    /// Record a thread that was started by chatting rather than created.
    fn claim_thread(&mut self, thread_id: &str, owner: &str) {
        tracing::debug!(thread_id = %thread_id, user_id = %owner, "Claiming implicit thread");
        let thread = Thread {
            id: thread_id.to_string(),
            user_id: owner.to_string(),
            name: Thread::default_name(thread_id),
            created_at: Utc::now(),
        };
        self.threads.insert(thread_id.to_string(), thread);
        self.user_threads
            .entry(owner.to_string())
            .or_default()
            .push(thread_id.to_string());
    }

    pub fn get_memory_context(&self, thread_id: &str) -> Vec<Turn> {
        self.logs
            .get(thread_id)
            .map(|log| log.memory.snapshot())
            .unwrap_or_default()
    }

    pub fn get_messages(&self, thread_id: &str) -> Vec<ChatMessage> {
        self.logs
            .get(thread_id)
            .map(|log| log.messages.clone())
            .unwrap_or_default()
    }

    pub fn memory_size(&self, thread_id: &str) -> usize {
        self.logs.get(thread_id).map_or(0, |log| log.memory.len())
    }

    pub fn user_history(&self, user_id: &str) -> Vec<ChatMessage> {
        self.user_threads
            .get(user_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.logs.get(id))
            .flat_map(|log| log.messages.iter().cloned())
            .collect()
    }
}

pub mod builder;
pub mod dbs;
pub mod error;
pub mod identity;
pub mod memory;
pub mod models;
pub mod store;

pub use builder::SessionStoreBuilder;
pub use dbs::memory::InMemorySessionStore;
pub use error::{PersistError, Result};
pub use identity::user_id_from_email;
pub use memory::{MemoryWindow, MEMORY_WINDOW_CAPACITY};
pub use models::{ChatMessage, Thread, User};
pub use store::SessionStore;

pub use parley_types::Turn;

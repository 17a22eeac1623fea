mod message;
mod thread;
mod user;

pub use message::ChatMessage;
pub use thread::Thread;
pub use user::User;

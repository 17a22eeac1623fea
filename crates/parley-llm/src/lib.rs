pub mod context;
pub mod factory;
pub mod responders;
pub mod templates;
pub mod traits;

pub use context::ContextWindow;
pub use factory::ResponderFactory;
pub use responders::{EchoResponder, ImageResponder, MemoryAwareResponder, RichMediaResponder};
pub use traits::{Reply, ReplyKind, ReplyRequest, Responder};

pub use parley_types::{ResponderKind, Turn};

use std::sync::Arc;

use parley_types::ResponderKind;

use crate::responders::{EchoResponder, ImageResponder, MemoryAwareResponder, RichMediaResponder};
use crate::traits::Responder;

/// Builds the responder selected in configuration
pub struct ResponderFactory;

impl ResponderFactory {
    pub fn create(kind: ResponderKind) -> Arc<dyn Responder> {
        match kind {
            ResponderKind::Echo => Arc::new(EchoResponder),
            ResponderKind::Memory => Arc::new(MemoryAwareResponder),
            ResponderKind::RichMedia => Arc::new(RichMediaResponder),
            ResponderKind::Image => Arc::new(ImageResponder),
        }
    }

    /// Whether the responder reads the memory window
    pub fn uses_context(kind: ResponderKind) -> bool {
        matches!(kind, ResponderKind::Memory)
    }
}

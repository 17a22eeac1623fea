mod config;
mod turn;

pub use config::ResponderKind;
pub use turn::Turn;

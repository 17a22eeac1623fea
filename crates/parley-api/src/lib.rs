pub mod config;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod routes;
pub mod state;

pub use router::build_router;
pub use state::AppState;

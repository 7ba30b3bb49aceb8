pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod store;
pub mod types;

pub use app::app;
pub use state::AppState;

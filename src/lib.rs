pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod state;

pub use api::{app, router};
pub use config::Config;
pub use repository::TodoStore;
pub use state::AppState;

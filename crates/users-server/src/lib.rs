pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod store;
pub mod synth;

pub use config::Config;
pub use error::AppError;
pub use routes::{create_router, AppState};
pub use store::{UserFilter, UserStore};

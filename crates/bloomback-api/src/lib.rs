pub mod auth;
pub mod blooms;
pub mod bouquet;
pub mod error;
pub mod middleware;
pub mod view;

pub use auth::{AppState, AppStateInner};
pub use error::ApiError;

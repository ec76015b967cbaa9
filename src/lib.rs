pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

pub use config::Config;
pub use error::ServerError;
pub use routes::create_app;

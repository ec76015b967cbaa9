pub mod error;
pub mod health;
pub mod hello;

pub use error::*;
pub use health::*;
pub use hello::*;

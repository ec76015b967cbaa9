pub mod fallback;
pub mod health;
pub mod hello;

pub use fallback::*;
pub use health::*;
pub use hello::*;

pub mod config;
pub mod details;
pub mod error;
pub mod group;
pub mod html;
pub mod input;
pub mod message;

pub use config::*;
pub use details::*;
pub use error::*;
pub use group::*;
pub use html::*;
pub use input::*;
pub use message::*;

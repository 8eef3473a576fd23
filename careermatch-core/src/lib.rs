pub mod catalog;
pub mod config;
pub mod error;
pub mod error_utils;
pub mod profile;
pub mod store;
pub mod types;
pub mod upload;

pub use config::*;
pub use error::*;
pub use error_utils::*;
pub use profile::*;
pub use store::*;
pub use types::*;
pub use upload::*;

pub mod auth_status;
pub mod config;
pub mod error;
pub mod identity;
pub mod navigation;
pub mod role;
pub mod route_table;

pub use auth_status::*;
pub use config::*;
pub use error::*;
pub use identity::*;
pub use navigation::*;
pub use role::*;

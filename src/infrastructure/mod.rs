pub mod dto;
pub mod services;
pub mod store;

pub use dto::*;
pub use services::*;
pub use store::*;

pub mod cards;
pub mod kpi_hook;
pub mod wasm_api;

pub use cards::*;
pub use kpi_hook::*;

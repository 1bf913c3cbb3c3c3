pub mod kpi_service;

pub use kpi_service::*;

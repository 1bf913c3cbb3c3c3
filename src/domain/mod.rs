pub mod errors;
pub mod kpi;
pub mod logging;
pub mod sources;

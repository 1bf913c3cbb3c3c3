//! KPI aggregate: value objects, single-source calculators and the aggregator
//! that combines them into the dashboard's headline indicators.

pub mod aggregator;
pub mod calculators;
pub mod config;
pub mod value_objects;

pub use aggregator::*;
pub use config::*;
pub use value_objects::*;

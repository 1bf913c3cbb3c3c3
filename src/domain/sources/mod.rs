//! Upstream source aggregate: typed records, their value objects and the
//! store interface the KPI engine reads snapshots through.

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use value_objects::*;

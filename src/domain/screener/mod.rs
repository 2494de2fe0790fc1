//! Screener aggregate: records, filter criteria, sort state and the pure
//! query engine that projects a record store into visible rows.

pub mod comparator;
pub mod criteria;
pub mod entities;
pub mod predicate;
pub mod query;
pub mod record;
pub mod seed;
pub mod store;
pub mod value_objects;

pub use comparator::*;
pub use criteria::*;
pub use entities::*;
pub use predicate::*;
pub use query::*;
pub use record::*;
pub use store::*;
pub use value_objects::*;

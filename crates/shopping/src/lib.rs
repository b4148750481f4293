mod aggregation;
mod categorization;
mod command;
mod query;
mod units;
mod view;

pub use aggregation::*;
pub use categorization::*;
pub use command::*;
pub use query::*;
pub use units::{canonical_unit, convert};
pub use view::*;

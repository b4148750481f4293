mod command;
mod import;
mod query;

pub use command::*;
pub use import::*;
pub use query::*;

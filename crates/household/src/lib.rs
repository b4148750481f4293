mod command;
mod pantry;
mod query;

pub use command::*;
pub use pantry::*;
pub use query::*;

/// Days an invite stays valid.
pub const INVITE_TTL_DAYS: i64 = 7;

/// Column names of the sheet fields the parameter model is read from
pub mod keys;
/// Ordered stat to values collections
pub mod collection;
/// Stat cap tables used by the meld cap formula
pub mod tables;
/// Parameter model types
pub mod types;

pub use collection::ParameterCollection;
pub use tables::{BaseParamTables, MeldCapTables};
pub use types::{Parameter, ParameterType, ParameterValue};

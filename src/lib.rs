/// Row and sheet contracts for the tabular data the items are read from
pub mod data;
/// Error definitions
pub mod error;
/// Identifier types for the entities an item row links to.
pub mod game_types;
/// Equipment items: parameter derivation, caching and meld caps
pub mod items;
/// Stat parameters, parameter collections and the stat cap tables
pub mod params;
/// Generic wrapper for values that may or may not match a known variant.
pub mod recognized;

#[cfg(feature = "arc")]
pub type Rc<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub type Rc<T> = std::rc::Rc<T>;

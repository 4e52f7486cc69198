/// Secondary parameter derivation from the stat slots of an item row
pub mod builder;
/// The equipment entity and its cached parameter views
pub mod equipment;
/// Primary parameter sources of the equipment variants
pub mod kind;
/// Materia meld cap calculation
pub mod meld;

pub use equipment::Equipment;
pub use kind::{EquipmentKind, PrimaryParameterSource};

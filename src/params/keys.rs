//! Column names of the `Item` sheet fields read by this crate.

// Repeated stat groups, six slots each
pub const BASE_PARAM: &str = "BaseParam";
pub const BASE_PARAM_VALUE: &str = "BaseParamValue";
pub const BASE_PARAM_SPECIAL: &str = "BaseParam{Special}";
pub const BASE_PARAM_VALUE_SPECIAL: &str = "BaseParamValue{Special}";

/// Number of slots in each repeated stat group.
pub const PARAM_SLOT_COUNT: usize = 6;

// Meld cap inputs
pub const LEVEL_ITEM: &str = "LevelItem";
pub const EQUIP_SLOT_CATEGORY: &str = "EquipSlotCategory";
pub const BASE_PARAM_MODIFIER: &str = "BaseParamModifier";

// Special bonus
pub const ITEM_SPECIAL_BONUS: &str = "ItemSpecialBonus";
pub const ITEM_SPECIAL_BONUS_PARAM: &str = "ItemSpecialBonus{Param}";

// Primary stats
pub const DAMAGE_PHYS: &str = "Damage{Phys}";
pub const DAMAGE_MAG: &str = "Damage{Mag}";
pub const DEFENSE_PHYS: &str = "Defense{Phys}";
pub const DEFENSE_MAG: &str = "Defense{Mag}";
pub const BLOCK: &str = "Block";
pub const BLOCK_RATE: &str = "BlockRate";

// Other item fields
pub const LEVEL_EQUIP: &str = "LevelEquip";
pub const ITEM_SERIES: &str = "ItemSeries";
pub const CLASS_JOB_CATEGORY: &str = "ClassJobCategory";
pub const CLASS_JOB_REPAIR: &str = "ClassJob{Repair}";
pub const MATERIA_SLOT_COUNT: &str = "MateriaSlotCount";
pub const IS_ADVANCED_MELDING_PERMITTED: &str = "IsAdvancedMeldingPermitted";
pub const IS_PVP: &str = "IsPvP";
pub const IS_DYEABLE: &str = "IsDyeable";
pub const MODEL_MAIN: &str = "Model{Main}";
pub const MODEL_SUB: &str = "Model{Sub}";

// BaseParam keys of the primary stats
pub const PHYSICAL_DAMAGE: u32 = 12;
pub const MAGIC_DAMAGE: u32 = 13;
pub const BLOCK_STRENGTH: u32 = 17;
pub const BLOCK_RATE_PARAM: u32 = 18;
pub const DEFENSE: u32 = 21;
pub const MAGIC_DEFENSE: u32 = 24;

//! Identifier types for the data-sheet entities an equipment row links to.
//!
//! Identity of every entity is its row key. Nothing here resolves a key to
//! the row it names; that belongs to whoever owns the sheets.

use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(u32);

        impl $name {
            pub const fn new(v: u32) -> Self {
                Self(v)
            }

            pub fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(v: u32) -> Self {
                $name(v)
            }
        }
    };
}

// =============================================================================
// Identity Types
// =============================================================================

entity_id!(
    /// A stat an item can grant (`BaseParam` sheet). Key `0` means "no stat".
    BaseParamId
);

entity_id!(
    /// Body location class of a piece of equipment (`EquipSlotCategory` sheet).
    EquipSlotCategoryId
);

entity_id!(
    /// Item level tier (`ItemLevel` sheet). Drives the absolute stat ceilings.
    ItemLevelId
);

entity_id!(
    /// Special bonus code of an item (`ItemSpecialBonus` sheet).
    ItemSpecialBonusId
);

entity_id!(
    /// Gear set an item belongs to (`ItemSeries` sheet).
    ItemSeriesId
);

entity_id!(
    /// Group of classes and jobs allowed to equip an item (`ClassJobCategory` sheet).
    ClassJobCategoryId
);

entity_id!(
    /// A single class or job (`ClassJob` sheet).
    ClassJobId
);

entity_id!(
    /// An item row (`Item` sheet).
    ItemId
);

impl BaseParamId {
    /// The "no stat" key. Slots holding it are empty.
    pub const NONE: BaseParamId = BaseParamId(0);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

use std::collections::HashMap;

use bon::Builder;
use tracing::debug;

use crate::{
    error::{ErrorKind, IResult, failure_from_kind},
    game_types::{BaseParamId, EquipSlotCategoryId, ItemLevelId},
};

/// The three lookups the meld cap formula is built from.
///
/// A missing combination is reported as an error by the table itself; the
/// callers pass it on unchanged.
pub trait MeldCapTables {
    /// Level-scaled maximum of `base_param` at `item_level`.
    fn max_value(&self, item_level: ItemLevelId, base_param: BaseParamId) -> IResult<i32>;

    /// Share of the maximum granted to an item in `slot`, where `10000` is 100%.
    fn slot_factor(&self, base_param: BaseParamId, slot: EquipSlotCategoryId) -> IResult<i32>;

    /// Role scaling selected by an item's modifier code, where `10000` is 100%.
    fn role_modifier(&self, base_param: BaseParamId, modifier: u8) -> IResult<i32>;
}

impl<T: MeldCapTables + ?Sized> MeldCapTables for &T {
    fn max_value(&self, item_level: ItemLevelId, base_param: BaseParamId) -> IResult<i32> {
        (**self).max_value(item_level, base_param)
    }

    fn slot_factor(&self, base_param: BaseParamId, slot: EquipSlotCategoryId) -> IResult<i32> {
        (**self).slot_factor(base_param, slot)
    }

    fn role_modifier(&self, base_param: BaseParamId, modifier: u8) -> IResult<i32> {
        (**self).role_modifier(base_param, modifier)
    }
}

/// Stat maximums of one `ItemLevel` row.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemLevelRecord {
    #[builder(into)]
    item_level: ItemLevelId,
    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(default))]
    max_values: HashMap<BaseParamId, i32>,
}

impl ItemLevelRecord {
    pub fn item_level(&self) -> ItemLevelId {
        self.item_level
    }

    pub fn max_values(&self) -> &HashMap<BaseParamId, i32> {
        &self.max_values
    }
}

/// Slot factors and role modifiers of one `BaseParam` row.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseParamRecord {
    #[builder(into)]
    base_param: BaseParamId,
    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(default))]
    slot_factors: HashMap<EquipSlotCategoryId, i32>,
    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(default))]
    role_modifiers: HashMap<u8, i32>,
}

impl BaseParamRecord {
    pub fn base_param(&self) -> BaseParamId {
        self.base_param
    }

    pub fn slot_factors(&self) -> &HashMap<EquipSlotCategoryId, i32> {
        &self.slot_factors
    }

    pub fn role_modifiers(&self) -> &HashMap<u8, i32> {
        &self.role_modifiers
    }
}

/// In-memory [`MeldCapTables`] backed by `ItemLevel` and `BaseParam` records.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "TablesDocument", into = "TablesDocument"))]
pub struct BaseParamTables {
    item_levels: HashMap<ItemLevelId, ItemLevelRecord>,
    base_params: HashMap<BaseParamId, BaseParamRecord>,
}

/// On-disk layout of [`BaseParamTables`].
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TablesDocument {
    #[serde(default)]
    item_levels: Vec<ItemLevelRecord>,
    #[serde(default)]
    base_params: Vec<BaseParamRecord>,
}

#[cfg(feature = "serde")]
impl From<TablesDocument> for BaseParamTables {
    fn from(value: TablesDocument) -> Self {
        BaseParamTables::new(value.item_levels, value.base_params)
    }
}

#[cfg(feature = "serde")]
impl From<BaseParamTables> for TablesDocument {
    fn from(value: BaseParamTables) -> Self {
        let mut item_levels: Vec<_> = value.item_levels.into_values().collect();
        item_levels.sort_by_key(|record| record.item_level);
        let mut base_params: Vec<_> = value.base_params.into_values().collect();
        base_params.sort_by_key(|record| record.base_param);

        TablesDocument {
            item_levels,
            base_params,
        }
    }
}

impl BaseParamTables {
    /// Later records with the same key replace earlier ones.
    pub fn new(
        item_levels: impl IntoIterator<Item = ItemLevelRecord>,
        base_params: impl IntoIterator<Item = BaseParamRecord>,
    ) -> Self {
        let item_levels: HashMap<_, _> = item_levels
            .into_iter()
            .map(|record| (record.item_level, record))
            .collect();
        let base_params: HashMap<_, _> = base_params
            .into_iter()
            .map(|record| (record.base_param, record))
            .collect();

        debug!(
            "built stat cap tables: {} item levels, {} base params",
            item_levels.len(),
            base_params.len()
        );

        Self {
            item_levels,
            base_params,
        }
    }

    /// Loads the tables from a JSON document of the form
    /// `{ "item_levels": [...], "base_params": [...] }`.
    #[cfg(feature = "json")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn item_level(&self, item_level: ItemLevelId) -> Option<&ItemLevelRecord> {
        self.item_levels.get(&item_level)
    }

    pub fn base_param(&self, base_param: BaseParamId) -> Option<&BaseParamRecord> {
        self.base_params.get(&base_param)
    }
}

impl MeldCapTables for BaseParamTables {
    fn max_value(&self, item_level: ItemLevelId, base_param: BaseParamId) -> IResult<i32> {
        self.item_levels
            .get(&item_level)
            .and_then(|record| record.max_values.get(&base_param))
            .copied()
            .ok_or_else(|| {
                failure_from_kind(ErrorKind::MaxValueNotFound {
                    item_level,
                    base_param,
                })
            })
    }

    fn slot_factor(&self, base_param: BaseParamId, slot: EquipSlotCategoryId) -> IResult<i32> {
        self.base_params
            .get(&base_param)
            .and_then(|record| record.slot_factors.get(&slot))
            .copied()
            .ok_or_else(|| failure_from_kind(ErrorKind::SlotFactorNotFound { base_param, slot }))
    }

    fn role_modifier(&self, base_param: BaseParamId, modifier: u8) -> IResult<i32> {
        self.base_params
            .get(&base_param)
            .and_then(|record| record.role_modifiers.get(&modifier))
            .copied()
            .ok_or_else(|| {
                failure_from_kind(ErrorKind::RoleModifierNotFound {
                    base_param,
                    modifier,
                })
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tables() -> BaseParamTables {
        BaseParamTables::new(
            [ItemLevelRecord::builder()
                .item_level(560u32)
                .max_values(HashMap::from([(BaseParamId::new(27), 100)]))
                .build()],
            [BaseParamRecord::builder()
                .base_param(27u32)
                .slot_factors(HashMap::from([(EquipSlotCategoryId::new(3), 5000)]))
                .role_modifiers(HashMap::from([(0, 10000)]))
                .build()],
        )
    }

    #[test]
    fn lookups() {
        let tables = tables();
        let crt = BaseParamId::new(27);
        assert_eq!(tables.max_value(ItemLevelId::new(560), crt).unwrap(), 100);
        assert_eq!(
            tables.slot_factor(crt, EquipSlotCategoryId::new(3)).unwrap(),
            5000
        );
        assert_eq!(tables.role_modifier(crt, 0).unwrap(), 10000);
    }

    #[test]
    fn misses_name_the_combination() {
        let tables = tables();
        let crt = BaseParamId::new(27);
        assert_eq!(
            tables.max_value(ItemLevelId::new(1), crt).unwrap_err().kind,
            ErrorKind::MaxValueNotFound {
                item_level: ItemLevelId::new(1),
                base_param: crt,
            }
        );
        assert_eq!(
            tables
                .slot_factor(crt, EquipSlotCategoryId::new(4))
                .unwrap_err()
                .kind,
            ErrorKind::SlotFactorNotFound {
                base_param: crt,
                slot: EquipSlotCategoryId::new(4),
            }
        );
        assert_eq!(
            tables.role_modifier(BaseParamId::new(5), 0).unwrap_err().kind,
            ErrorKind::RoleModifierNotFound {
                base_param: BaseParamId::new(5),
                modifier: 0,
            }
        );
    }

    #[cfg(feature = "json")]
    #[test]
    fn loads_json_document() {
        let json = r#"{
            "item_levels": [{ "item_level": 560, "max_values": { "27": 100, "44": 80 } }],
            "base_params": [
                { "base_param": 27, "slot_factors": { "3": 5000 }, "role_modifiers": { "0": 10000 } },
                { "base_param": 44 }
            ]
        }"#;
        let tables = BaseParamTables::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(
            tables
                .max_value(ItemLevelId::new(560), BaseParamId::new(44))
                .unwrap(),
            80
        );
        assert_eq!(
            tables
                .slot_factor(BaseParamId::new(27), EquipSlotCategoryId::new(3))
                .unwrap(),
            5000
        );
        assert!(
            tables
                .base_param(BaseParamId::new(44))
                .unwrap()
                .slot_factors()
                .is_empty()
        );
    }
}

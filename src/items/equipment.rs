use std::sync::OnceLock;

use tracing::debug;

use crate::{
    data::{RowKey, Sheet, SheetRow},
    error::{ErrorKind, IResult, failure_from_kind},
    game_types::{
        ClassJobCategoryId, ClassJobId, EquipSlotCategoryId, ItemId, ItemLevelId,
        ItemSeriesId, ItemSpecialBonusId,
    },
    params::{ParameterCollection, keys},
};

use super::{
    builder::{build_secondary_parameters, special_bonus_key},
    kind::{EquipmentKind, PrimaryParameterSource},
};

/// A wearable item, read from one row of the item sheet.
///
/// The three parameter views are derived on first access and kept for the
/// lifetime of the value, so every read after the first returns the same
/// collection. Each view is computed at most once, also when the equipment is
/// shared between threads. A failed derivation is kept as well and returned
/// again on every read.
pub struct Equipment<'a, S: Sheet, P = EquipmentKind> {
    sheet: &'a S,
    row: &'a S::Row,
    source: P,
    primary: OnceLock<IResult<ParameterCollection>>,
    secondary: OnceLock<IResult<ParameterCollection>>,
    all: OnceLock<IResult<ParameterCollection>>,
}

impl<'a, S: Sheet, P> std::fmt::Debug for Equipment<'a, S, P>
where
    P: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Equipment")
            .field("sheet", &self.sheet.name())
            .field("key", &self.row.key())
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

fn cached<'c>(
    cell: &'c OnceLock<IResult<ParameterCollection>>,
    init: impl FnOnce() -> IResult<ParameterCollection>,
) -> IResult<&'c ParameterCollection> {
    cell.get_or_init(init).as_ref().map_err(|e| e.clone())
}

impl<'a, S: Sheet, P: PrimaryParameterSource> Equipment<'a, S, P> {
    pub fn new(sheet: &'a S, row: &'a S::Row, source: P) -> Self {
        Self {
            sheet,
            row,
            source,
            primary: OnceLock::new(),
            secondary: OnceLock::new(),
            all: OnceLock::new(),
        }
    }

    /// Looks up `key` in `sheet`. `None` if the sheet has no such row.
    pub fn from_sheet(sheet: &'a S, key: RowKey, source: P) -> Option<Self> {
        sheet.row(key).map(|row| Self::new(sheet, row, source))
    }

    pub fn sheet(&self) -> &'a S {
        self.sheet
    }

    pub fn row(&self) -> &'a S::Row {
        self.row
    }

    pub fn source(&self) -> &P {
        &self.source
    }

    pub fn key(&self) -> ItemId {
        ItemId::new(self.row.key())
    }

    /// Main stats as given by the variant's [`PrimaryParameterSource`].
    pub fn primary_parameters(&self) -> IResult<&ParameterCollection> {
        cached(&self.primary, || {
            debug!(
                "deriving primary parameters of {} row {}",
                self.sheet.name(),
                self.row.key()
            );
            let parameters = self.source.primary_parameters(self.row)?;
            Ok(parameters.into_iter().collect())
        })
    }

    /// Stats from the default and special stat slots of the row.
    pub fn secondary_parameters(&self) -> IResult<&ParameterCollection> {
        cached(&self.secondary, || build_secondary_parameters(self.row))
    }

    /// Primary parameters followed by secondary parameters. A stat present in
    /// both keeps every value from both.
    pub fn all_parameters(&self) -> IResult<&ParameterCollection> {
        cached(&self.all, || {
            let mut all = self.primary_parameters()?.clone();
            all.add_range(self.secondary_parameters()?);
            debug!(
                "merged parameters of {} row {}: {} stats",
                self.sheet.name(),
                self.row.key(),
                all.len()
            );
            Ok(all)
        })
    }

    pub fn item_level(&self) -> IResult<ItemLevelId> {
        self.row.link(keys::LEVEL_ITEM).map(ItemLevelId::from)
    }

    pub fn equip_level(&self) -> IResult<i32> {
        self.row.int(keys::LEVEL_EQUIP)
    }

    pub fn equip_slot_category(&self) -> IResult<EquipSlotCategoryId> {
        self.row
            .link(keys::EQUIP_SLOT_CATEGORY)
            .map(EquipSlotCategoryId::from)
    }

    /// Code selecting the role modifier column of the `BaseParam` sheet.
    pub fn base_param_modifier(&self) -> IResult<u8> {
        self.small_int(keys::BASE_PARAM_MODIFIER)
    }

    pub fn special_bonus(&self) -> IResult<ItemSpecialBonusId> {
        special_bonus_key(self.row)
    }

    pub fn special_bonus_param(&self) -> IResult<i32> {
        self.row.int(keys::ITEM_SPECIAL_BONUS_PARAM)
    }

    pub fn item_series(&self) -> IResult<ItemSeriesId> {
        self.row.link(keys::ITEM_SERIES).map(ItemSeriesId::from)
    }

    pub fn class_job_category(&self) -> IResult<ClassJobCategoryId> {
        self.row
            .link(keys::CLASS_JOB_CATEGORY)
            .map(ClassJobCategoryId::from)
    }

    pub fn repair_class_job(&self) -> IResult<ClassJobId> {
        self.row.link(keys::CLASS_JOB_REPAIR).map(ClassJobId::from)
    }

    pub fn materia_slot_count(&self) -> IResult<u8> {
        self.small_int(keys::MATERIA_SLOT_COUNT)
    }

    pub fn is_advanced_melding_permitted(&self) -> IResult<bool> {
        self.row.bool(keys::IS_ADVANCED_MELDING_PERMITTED)
    }

    pub fn is_pvp(&self) -> IResult<bool> {
        self.row.bool(keys::IS_PVP)
    }

    pub fn is_dyeable(&self) -> IResult<bool> {
        self.row.bool(keys::IS_DYEABLE)
    }

    /// Raw main model key. Not resolved to a model here.
    pub fn model_main(&self) -> IResult<i64> {
        self.row.long(keys::MODEL_MAIN)
    }

    /// Raw off-hand model key. Not resolved to a model here.
    pub fn model_sub(&self) -> IResult<i64> {
        self.row.long(keys::MODEL_SUB)
    }

    fn small_int(&self, column: &str) -> IResult<u8> {
        let value = self.row.int(column)?;
        u8::try_from(value).map_err(|_| {
            failure_from_kind(ErrorKind::FieldRange {
                column: column.to_string(),
                index: None,
                value: i64::from(value),
            })
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::{
        FieldValue,
        memory::{MemoryRow, MemorySheet},
    };

    fn sheet() -> MemorySheet {
        MemorySheet::new(
            "Item",
            [MemoryRow::new(3000)
                .with(keys::LEVEL_ITEM, FieldValue::Int(560))
                .with(keys::LEVEL_EQUIP, FieldValue::Int(80))
                .with(keys::EQUIP_SLOT_CATEGORY, FieldValue::Int(4))
                .with(keys::BASE_PARAM_MODIFIER, FieldValue::Int(300))
                .with(keys::MATERIA_SLOT_COUNT, FieldValue::Int(2))
                .with(keys::ITEM_SPECIAL_BONUS, FieldValue::Int(4))
                .with(keys::IS_ADVANCED_MELDING_PERMITTED, FieldValue::Bool(true))
                .with(keys::IS_PVP, FieldValue::Int(0))
                .with(keys::MODEL_MAIN, FieldValue::Long(0x0000_0001_0002_0003))],
        )
    }

    #[test]
    fn typed_accessors() {
        let sheet = sheet();
        let item = Equipment::from_sheet(&sheet, 3000, EquipmentKind::Armour).unwrap();
        assert_eq!(item.key(), ItemId::new(3000));
        assert_eq!(item.item_level().unwrap(), ItemLevelId::new(560));
        assert_eq!(item.equip_level().unwrap(), 80);
        assert_eq!(item.equip_slot_category().unwrap(), EquipSlotCategoryId::new(4));
        assert_eq!(item.materia_slot_count().unwrap(), 2);
        assert_eq!(item.special_bonus().unwrap(), ItemSpecialBonusId::new(4));
        assert!(item.is_advanced_melding_permitted().unwrap());
        assert!(!item.is_pvp().unwrap());
        assert_eq!(item.model_main().unwrap(), 0x0000_0001_0002_0003);
        assert!(item.is_dyeable().is_err());
    }

    #[test]
    fn out_of_range_codes() {
        let sheet = sheet();
        let item = Equipment::from_sheet(&sheet, 3000, EquipmentKind::Armour).unwrap();
        assert_eq!(
            item.base_param_modifier().unwrap_err().kind,
            ErrorKind::FieldRange {
                column: keys::BASE_PARAM_MODIFIER.to_string(),
                index: None,
                value: 300,
            }
        );
    }

    #[test]
    fn unknown_row() {
        let sheet = sheet();
        assert!(Equipment::from_sheet(&sheet, 1, EquipmentKind::Weapon).is_none());
    }

    #[test]
    fn failures_are_cached() {
        let sheet = sheet();
        let item = Equipment::from_sheet(&sheet, 3000, EquipmentKind::Armour).unwrap();
        let first = item.primary_parameters().unwrap_err();
        let second = item.primary_parameters().unwrap_err();
        assert_eq!(first, second);
        assert!(matches!(first.kind, ErrorKind::MissingField { .. }));
        assert_eq!(item.all_parameters().unwrap_err(), first);
    }
}

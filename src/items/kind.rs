use crate::{
    data::SheetRow,
    error::IResult,
    game_types::BaseParamId,
    params::{
        Parameter, ParameterValue,
        keys::{
            BLOCK, BLOCK_RATE, BLOCK_RATE_PARAM, BLOCK_STRENGTH, DAMAGE_MAG, DAMAGE_PHYS, DEFENSE,
            DEFENSE_MAG, DEFENSE_PHYS, MAGIC_DAMAGE, MAGIC_DEFENSE, PHYSICAL_DAMAGE,
        },
    },
};

/// Supplies the main stats of an equipment variant (damage, defense, ...).
///
/// Implementations must return the same parameters for the same row every
/// time they are asked.
pub trait PrimaryParameterSource {
    fn primary_parameters(&self, row: &dyn SheetRow) -> IResult<Vec<Parameter>>;
}

impl<F> PrimaryParameterSource for F
where
    F: Fn(&dyn SheetRow) -> IResult<Vec<Parameter>>,
{
    fn primary_parameters(&self, row: &dyn SheetRow) -> IResult<Vec<Parameter>> {
        self(row)
    }
}

/// The equipment variants and the row fields their main stats come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EquipmentKind {
    Weapon,
    Armour,
    Accessory,
}

impl EquipmentKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "weapon" | "Weapon" => Some(Self::Weapon),
            "armour" | "Armour" | "armor" | "Armor" => Some(Self::Armour),
            "accessory" | "Accessory" => Some(Self::Accessory),
            _ => None,
        }
    }

    /// (column, stat) pairs of the primary stats of this variant.
    pub fn primary_columns(&self) -> &'static [(&'static str, u32)] {
        match self {
            Self::Weapon => &[(DAMAGE_PHYS, PHYSICAL_DAMAGE), (DAMAGE_MAG, MAGIC_DAMAGE)],
            Self::Armour => &[
                (DEFENSE_PHYS, DEFENSE),
                (DEFENSE_MAG, MAGIC_DEFENSE),
                (BLOCK, BLOCK_STRENGTH),
                (BLOCK_RATE, BLOCK_RATE_PARAM),
            ],
            Self::Accessory => &[],
        }
    }
}

impl PrimaryParameterSource for EquipmentKind {
    fn primary_parameters(&self, row: &dyn SheetRow) -> IResult<Vec<Parameter>> {
        let mut parameters = Vec::new();
        for (column, base_param) in self.primary_columns() {
            let amount = row.int(column)?;
            if amount == 0 {
                continue;
            }

            parameters.push(Parameter::with_values(
                BaseParamId::new(*base_param),
                [ParameterValue::base(amount)],
            ));
        }

        Ok(parameters)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::{FieldValue, memory::MemoryRow};

    #[test]
    fn weapon_damage() {
        let row = MemoryRow::new(1)
            .with(DAMAGE_PHYS, FieldValue::Int(120))
            .with(DAMAGE_MAG, FieldValue::Int(0));
        let parameters = EquipmentKind::Weapon.primary_parameters(&row).unwrap();
        assert_eq!(
            parameters,
            [Parameter::with_values(
                BaseParamId::new(PHYSICAL_DAMAGE),
                [ParameterValue::base(120)]
            )]
        );
    }

    #[test]
    fn armour_defense_and_block() {
        let row = MemoryRow::new(1)
            .with(DEFENSE_PHYS, FieldValue::Int(300))
            .with(DEFENSE_MAG, FieldValue::Int(280))
            .with(BLOCK, FieldValue::Int(0))
            .with(BLOCK_RATE, FieldValue::Int(0));
        let parameters = EquipmentKind::Armour.primary_parameters(&row).unwrap();
        let stats: Vec<_> = parameters.iter().map(|p| p.base_param().raw()).collect();
        assert_eq!(stats, [DEFENSE, MAGIC_DEFENSE]);
    }

    #[test]
    fn accessory_has_none() {
        let row = MemoryRow::new(1);
        assert!(
            EquipmentKind::Accessory
                .primary_parameters(&row)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn kind_names() {
        assert_eq!(EquipmentKind::from_name("armor"), Some(EquipmentKind::Armour));
        assert_eq!(EquipmentKind::from_name("ring"), None);
    }
}

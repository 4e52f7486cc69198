use std::fmt;

use itertools::Itertools;
use variantly::Variantly;

use crate::{
    game_types::{BaseParamId, ItemSpecialBonusId},
    recognized::Recognized,
};

/// What a stat contribution represents. Says nothing about its magnitude.
#[derive(Clone, Copy, Debug, Variantly, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterType {
    /// The item's own roll for the stat.
    Base,
    /// Extra granted by the high-quality version of the item.
    Hq,
    /// Granted while enough pieces of the item's set are worn.
    SetBonus,
    /// Granted under level sync ("sanction").
    Sanction,
}

impl ParameterType {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Hq => "Hq",
            Self::SetBonus => "SetBonus",
            Self::Sanction => "Sanction",
        }
    }

    /// Bucket governing the special stat slots of an item with the given
    /// special bonus key. Keys without a known meaning fall back to [`ParameterType::Hq`].
    pub fn for_special_bonus(key: ItemSpecialBonusId) -> Self {
        SpecialBonus::from_key(key)
            .map(ParameterType::from)
            .unwrap_or(ParameterType::Hq)
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The `ItemSpecialBonus` keys with a known meaning.
///
/// Only these two codes are mapped. Every other key, including `0` and the
/// ones the game uses for plain HQ items, stays [`Recognized::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialBonus {
    SetBonus,
    Sanction,
}

impl SpecialBonus {
    pub fn from_key(key: ItemSpecialBonusId) -> Recognized<Self> {
        match key.raw() {
            2 => Recognized::Known(Self::SetBonus),
            4 => Recognized::Known(Self::Sanction),
            other => Recognized::Unknown(other),
        }
    }

    pub fn key(&self) -> ItemSpecialBonusId {
        match self {
            Self::SetBonus => ItemSpecialBonusId::new(2),
            Self::Sanction => ItemSpecialBonusId::new(4),
        }
    }
}

impl From<SpecialBonus> for ParameterType {
    fn from(value: SpecialBonus) -> Self {
        match value {
            SpecialBonus::SetBonus => ParameterType::SetBonus,
            SpecialBonus::Sanction => ParameterType::Sanction,
        }
    }
}

/// A single bucket-typed amount of some stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterValue {
    typ: ParameterType,
    amount: i32,
}

impl ParameterValue {
    pub const fn new(typ: ParameterType, amount: i32) -> Self {
        Self { typ, amount }
    }

    pub const fn base(amount: i32) -> Self {
        Self::new(ParameterType::Base, amount)
    }

    pub const fn hq(amount: i32) -> Self {
        Self::new(ParameterType::Hq, amount)
    }

    pub fn typ(&self) -> ParameterType {
        self.typ
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:+}", self.typ, self.amount)
    }
}

/// One stat together with every value contributed to it, in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    base_param: BaseParamId,
    values: Vec<ParameterValue>,
}

impl Parameter {
    pub fn new(base_param: BaseParamId) -> Self {
        Self {
            base_param,
            values: Vec::new(),
        }
    }

    pub fn with_values(
        base_param: BaseParamId,
        values: impl IntoIterator<Item = ParameterValue>,
    ) -> Self {
        Self {
            base_param,
            values: values.into_iter().collect(),
        }
    }

    pub fn base_param(&self) -> BaseParamId {
        self.base_param
    }

    pub fn values(&self) -> &[ParameterValue] {
        &self.values
    }

    pub fn push(&mut self, value: ParameterValue) {
        self.values.push(value);
    }

    /// All values of one bucket type.
    pub fn values_of(&self, typ: ParameterType) -> impl Iterator<Item = &ParameterValue> + '_ {
        self.values.iter().filter(move |v| v.typ == typ)
    }

    /// Sum of the amounts of one bucket type, `0` if there are none.
    /// Saturates at the `i32` bounds.
    pub fn sum_of(&self, typ: ParameterType) -> i32 {
        self.values_of(typ)
            .fold(0i32, |sum, v| sum.saturating_add(v.amount))
    }

    pub fn total(&self) -> i32 {
        self.values
            .iter()
            .fold(0i32, |sum, v| sum.saturating_add(v.amount))
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.base_param, self.values.iter().join(", "))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn special_bonus_classification() {
        let bucket = |key: u32| ParameterType::for_special_bonus(key.into());
        assert_eq!(bucket(2), ParameterType::SetBonus);
        assert_eq!(bucket(4), ParameterType::Sanction);
        for other in [0, 1, 3, 5, 6, 7, 255] {
            assert_eq!(bucket(other), ParameterType::Hq, "key {other}");
        }
    }

    #[test]
    fn unknown_special_bonus_keeps_code() {
        assert_eq!(
            SpecialBonus::from_key(ItemSpecialBonusId::new(6)),
            Recognized::Unknown(6)
        );
        assert_eq!(
            SpecialBonus::from_key(SpecialBonus::Sanction.key()),
            Recognized::Known(SpecialBonus::Sanction)
        );
    }

    #[test]
    fn parameter_sums_by_bucket() {
        let param = Parameter::with_values(
            BaseParamId::new(27),
            [
                ParameterValue::base(20),
                ParameterValue::hq(10),
                ParameterValue::base(5),
                ParameterValue::new(ParameterType::SetBonus, 3),
            ],
        );
        assert_eq!(param.sum_of(ParameterType::Base), 25);
        assert_eq!(param.sum_of(ParameterType::Hq), 10);
        assert_eq!(param.sum_of(ParameterType::Sanction), 0);
        assert_eq!(param.total(), 38);
        assert!(param.values()[1].typ().is_hq());
        assert_eq!(param.to_string(), "27 [Base:+20, Hq:+10, Base:+5, SetBonus:+3]");
    }

    #[test]
    fn sums_saturate() {
        let param = Parameter::with_values(
            BaseParamId::new(27),
            [
                ParameterValue::base(i32::MAX),
                ParameterValue::base(1),
                ParameterValue::hq(i32::MIN),
                ParameterValue::hq(-1),
            ],
        );
        assert_eq!(param.sum_of(ParameterType::Base), i32::MAX);
        assert_eq!(param.sum_of(ParameterType::Hq), i32::MIN);
        assert_eq!(param.total(), -2);
    }
}

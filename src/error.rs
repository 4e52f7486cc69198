use thiserror::Error;

use crate::game_types::{BaseParamId, EquipSlotCategoryId, ItemLevelId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("Missing field: column={column}, index={index:?}")]
    MissingField { column: String, index: Option<usize> },
    #[error("Unexpected field type: column={column}, index={index:?}, expected={expected}")]
    FieldType {
        column: String,
        index: Option<usize>,
        expected: &'static str,
    },
    #[error("Field value out of range: column={column}, index={index:?}, value={value}")]
    FieldRange {
        column: String,
        index: Option<usize>,
        value: i64,
    },
    #[error("No maximum for base param {base_param} at item level {item_level}")]
    MaxValueNotFound {
        item_level: ItemLevelId,
        base_param: BaseParamId,
    },
    #[error("No slot factor for base param {base_param} in equip slot category {slot}")]
    SlotFactorNotFound {
        base_param: BaseParamId,
        slot: EquipSlotCategoryId,
    },
    #[error("No role modifier {modifier} for base param {base_param}")]
    RoleModifierNotFound {
        base_param: BaseParamId,
        modifier: u8,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { kind }
    }
}

pub type IResult<T> = Result<T, Error>;

pub fn failure_from_kind(kind: ErrorKind) -> Error {
    Error { kind }
}

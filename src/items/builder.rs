//! Builds the secondary parameters of an equipment row.
//!
//! Two six-slot passes write into one collection: the default stat slots
//! (`BaseParam`/`BaseParamValue`) tagged [`ParameterType::Base`], then the
//! special stat slots (`BaseParam{Special}`/`BaseParamValue{Special}`) tagged
//! with the bucket selected by the item's `ItemSpecialBonus`.

use tracing::{debug, trace};

use crate::{
    data::SheetRow,
    error::IResult,
    game_types::{BaseParamId, ItemSpecialBonusId},
    params::{
        ParameterCollection, ParameterType, ParameterValue,
        keys::{
            BASE_PARAM, BASE_PARAM_SPECIAL, BASE_PARAM_VALUE, BASE_PARAM_VALUE_SPECIAL,
            ITEM_SPECIAL_BONUS, PARAM_SLOT_COUNT,
        },
    },
};

/// Derives the secondary parameters of `row`. Pure in the row's contents.
pub fn build_secondary_parameters<R: SheetRow + ?Sized>(row: &R) -> IResult<ParameterCollection> {
    let mut parameters = ParameterCollection::new();
    add_default_parameters(row, &mut parameters)?;
    add_special_parameters(row, &mut parameters)?;

    debug!(
        "built secondary parameters for row {}: {} stats, {} values",
        row.key(),
        parameters.len(),
        parameters.value_count()
    );

    Ok(parameters)
}

pub fn add_default_parameters<R: SheetRow + ?Sized>(
    row: &R,
    parameters: &mut ParameterCollection,
) -> IResult<()> {
    add_slot_group(row, BASE_PARAM, BASE_PARAM_VALUE, ParameterType::Base, parameters)
}

pub fn add_special_parameters<R: SheetRow + ?Sized>(
    row: &R,
    parameters: &mut ParameterCollection,
) -> IResult<()> {
    let bucket = ParameterType::for_special_bonus(special_bonus_key(row)?);
    add_slot_group(
        row,
        BASE_PARAM_SPECIAL,
        BASE_PARAM_VALUE_SPECIAL,
        bucket,
        parameters,
    )
}

/// The row's special bonus key. An absent field counts as key `0`.
pub fn special_bonus_key<R: SheetRow + ?Sized>(row: &R) -> IResult<ItemSpecialBonusId> {
    if row.field(ITEM_SPECIAL_BONUS, None).is_none() {
        return Ok(ItemSpecialBonusId::default());
    }

    row.link(ITEM_SPECIAL_BONUS).map(ItemSpecialBonusId::from)
}

fn add_slot_group<R: SheetRow + ?Sized>(
    row: &R,
    stat_column: &str,
    value_column: &str,
    typ: ParameterType,
    parameters: &mut ParameterCollection,
) -> IResult<()> {
    for slot in 0..PARAM_SLOT_COUNT {
        // Exports leave empty slots out entirely
        if row.field(stat_column, Some(slot)).is_none() {
            trace!("row {}: {stat_column}[{slot}] absent", row.key());
            continue;
        }

        let base_param = BaseParamId::from(row.link_at(stat_column, slot)?);
        if base_param.is_none() {
            trace!("row {}: {stat_column}[{slot}] is empty", row.key());
            continue;
        }

        let amount = row.int_at(value_column, slot)?;
        parameters.add_parameter_value(base_param, ParameterValue::new(typ, amount));
    }

    Ok(())
}

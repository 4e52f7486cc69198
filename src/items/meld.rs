//! Remaining materia meld headroom of a stat on a piece of equipment.
//!
//! The design maximum of a stat on an item is
//!
//! ```text
//! round(max_value * slot_factor * role_modifier / 10000 / 10000)
//! ```
//!
//! where `max_value` comes from the item level, `slot_factor` from the equip
//! slot category and `role_modifier` from the item's modifier code. Both
//! factors use `10000` for 100%. Halfway cases round to the even neighbour.
//! The headroom is that maximum minus what the item already grants, never
//! below zero.

use tracing::{debug, warn};

use crate::{
    data::Sheet,
    error::IResult,
    game_types::BaseParamId,
    params::{MeldCapTables, ParameterCollection, ParameterType},
};

use super::{equipment::Equipment, kind::PrimaryParameterSource};

/// Scale of both percentage factors.
pub const FACTOR_SCALE: f64 = 10000.0;

/// Design maximum of a stat from its three table inputs.
pub fn meld_cap_maximum(max_value: i32, slot_factor: i32, role_modifier: i32) -> i32 {
    let scaled = f64::from(max_value) * f64::from(slot_factor) * f64::from(role_modifier)
        / FACTOR_SCALE
        / FACTOR_SCALE;
    scaled.round_ties_even() as i32
}

/// What `parameters` already grants of `base_param` towards its cap: every
/// `Base` value, plus every `Hq` value when `include_hq_bonus` is set.
pub fn current_amount(
    parameters: &ParameterCollection,
    base_param: BaseParamId,
    include_hq_bonus: bool,
) -> i32 {
    let base_values = parameters.values_of(base_param, ParameterType::Base).count();
    if base_values > 1 {
        warn!("stat {base_param} has {base_values} base values, summing them");
    }

    let current = parameters.sum_of(base_param, ParameterType::Base);
    if include_hq_bonus {
        current.saturating_add(parameters.sum_of(base_param, ParameterType::Hq))
    } else {
        current
    }
}

/// Headroom left below `max`, clamped at zero.
pub fn remaining(max: i32, current: i32) -> i32 {
    max.saturating_sub(current).max(0)
}

impl<'a, S: Sheet, P: PrimaryParameterSource> Equipment<'a, S, P> {
    /// How much of `base_param` can still be added to this item through
    /// materia. Table misses are passed on as the tables report them.
    pub fn materia_meld_cap<T: MeldCapTables + ?Sized>(
        &self,
        tables: &T,
        base_param: BaseParamId,
        include_hq_bonus: bool,
    ) -> IResult<i32> {
        let item_level = self.item_level()?;
        let max_value = tables.max_value(item_level, base_param)?;
        let slot_factor = tables.slot_factor(base_param, self.equip_slot_category()?)?;
        let role_modifier = tables.role_modifier(base_param, self.base_param_modifier()?)?;

        let max = meld_cap_maximum(max_value, slot_factor, role_modifier);
        let current = current_amount(self.all_parameters()?, base_param, include_hq_bonus);
        let cap = remaining(max, current);

        debug!(
            "meld cap of stat {base_param} on item {}: max {max} (ilvl {item_level}: {max_value} x {slot_factor} x {role_modifier}), current {current}, cap {cap}",
            self.key()
        );

        Ok(cap)
    }

    /// Meld caps of every stat in the item's stat slots, in parameter order.
    ///
    /// Primary stats such as damage or defense are not meldable and have no
    /// table rows, so they are left out.
    pub fn materia_meld_caps<T: MeldCapTables + ?Sized>(
        &self,
        tables: &T,
        include_hq_bonus: bool,
    ) -> IResult<Vec<(BaseParamId, i32)>> {
        self.secondary_parameters()?
            .base_params()
            .map(|base_param| {
                self.materia_meld_cap(tables, base_param, include_hq_bonus)
                    .map(|cap| (base_param, cap))
            })
            .collect()
    }
}

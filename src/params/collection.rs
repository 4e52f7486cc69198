use std::collections::HashMap;
use std::fmt;

use crate::game_types::BaseParamId;

use super::types::{Parameter, ParameterType, ParameterValue};

/// Parameters grouped by stat.
///
/// Every stat appears at most once. Stats keep the order they were first
/// added in, and the values under a stat keep the order they were added in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<Parameter>", into = "Vec<Parameter>")
)]
pub struct ParameterCollection {
    parameters: Vec<Parameter>,
    index: HashMap<BaseParamId, usize>,
}

impl ParameterCollection {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, base_param: BaseParamId) -> &mut Parameter {
        let parameters = &mut self.parameters;
        let position = *self.index.entry(base_param).or_insert_with(|| {
            parameters.push(Parameter::new(base_param));
            parameters.len() - 1
        });

        &mut self.parameters[position]
    }

    /// Appends `value` to the entry for `base_param`, creating it if needed.
    pub fn add_parameter_value(&mut self, base_param: BaseParamId, value: ParameterValue) {
        self.entry(base_param).push(value);
    }

    /// Merges whole parameters into the collection. Values of a stat that is
    /// already present are appended after the existing ones.
    pub fn add_range<'p>(&mut self, parameters: impl IntoIterator<Item = &'p Parameter>) {
        for parameter in parameters {
            let entry = self.entry(parameter.base_param());
            for value in parameter.values() {
                entry.push(*value);
            }
        }
    }

    pub fn get(&self, base_param: BaseParamId) -> Option<&Parameter> {
        self.index
            .get(&base_param)
            .map(|position| &self.parameters[*position])
    }

    pub fn contains(&self, base_param: BaseParamId) -> bool {
        self.index.contains_key(&base_param)
    }

    pub fn values_of(
        &self,
        base_param: BaseParamId,
        typ: ParameterType,
    ) -> impl Iterator<Item = &ParameterValue> + '_ {
        self.get(base_param)
            .into_iter()
            .flat_map(move |parameter| parameter.values_of(typ))
    }

    /// Sum of one bucket type for one stat, `0` if the stat is absent.
    pub fn sum_of(&self, base_param: BaseParamId, typ: ParameterType) -> i32 {
        self.get(base_param)
            .map(|parameter| parameter.sum_of(typ))
            .unwrap_or_default()
    }

    /// Number of distinct stats.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Number of values across all stats.
    pub fn value_count(&self) -> usize {
        self.parameters.iter().map(|p| p.values().len()).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.parameters.iter()
    }

    pub fn base_params(&self) -> impl Iterator<Item = BaseParamId> + '_ {
        self.parameters.iter().map(Parameter::base_param)
    }
}

impl<'c> IntoIterator for &'c ParameterCollection {
    type Item = &'c Parameter;
    type IntoIter = std::slice::Iter<'c, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}

impl IntoIterator for ParameterCollection {
    type Item = Parameter;
    type IntoIter = std::vec::IntoIter<Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.into_iter()
    }
}

impl Extend<Parameter> for ParameterCollection {
    fn extend<T: IntoIterator<Item = Parameter>>(&mut self, iter: T) {
        for parameter in iter {
            self.add_range(std::iter::once(&parameter));
        }
    }
}

impl FromIterator<Parameter> for ParameterCollection {
    fn from_iter<T: IntoIterator<Item = Parameter>>(iter: T) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl From<Vec<Parameter>> for ParameterCollection {
    fn from(value: Vec<Parameter>) -> Self {
        value.into_iter().collect()
    }
}

impl From<ParameterCollection> for Vec<Parameter> {
    fn from(value: ParameterCollection) -> Self {
        value.parameters
    }
}

impl fmt::Display for ParameterCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for parameter in &self.parameters {
            writeln!(f, "{parameter}")?;
        }
        Ok(())
    }
}

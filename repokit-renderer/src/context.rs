//! Variable set: the placeholder values handed to a single render.

use std::collections::BTreeMap;

use serde::Serialize;

use repokit_core::types::{RepoInputs, Variable};

use crate::error::RenderError;

/// Placeholder name → value.
///
/// Backed by a `BTreeMap` so iteration (and therefore any serialized form) is
/// ordered and reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariableSet(BTreeMap<String, String>);

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set for one output file: the `vars` subset of `inputs`.
    pub fn from_inputs(inputs: &RepoInputs, vars: &[Variable]) -> Self {
        Self(inputs.variables(vars))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::Context)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

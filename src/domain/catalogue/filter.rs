use super::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ts_rs::TS;

/// Tri-state constraint on a catalogue's `enabled` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EnabledFilter {
    /// Only rows whose flag equals the given value
    Only(bool),
    /// Enabled and disabled rows alike
    Any,
}

impl Default for EnabledFilter {
    /// Callers that say nothing about `enabled` only see enabled catalogues.
    fn default() -> Self {
        EnabledFilter::Only(true)
    }
}

impl EnabledFilter {
    pub fn as_flag(self) -> Option<bool> {
        match self {
            EnabledFilter::Only(flag) => Some(flag),
            EnabledFilter::Any => None,
        }
    }
}

impl FromStr for EnabledFilter {
    type Err = DomainError;

    /// Accepts `1` or `0`; an empty value or `any` lifts the constraint.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" => Ok(EnabledFilter::Only(true)),
            "0" => Ok(EnabledFilter::Only(false)),
            "" | "any" => Ok(EnabledFilter::Any),
            other => Err(DomainError::ValidationError(format!(
                "enabled must be 0, 1 or any, got '{}'",
                other
            ))),
        }
    }
}

/// Store-level equality constraints for a catalogue listing.
///
/// Built once per request through [`CatalogueFilterBuilder`] and never mutated
/// afterwards. Fields left as `None` impose no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogueFilter {
    item_group: Option<String>,
    brand: Option<String>,
    enabled: EnabledFilter,
}

impl CatalogueFilter {
    pub fn builder() -> CatalogueFilterBuilder {
        CatalogueFilterBuilder::default()
    }

    pub fn item_group(&self) -> Option<&str> {
        self.item_group.as_deref()
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn enabled(&self) -> Option<bool> {
        self.enabled.as_flag()
    }
}

#[derive(Debug, Default)]
pub struct CatalogueFilterBuilder {
    item_group: Option<String>,
    brand: Option<String>,
    enabled: EnabledFilter,
}

impl CatalogueFilterBuilder {
    /// Exact-match category. Blank values are ignored.
    pub fn item_group(mut self, item_group: Option<&str>) -> Self {
        self.item_group = clean(item_group);
        self
    }

    /// Exact-match brand. Blank values are ignored.
    pub fn brand(mut self, brand: Option<&str>) -> Self {
        self.brand = clean(brand);
        self
    }

    pub fn enabled(mut self, enabled: EnabledFilter) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn build(self) -> CatalogueFilter {
        CatalogueFilter {
            item_group: self.item_group,
            brand: self.brand,
            enabled: self.enabled,
        }
    }
}

/// Only `""` counts as absent; anything else is matched as given.
fn clean(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

use strum::IntoEnumIterator;

use crate::types::RestrictionKind;

/// Which store answers queries. Process-wide, decided once per engine.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EvaluationMode {
    /// Resources declare which subjects may use them.
    #[default]
    Standard,
    /// Subjects declare which resources they may use.
    Experimental,
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    pub mode: EvaluationMode,
    /// Assert (in debug builds) when a query hits an uninitialised table.
    pub strict_kinds: bool,
    /// Tables created by each load pass.
    pub kinds: Vec<RestrictionKind>,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            mode: EvaluationMode::Standard,
            strict_kinds: true,
            kinds: RestrictionKind::iter().collect(),
        }
    }

    pub fn experimental() -> Self {
        Self::new().with_mode(EvaluationMode::Experimental)
    }

    #[must_use]
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_strict_kinds(mut self, strict: bool) -> Self {
        self.strict_kinds = strict;
        self
    }

    #[must_use]
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = RestrictionKind>) -> Self {
        self.kinds = kinds.into_iter().collect();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

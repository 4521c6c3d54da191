use serde::{Deserialize, Serialize};

/// How a `Regex` directive treats scalars that are not strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegexScalarPolicy {
    /// Numbers, booleans and null are matched through their string form.
    #[default]
    Coerce,
    /// A non-string value under `Regex` is a type mismatch.
    StringsOnly,
}

/// Controls validation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Treatment of non-string scalars under a `Regex` directive.
    pub regex_scalars: RegexScalarPolicy,
    /// Maximum nesting depth of a validated document.
    pub max_depth: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            regex_scalars: RegexScalarPolicy::Coerce,
            max_depth: 128,
        }
    }
}

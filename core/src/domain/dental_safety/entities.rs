use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Dental-relevant property of a food, derived from its canonical name.
///
/// `Hard`/`Soft` and `Cold`/`Hot` are mutually exclusive within one tagging
/// pass; the remaining tags may co-occur freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FoodTag {
    Hard,
    Soft,
    Cold,
    Hot,
    Sugary,
    Sticky,
    Acidic,
    Chewy,
}

impl FoodTag {
    pub fn as_str(&self) -> &str {
        match self {
            FoodTag::Hard => "hard",
            FoodTag::Soft => "soft",
            FoodTag::Cold => "cold",
            FoodTag::Hot => "hot",
            FoodTag::Sugary => "sugary",
            FoodTag::Sticky => "sticky",
            FoodTag::Acidic => "acidic",
            FoodTag::Chewy => "chewy",
        }
    }
}

/// Four-level safety recommendation, most restrictive first when rules
/// compete: avoid, then later/caution, then safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Safe,
    Caution,
    Later,
    Avoid,
}

impl Verdict {
    pub fn as_str(&self) -> &str {
        match self {
            Verdict::Safe => "safe",
            Verdict::Caution => "caution",
            Verdict::Later => "later",
            Verdict::Avoid => "avoid",
        }
    }
}

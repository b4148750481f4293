use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Nl,
}

#[derive(
    EnumString, Display, AsRefStr, Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ListView {
    #[default]
    Category,
    Recipe,
}

#[derive(
    EnumString, Display, AsRefStr, Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    #[default]
    Member,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VarietyToggles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine_diversity: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_rotation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starch_rotation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time_mix: Option<bool>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_view: Option<ListView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variety_toggles: Option<VarietyToggles>,
}

impl HouseholdSettings {
    pub fn language(&self) -> Language {
        self.language.unwrap_or_default()
    }
}

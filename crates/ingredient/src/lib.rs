//! Global bilingual ingredient catalog.

mod command;
mod query;
mod seed;

pub use command::*;
pub use query::*;
pub use seed::*;

use forkplan_shared::household::Language;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct Names {
    pub en: String,
    #[serde(default)]
    pub nl: Option<String>,
}

impl Names {
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Nl => self.nl.as_deref().unwrap_or(&self.en),
        }
    }
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct Synonyms {
    #[serde(default)]
    pub en: Vec<String>,
    #[serde(default)]
    pub nl: Vec<String>,
}

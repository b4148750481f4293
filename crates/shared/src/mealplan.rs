use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::Date;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanDay {
    #[serde(with = "crate::iso_date")]
    pub date: Date,
    pub recipe_id: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub locked: bool,
}

impl PlanDay {
    pub fn empty(date: Date) -> Self {
        Self {
            date,
            recipe_id: None,
            notes: String::new(),
            locked: false,
        }
    }
}

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
pub enum PlanStatus {
    #[default]
    Draft,
    Active,
    Completed,
}

/// Recipe ids scheduled in `days`, first occurrence order, without duplicates.
pub fn planned_recipe_ids(days: &[PlanDay]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for id in days.iter().filter_map(|d| d.recipe_id.as_ref()) {
        if !ids.contains(id) {
            ids.push(id.to_owned());
        }
    }

    ids
}

/// Unschedules `recipe_id`. Returns `None` when no day referenced it.
pub fn remove_recipe(days: &[PlanDay], recipe_id: &str) -> Option<Vec<PlanDay>> {
    if !days
        .iter()
        .any(|d| d.recipe_id.as_deref() == Some(recipe_id))
    {
        return None;
    }

    Some(
        days.iter()
            .cloned()
            .map(|mut day| {
                if day.recipe_id.as_deref() == Some(recipe_id) {
                    day.recipe_id = None;
                }
                day
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn day(recipe_id: Option<&str>) -> PlanDay {
        PlanDay {
            recipe_id: recipe_id.map(ToOwned::to_owned),
            ..PlanDay::empty(date!(2025 - 03 - 10))
        }
    }

    #[test]
    fn planned_ids_skip_empty_days_and_duplicates() {
        let days = vec![day(Some("a")), day(None), day(Some("b")), day(Some("a"))];
        assert_eq!(planned_recipe_ids(&days), vec!["a", "b"]);
    }

    #[test]
    fn remove_recipe_clears_matching_days_only() {
        let days = vec![day(Some("a")), day(Some("b"))];
        let updated = remove_recipe(&days, "a").unwrap();
        assert_eq!(updated[0].recipe_id, None);
        assert_eq!(updated[1].recipe_id.as_deref(), Some("b"));
        assert!(remove_recipe(&days, "c").is_none());
    }

    #[test]
    fn plan_day_payload() {
        let json = serde_json::to_value(day(Some("a"))).unwrap();
        assert_eq!(json["date"], "2025-03-10");
        assert_eq!(json["recipeId"], "a");
        assert_eq!(json["locked"], false);
    }
}

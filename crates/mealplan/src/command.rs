use forkplan_db::table::Plan;
use forkplan_shared::mealplan::{PlanDay, PlanStatus};
use sea_query::SqliteQueryBuilder;
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use std::ops::Deref;
use time::Date;
use validator::Validate;

#[derive(Clone)]
pub struct Command(pub forkplan_shared::State);

impl Deref for Command {
    type Target = forkplan_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Validate, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlanInput {
    #[serde(with = "forkplan_shared::iso_date")]
    pub week_start: Date,
    #[serde(with = "forkplan_shared::iso_date")]
    pub week_end: Date,
    #[validate(length(max = 7))]
    pub days: Vec<PlanDay>,
}

impl Command {
    /// Persists a plan as the household's active plan.
    pub async fn save(
        &self,
        input: PlanInput,
        household_id: impl Into<String>,
    ) -> forkplan_shared::Result<String> {
        input.validate()?;

        if input.week_end < input.week_start {
            forkplan_shared::user!("week end is before week start");
        }

        let household_id: String = household_id.into();
        let id = ulid::Ulid::new().to_string();
        let now = forkplan_shared::now();

        let (sql, values) = sea_query::Query::insert()
            .into_table(Plan::Table)
            .columns([
                Plan::Id,
                Plan::HouseholdId,
                Plan::WeekStart,
                Plan::WeekEnd,
                Plan::Days,
                Plan::Status,
                Plan::CreatedAt,
                Plan::UpdatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                household_id.into(),
                forkplan_shared::format_date(input.week_start).into(),
                forkplan_shared::format_date(input.week_end).into(),
                serde_json::to_string(&input.days)?.into(),
                PlanStatus::Active.to_string().into(),
                now.into(),
                now.into(),
            ])
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        tracing::info!(plan_id = %id, "plan saved");

        Ok(id)
    }
}

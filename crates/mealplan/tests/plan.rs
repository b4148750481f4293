use forkplan_mealplan::PlanInput;
use forkplan_shared::mealplan::{PlanDay, PlanStatus};
use temp_dir::TempDir;
use time::macros::date;

mod helpers;

fn input() -> PlanInput {
    PlanInput {
        week_start: date!(2025 - 03 - 10),
        week_end: date!(2025 - 03 - 16),
        days: vec![
            PlanDay {
                recipe_id: Some("r1".to_owned()),
                locked: true,
                ..PlanDay::empty(date!(2025 - 03 - 10))
            },
            PlanDay::empty(date!(2025 - 03 - 11)),
        ],
    }
}

#[tokio::test]
async fn test_save_and_latest() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = forkplan_mealplan::Command(state.clone());
    let query = forkplan_mealplan::Query(state);

    assert!(query.latest("h1").await?.is_none());

    let first = cmd.save(input(), "h1").await?;
    let second = cmd.save(input(), "h1").await?;

    let latest = query.latest("h1").await?.unwrap();
    assert_eq!(latest.id, second);
    assert_eq!(latest.status.0, PlanStatus::Active);
    assert_eq!(latest.week_start, "2025-03-10");
    assert_eq!(latest.days.0, input().days);

    assert!(query.find(&first, "h1").await?.is_some());
    assert!(query.find(&first, "h2").await?.is_none());
    assert!(query.latest("h2").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_save_rejects_reversed_week() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = forkplan_mealplan::Command(state);

    let mut reversed = input();
    reversed.week_end = date!(2025 - 03 - 01);
    let err = cmd.save(reversed, "h1").await.unwrap_err();
    assert_eq!(err.to_string(), "week end is before week start");

    Ok(())
}

#[test]
fn test_plan_input_payload() {
    let input: PlanInput = serde_json::from_value(serde_json::json!({
        "weekStart": "2025-03-10T00:00:00.000Z",
        "weekEnd": "2025-03-16",
        "days": [{ "date": "2025-03-10", "recipeId": null }]
    }))
    .unwrap();

    assert_eq!(input.week_start, date!(2025 - 03 - 10));
    assert_eq!(input.days[0], PlanDay::empty(date!(2025 - 03 - 10)));
}

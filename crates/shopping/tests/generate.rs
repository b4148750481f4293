use forkplan_household::PantryInput;
use forkplan_mealplan::PlanInput;
use forkplan_shared::{
    mealplan::PlanDay,
    shopping::{Category, ShoppingListStatus},
};
use forkplan_shopping::{AggregationError, GenerateInput};
use temp_dir::TempDir;
use time::macros::date;

mod helpers;

fn days(recipe_ids: &[Option<&str>]) -> Vec<PlanDay> {
    let start = date!(2025 - 03 - 10);
    recipe_ids
        .iter()
        .enumerate()
        .map(|(offset, id)| PlanDay {
            recipe_id: id.map(ToOwned::to_owned),
            ..PlanDay::empty(start + time::Duration::days(offset as i64))
        })
        .collect()
}

#[tokio::test]
async fn test_generate_from_saved_plan_skips_pantry() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let recipes = forkplan_recipe::Command(state.clone());
    let shopping = forkplan_shopping::Command(state.clone());
    let query = forkplan_shopping::Query(state.clone());

    let pasta = recipes
        .create(
            helpers::input(
                "Pasta",
                &[("Tomato", 3.0, "piece"), ("Salt", 1.0, "tsp"), ("Basil", 1.0, "bunch")],
            ),
            "h1",
            "u1",
        )
        .await?;
    let salad = recipes
        .create(
            helpers::input("Salad", &[("tomato", 2.0, "pieces"), ("Chicken breast", 300.0, "g")]),
            "h1",
            "u1",
        )
        .await?;

    forkplan_household::Command(state.clone())
        .add_pantry_item(PantryInput::new("salt"), "h1")
        .await?;

    let plan_id = forkplan_mealplan::Command(state.clone())
        .save(
            PlanInput {
                week_start: date!(2025 - 03 - 10),
                week_end: date!(2025 - 03 - 16),
                days: days(&[Some(pasta.as_str()), None, Some(salad.as_str()), Some(pasta.as_str())]),
            },
            "h1",
        )
        .await?;

    let generated = shopping
        .generate(
            GenerateInput {
                plan_id: Some(plan_id.to_owned()),
                days: None,
            },
            "h1",
        )
        .await?;
    assert!(generated.rejected.is_empty());

    let list = query.find(&generated.id, "h1").await?.unwrap();
    assert_eq!(list.plan_id.as_deref(), Some(plan_id.as_str()));
    assert_eq!(list.status.0, ShoppingListStatus::Active);

    let items = list.items.0;
    let keys = items.iter().map(|i| i.ingredient.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["tomato", "basil", "chicken breast"]);

    assert_eq!(items[0].quantity, 5.0);
    assert_eq!(items[0].category, Category::Produce);
    assert_eq!(items[0].recipe_refs.len(), 2);
    assert_eq!(items[0].recipe_refs[0].recipe_name, "Pasta");
    assert_eq!(items[0].recipe_refs[1].recipe_name, "Salad");
    assert_eq!(items[2].category, Category::MeatAndFish);

    assert_eq!(query.latest("h1").await?.unwrap().id, generated.id);
    assert!(query.find(&generated.id, "h2").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_generate_from_unsaved_days_reports_rejections() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let recipes = forkplan_recipe::Command(state.clone());
    let shopping = forkplan_shopping::Command(state.clone());

    let soup = recipes
        .create(helpers::input("Soup", &[("Stock", 1.0, "l"), ("Carrot", 2.0, "piece")]), "h1", "u1")
        .await?;
    let stew = recipes
        .create(helpers::input("Stew", &[("stock", 1.0, "cube")]), "h1", "u1")
        .await?;

    let generated = shopping
        .generate(
            GenerateInput {
                plan_id: None,
                days: Some(days(&[Some(soup.as_str()), Some(stew.as_str())])),
            },
            "h1",
        )
        .await?;

    assert_eq!(generated.rejected.len(), 1);
    assert!(matches!(
        &generated.rejected[0],
        AggregationError::UnitMismatch { recipe_name, .. } if recipe_name == "Stew"
    ));

    let list = forkplan_shopping::Query(state)
        .find(&generated.id, "h1")
        .await?
        .unwrap();
    assert_eq!(list.plan_id, None);
    assert_eq!(list.items.0.len(), 2);
    assert_eq!(list.items.0[0].quantity, 1.0);
    assert_eq!(list.items.0[0].unit, "l");

    Ok(())
}

#[tokio::test]
async fn test_generate_without_recipes() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let shopping = forkplan_shopping::Command(state);

    let err = shopping
        .generate(
            GenerateInput {
                plan_id: None,
                days: Some(days(&[None, None])),
            },
            "h1",
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "No recipes in plan");

    let err = shopping
        .generate(
            GenerateInput {
                plan_id: Some("missing".to_owned()),
                days: None,
            },
            "h1",
        )
        .await
        .unwrap_err();
    assert!(matches!(err, forkplan_shared::Error::NotFound(_)));

    Ok(())
}

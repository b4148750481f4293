use forkplan_household::PantryInput;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_pantry_upserts_by_normalized_item() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = forkplan_household::Command(state.clone());
    let query = forkplan_household::Query(state);

    cmd.add_pantry_item(PantryInput::new(" Salt "), "h1").await?;
    cmd.add_pantry_item(
        PantryInput {
            quantity: Some(500.0),
            unit: Some("g".to_owned()),
            ..PantryInput::new("salt")
        },
        "h1",
    )
    .await?;
    cmd.add_pantry_item(PantryInput::new("Olive oil"), "h1").await?;
    cmd.add_pantry_item(PantryInput::new("pepper"), "h2").await?;

    let pantry = query.pantry("h1").await?;
    assert_eq!(pantry.len(), 2);
    assert_eq!(pantry[1].item, "salt");
    assert_eq!(pantry[1].quantity, Some(500.0));

    assert_eq!(query.exclusions("h1").await?, vec!["olive oil", "salt"]);

    Ok(())
}

#[tokio::test]
async fn test_pantry_remove() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = forkplan_household::Command(state.clone());
    let query = forkplan_household::Query(state);

    cmd.add_pantry_item(PantryInput::new("rice"), "h1").await?;
    let id = query.pantry("h1").await?[0].id.to_owned();

    let err = cmd.remove_pantry_item(&id, "h2").await.unwrap_err();
    assert_eq!(err.to_string(), "Pantry item not found");

    cmd.remove_pantry_item(&id, "h1").await?;
    assert!(query.exclusions("h1").await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_pantry_validation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = forkplan_household::Command(state);

    assert!(cmd.add_pantry_item(PantryInput::new("   "), "h1").await.is_err());

    let err = cmd
        .add_pantry_item(
            PantryInput {
                quantity: Some(-2.0),
                ..PantryInput::new("rice")
            },
            "h1",
        )
        .await
        .unwrap_err();
    assert!(matches!(err, forkplan_shared::Error::User(_)));

    Ok(())
}

use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_update() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = forkplan_recipe::Command(state.clone());
    let query = forkplan_recipe::Query(state);

    let id = cmd.create(helpers::input("Soup", &[]), "h1", "john").await?;

    let mut input = helpers::input("Better soup", &[("leek", 1.0, "piece")]);
    input.cook_time = Some(15);
    cmd.update(&id, input, "h1", "john").await?;

    let recipe = query.find(&id, "h1").await?.unwrap();
    assert_eq!(recipe.title, "Better soup");
    assert_eq!(recipe.total_time, Some(15));
    assert_eq!(recipe.ingredients.0.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_update_creator_only() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = forkplan_recipe::Command(state);

    let id = cmd.create(helpers::input("Soup", &[]), "h1", "john").await?;

    let err = cmd
        .update(&id, helpers::input("Mine now", &[]), "h1", "jane")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "You can only edit recipes you created");

    let err = cmd
        .update(&id, helpers::input("Mine now", &[]), "h2", "john")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Recipe not found");

    Ok(())
}

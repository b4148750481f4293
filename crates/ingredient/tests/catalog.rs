use forkplan_ingredient::{CreateInput, Names, Synonyms, UpdateInput};
use forkplan_shared::{household::Language, shopping::Category};
use temp_dir::TempDir;

mod helpers;

fn leek() -> CreateInput {
    CreateInput {
        canonical_key: "Leek".to_owned(),
        names: Names {
            en: "leek".to_owned(),
            nl: None,
        },
        synonyms: Synonyms {
            en: vec!["leeks".to_owned()],
            nl: vec!["preien".to_owned()],
        },
        category: Category::Produce,
        default_unit: Some("piece".to_owned()),
    }
}

#[tokio::test]
async fn test_create_and_duplicate() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = forkplan_ingredient::Command(state.clone());
    let query = forkplan_ingredient::Query(state);

    let id = cmd.create(leek()).await?;
    let row = query.find(&id).await?.unwrap();
    assert_eq!(row.canonical_key, "leek");
    assert_eq!(row.name(Language::Nl), "leek");
    assert_eq!(row.category.0, Category::Produce);

    let err = cmd.create(leek()).await.unwrap_err();
    assert!(matches!(err, forkplan_shared::Error::Conflict(_)));
    assert_eq!(err.to_string(), "Ingredient already exists");

    let mut blank = leek();
    blank.names.en = " ".to_owned();
    let err = cmd.create(blank).await.unwrap_err();
    assert_eq!(err.to_string(), "Canonical key and English name are required");

    Ok(())
}

#[tokio::test]
async fn test_update_and_delete() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = forkplan_ingredient::Command(state.clone());
    let query = forkplan_ingredient::Query(state);

    let id = cmd.create(leek()).await?;

    cmd.update(
        &id,
        UpdateInput {
            names: Some(Names {
                en: "leek".to_owned(),
                nl: Some("prei".to_owned()),
            }),
            ..Default::default()
        },
    )
    .await?;

    let row = query.find(&id).await?.unwrap();
    assert_eq!(row.name_nl, "prei");
    assert_eq!(row.default_unit.as_deref(), Some("piece"));
    assert_eq!(row.synonyms.0.nl, vec!["preien"]);

    let err = cmd.update("missing", UpdateInput::default()).await.unwrap_err();
    assert!(matches!(err, forkplan_shared::Error::NotFound(_)));

    cmd.delete(&id).await?;
    assert!(query.find(&id).await?.is_none());
    assert!(cmd.delete(&id).await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_seed_and_search() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = forkplan_ingredient::Command(state.clone());
    let query = forkplan_ingredient::Query(state);

    let added = cmd.seed().await?;
    assert_eq!(added, forkplan_ingredient::catalog()?.len() as u64);
    assert_eq!(cmd.seed().await?, 0);

    // Dutch name
    let found = query.search(Some("Tomaat")).await?;
    assert_eq!(found[0].canonical_key, "tomato");

    // synonym only
    let found = query.search(Some("yukon")).await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].canonical_key, "potato");

    let found = query.search(Some("e")).await?;
    assert_eq!(found.len() as u64, forkplan_ingredient::SEARCH_LIMIT);

    let all = query.search(None).await?;
    assert_eq!(all.len() as u64, added.min(forkplan_ingredient::BROWSE_LIMIT));
    let blank = query.search(Some("  ")).await?;
    assert_eq!(blank.len(), all.len());

    assert!(query.search(Some("zzzz")).await?.is_empty());

    Ok(())
}

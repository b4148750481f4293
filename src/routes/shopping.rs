use axum::{
    Json,
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
};
use forkplan_shared::shopping::{ShoppingItem, ShoppingListStatus};
use forkplan_shopping::{GenerateInput, ShoppingListRow};
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::AppResult,
    i18n::{self, LocaleQuery},
    routes::AppState,
    session::Session,
};

async fn find(app: &AppState, id: &str, household_id: &str) -> AppResult<ShoppingListRow> {
    match forkplan_shopping::Query(app.db.clone())
        .find(id, household_id)
        .await?
    {
        Some(list) => Ok(list),
        None => Err(forkplan_shared::Error::NotFound("Shopping list".to_owned()).into()),
    }
}

/// POST /api/shopping/generate - new list from a saved plan or unsaved plan days
pub async fn generate(
    session: Session,
    State(app): State<AppState>,
    Json(input): Json<GenerateInput>,
) -> AppResult<impl IntoResponse> {
    let generated = forkplan_shopping::Command(app.db.clone())
        .generate(input, &session.household_id)
        .await?;

    let list = find(&app, &generated.id, &session.household_id).await?;
    let rejected = generated
        .rejected
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();

    Ok(Json(json!({ "shoppingList": list, "rejected": rejected })))
}

pub async fn latest(session: Session, State(app): State<AppState>) -> AppResult<impl IntoResponse> {
    let list = forkplan_shopping::Query(app.db.clone())
        .latest(&session.household_id)
        .await?;

    Ok(Json(json!({ "shoppingList": list })))
}

pub async fn show(
    session: Session,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let list = find(&app, &id, &session.household_id).await?;

    Ok(Json(json!({ "shoppingList": list })))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInput {
    #[serde(default)]
    pub items: Option<Vec<ShoppingItem>>,
    #[serde(default)]
    pub status: Option<ShoppingListStatus>,
}

pub async fn update(
    session: Session,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
    Json(input): Json<UpdateInput>,
) -> AppResult<impl IntoResponse> {
    let command = forkplan_shopping::Command(app.db.clone());

    if let Some(items) = input.items {
        command.replace_items(&id, &session.household_id, items).await?;
    }

    if let Some(status) = input.status {
        command.set_status(&id, &session.household_id, status).await?;
    }

    let list = find(&app, &id, &session.household_id).await?;

    Ok(Json(json!({ "shoppingList": list })))
}

pub async fn delete(
    session: Session,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    forkplan_shopping::Command(app.db.clone())
        .delete(&id, &session.household_id)
        .await?;

    Ok(Json(json!({ "success": true })))
}

pub async fn clear(
    session: Session,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    forkplan_shopping::Command(app.db.clone())
        .clear(&id, &session.household_id)
        .await?;

    Ok(Json(json!({ "success": true })))
}

#[derive(Deserialize)]
pub struct ToggleInput {
    pub ingredient: String,
}

pub async fn toggle(
    session: Session,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
    Json(input): Json<ToggleInput>,
) -> AppResult<impl IntoResponse> {
    let obtained = forkplan_shopping::Command(app.db.clone())
        .toggle(&id, &session.household_id, &input.ingredient)
        .await?;

    Ok(Json(json!({ "ingredient": input.ingredient, "obtained": obtained })))
}

#[derive(Deserialize, Default, Clone, Copy, PartialEq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum GroupView {
    #[default]
    Category,
    Recipe,
}

#[derive(Deserialize, Default)]
pub struct GroupedQuery {
    #[serde(default)]
    pub view: Option<GroupView>,
    #[serde(flatten)]
    pub locale: LocaleQuery,
}

/// GET /api/shopping/{id}/grouped - items grouped by store section or by recipe
pub async fn grouped(
    session: Session,
    Path((id,)): Path<(String,)>,
    Query(query): Query<GroupedQuery>,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let list = find(&app, &id, &session.household_id).await?;
    let language = i18n::language(&app, &session.household_id, &query.locale).await?;
    let items = &list.items.0;

    let view = match query.view {
        Some(view) => view,
        None => forkplan_household::Query(app.db.clone())
            .find(&session.household_id)
            .await?
            .and_then(|household| household.settings.0.default_view)
            .map(|view| match view {
                forkplan_shared::household::ListView::Category => GroupView::Category,
                forkplan_shared::household::ListView::Recipe => GroupView::Recipe,
            })
            .unwrap_or_default(),
    };

    let groups = match view {
        GroupView::Category => forkplan_shopping::group_by_category(items)
            .into_iter()
            .map(|group| {
                json!({
                    "category": group.category,
                    "label": i18n::category_label(group.category, language),
                    "items": group.items,
                })
            })
            .collect::<Vec<_>>(),
        GroupView::Recipe => forkplan_shopping::group_by_recipe(items)
            .into_iter()
            .map(|group| {
                json!({
                    "recipeId": group.recipe_id,
                    "label": group.recipe_name,
                    "items": group.items,
                })
            })
            .collect::<Vec<_>>(),
    };

    let progress = forkplan_shopping::progress(items);

    Ok(Json(json!({
        "id": list.id,
        "groups": groups,
        "progress": progress,
        "progressLabel": i18n::progress_label(progress.obtained, progress.total, language),
    })))
}

/// GET /api/shopping/{id}/export - one line per item, plain text
pub async fn export(
    session: Session,
    Path((id,)): Path<(String,)>,
    State(app): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let list = find(&app, &id, &session.household_id).await?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        forkplan_shopping::export_text(&list.items.0),
    ))
}

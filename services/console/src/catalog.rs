use clap::ValueEnum;
use inmo::error::AppError;
use inmo::models::EntityId;
use inmo::services::{CatalogResource, CatalogService, ChildResource, Services};
use inmo::store::{CatalogScreen, CatalogStore};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use crate::cli::CatalogAction;
use crate::output::{render, Row};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CatalogKind {
    Countries,
    Departments,
    Cities,
    CityZones,
    Neighborhoods,
    Agents,
    Owners,
}

pub(crate) async fn run(
    services: &Services,
    kind: CatalogKind,
    action: CatalogAction,
) -> Result<(), AppError> {
    let parent = action.parent().map(EntityId);
    match kind {
        CatalogKind::Countries => top_level(services.countries.clone(), action, parent).await,
        CatalogKind::Departments => child(services.departments.clone(), action, parent).await,
        CatalogKind::Cities => child(services.cities.clone(), action, parent).await,
        CatalogKind::CityZones => child(services.city_zones.clone(), action, parent).await,
        CatalogKind::Neighborhoods => child(services.neighborhoods.clone(), action, parent).await,
        CatalogKind::Agents => top_level(services.agents.clone(), action, parent).await,
        CatalogKind::Owners => top_level(services.owners.clone(), action, parent).await,
    }
}

async fn top_level<R>(
    service: CatalogService<R>,
    action: CatalogAction,
    parent: Option<EntityId>,
) -> Result<(), AppError>
where
    R: CatalogResource + Row,
    R::Draft: DeserializeOwned,
{
    if parent.is_some() {
        return Err(AppError::Input(format!(
            "{} no se filtran por --parent",
            R::PLURAL
        )));
    }
    execute(CatalogScreen::new(CatalogStore::new(service)), action, false).await
}

async fn child<R>(
    service: CatalogService<R>,
    action: CatalogAction,
    parent: Option<EntityId>,
) -> Result<(), AppError>
where
    R: ChildResource + Row,
    R::Draft: DeserializeOwned,
{
    let mut screen = CatalogScreen::new(CatalogStore::new(service));
    let loaded = match parent {
        Some(parent_id) => {
            screen.store_mut().reload_for_parent(parent_id).await?;
            true
        }
        None => false,
    };
    execute(screen, action, loaded).await
}

async fn execute<R>(
    mut screen: CatalogScreen<R>,
    action: CatalogAction,
    loaded: bool,
) -> Result<(), AppError>
where
    R: CatalogResource + Row,
    R::Draft: DeserializeOwned,
{
    match action {
        CatalogAction::List { format, .. } => {
            if !loaded {
                screen.store_mut().reload().await?;
            }
            println!("{}", render(screen.store().items(), format)?);
        }
        CatalogAction::Show { id } => {
            let id = EntityId(id);
            let row = screen
                .store()
                .service()
                .get_by_id(id)
                .await?
                .ok_or(AppError::NotFound(id))?;
            println!("{}", serde_json::to_string_pretty(&row)?);
        }
        CatalogAction::Create { data } => {
            let draft: R::Draft = serde_json::from_str(&data)?;
            screen.open_create();
            screen.edit_draft(|current| *current = draft);
            let created = screen.submit().await?;
            info!(id = %created.id(), "{} created", R::SINGULAR);
            println!("{}", serde_json::to_string_pretty(&created)?);
        }
        CatalogAction::Update { id, data } => {
            let id = EntityId(id);
            let patch: Value = serde_json::from_str(&data)?;
            screen.store_mut().reload().await?;
            screen.open_edit(id)?;
            let current = screen
                .form()
                .map(|form| form.draft.clone())
                .ok_or(AppError::NotFound(id))?;
            let draft = patched::<R::Draft>(&current, patch)?;
            screen.edit_draft(|current| *current = draft);
            let updated = screen.submit().await?;
            println!("{}", serde_json::to_string_pretty(&updated)?);
        }
        CatalogAction::Delete { id } => {
            screen.request_delete(EntityId(id));
            let removed = screen.confirm_delete().await?;
            println!("{} {} eliminado", R::SINGULAR, removed);
        }
    }
    Ok(())
}

/// Overlay the top-level keys of `patch` on the serialized draft.
fn patched<D>(current: &D, patch: Value) -> Result<D, AppError>
where
    D: serde::Serialize + DeserializeOwned,
{
    let Value::Object(fields) = patch else {
        return Err(AppError::Input("--data debe ser un objeto JSON".to_string()));
    };
    let mut merged = serde_json::to_value(current)?;
    if let Value::Object(target) = &mut merged {
        target.extend(fields);
    }
    Ok(serde_json::from_value(merged)?)
}

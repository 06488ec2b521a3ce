use inmo::api::FilePart;
use inmo::error::AppError;
use inmo::models::EntityId;
use inmo::property::{PropertyEditor, PropertyFormData, SaveOutcome};
use inmo::services::Services;
use tracing::info;

use crate::cli::{PropertyCommand, SaveArgs};

pub(crate) async fn run(services: Services, command: PropertyCommand) -> Result<(), AppError> {
    match command {
        PropertyCommand::Show { id } => show(services, EntityId(id)).await,
        PropertyCommand::Save(args) => save(services, args).await,
        PropertyCommand::Publish { id } => publish(services, EntityId(id)).await,
    }
}

async fn show(services: Services, id: EntityId) -> Result<(), AppError> {
    let editor = PropertyEditor::open(services, id).await?;
    for warning in editor.load_warnings() {
        eprintln!("warning: {}: {}", warning.step, warning.message);
    }
    println!("{}", serde_json::to_string_pretty(&editor.form().data)?);
    Ok(())
}

async fn save(services: Services, args: SaveArgs) -> Result<(), AppError> {
    let raw = tokio::fs::read_to_string(&args.input).await?;
    let data: PropertyFormData = serde_json::from_str(&raw)?;

    let mut editor = match args.id {
        Some(id) => PropertyEditor::open(services, EntityId(id)).await?,
        None => PropertyEditor::new_property(services),
    };
    let form = editor.form_mut();
    form.replace_data(data);
    for path in &args.images {
        form.pending.add_image(FilePart::from_path("files", path).await?);
    }
    for path in &args.private_files {
        form.pending
            .add_private_file(FilePart::from_path("file", path).await?);
    }

    let outcome = if args.draft {
        editor.save_draft().await?
    } else {
        editor.submit().await?
    };
    report(&outcome);
    Ok(())
}

async fn publish(services: Services, id: EntityId) -> Result<(), AppError> {
    let property = services.properties.publish(id).await?;
    info!(property_id = %property.id, "property published");
    println!("Propiedad {} publicada", property.id);
    Ok(())
}

fn report(outcome: &SaveOutcome) {
    let verb = if outcome.created { "creada" } else { "actualizada" };
    let suffix = if outcome.as_draft { " como borrador" } else { "" };
    println!("Propiedad {} {verb}{suffix}", outcome.property.id);
    for warning in &outcome.warnings {
        eprintln!("warning: {}: {}", warning.step, warning.message);
    }
}

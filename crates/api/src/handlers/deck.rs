//! Handler for the deck-creation form submission.
//!
//! Route:
//! - `POST /create`: multipart form with `presentationName`, optional
//!   `slideCount`, optional `slideImage` file, optional `layout`.

use axum::extract::{Multipart, State};
use axum::Json;
use deckforge_core::request::DeckRequest;
use deckforge_planner::{build_plan, LayoutPolicy};
use deckforge_slides::executor::execute_plan;

use crate::error::{AppError, AppResult};
use crate::response::DeckResponse;
use crate::state::AppState;

/// Raw form fields as they come off the multipart stream.
#[derive(Default)]
struct DeckForm {
    name: Option<String>,
    slide_count: Option<String>,
    layout: Option<String>,
    image: Option<Vec<u8>>,
}

/// POST /create
///
/// Validates the form, builds the deck plan, executes it against the
/// remote service, and answers with the download URL. Fails fast: the
/// first error aborts the request (a partially built presentation may
/// remain remotely, see the executor docs).
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<DeckResponse>> {
    let form = read_form(multipart).await?;

    let request = DeckRequest::from_parts(form.name, form.slide_count, form.image)?;
    let policy =
        LayoutPolicy::from_form_field(form.layout.as_deref(), state.config.default_layout)?;

    let assets = state.assets.load(request.image.as_deref())?;
    let plan = build_plan(&request, policy, &assets)?;
    tracing::info!(
        name = %request.name,
        slides = request.slide_count,
        ?policy,
        ops = plan.ops().len(),
        "Deck plan built"
    );

    let download_url = execute_plan(state.slides.as_ref(), &plan).await?;

    Ok(Json(DeckResponse {
        success: true,
        download_url,
    }))
}

/// Drain the multipart stream into a [`DeckForm`].
///
/// Unknown fields are skipped; an empty image part counts as no image
/// (browsers submit the file field even when nothing was selected).
async fn read_form(mut multipart: Multipart) -> AppResult<DeckForm> {
    let mut form = DeckForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("unreadable multipart body: {e}")))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("presentationName") => form.name = Some(read_text(field).await?),
            Some("slideCount") => form.slide_count = Some(read_text(field).await?),
            Some("layout") => form.layout = Some(read_text(field).await?),
            Some("slideImage") => {
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("unreadable slideImage field: {e}"))
                })?;
                if !bytes.is_empty() {
                    form.image = Some(bytes.to_vec());
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> AppResult<String> {
    let name = field.name().unwrap_or("<unnamed>").to_string();
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("unreadable {name} field: {e}")))
}

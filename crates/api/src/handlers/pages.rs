use axum::response::Html;

/// GET /
///
/// Serves the deck-creation form. The page is a single static file
/// compiled into the binary.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

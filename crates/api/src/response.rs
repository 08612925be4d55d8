//! Response envelope for the deck-creation endpoint.
//!
//! Successful submissions answer `{ "success": true, "downloadUrl": … }`;
//! failures go through [`AppError`](crate::error::AppError) and answer
//! `{ "success": false, "message": … }`.

use serde::Serialize;

/// Successful deck-creation response.
#[derive(Debug, Serialize)]
pub struct DeckResponse {
    pub success: bool,
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
}

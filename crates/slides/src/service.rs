//! Capability trait for the remote slides service.
//!
//! The executor is written against this trait so the whole execution
//! path can be tested with an in-memory fake; [`SlidesApi`](crate::api::SlidesApi)
//! is the production implementation.

use deckforge_core::plan::{
    EffectKind, ShapeSpec, ShapeUpdate, SlideProperties, TextStyleSpec, Trigger,
};

/// Errors from the remote slides API layer.
#[derive(Debug, thiserror::Error)]
pub enum SlidesApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Slides API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// Fetching or refreshing the OAuth token failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The shape-creation response did not yield an identifiable
    /// shape reference.
    #[error("Could not resolve shape index: {0}")]
    ShapeResolution(String),
}

/// An animation effect whose shape reference has been resolved to the
/// remote index returned at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEffect {
    pub shape_index: u32,
    pub kind: EffectKind,
    pub trigger: Trigger,
    pub acceleration: f64,
    pub duration: f64,
}

/// The operations the executor needs from the remote service.
///
/// Every method maps to exactly one remote call; sequencing and
/// identifier threading are the executor's job.
#[async_trait::async_trait]
pub trait SlidesService: Send + Sync {
    async fn object_exists(&self, name: &str) -> Result<bool, SlidesApiError>;

    async fn delete_file(&self, name: &str) -> Result<(), SlidesApiError>;

    async fn create_presentation(&self, name: &str) -> Result<(), SlidesApiError>;

    async fn set_slide_properties(
        &self,
        name: &str,
        properties: &SlideProperties,
    ) -> Result<(), SlidesApiError>;

    async fn copy_master_slide(
        &self,
        name: &str,
        source_path: &str,
        source_slide: u32,
        apply_to_all: bool,
    ) -> Result<(), SlidesApiError>;

    async fn create_slide(&self, name: &str) -> Result<(), SlidesApiError>;

    /// Create a shape and return the remote shape index assigned to it.
    async fn create_shape(
        &self,
        name: &str,
        slide: u32,
        spec: &ShapeSpec,
    ) -> Result<u32, SlidesApiError>;

    async fn update_shape(
        &self,
        name: &str,
        slide: u32,
        shape_index: u32,
        update: &ShapeUpdate,
    ) -> Result<(), SlidesApiError>;

    async fn update_text_portion(
        &self,
        name: &str,
        slide: u32,
        shape_index: u32,
        paragraph: u32,
        portion: u32,
        style: &TextStyleSpec,
    ) -> Result<(), SlidesApiError>;

    async fn set_animation(
        &self,
        name: &str,
        slide: u32,
        effects: &[ResolvedEffect],
    ) -> Result<(), SlidesApiError>;

    /// Public download URL for the finished presentation.
    fn download_url(&self, name: &str) -> String;
}

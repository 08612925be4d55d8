//! REST client for the remote slides service.
//!
//! Wraps the cloud presentation HTTP API (storage checks, presentation
//! and slide creation, shape and portion updates, animation) using
//! [`reqwest`], with OAuth2 client-credentials authentication.

use deckforge_core::plan::{ShapeSpec, ShapeUpdate, SlideProperties, TextStyleSpec};
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use tokio::sync::RwLock;

use crate::config::SlidesConfig;
use crate::service::{ResolvedEffect, SlidesApiError, SlidesService};
use crate::wire;

/// HTTP client for one remote slides account.
///
/// The bearer token is fetched lazily on the first call and cached for
/// the client's lifetime; a 401 from the service invalidates it so the
/// next call re-authenticates.
pub struct SlidesApi {
    client: reqwest::Client,
    config: SlidesConfig,
    token: RwLock<Option<String>>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ExistsResponse {
    exists: bool,
}

#[derive(Debug, Deserialize)]
struct ResourceUri {
    href: Option<String>,
}

/// Shape-creation response: the index is sometimes inline, sometimes
/// only recoverable from the resource href.
#[derive(Debug, Deserialize)]
struct ShapeCreatedResponse {
    index: Option<u32>,
    #[serde(rename = "selfUri")]
    self_uri: Option<ResourceUri>,
}

impl SlidesApi {
    pub fn new(config: SlidesConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            token: RwLock::new(None),
        }
    }

    /// Storage path of a file, folder-qualified when a folder is set.
    fn storage_path(&self, name: &str) -> String {
        if self.config.folder.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", self.config.folder, name)
        }
    }

    /// Get the cached bearer token, fetching one if necessary.
    async fn token(&self) -> Result<String, SlidesApiError> {
        if let Some(token) = self.token.read().await.clone() {
            return Ok(token);
        }

        let response = self
            .client
            .post(&self.config.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SlidesApiError::Auth(format!(
                "token endpoint returned {status}: {body}"
            )));
        }

        let token = response.json::<TokenResponse>().await?.access_token;
        tracing::debug!("Fetched slides API token");
        *self.token.write().await = Some(token.clone());
        Ok(token)
    }

    /// Send a request with the bearer token attached and check the
    /// status. A 401 drops the cached token before failing.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, SlidesApiError> {
        let token = self.token().await?;
        let response = request.bearer_auth(token).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            self.token.write().await.take();
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SlidesApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    fn slides_url(&self, name: &str, suffix: &str) -> String {
        format!("{}/slides/{}{}", self.config.api_url, name, suffix)
    }

    /// Query pairs appended to presentation-scoped requests.
    fn folder_query(&self) -> Vec<(&'static str, String)> {
        if self.config.folder.is_empty() {
            Vec::new()
        } else {
            vec![("folder", self.config.folder.clone())]
        }
    }
}

/// Resolve the remote shape index from a creation response: prefer the
/// inline `index` field, fall back to matching `shapes/{n}` in the
/// resource href.
fn resolve_shape_index(
    index: Option<u32>,
    href: Option<&str>,
) -> Result<u32, SlidesApiError> {
    static HREF_RE: OnceLock<Regex> = OnceLock::new();

    if let Some(index) = index {
        return Ok(index);
    }
    if let Some(href) = href {
        let re = HREF_RE.get_or_init(|| {
            Regex::new(r"shapes/(\d+)").unwrap_or_else(|e| panic!("invalid shape href regex: {e}"))
        });
        if let Some(captures) = re.captures(href) {
            if let Ok(index) = captures[1].parse() {
                return Ok(index);
            }
        }
    }
    Err(SlidesApiError::ShapeResolution(format!(
        "creation response had no index and no parsable href ({href:?})"
    )))
}

#[async_trait::async_trait]
impl SlidesService for SlidesApi {
    async fn object_exists(&self, name: &str) -> Result<bool, SlidesApiError> {
        let url = format!(
            "{}/slides/storage/exist/{}",
            self.config.api_url,
            self.storage_path(name)
        );
        let response = self.send(self.client.get(url)).await?;
        Ok(response.json::<ExistsResponse>().await?.exists)
    }

    async fn delete_file(&self, name: &str) -> Result<(), SlidesApiError> {
        let url = format!(
            "{}/slides/storage/file/{}",
            self.config.api_url,
            self.storage_path(name)
        );
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn create_presentation(&self, name: &str) -> Result<(), SlidesApiError> {
        let url = self.slides_url(name, "");
        self.send(self.client.post(url).query(&self.folder_query()))
            .await?;
        Ok(())
    }

    async fn set_slide_properties(
        &self,
        name: &str,
        properties: &SlideProperties,
    ) -> Result<(), SlidesApiError> {
        let url = self.slides_url(name, "/slideProperties");
        self.send(
            self.client
                .put(url)
                .query(&self.folder_query())
                .json(&wire::slide_properties_to_json(properties)),
        )
        .await?;
        Ok(())
    }

    async fn copy_master_slide(
        &self,
        name: &str,
        source_path: &str,
        source_slide: u32,
        apply_to_all: bool,
    ) -> Result<(), SlidesApiError> {
        let url = self.slides_url(name, "/masterSlides");
        let mut query = self.folder_query();
        query.push(("cloneFrom", source_path.to_string()));
        query.push(("cloneFromPosition", source_slide.to_string()));
        query.push(("applyToAll", apply_to_all.to_string()));
        self.send(self.client.post(url).query(&query)).await?;
        Ok(())
    }

    async fn create_slide(&self, name: &str) -> Result<(), SlidesApiError> {
        let url = self.slides_url(name, "/slides");
        self.send(self.client.post(url).query(&self.folder_query()))
            .await?;
        Ok(())
    }

    async fn create_shape(
        &self,
        name: &str,
        slide: u32,
        spec: &ShapeSpec,
    ) -> Result<u32, SlidesApiError> {
        let url = self.slides_url(name, &format!("/slides/{slide}/shapes"));
        let response = self
            .send(
                self.client
                    .post(url)
                    .query(&self.folder_query())
                    .json(&wire::shape_to_json(spec)),
            )
            .await?;

        let created = response.json::<ShapeCreatedResponse>().await?;
        resolve_shape_index(
            created.index,
            created.self_uri.as_ref().and_then(|u| u.href.as_deref()),
        )
    }

    async fn update_shape(
        &self,
        name: &str,
        slide: u32,
        shape_index: u32,
        update: &ShapeUpdate,
    ) -> Result<(), SlidesApiError> {
        let url = self.slides_url(name, &format!("/slides/{slide}/shapes/{shape_index}"));
        self.send(
            self.client
                .put(url)
                .query(&self.folder_query())
                .json(&wire::update_to_json(update)),
        )
        .await?;
        Ok(())
    }

    async fn update_text_portion(
        &self,
        name: &str,
        slide: u32,
        shape_index: u32,
        paragraph: u32,
        portion: u32,
        style: &TextStyleSpec,
    ) -> Result<(), SlidesApiError> {
        let url = self.slides_url(
            name,
            &format!(
                "/slides/{slide}/shapes/{shape_index}/paragraphs/{paragraph}/portions/{portion}"
            ),
        );
        self.send(
            self.client
                .put(url)
                .query(&self.folder_query())
                .json(&wire::style_to_json(style)),
        )
        .await?;
        Ok(())
    }

    async fn set_animation(
        &self,
        name: &str,
        slide: u32,
        effects: &[ResolvedEffect],
    ) -> Result<(), SlidesApiError> {
        let url = self.slides_url(name, &format!("/slides/{slide}/animation"));
        self.send(
            self.client
                .put(url)
                .query(&self.folder_query())
                .json(&wire::animation_to_json(effects)),
        )
        .await?;
        Ok(())
    }

    fn download_url(&self, name: &str) -> String {
        self.slides_url(name, "/download")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn resolve_prefers_inline_index() {
        let index = resolve_shape_index(Some(4), Some("slides/1/shapes/9")).unwrap();
        assert_eq!(index, 4);
    }

    #[test]
    fn resolve_falls_back_to_href() {
        let index = resolve_shape_index(
            None,
            Some("https://api.example.com/v3.0/slides/Deck.pptx/slides/2/shapes/12"),
        )
        .unwrap();
        assert_eq!(index, 12);
    }

    #[test]
    fn resolve_fails_without_any_reference() {
        let err = resolve_shape_index(None, None).unwrap_err();
        assert_matches!(err, SlidesApiError::ShapeResolution(_));
    }

    #[test]
    fn resolve_fails_on_unparsable_href() {
        let err = resolve_shape_index(None, Some("no shape here")).unwrap_err();
        assert_matches!(err, SlidesApiError::ShapeResolution(_));
    }

    #[test]
    fn download_url_is_under_the_presentation() {
        let api = SlidesApi::new(SlidesConfig {
            api_url: "https://api.example.com/v3.0".into(),
            token_url: "https://api.example.com/connect/token".into(),
            client_id: "id".into(),
            client_secret: "secret".into(),
            folder: String::new(),
        });
        assert_eq!(
            api.download_url("Deck.pptx"),
            "https://api.example.com/v3.0/slides/Deck.pptx/download"
        );
    }

    #[test]
    fn storage_path_respects_folder() {
        let mut config = SlidesConfig {
            api_url: String::new(),
            token_url: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            folder: String::new(),
        };
        assert_eq!(SlidesApi::new(config.clone()).storage_path("Deck.pptx"), "Deck.pptx");
        config.folder = "decks".into();
        assert_eq!(
            SlidesApi::new(config).storage_path("Deck.pptx"),
            "decks/Deck.pptx"
        );
    }
}

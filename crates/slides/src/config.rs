//! Remote slides service configuration.

/// Connection settings for the remote slides service.
///
/// Created once at startup and passed into
/// [`SlidesApi::new`](crate::api::SlidesApi::new); there is no global
/// client holding credentials.
#[derive(Debug, Clone)]
pub struct SlidesConfig {
    /// Base API URL (default: `https://api.aspose.cloud/v3.0`).
    pub api_url: String,
    /// OAuth token endpoint (default: `https://api.aspose.cloud/connect/token`).
    pub token_url: String,
    /// OAuth client credentials.
    pub client_id: String,
    pub client_secret: String,
    /// Remote storage folder; empty means the storage root.
    pub folder: String,
}

impl SlidesConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Default                                  |
    /// |------------------------|------------------------------------------|
    /// | `SLIDES_API_URL`       | `https://api.aspose.cloud/v3.0`          |
    /// | `SLIDES_TOKEN_URL`     | `https://api.aspose.cloud/connect/token` |
    /// | `SLIDES_CLIENT_ID`     | required                                 |
    /// | `SLIDES_CLIENT_SECRET` | required                                 |
    /// | `SLIDES_FOLDER`        | `` (storage root)                        |
    ///
    /// Panics when the credentials are missing, which is the desired
    /// startup behaviour -- misconfiguration should fail fast.
    pub fn from_env() -> Self {
        let api_url = std::env::var("SLIDES_API_URL")
            .unwrap_or_else(|_| "https://api.aspose.cloud/v3.0".into());
        let token_url = std::env::var("SLIDES_TOKEN_URL")
            .unwrap_or_else(|_| "https://api.aspose.cloud/connect/token".into());
        let client_id =
            std::env::var("SLIDES_CLIENT_ID").expect("SLIDES_CLIENT_ID must be set");
        let client_secret =
            std::env::var("SLIDES_CLIENT_SECRET").expect("SLIDES_CLIENT_SECRET must be set");
        let folder = std::env::var("SLIDES_FOLDER").unwrap_or_default();

        Self {
            api_url,
            token_url,
            client_id,
            client_secret,
            folder,
        }
    }
}

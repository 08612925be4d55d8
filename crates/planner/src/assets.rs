//! Static asset provisioning.
//!
//! The planner itself never touches the filesystem; this module loads
//! the template's static assets (card icons, optional logo) from the
//! configured assets directory, base64-encodes them, and hands the
//! planner an in-memory [`AssetBundle`]. The uploaded image arrives as
//! bytes from the multipart layer and is encoded the same way; it is
//! never written to local disk, so there is nothing to clean up before
//! or after the remote upload.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use deckforge_core::error::CoreError;

use crate::layout::SLIDE2_ICON_SLOTS;

/// Reference document to clone a master slide (theme) from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSource {
    /// Remote storage path of the reference presentation.
    pub source_path: String,
    /// 1-based slide index to clone the master from.
    pub source_slide: u32,
    /// Apply the cloned master to every slide in the target.
    pub apply_to_all: bool,
}

/// Base64-encoded assets available to one plan build.
#[derive(Debug, Clone, Default)]
pub struct AssetBundle {
    /// The four card icons, in slot order. Required by the layout.
    pub icons: Vec<String>,
    /// Logo image, when the static file exists.
    pub logo: Option<String>,
    /// The user's uploaded image, when the request carried one.
    pub user_image: Option<String>,
    /// Master-slide source, when configured.
    pub theme: Option<ThemeSource>,
}

/// Loader for static template assets rooted at a directory on disk.
///
/// Icons are mandatory (the card row cannot render without them);
/// the logo and theme source are optional and their absence simply
/// skips the corresponding overlay step.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    root: PathBuf,
    theme: Option<ThemeSource>,
}

/// Relative path of the optional logo image under the assets root.
pub const LOGO_FILE: &str = "images/logo.jpg";

impl AssetCatalog {
    pub fn new(root: impl Into<PathBuf>, theme: Option<ThemeSource>) -> Self {
        AssetCatalog {
            root: root.into(),
            theme,
        }
    }

    /// Load and encode every asset needed for one plan build.
    ///
    /// Fails with [`CoreError::AssetMissing`] if any card icon is
    /// absent or unreadable.
    pub fn load(&self, user_image: Option<&[u8]>) -> Result<AssetBundle, CoreError> {
        let mut icons = Vec::with_capacity(SLIDE2_ICON_SLOTS.len());
        for slot in &SLIDE2_ICON_SLOTS {
            icons.push(self.read_required(Path::new(slot.file))?);
        }

        let logo_path = self.root.join(LOGO_FILE);
        let logo = if logo_path.is_file() {
            Some(self.read_required(Path::new(LOGO_FILE))?)
        } else {
            tracing::debug!(path = %logo_path.display(), "No logo asset, skipping overlay");
            None
        };

        Ok(AssetBundle {
            icons,
            logo,
            user_image: user_image.map(|bytes| STANDARD.encode(bytes)),
            theme: self.theme.clone(),
        })
    }

    fn read_required(&self, relative: &Path) -> Result<String, CoreError> {
        let path = self.root.join(relative);
        let bytes = std::fs::read(&path)
            .map_err(|e| CoreError::AssetMissing(format!("{}: {e}", path.display())))?;
        Ok(STANDARD.encode(bytes))
    }
}

//! Read-only view over the embedded `hades/dist/assets/` tree.

use axum::body::Body;
use axum::http::{header, HeaderValue};
use axum::response::Response;
use rust_embed::RustEmbed;

use crate::error::FrontendError;

#[derive(RustEmbed)]
#[folder = "hades/dist/assets/"]
struct BundleAssets;

/// The embedded asset subtree, rooted at `/assets/` on the wire.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetTree;

impl AssetTree {
    /// Fails when the bundle was built without any assets.
    pub fn ensure_present() -> crate::error::Result<Self> {
        if BundleAssets::iter().next().is_none() {
            return Err(FrontendError::StartupMisconfiguration(
                "[x] The embedded bundle has no hades/dist/assets subtree".to_string(),
            ));
        }
        Ok(Self)
    }

    pub fn file_count(&self) -> usize {
        BundleAssets::iter().count()
    }

    /// Maps a request path (relative to `/assets/`) to an embedded file name.
    ///
    /// Anything that could climb out of the subtree or name a directory is
    /// rejected.
    pub fn resolve(path: &str) -> Option<&str> {
        if path.is_empty() || path.starts_with('/') || path.ends_with('/') {
            return None;
        }
        if path.contains('\\') || path.contains('\0') {
            return None;
        }
        if path
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..")
        {
            return None;
        }
        Some(path)
    }

    pub fn response_for(&self, path: &str) -> Option<Response> {
        let name = Self::resolve(path)?;
        let file = BundleAssets::get(name)?;
        let mime = mime_guess::from_path(name).first_or_octet_stream();

        let mut response = Response::new(Body::from(file.data));
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_str(mime.as_ref()).ok()?,
        );
        Some(response)
    }
}

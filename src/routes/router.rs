use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use crate::config::Config;
use crate::files::{AssetError, read_asset, read_file, resolve_latest};
use crate::http::mime::guess_mime_type;
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::routes::index::render_index;

pub const NOT_FOUND: &str = "Not Found\n";
pub const NO_SCREENSHOTS: &str = "No screenshots available\n";

const FAVICON_PATHS: [&str; 2] = ["/favicon.png", "/favicon.ico"];
const INDEX_PATHS: [&str; 2] = ["/", "/index.html"];
const LATEST_IMAGE_PATH: &str = "/latest-image";

/// What a matched path serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Index,
    Favicon,
    PinnedScreenshot,
    LatestImage,
}

/// An exact request path and the target it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub target: RouteTarget,
}

/// The fixed route table, built once from the configuration.
///
/// Paths match exactly and case-sensitively. No prefix matching, query-string
/// stripping or percent-decoding happens here.
pub struct Router {
    config: Arc<Config>,
    routes: Vec<Route>,
}

impl Router {
    pub fn new(config: Arc<Config>) -> Self {
        let mut routes = Vec::new();
        let mut add = |path: &str, target| {
            routes.push(Route {
                path: path.to_string(),
                target,
            })
        };

        for path in INDEX_PATHS {
            add(path, RouteTarget::Index);
        }
        for path in FAVICON_PATHS {
            add(path, RouteTarget::Favicon);
        }
        for path in &config.pinned_paths {
            add(path, RouteTarget::PinnedScreenshot);
        }
        add(LATEST_IMAGE_PATH, RouteTarget::LatestImage);

        Self { config, routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Finds the route whose path equals `path` character for character.
    pub fn lookup(&self, path: &str) -> Option<RouteTarget> {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| route.target)
    }

    /// Builds the response for one request.
    ///
    /// The method is checked before the path, so an unsupported method gets
    /// 405 even on unknown paths. HEAD gets the same response as GET; the
    /// writer drops the body.
    pub async fn handle(&self, req: &Request) -> Response {
        if !matches!(req.method, Method::GET | Method::HEAD) {
            return Response::method_not_allowed();
        }

        match self.lookup(&req.path) {
            Some(target) => self.resolve(target).await,
            None => Response::not_found(NOT_FOUND),
        }
    }

    async fn resolve(&self, target: RouteTarget) -> Response {
        let config = &self.config;

        match target {
            RouteTarget::Index => render_index(&config.index, &config.screenshot_dir).await,
            RouteTarget::Favicon => {
                serve_asset(&config.favicon_file, "Favicon missing\n", "Failed to open favicon\n").await
            }
            RouteTarget::PinnedScreenshot => {
                serve_asset(
                    &config.pinned_file,
                    "Pinned screenshot missing\n",
                    "Failed to open pinned screenshot\n",
                )
                .await
            }
            RouteTarget::LatestImage => {
                let Some(latest) = resolve_latest(config.screenshot_dir.clone()).await else {
                    return Response::not_found(NO_SCREENSHOTS);
                };

                match read_file(&latest).await {
                    Ok(data) => Response::binary(guess_mime_type(&latest), data),
                    Err(e) => {
                        warn!("Failed to read {}: {}", latest.display(), e);
                        Response::internal_error("Failed to open screenshot\n")
                    }
                }
            }
        }
    }
}

async fn serve_asset(path: &Path, missing: &str, unreadable: &str) -> Response {
    match read_asset(path).await {
        Ok(data) => Response::binary(guess_mime_type(path), data),
        Err(AssetError::Missing) => Response::not_found(missing),
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            Response::internal_error(unreadable)
        }
    }
}

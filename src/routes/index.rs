use std::path::Path;

use tracing::warn;

use crate::config::IndexPage;
use crate::files::resolve_latest;
use crate::http::response::Response;

pub const INDEX_LOAD_FAILED: &str = "Failed to load index\n";

/// Produces the index page with the configured strategy.
pub async fn render_index(index: &IndexPage, screenshot_dir: &Path) -> Response {
    match index {
        IndexPage::Template(path) => match tokio::fs::read(path).await {
            Ok(html) => Response::html(html),
            Err(e) => {
                warn!("Failed to load index page {}: {}", path.display(), e);
                Response::internal_error(INDEX_LOAD_FAILED)
            }
        },
        IndexPage::Synthesized => {
            let latest = resolve_latest(screenshot_dir.to_path_buf()).await;
            Response::html(synthesize_page(latest.is_some()))
        }
    }
}

/// Builds the inline page: the latest screenshot if there is one, a notice otherwise.
pub fn synthesize_page(has_screenshot: bool) -> String {
    let content = if has_screenshot {
        r#"<img src="/latest-image" alt="Latest screenshot">"#
    } else {
        "<p>No screenshots available</p>"
    };

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <title>Agartha Online</title>\n\
         <link rel=\"icon\" href=\"/favicon.png\">\n\
         </head>\n\
         <body>\n\
         {}\n\
         </body>\n\
         </html>\n",
        content
    )
}

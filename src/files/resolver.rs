//! Resolves a decoded request path against the document root.

use std::path::Path;

use tokio::fs::{self, File};
use tracing::debug;

use crate::files::listing;
use crate::http::mime;
use crate::http::rejection::Rejection;
use crate::http::response::Response;

/// Turns a decoded, root-relative path into a streamable response.
///
/// Directories resolve to their `index.html` when one exists, and to a
/// synthesized listing otherwise. Regular files must carry a whitelisted
/// extension; the extension check runs before the file is opened, so an
/// unregistered extension is Forbidden even when no such file exists. The
/// file is opened and measured exactly once.
pub async fn resolve(root: &Path, path: &str) -> Result<Response, Rejection> {
    let mut target = path.to_string();

    if let Ok(meta) = fs::metadata(root.join(&target)).await {
        if meta.is_dir() {
            // Strip a trailing slash so the index path has no double slash.
            let dir = target.strip_suffix('/').unwrap_or(&target).to_string();
            let index = format!("{dir}/index.html");

            if fs::metadata(root.join(&index)).await.is_ok() {
                target = index;
            } else {
                debug!("no index file in {dir}, synthesizing listing");
                let document = listing::render(&root.join(&dir), &dir)
                    .await
                    .map_err(|_| Rejection::not_found(dir))?;
                return Ok(Response::html(document));
            }
        }
    }

    let filetype = mime::lookup(&target)
        .ok_or_else(|| Rejection::forbidden("file extension type not supported", target.clone()))?;

    let file = File::open(root.join(&target))
        .await
        .map_err(|_| Rejection::not_found(target.clone()))?;

    let len = file
        .metadata()
        .await
        .map_err(|_| Rejection::not_found(target.clone()))?
        .len();

    Ok(Response::file(file, len, filetype))
}

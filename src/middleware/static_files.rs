use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::app::{Middleware, Next};
use crate::http::mime::{DEFAULT_MIME_TYPE, mime_type_for};
use crate::http::request::Request;
use crate::http::response::Response;

/// Serves files from a base directory, falling through to the rest of the
/// pipeline for anything it cannot read.
#[derive(Debug, Clone)]
pub struct ServeStatic {
    root: PathBuf,
}

/// Creates a [`ServeStatic`] middleware rooted at `root`.
pub fn serve_static(root: impl Into<PathBuf>) -> ServeStatic {
    ServeStatic { root: root.into() }
}

impl ServeStatic {
    /// Joins the request target onto the root.
    ///
    /// Returns `None` for targets that try to climb out of the root with `..`.
    pub fn resolve(&self, target: &str) -> Option<PathBuf> {
        let relative = Path::new(target.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if escapes {
            return None;
        }
        Some(self.root.join(relative))
    }
}

#[async_trait]
impl Middleware for ServeStatic {
    async fn call(&self, req: Request, mut res: Response, next: Next) -> anyhow::Result<()> {
        let target = req.target_path();
        let Some(file) = self.resolve(target) else {
            debug!(target = %req.target, "Refusing static lookup outside root");
            return next.run(req, res).await;
        };

        match tokio::fs::read(&file).await {
            Ok(data) => {
                let mime = match mime_type_for(target) {
                    "" => DEFAULT_MIME_TYPE,
                    known => known,
                };
                debug!(file = %file.display(), mime, "Serving static file");

                res.set("Content-Type", mime);
                res.status(200).send(data).await
            }
            Err(e) => {
                debug!(file = %file.display(), error = %e, "No static file, routing instead");
                next.run(req, res).await
            }
        }
    }
}

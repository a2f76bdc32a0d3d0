use std::path::{Component, Path, PathBuf};

use anyhow::Context;

use crate::http::mime;
use crate::http::request::Request;
use crate::http::response::Response;

const INDEX_FILE: &str = "index.html";

/// What a request path turned out to point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A regular file under the document root
    File {
        path: PathBuf,
        content_type: Option<&'static str>,
    },
    /// A directory requested without a trailing slash
    Redirect { location: String },
    /// The normalized path left the document root
    Escaped,
    /// Nothing at that path
    NotFound,
    /// Anything but GET
    MethodNotAllowed,
}

/// Serves files from a fixed document root.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    /// Fixes the document root. A relative root is taken from the current
    /// working directory.
    pub fn new(root: impl AsRef<Path>) -> anyhow::Result<Self> {
        let root = root.as_ref();
        let absolute = std::path::absolute(root)
            .with_context(|| format!("cannot resolve document root {}", root.display()))?;
        let root = normalize(&absolute);

        if !root.is_dir() {
            tracing::warn!(root = %root.display(), "Document root is not a directory");
        }

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Works out what the request refers to without reading any file.
    pub async fn resolve(&self, request: &Request) -> Resolution {
        if !request.is_get() {
            return Resolution::MethodNotAllowed;
        }

        let requested = request.path_or_root();
        let mut path = requested.to_string();
        if path.ends_with('/') {
            path.push_str(INDEX_FILE);
        }

        let relative = path.strip_prefix('/').unwrap_or(&path);
        let content_type = Path::new(relative)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(mime::content_type);

        let full_path = normalize(&self.root.join(relative));
        if !full_path.starts_with(&self.root) {
            tracing::warn!(path = %requested, "Request path escapes document root");
            return Resolution::Escaped;
        }

        match tokio::fs::metadata(&full_path).await {
            Ok(meta) if meta.is_dir() => Resolution::Redirect {
                location: format!("{}/", requested),
            },
            Ok(meta) if meta.is_file() => Resolution::File {
                path: full_path,
                content_type,
            },
            _ => Resolution::NotFound,
        }
    }

    /// Resolves the request and builds the response, reading the file if
    /// there is one to serve.
    pub async fn respond(&self, request: &Request) -> Response {
        match self.resolve(request).await {
            Resolution::File { path, content_type } => {
                match tokio::fs::read_to_string(&path).await {
                    Ok(contents) => {
                        let body = contents.lines().collect::<Vec<_>>().join("\r\n");
                        Response::ok(body)
                            .with_header("Content-Type", content_type.map(String::from))
                    }
                    Err(e) => {
                        tracing::error!(
                            path = %path.display(),
                            error = %e,
                            "Failed to read file"
                        );
                        Response::internal_error()
                    }
                }
            }
            Resolution::Redirect { location } => Response::see_other(location),
            Resolution::Escaped | Resolution::NotFound => Response::not_found(),
            Resolution::MethodNotAllowed => Response::method_not_allowed(),
        }
    }
}

/// Folds `.` and `..` components without touching the filesystem.
/// `..` at the filesystem root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

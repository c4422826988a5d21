//! File based registry backend.
//!
//! Reads the route file once and hands its text to the static parser.

use std::fs;
use std::path::Path;

use super::{Backend, RegistryError, RouteTable, StaticBackend};

#[derive(Debug, Clone)]
pub struct FileBackend {
    inner: StaticBackend,
}

impl FileBackend {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| {
            tracing::error!(path = %path.display(), error = %source, "Cannot read routes from file");
            RegistryError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Ok(Self {
            inner: StaticBackend::new(&text)?,
        })
    }
}

impl Backend for FileBackend {
    fn name(&self) -> &'static str {
        "file"
    }

    fn routes(&self) -> &RouteTable {
        self.inner.routes()
    }
}

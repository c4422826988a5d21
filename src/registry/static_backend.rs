//! Registry backend serving a fixed route table.

use super::{Backend, RegistryError, RouteTable};

#[derive(Debug, Clone, Default)]
pub struct StaticBackend {
    routes: RouteTable,
}

impl StaticBackend {
    pub fn new(text: &str) -> Result<Self, RegistryError> {
        Ok(Self {
            routes: RouteTable::parse(text)?,
        })
    }
}

impl Backend for StaticBackend {
    fn name(&self) -> &'static str {
        "static"
    }

    fn routes(&self) -> &RouteTable {
        &self.routes
    }
}

//! Local Catalog Cache
//!
//! Last successfully fetched list. Only ever replaced wholesale; every
//! mutation goes through the server followed by a full reload.

use crate::model::Carro;

#[derive(Debug, Clone, Default)]
pub struct CatalogCache {
    records: Vec<Carro>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, records: Vec<Carro>) {
        self.records = records;
    }

    pub fn current(&self) -> &[Carro] {
        &self.records
    }
}

use super::{decode_into, encode_all, CatalogStore, LoadOutcome};
use crate::catalog::Catalog;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Holds encoded lines; does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    lines: Vec<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> LoadOutcome {
        let mut outcome = LoadOutcome::default();
        for (i, line) in self.lines.iter().enumerate() {
            decode_into(&mut outcome, i + 1, Ok(line.as_str()));
        }
        outcome
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        self.lines = encode_all(catalog)?;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Device;

    pub struct CatalogFixture {
        pub catalog: Catalog,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                catalog: Catalog::new(),
            }
        }

        pub fn with_device(mut self, device: Device) -> Self {
            self.catalog.append(device);
            self
        }

        pub fn with_phone(self, brand: &str, model: &str, price: f64, os: &str, memory_gb: u32) -> Self {
            self.with_device(Device::phone(brand, model, price, Vec::new(), os, memory_gb))
        }

        pub fn with_laptop(self, brand: &str, model: &str, price: f64, screen_inches: f64) -> Self {
            self.with_device(Device::laptop(brand, model, price, Vec::new(), screen_inches, 50))
        }

        /// A store pre-filled with the encoded fixture catalog.
        ///
        /// Panics if a fixture device cannot be encoded.
        pub fn into_store(self) -> InMemoryStore {
            let mut store = InMemoryStore::new();
            store.save(&self.catalog).unwrap();
            store
        }
    }
}

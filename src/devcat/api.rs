//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns the
//! store and the catalog loaded from it, and is the single entry point for
//! every UI (the CLI today).
//!
//! The API:
//! - **Dispatches** to the appropriate command function
//! - **Persists** after commands that modify the catalog
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Configuration never needs the catalog, so clients run
//! [`crate::commands::config`] directly instead of opening a `CatalogApi`.
//!
//! It does no printing and no business logic. Load diagnostics are kept as
//! warning messages until the caller takes them with
//! [`CatalogApi::take_load_messages`].
//!
//! `CatalogApi<S: CatalogStore>` is generic over the storage backend:
//! - Production: `CatalogApi<FileStore>`
//! - Testing: `CatalogApi<InMemoryStore>`

use crate::catalog::{Catalog, DeviceEdit};
use crate::commands;
use crate::error::Result;
use crate::query::DeviceFilter;
use crate::store::CatalogStore;

pub struct CatalogApi<S: CatalogStore> {
    store: S,
    catalog: Catalog,
    load_messages: Vec<CmdMessage>,
}

impl<S: CatalogStore> CatalogApi<S> {
    /// Loads the catalog from `store`.
    pub fn open(store: S) -> Self {
        let outcome = store.load();
        let load_messages = outcome
            .warnings
            .iter()
            .map(|w| CmdMessage::warning(w.to_string()))
            .collect();
        Self {
            store,
            catalog: outcome.catalog,
            load_messages,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn take_load_messages(&mut self) -> Vec<CmdMessage> {
        std::mem::take(&mut self.load_messages)
    }

    pub fn list_devices(&self) -> Result<CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn filter_devices(&self, filter: &DeviceFilter) -> Result<CmdResult> {
        commands::filter::run(&self.catalog, filter)
    }

    pub fn sort_devices(&mut self, order: SortOrder) -> Result<CmdResult> {
        let result = commands::sort::run(&mut self.catalog, order)?;
        self.persist(result)
    }

    pub fn edit_device(&mut self, index: usize, edit: DeviceEdit) -> Result<CmdResult> {
        let result = commands::edit::run(&mut self.catalog, index, edit)?;
        self.persist(result)
    }

    pub fn delete_device(&mut self, index: usize) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.catalog, index)?;
        self.persist(result)
    }

    pub fn report(&self, screen_threshold: f64) -> Result<CmdResult> {
        commands::report::run(&self.catalog, screen_threshold)
    }

    /// Writes the current catalog to the store.
    pub fn save(&mut self) -> Result<CmdResult> {
        self.store.save(&self.catalog)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!(
            "Saved {} devices to {}",
            self.catalog.len(),
            self.store.describe()
        )));
        Ok(result)
    }

    fn persist(&mut self, mut result: CmdResult) -> Result<CmdResult> {
        if result.modified {
            let saved = self.save()?;
            result.messages.extend(saved.messages);
        }
        Ok(result)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::sort::SortOrder;
pub use crate::commands::{CatalogReport, CmdMessage, CmdResult, DisplayDevice, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DevcatError;
    use crate::store::memory::fixtures::CatalogFixture;
    use crate::store::memory::InMemoryStore;

    fn api() -> CatalogApi<InMemoryStore> {
        let store = CatalogFixture::new()
            .with_laptop("Dell", "XPS 15", 1899.0, 15.6)
            .with_phone("Apple", "iPhone 15", 999.0, "iOS", 128)
            .into_store();
        CatalogApi::open(store)
    }

    #[test]
    fn open_turns_load_warnings_into_messages() {
        let store = InMemoryStore::with_lines(["Laptop;Dell;XPS;oops;15.6-86;"]);
        let mut api = CatalogApi::open(store);

        assert!(api.catalog().is_empty());
        let messages = api.take_load_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].level, MessageLevel::Warning);
        assert!(api.take_load_messages().is_empty());
    }

    #[test]
    fn read_only_commands_do_not_save() {
        let api = api();
        let listed = api.list_devices().unwrap();
        assert_eq!(listed.listed_devices.len(), 2);

        let filtered = api.filter_devices(&DeviceFilter::PriceAbove(1000.0)).unwrap();
        assert_eq!(filtered.listed_devices.len(), 1);

        let report = api.report(15.0).unwrap().report.unwrap();
        assert_eq!(report.large_laptops, 1);
        assert!(listed.messages.is_empty());
    }

    #[test]
    fn mutating_commands_save_to_store() {
        let mut api = api();
        api.sort_devices(SortOrder::Price).unwrap();
        let result = api.delete_device(1).unwrap();

        assert!(result
            .messages
            .iter()
            .any(|m| m.content == "Saved 1 devices to memory"));
        assert_eq!(api.store.lines(), ["Smartphone;Apple;iPhone 15;999;iOS-128;"]);
    }

    #[test]
    fn edit_is_persisted() {
        let mut api = api();
        api.edit_device(0, DeviceEdit::new().append_app("Office")).unwrap();
        assert_eq!(api.store.lines()[0], "Laptop;Dell;XPS 15;1899;15.6-50;Office");
    }

    #[test]
    fn failed_mutation_leaves_store_untouched() {
        let mut api = api();
        let before = api.store.lines().to_vec();
        let err = api.delete_device(2).unwrap_err();
        assert!(matches!(err, DevcatError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(api.store.lines(), before.as_slice());
    }

    #[test]
    fn unencodable_edit_surfaces_as_error() {
        let mut api = api();
        let err = api
            .edit_device(0, DeviceEdit::new().model("XPS;15"))
            .unwrap_err();
        assert!(matches!(err, DevcatError::Unencodable { index: 0, .. }));
    }
}

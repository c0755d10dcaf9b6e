use crate::error::{DevcatError, Result};
use crate::model::Device;
use std::cmp::Ordering;

/// Optional changes applied by [`Catalog::edit_at`]. Omitted fields are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceEdit {
    pub price: Option<f64>,
    pub model: Option<String>,
    pub append_app: Option<String>,
}

impl DeviceEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn append_app(mut self, app: impl Into<String>) -> Self {
        self.append_app = Some(app.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.model.is_none() && self.append_app.is_none()
    }

    fn apply(self, device: &mut Device) {
        if let Some(price) = self.price {
            device.set_price(price);
        }
        if let Some(model) = self.model {
            device.set_model(model);
        }
        if let Some(app) = self.append_app {
            device.add_app(app);
        }
    }
}

/// An ordered, position-addressed collection of devices.
///
/// The catalog owns its devices outright. Callers address them by 0-based
/// index; a failed operation leaves the catalog untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    devices: Vec<Device>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn append(&mut self, device: Device) {
        self.devices.push(device);
    }

    pub fn get(&self, index: usize) -> Result<&Device> {
        self.check_index(index)?;
        Ok(&self.devices[index])
    }

    /// Removes the device at `index`, shifting later devices down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Device> {
        self.check_index(index)?;
        Ok(self.devices.remove(index))
    }

    /// Applies `edit` in place and returns the updated device.
    pub fn edit_at(&mut self, index: usize, edit: DeviceEdit) -> Result<&Device> {
        self.check_index(index)?;
        let device = &mut self.devices[index];
        edit.apply(device);
        Ok(device)
    }

    /// Read-only view in catalog order.
    pub fn all(&self) -> &[Device] {
        &self.devices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.devices.iter()
    }

    /// Stable in-place sort.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Device, &Device) -> Ordering,
    {
        self.devices.sort_by(compare);
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.devices.len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> DevcatError {
        DevcatError::IndexOutOfRange {
            index,
            len: self.devices.len(),
        }
    }
}

impl FromIterator<Device> for Catalog {
    fn from_iter<I: IntoIterator<Item = Device>>(iter: I) -> Self {
        Self {
            devices: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        [
            Device::phone("Apple", "iPhone 15", 999.0, vec![], "iOS", 128),
            Device::laptop("Dell", "XPS 15", 1899.0, vec![], 15.6, 86),
            Device::phone("Google", "Pixel 8", 699.0, vec![], "Android", 8),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn append_keeps_insertion_order_and_allows_duplicates() {
        let mut catalog = Catalog::new();
        let phone = Device::phone("Apple", "iPhone 15", 999.0, vec![], "iOS", 128);
        catalog.append(phone.clone());
        catalog.append(phone.clone());
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.all(), [phone.clone(), phone]);
    }

    #[test]
    fn remove_shifts_later_devices_down() {
        let mut catalog = sample();
        let removed = catalog.remove_at(0).unwrap();
        assert_eq!(removed.brand(), "Apple");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().brand(), "Dell");
        assert_eq!(catalog.get(1).unwrap().brand(), "Google");
    }

    #[test]
    fn edit_applies_only_supplied_changes() {
        let mut catalog = sample();
        let edit = DeviceEdit::new().price(649.0).append_app("Camera");
        let device = catalog.edit_at(2, edit).unwrap();
        assert_eq!(device.price(), 649.0);
        assert_eq!(device.model(), "Pixel 8");
        assert_eq!(device.apps(), ["Camera"]);
    }

    #[test]
    fn empty_edit_is_a_no_op() {
        let mut catalog = sample();
        let before = catalog.clone();
        assert!(DeviceEdit::new().is_empty());
        catalog.edit_at(1, DeviceEdit::new()).unwrap();
        assert_eq!(catalog, before);
    }

    #[test]
    fn out_of_range_index_is_rejected_without_change() {
        let mut empty = Catalog::new();
        assert!(matches!(
            empty.remove_at(0),
            Err(DevcatError::IndexOutOfRange { index: 0, len: 0 })
        ));
        assert!(matches!(
            empty.edit_at(0, DeviceEdit::new().price(1.0)),
            Err(DevcatError::IndexOutOfRange { index: 0, len: 0 })
        ));
        assert!(empty.is_empty());

        let mut catalog = sample();
        let before = catalog.clone();
        assert!(matches!(
            catalog.remove_at(3),
            Err(DevcatError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(matches!(
            catalog.edit_at(3, DeviceEdit::new().model("X")),
            Err(DevcatError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(catalog, before);
    }
}

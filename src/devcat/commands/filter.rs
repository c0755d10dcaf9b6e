use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, DisplayDevice};
use crate::error::Result;
use crate::query::{count_if, select, DeviceFilter};

pub fn run(catalog: &Catalog, filter: &DeviceFilter) -> Result<CmdResult> {
    let listed: Vec<_> = select(catalog, |device| filter.matches(device))
        .into_iter()
        .map(|(index, device)| DisplayDevice::new(index, device))
        .collect();
    let count = count_if(catalog, |device| filter.matches(device));

    let mut result = CmdResult::default().with_listed_devices(listed);
    result.add_message(CmdMessage::info(format!(
        "{} of {} devices match",
        count,
        catalog.len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Device, Variant};
    use crate::store::memory::fixtures::CatalogFixture;

    fn catalog() -> Catalog {
        CatalogFixture::new()
            .with_phone("Apple", "iPhone 15", 999.0, "iOS", 128)
            .with_laptop("Dell", "XPS 15", 1899.0, 15.6)
            .with_device(Device::phone(
                "Google",
                "Pixel 8",
                699.0,
                vec!["Maps".into()],
                "Android",
                8,
            ))
            .catalog
    }

    #[test]
    fn keeps_catalog_positions_of_matches() {
        let result = run(&catalog(), &DeviceFilter::PriceAbove(900.0)).unwrap();
        let indexes: Vec<_> = result.listed_devices.iter().map(|d| d.index).collect();
        assert_eq!(indexes, [0, 1]);
        assert_eq!(result.messages[0].content, "2 of 3 devices match");
    }

    #[test]
    fn filters_by_os_app_and_variant() {
        let catalog = catalog();

        let by_os = run(&catalog, &DeviceFilter::Os("Android".into())).unwrap();
        assert_eq!(by_os.listed_devices.len(), 1);
        assert_eq!(by_os.listed_devices[0].index, 2);

        let by_app = run(&catalog, &DeviceFilter::App("Maps".into())).unwrap();
        assert_eq!(by_app.listed_devices[0].device.model(), "Pixel 8");

        let laptops = run(&catalog, &DeviceFilter::Variant(Variant::Laptop)).unwrap();
        assert_eq!(laptops.listed_devices.len(), 1);
    }

    #[test]
    fn no_matches_is_not_an_error() {
        let result = run(&catalog(), &DeviceFilter::PriceAbove(5000.0)).unwrap();
        assert!(result.listed_devices.is_empty());
        assert_eq!(result.messages[0].content, "0 of 3 devices match");
    }
}

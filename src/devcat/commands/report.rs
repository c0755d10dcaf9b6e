use crate::catalog::Catalog;
use crate::commands::{CatalogReport, CmdResult, DisplayDevice};
use crate::error::Result;
use crate::query::{count_laptops_above_screen, find_max_phone_memory};

pub fn run(catalog: &Catalog, screen_threshold: f64) -> Result<CmdResult> {
    let report = CatalogReport {
        max_memory_phone: find_max_phone_memory(catalog)
            .map(|(index, device)| DisplayDevice::new(index, device)),
        screen_threshold,
        large_laptops: count_laptops_above_screen(catalog, screen_threshold),
    };
    Ok(CmdResult::default().with_report(report))
}

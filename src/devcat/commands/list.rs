use crate::catalog::Catalog;
use crate::commands::{CmdResult, DisplayDevice};
use crate::error::Result;

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let listed = catalog
        .iter()
        .enumerate()
        .map(|(index, device)| DisplayDevice::new(index, device))
        .collect();
    Ok(CmdResult::default().with_listed_devices(listed))
}

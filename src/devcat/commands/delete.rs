use crate::catalog::Catalog;
use crate::commands::{label, CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &mut Catalog, index: usize) -> Result<CmdResult> {
    let device = catalog.remove_at(index)?;
    let mut result = CmdResult::default().modified();
    result.add_message(CmdMessage::success(format!(
        "Device deleted ({}): {}",
        index,
        label(&device)
    )));
    Ok(result.with_affected_devices(vec![device]))
}

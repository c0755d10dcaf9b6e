use crate::catalog::{Catalog, DeviceEdit};
use crate::commands::{label, CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &mut Catalog, index: usize, edit: DeviceEdit) -> Result<CmdResult> {
    if edit.is_empty() {
        catalog.get(index)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Nothing to change."));
        return Ok(result);
    }

    let device = catalog.edit_at(index, edit)?.clone();
    let mut result = CmdResult::default().modified();
    result.add_message(CmdMessage::success(format!(
        "Device updated ({}): {}",
        index,
        label(&device)
    )));
    Ok(result.with_affected_devices(vec![device]))
}

use colored::Colorize;
use devcat::api::{CatalogReport, CmdMessage, DisplayDevice, MessageLevel};
use devcat::config::DevcatConfig;
use devcat::model::{Device, DeviceKind, Variant};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: usize = 2;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_devices(devices: &[DisplayDevice]) {
    if devices.is_empty() {
        println!("No devices found.");
        return;
    }

    let rows: Vec<[String; 7]> = devices.iter().map(row).collect();
    let header = ["#", "Type", "Brand", "Model", "Price", "Specs", "Apps"].map(String::from);
    let widths = column_widths(&header, &rows);

    println!("{}", format_row(&header, &widths).bold());
    for (dd, cells) in devices.iter().zip(&rows) {
        let line = format_row(cells, &widths);
        match dd.device.variant() {
            Variant::Phone => println!("{}", line),
            Variant::Laptop => println!("{}", line.cyan()),
        }
    }
}

pub(super) fn print_report(report: &CatalogReport) {
    match &report.max_memory_phone {
        Some(dd) => {
            println!("{}", "Smartphone with max memory:".bold());
            println!("  {}. {}", dd.index.to_string().yellow(), indent(&dd.device));
        }
        None => println!("{}", "No smartphones in the catalog.".dimmed()),
    }
    println!(
        "Laptops with screen > {}\": {}",
        report.screen_threshold,
        report.large_laptops.to_string().yellow()
    );
}

pub(super) fn print_config(config: &DevcatConfig) {
    println!("data-file = {}", config.data_file);
    println!("save-file = {}", config.save_file);
    println!("screen-threshold = {}", config.screen_threshold);
}

fn row(dd: &DisplayDevice) -> [String; 7] {
    let device = &dd.device;
    let specs = match device.kind() {
        DeviceKind::Phone { os, memory_gb } => format!("{} {}GB", os, memory_gb),
        DeviceKind::Laptop {
            screen_inches,
            battery_wh,
        } => format!("{}\" {}Wh", screen_inches, battery_wh),
    };
    [
        dd.index.to_string(),
        device.variant().to_string(),
        device.brand().to_string(),
        device.model().to_string(),
        format!("${:.2}", device.price()),
        specs,
        device.apps().join(", "),
    ]
}

fn column_widths(header: &[String; 7], rows: &[[String; 7]]) -> [usize; 7] {
    let mut widths = header.each_ref().map(|h| h.width());
    for cells in rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

fn format_row(cells: &[String; 7], widths: &[usize; 7]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        line.push_str(cell);
        if i + 1 < cells.len() {
            let padding = width.saturating_sub(cell.width()) + COLUMN_GAP;
            line.push_str(&" ".repeat(padding));
        }
    }
    line
}

fn indent(device: &Device) -> String {
    device.to_string().replace('\n', "\n    ")
}

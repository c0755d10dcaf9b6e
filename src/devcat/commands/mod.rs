use crate::config::DevcatConfig;
use crate::model::Device;

pub mod config;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod list;
pub mod report;
pub mod sort;

/// A device together with its current 0-based catalog position.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayDevice {
    pub index: usize,
    pub device: Device,
}

impl DisplayDevice {
    pub fn new(index: usize, device: &Device) -> Self {
        Self {
            index,
            device: device.clone(),
        }
    }
}

/// Phone with the most memory plus the large-laptop count.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogReport {
    pub max_memory_phone: Option<DisplayDevice>,
    pub screen_threshold: f64,
    pub large_laptops: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_devices: Vec<DisplayDevice>,
    pub affected_devices: Vec<Device>,
    pub report: Option<CatalogReport>,
    pub config: Option<DevcatConfig>,
    pub messages: Vec<CmdMessage>,
    /// True when the catalog changed and should be saved.
    pub modified: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_devices(mut self, devices: Vec<DisplayDevice>) -> Self {
        self.listed_devices = devices;
        self
    }

    pub fn with_affected_devices(mut self, devices: Vec<Device>) -> Self {
        self.affected_devices = devices;
        self
    }

    pub fn with_report(mut self, report: CatalogReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_config(mut self, config: DevcatConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn modified(mut self) -> Self {
        self.modified = true;
        self
    }
}

/// One-line label used in messages, e.g. `Apple iPhone 15`.
pub(crate) fn label(device: &Device) -> String {
    format!("{} {}", device.brand(), device.model())
}

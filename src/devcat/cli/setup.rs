use clap::{Args, Parser, Subcommand, ValueEnum};
use devcat::api::SortOrder;
use devcat::model::Variant;
use devcat::query::DeviceFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "devcat", bin_name = "devcat", version)]
#[command(about = "Keep a catalog of phones and laptops in a plain text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to load (defaults to the configured data file)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// File to save changes to (defaults to the configured save file)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub out: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all devices with their index
    #[command(alias = "ls")]
    List,

    /// Show devices matching a filter
    Filter(FilterArgs),

    /// Sort the catalog and save it
    Sort {
        #[arg(value_enum, default_value_t = SortKey::Price)]
        by: SortKey,
    },

    /// Change the price or model of a device, or add an app to it
    #[command(alias = "e")]
    Edit {
        /// Index of the device (see `list`)
        index: usize,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        model: Option<String>,

        /// App to append to the installed apps
        #[arg(long = "add-app")]
        add_app: Option<String>,
    },

    /// Delete a device
    #[command(alias = "rm")]
    Delete {
        /// Index of the device (see `list`)
        index: usize,
    },

    /// Phone with the most memory and number of large-screen laptops
    Report {
        /// Screen size in inches; laptops strictly above it are counted
        #[arg(long)]
        screen_threshold: Option<f64>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, save-file, screen-threshold)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct FilterArgs {
    /// Devices priced strictly above this amount
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Phones running this OS
    #[arg(long)]
    pub os: Option<String>,

    /// Devices with this app installed
    #[arg(long)]
    pub app: Option<String>,

    /// Only phones or only laptops
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
}

impl FilterArgs {
    pub fn into_filter(self) -> Option<DeviceFilter> {
        if let Some(price) = self.min_price {
            return Some(DeviceFilter::PriceAbove(price));
        }
        if let Some(os) = self.os {
            return Some(DeviceFilter::Os(os));
        }
        if let Some(app) = self.app {
            return Some(DeviceFilter::App(app));
        }
        self.kind.map(|kind| DeviceFilter::Variant(kind.into()))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Cheapest first
    Price,
    /// Brand A-Z, then most expensive first
    Brand,
}

impl From<SortKey> for SortOrder {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Price => SortOrder::Price,
            SortKey::Brand => SortOrder::BrandThenPrice,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Phone,
    Laptop,
}

impl From<KindArg> for Variant {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Phone => Variant::Phone,
            KindArg::Laptop => Variant::Laptop,
        }
    }
}

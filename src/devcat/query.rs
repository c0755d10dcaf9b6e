//! Queries over a [`Catalog`].
//!
//! Everything here is a free function over the catalog. Only the two sorts
//! mutate, and both are stable. Variant-specific keys come from the
//! `Option`-returning accessors on [`Device`], so a laptop simply has no
//! memory instead of failing a cast.

use crate::catalog::Catalog;
use crate::model::{Device, Variant};
use std::cmp::Ordering;

/// Devices matching `predicate`, paired with their catalog index, in catalog order.
pub fn select<P>(catalog: &Catalog, predicate: P) -> Vec<(usize, &Device)>
where
    P: Fn(&Device) -> bool,
{
    catalog
        .iter()
        .enumerate()
        .filter(|(_, device)| predicate(*device))
        .collect()
}

pub fn filter<P>(catalog: &Catalog, predicate: P) -> Vec<&Device>
where
    P: Fn(&Device) -> bool,
{
    catalog.iter().filter(|device| predicate(*device)).collect()
}

pub fn count_if<P>(catalog: &Catalog, predicate: P) -> usize
where
    P: Fn(&Device) -> bool,
{
    catalog.iter().filter(|device| predicate(*device)).count()
}

pub fn sort_by_price_ascending(catalog: &mut Catalog) {
    catalog.sort_by(|a, b| price_key(a).total_cmp(&price_key(b)));
}

/// Brand ascending (byte order, case-sensitive), then price descending.
pub fn sort_by_brand_then_price_desc(catalog: &mut Catalog) {
    catalog.sort_by(|a, b| {
        a.brand()
            .cmp(b.brand())
            .then_with(|| price_key(b).total_cmp(&price_key(a)))
    });
}

// Adding 0.0 turns -0.0 into 0.0, so prices equal under `==` stay in place.
fn price_key(device: &Device) -> f64 {
    device.price() + 0.0
}

/// The device of `variant` with the greatest `key`, with its catalog index.
///
/// `key` returning `None` excludes the device. Ties go to the earliest device.
pub fn max_by_variant<K, F>(catalog: &Catalog, variant: Variant, key: F) -> Option<(usize, &Device)>
where
    K: PartialOrd,
    F: Fn(&Device) -> Option<K>,
{
    let mut best: Option<(usize, &Device, K)> = None;
    for (index, device) in catalog.iter().enumerate() {
        if device.variant() != variant {
            continue;
        }
        let Some(value) = key(device) else {
            continue;
        };
        let replace = match &best {
            None => true,
            Some((_, _, current)) => value.partial_cmp(current) == Some(Ordering::Greater),
        };
        if replace {
            best = Some((index, device, value));
        }
    }
    best.map(|(index, device, _)| (index, device))
}

pub fn find_max_phone_memory(catalog: &Catalog) -> Option<(usize, &Device)> {
    max_by_variant(catalog, Variant::Phone, Device::memory_gb)
}

/// Laptops whose screen is strictly larger than `threshold` inches.
pub fn count_laptops_above_screen(catalog: &Catalog, threshold: f64) -> usize {
    count_if(catalog, |device| {
        device
            .screen_inches()
            .is_some_and(|screen| screen > threshold)
    })
}

/// Canned predicates offered to users.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceFilter {
    /// Price strictly above the threshold.
    PriceAbove(f64),
    /// Phones running exactly this OS.
    Os(String),
    /// Devices with an app of exactly this name installed.
    App(String),
    Variant(Variant),
}

impl DeviceFilter {
    pub fn matches(&self, device: &Device) -> bool {
        match self {
            DeviceFilter::PriceAbove(threshold) => device.price() > *threshold,
            DeviceFilter::Os(os) => device.os() == Some(os.as_str()),
            DeviceFilter::App(app) => device.has_app(app),
            DeviceFilter::Variant(variant) => device.variant() == *variant,
        }
    }
}

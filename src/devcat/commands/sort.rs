use crate::catalog::Catalog;
use crate::commands::{list, CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::{sort_by_brand_then_price_desc, sort_by_price_ascending};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Cheapest first
    Price,
    /// Brand A-Z, then most expensive first
    BrandThenPrice,
}

pub fn run(catalog: &mut Catalog, order: SortOrder) -> Result<CmdResult> {
    let description = match order {
        SortOrder::Price => {
            sort_by_price_ascending(catalog);
            "price (low-high)"
        }
        SortOrder::BrandThenPrice => {
            sort_by_brand_then_price_desc(catalog);
            "brand (A-Z) then price (high-low)"
        }
    };

    let mut result = list::run(catalog)?.modified();
    result.add_message(CmdMessage::success(format!("Sorted by {}.", description)));
    Ok(result)
}

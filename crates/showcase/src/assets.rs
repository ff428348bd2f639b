//! Assets: separating "which assets" from "how to total them"

use fnkit_core::collect::sum_where;
use serde::{Deserialize, Serialize};

/// Asset class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetKind {
    /// Fixed income
    Bond,
    /// Equity
    Stock,
}

/// A priced holding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset class
    pub kind: AssetKind,
    /// Price in minor units
    pub price: u64,
}

impl Asset {
    /// Create a new asset
    pub fn new(kind: AssetKind, price: u64) -> Self {
        Self { kind, price }
    }

    /// Selector accepting only assets of `kind`
    pub fn of_kind(kind: AssetKind) -> impl Fn(&Asset) -> bool {
        move |asset| asset.kind == kind
    }
}

/// Total price of the assets accepted by `selector`
pub fn total_price<S>(assets: &[Asset], selector: S) -> u64
where
    S: Fn(&Asset) -> bool,
{
    sum_where(assets, selector, |asset| asset.price)
}

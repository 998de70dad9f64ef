use crate::config::StoreConfig;

/// The four asset classes the tracker holds investments in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetClass {
    Cash,
    FixedDeposit,
    RealEstate,
    Gold,
}

impl AssetClass {
    /// Selector string (already upper-cased) to asset class. Unrecognized
    /// selectors yield `None`; the repository decides what that means.
    pub fn parse(selector: &str) -> Option<Self> {
        match selector {
            "CASH" => Some(Self::Cash),
            "FD" => Some(Self::FixedDeposit),
            "REAL_ESTATE" => Some(Self::RealEstate),
            "GOLD" => Some(Self::Gold),
            _ => None,
        }
    }

    /// Holding table for this asset class.
    pub fn table<'a>(&self, store: &'a StoreConfig) -> &'a str {
        match self {
            Self::Cash => &store.cash_table,
            Self::FixedDeposit => &store.fd_table,
            Self::RealEstate => &store.real_estate_table,
            Self::Gold => &store.gold_table,
        }
    }
}

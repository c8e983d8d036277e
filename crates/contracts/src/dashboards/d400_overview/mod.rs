use serde::{Deserialize, Serialize};

/// Period selector of the overview metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatsPeriod {
    #[default]
    Today,
    Weekly,
    Monthly,
    ThisMonth,
    TillNow,
}

impl StatsPeriod {
    pub const ALL: [StatsPeriod; 5] = [
        StatsPeriod::Today,
        StatsPeriod::Weekly,
        StatsPeriod::Monthly,
        StatsPeriod::ThisMonth,
        StatsPeriod::TillNow,
    ];

    /// Value of the `filter` query parameter
    pub fn query_value(&self) -> &'static str {
        match self {
            StatsPeriod::Today => "today",
            StatsPeriod::Weekly => "weekly",
            StatsPeriod::Monthly => "monthly",
            StatsPeriod::ThisMonth => "this Month",
            StatsPeriod::TillNow => "till Now",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatsPeriod::Today => "Today",
            StatsPeriod::Weekly => "Weekly",
            StatsPeriod::Monthly => "Monthly",
            StatsPeriod::ThisMonth => "This Month",
            StatsPeriod::TillNow => "Till Now",
        }
    }

    pub fn from_query_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.query_value() == value)
    }
}

/// `data` of `GET /stats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_users: u64,
}

/// Number of orders shown in the "recent orders" card
pub const RECENT_ORDERS_LIMIT: usize = 6;

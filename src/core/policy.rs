pub const EMERGENCY_FUND_RATE: f64 = 0.10;
pub const DOWNSIZING_NET_RATIO: f64 = 0.75;

// Monthly floors are in base currency units (won).
pub const SAFE_MONTHLY_FLOOR: f64 = 3_000_000.0;
pub const MODERATE_MONTHLY_FLOOR: f64 = 1_500_000.0;

pub const DAYS_PER_MONTH: f64 = 30.4;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Tunable planning assumptions. Every calculation takes these explicitly
/// so alternative rule sets can run side by side.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Policy {
    pub emergency_fund_rate: f64,
    pub downsizing_net_ratio: f64,
    pub safe_monthly_floor: f64,
    pub moderate_monthly_floor: f64,
    pub days_per_month: f64,
}

impl Default for Policy {
    fn default() -> Policy {
        Policy {
            emergency_fund_rate: EMERGENCY_FUND_RATE,
            downsizing_net_ratio: DOWNSIZING_NET_RATIO,
            safe_monthly_floor: SAFE_MONTHLY_FLOOR,
            moderate_monthly_floor: MODERATE_MONTHLY_FLOOR,
            days_per_month: DAYS_PER_MONTH,
        }
    }
}

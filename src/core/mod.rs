mod advisor;
mod assets;
mod engine;
mod error;
mod format;
mod housing;
mod money;
mod observer;
mod peers;
mod policy;
mod profile;
mod results;

pub use advisor::{
    AdvisorCriteria, AdvisorPriority, BASE_PRICE_MAX, BASE_PRICE_MIN, FRUGAL_MONTHLY_FLOOR,
    HIGH_NET_WORTH_FLOOR, HIGH_NET_WORTH_PRICE_MAX, PriceRange, Specialization, advisor_criteria,
};
pub use assets::{
    AssetLedger, AvailableAssets, MonthlyIncomes, UsableAssets, available_assets, basic_assets,
    monthly_incomes, monthly_loan_interest, total_assets, total_debts, unusable_assets,
    usable_assets,
};
pub use engine::{
    AgeAverages, DEFAULT_LIFE_EXPECTANCY, average_data_by_age, calculate_results,
    calculate_results_with,
};
pub use error::CalcError;
pub use format::{format_man_won, format_plain_won, format_won, group_digits};
pub use housing::{
    HousingPosition, evaluate_housing, housing_asset_for_usable, housing_assets,
    housing_value_ratio, realized_housing_asset,
};
pub(crate) use money::Lenient;
pub use money::{MAN_WON, ManWon};
pub use observer::{CalcObserver, NoopObserver};
pub use peers::{
    AgeGroup, AssetBadge, CategoryComparison, ComparisonStatus, EXPENSE_CATEGORIES,
    ExpenseCategory, ExpenseProfile, HIGH_SPEND_RATIO, LOW_SPEND_RATIO, SAMPLE_SIZE, age_group,
    asset_badge, baseline_expenses, compare_expenses, comparison_status, spending_multiplier,
};
pub use policy::{
    DAYS_PER_MONTH, DAYS_PER_YEAR, DOWNSIZING_NET_RATIO, EMERGENCY_FUND_RATE,
    MODERATE_MONTHLY_FLOOR, MONTHS_PER_YEAR, Policy, SAFE_MONTHLY_FLOOR,
};
pub use profile::{HouseholdProfile, HousingType, RentType};
pub use results::{
    AssetBand, AssetBreakdown, CalculatorResult, ProfileUpdate, SafetyLevel, TotalAvailable,
    WithdrawalAmounts, asset_band, build_result, profile_update, safety_level, total_available,
    withdrawal_amounts,
};

use super::assets::MonthlyIncomes;
use super::error::CalcError;
use super::money::{MAN_WON, ManWon};
use super::policy::{DAYS_PER_YEAR, MONTHS_PER_YEAR, Policy};
use super::profile::{HouseholdProfile, HousingType};
use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    Safe,
    Moderate,
    Caution,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WithdrawalAmounts {
    pub years_to_live: u32,
    pub annual: f64,
    pub monthly: f64,
    pub daily: f64,
}

/// Spreads the available assets linearly over the remaining horizon.
pub fn withdrawal_amounts(
    available: f64,
    age: u32,
    life_expectancy: u32,
) -> Result<WithdrawalAmounts, CalcError> {
    if life_expectancy <= age {
        return Err(CalcError::InvalidHorizon {
            age,
            life_expectancy,
        });
    }
    let years_to_live = life_expectancy - age;
    let annual = available / years_to_live as f64;
    Ok(WithdrawalAmounts {
        years_to_live,
        annual,
        monthly: annual / MONTHS_PER_YEAR,
        daily: annual / DAYS_PER_YEAR,
    })
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TotalAvailable {
    pub monthly: f64,
    pub daily: f64,
}

/// Monthly cash actually in hand: the rounded withdrawal plus income
/// streams, minus recurring housing cost and loan interest. May go
/// negative when obligations outweigh the plan.
pub fn total_available(
    monthly_withdrawal: f64,
    incomes: &MonthlyIncomes,
    monthly_housing_cost: f64,
    monthly_loan_interest: f64,
    policy: &Policy,
) -> TotalAvailable {
    let monthly = monthly_withdrawal.round() + incomes.pension + incomes.other
        - monthly_housing_cost
        - monthly_loan_interest;
    TotalAvailable {
        monthly,
        daily: (monthly / policy.days_per_month).round(),
    }
}

pub fn safety_level(total_monthly_available: f64, policy: &Policy) -> SafetyLevel {
    if total_monthly_available >= policy.safe_monthly_floor {
        SafetyLevel::Safe
    } else if total_monthly_available >= policy.moderate_monthly_floor {
        SafetyLevel::Moderate
    } else {
        SafetyLevel::Caution
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetBand {
    UnderHalfEok,
    HalfToTwoEok,
    TwoToFiveEok,
    FiveToTenEok,
    TenEokPlus,
}

pub fn asset_band(total_assets: f64) -> AssetBand {
    if total_assets >= 1_000_000_000.0 {
        AssetBand::TenEokPlus
    } else if total_assets >= 500_000_000.0 {
        AssetBand::FiveToTenEok
    } else if total_assets >= 200_000_000.0 {
        AssetBand::TwoToFiveEok
    } else if total_assets >= 50_000_000.0 {
        AssetBand::HalfToTwoEok
    } else {
        AssetBand::UnderHalfEok
    }
}

/// Every intermediate figure of a calculation, in base currency units,
/// so clients can show how the headline numbers came about.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBreakdown {
    pub total_assets: f64,
    pub usable_assets: f64,
    pub usable_assets_gross: f64,
    pub unusable_assets: f64,
    pub available_assets: f64,
    pub emergency_fund: f64,
    pub total_debts: f64,
    pub financial: f64,
    pub severance: f64,
    pub housing: f64,
    pub realized_housing_asset: f64,
    pub current_deposit: f64,
    pub housing_debt: f64,
    pub housing_value_ratio: f64,
    pub monthly_housing_cost: f64,
    pub investment: f64,
    pub investment_loan: f64,
    pub debt: f64,
    pub inheritance: f64,
    pub housing_pension_amount: ManWon,
    pub housing_type: HousingType,
    pub enable_downsizing: bool,
    pub owned_house_deposit_debt: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResult {
    pub daily_amount: i64,
    pub monthly_amount: i64,
    pub annual_amount: i64,
    pub years_to_live: u32,
    pub total_daily_available: i64,
    pub total_monthly_available: i64,
    pub asset_breakdown: AssetBreakdown,
    pub monthly_pension: i64,
    pub monthly_other_income: i64,
    pub monthly_housing_cost: i64,
    pub monthly_loan_interest: i64,
    pub safety_level: SafetyLevel,
}

pub fn build_result(
    withdrawal: &WithdrawalAmounts,
    total: &TotalAvailable,
    safety: SafetyLevel,
    breakdown: AssetBreakdown,
    incomes: &MonthlyIncomes,
    monthly_loan_interest: f64,
) -> CalculatorResult {
    let monthly_housing_cost = breakdown.monthly_housing_cost.round() as i64;
    CalculatorResult {
        daily_amount: withdrawal.daily.round() as i64,
        monthly_amount: withdrawal.monthly.round() as i64,
        annual_amount: withdrawal.annual.round() as i64,
        years_to_live: withdrawal.years_to_live,
        total_daily_available: total.daily as i64,
        total_monthly_available: total.monthly.round() as i64,
        asset_breakdown: breakdown,
        monthly_pension: incomes.pension.round() as i64,
        monthly_other_income: incomes.other.round() as i64,
        monthly_housing_cost,
        monthly_loan_interest: monthly_loan_interest.round() as i64,
        safety_level: safety,
    }
}

/// Condensed snapshot of a calculation for profile storage.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub age: u32,
    pub assets: AssetBand,
    pub lifestyle: String,
    pub health: String,
    pub monthly_retirement_budget: i64,
}

pub fn profile_update(profile: &HouseholdProfile, result: &CalculatorResult) -> ProfileUpdate {
    ProfileUpdate {
        age: profile.age,
        assets: asset_band(result.asset_breakdown.total_assets),
        lifestyle: profile.life_mode.clone(),
        health: profile.health.clone(),
        monthly_retirement_budget: (result.total_monthly_available as f64 / MAN_WON).round()
            as i64,
    }
}

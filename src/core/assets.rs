use super::housing::HousingPosition;
use super::policy::Policy;
use super::profile::{HouseholdProfile, HousingType};

/// Raw profile amounts converted to base currency units, with the housing
/// figures already resolved for the household's tenure regime.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AssetLedger {
    pub financial: f64,
    pub severance: f64,
    pub housing: f64,
    pub current_deposit: f64,
    pub investment: f64,
    pub investment_loan: f64,
    pub debt: f64,
    pub deposit_loan: f64,
    pub inheritance: f64,
    pub housing_debt: f64,
    pub monthly_housing_cost: f64,
}

pub fn basic_assets(profile: &HouseholdProfile, position: &HousingPosition) -> AssetLedger {
    AssetLedger {
        financial: profile.financial_assets.won(),
        severance: profile.severance_pay.won(),
        housing: position.asset,
        current_deposit: profile.current_deposit.won(),
        investment: profile.investment_real_estate.won(),
        investment_loan: profile.investment_loan.won(),
        debt: profile.debt.won(),
        deposit_loan: profile.deposit_loan.won(),
        inheritance: profile.inheritance.won(),
        housing_debt: position.debt,
        monthly_housing_cost: position.monthly_cost,
    }
}

pub fn monthly_loan_interest(profile: &HouseholdProfile) -> f64 {
    profile.home_mortgage_interest.won()
        + profile.investment_loan_interest.won()
        + profile.debt_interest.won()
        + profile.deposit_loan_interest.won()
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct UsableAssets {
    pub gross: f64,
    pub net: f64,
}

/// Assets the plan may actually draw down over the horizon.
pub fn usable_assets(ledger: &AssetLedger, housing_asset_for_usable: f64) -> UsableAssets {
    let gross = ledger.financial + ledger.severance + housing_asset_for_usable;
    UsableAssets { gross, net: gross }
}

pub fn total_debts(
    profile: &HouseholdProfile,
    ledger: &AssetLedger,
    enable_downsizing: bool,
    tenant_deposit_debt: f64,
) -> f64 {
    // A planned sale pays the mortgage out of the proceeds, and for a
    // rented-out home the tenant deposit too, so neither counts twice.
    let mortgage = if enable_downsizing {
        0.0
    } else {
        ledger.housing_debt
    };
    let tenant_deposit =
        if enable_downsizing && profile.housing_type == HousingType::OwnedRenting {
            0.0
        } else {
            tenant_deposit_debt
        };
    mortgage + ledger.investment_loan + ledger.debt + ledger.deposit_loan + tenant_deposit
}

/// Wealth the household holds but cannot spend on living costs.
pub fn unusable_assets(
    profile: &HouseholdProfile,
    ledger: &AssetLedger,
    enable_downsizing: bool,
) -> f64 {
    let kept_home = if !enable_downsizing
        && profile.housing_pension.is_zero()
        && !profile.home_value.is_zero()
    {
        profile.home_value.won()
    } else {
        0.0
    };
    ledger.investment + ledger.inheritance + kept_home
}

pub fn total_assets(ledger: &AssetLedger, total_debts: f64) -> f64 {
    let gross = ledger.financial
        + ledger.severance
        + ledger.housing
        + ledger.current_deposit
        + ledger.investment
        + ledger.inheritance;
    (gross - total_debts).max(0.0)
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AvailableAssets {
    pub emergency_fund: f64,
    pub available: f64,
}

/// Carves the emergency reserve out of liquid savings before anything is
/// scheduled for withdrawal.
pub fn available_assets(
    ledger: &AssetLedger,
    usable_net: f64,
    policy: &Policy,
) -> AvailableAssets {
    let emergency_fund = ledger.financial * policy.emergency_fund_rate;
    AvailableAssets {
        emergency_fund,
        available: (usable_net - emergency_fund).max(0.0),
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MonthlyIncomes {
    pub pension: f64,
    pub other: f64,
}

pub fn monthly_incomes(profile: &HouseholdProfile) -> MonthlyIncomes {
    MonthlyIncomes {
        pension: profile.national_pension.won()
            + profile.private_pension.won()
            + profile.housing_pension.won(),
        other: profile.rental_income.won()
            + profile.work_income.won()
            + profile.financial_income.won()
            + profile.other_income.won(),
    }
}

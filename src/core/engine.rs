use super::assets::{
    available_assets, basic_assets, monthly_incomes, monthly_loan_interest, total_assets,
    total_debts, unusable_assets, usable_assets,
};
use super::error::CalcError;
use super::housing::evaluate_housing;
use super::money::ManWon;
use super::observer::{CalcObserver, NoopObserver};
use super::policy::Policy;
use super::profile::HouseholdProfile;
use super::results::{
    AssetBreakdown, CalculatorResult, build_result, safety_level, total_available,
    withdrawal_amounts,
};
use serde::Serialize;

pub const DEFAULT_LIFE_EXPECTANCY: u32 = 100;

pub fn calculate_results(
    profile: &HouseholdProfile,
    life_expectancy: u32,
    enable_downsizing: bool,
) -> Result<CalculatorResult, CalcError> {
    calculate_results_with(
        profile,
        life_expectancy,
        enable_downsizing,
        &Policy::default(),
        &NoopObserver,
    )
}

/// Runs the full pipeline: housing position, asset ledger, withdrawal
/// schedule, safety rating. Stateless; every call computes from scratch.
pub fn calculate_results_with(
    profile: &HouseholdProfile,
    life_expectancy: u32,
    enable_downsizing: bool,
    policy: &Policy,
    observer: &dyn CalcObserver,
) -> Result<CalculatorResult, CalcError> {
    let position = evaluate_housing(profile, enable_downsizing, policy);
    observer.housing_evaluated(&position);

    let ledger = basic_assets(profile, &position);
    let loan_interest = monthly_loan_interest(profile);
    let usable = usable_assets(&ledger, position.asset_for_usable);
    let debts = total_debts(profile, &ledger, enable_downsizing, position.tenant_deposit_debt);
    let unusable = unusable_assets(profile, &ledger, enable_downsizing);
    let net_worth = total_assets(&ledger, debts);
    let available = available_assets(&ledger, usable.net, policy);
    let incomes = monthly_incomes(profile);

    let breakdown = AssetBreakdown {
        total_assets: net_worth,
        usable_assets: usable.net,
        usable_assets_gross: usable.gross,
        unusable_assets: unusable,
        available_assets: available.available,
        emergency_fund: available.emergency_fund,
        total_debts: debts,
        financial: ledger.financial,
        severance: ledger.severance,
        housing: ledger.housing,
        realized_housing_asset: position.realized_asset,
        current_deposit: ledger.current_deposit,
        housing_debt: ledger.housing_debt,
        housing_value_ratio: position.value_ratio,
        monthly_housing_cost: ledger.monthly_housing_cost,
        investment: ledger.investment,
        investment_loan: ledger.investment_loan,
        debt: ledger.debt,
        inheritance: ledger.inheritance,
        housing_pension_amount: profile.housing_pension,
        housing_type: profile.housing_type,
        enable_downsizing,
        owned_house_deposit_debt: position.tenant_deposit_debt,
    };
    observer.breakdown_assembled(&breakdown);

    let withdrawal = withdrawal_amounts(available.available, profile.age, life_expectancy)?;
    let cash = total_available(
        withdrawal.monthly,
        &incomes,
        ledger.monthly_housing_cost,
        loan_interest,
        policy,
    );
    let safety = safety_level(cash.monthly, policy);

    let result = build_result(&withdrawal, &cash, safety, breakdown, &incomes, loan_interest);
    observer.result_ready(&result);
    Ok(result)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AgeAverages {
    pub financial: ManWon,
    pub severance: ManWon,
    pub housing: ManWon,
    pub debt: ManWon,
}

impl AgeAverages {
    fn row(financial: i64, severance: i64, housing: i64, debt: i64) -> AgeAverages {
        AgeAverages {
            financial: ManWon::new(financial),
            severance: ManWon::new(severance),
            housing: ManWon::new(housing),
            debt: ManWon::new(debt),
        }
    }
}

/// Survey-style averages shown next to the household's own numbers,
/// keyed by age band. Amounts are man-won.
pub fn average_data_by_age(age: u32) -> AgeAverages {
    if age < 45 {
        AgeAverages::row(3_500, 2_800, 35_000, 8_000)
    } else if age < 55 {
        AgeAverages::row(5_200, 4_500, 42_000, 6_500)
    } else if age < 65 {
        AgeAverages::row(4_800, 6_200, 38_000, 3_200)
    } else {
        AgeAverages::row(3_200, 0, 35_000, 1_800)
    }
}

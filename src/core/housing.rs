use super::policy::Policy;
use super::profile::{HouseholdProfile, HousingType, RentType};

/// Housing figures in base currency units, derived once per calculation
/// and threaded through the asset stages.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct HousingPosition {
    pub asset: f64,
    pub debt: f64,
    pub monthly_cost: f64,
    pub value_ratio: f64,
    pub realized_asset: f64,
    pub tenant_deposit_debt: f64,
    pub asset_for_usable: f64,
}

pub fn evaluate_housing(
    profile: &HouseholdProfile,
    enable_downsizing: bool,
    policy: &Policy,
) -> HousingPosition {
    let (asset, debt, monthly_cost) = housing_assets(profile);
    let value_ratio = housing_value_ratio(profile, enable_downsizing, policy);
    let (realized_asset, tenant_deposit_debt) =
        realized_housing_asset(profile, asset, debt, value_ratio, enable_downsizing);
    let asset_for_usable = housing_asset_for_usable(profile, realized_asset);
    HousingPosition {
        asset,
        debt,
        monthly_cost,
        value_ratio,
        realized_asset,
        tenant_deposit_debt,
        asset_for_usable,
    }
}

/// Gross housing asset, the loan held against it, and the recurring
/// monthly housing cost for the household's tenure regime.
pub fn housing_assets(profile: &HouseholdProfile) -> (f64, f64, f64) {
    match profile.housing_type {
        HousingType::OwnedLiving => (profile.home_value.won(), profile.home_mortgage.won(), 0.0),
        HousingType::OwnedRenting => {
            // Rent is only an outflow when the household itself pays a
            // monthly rent somewhere else.
            let cost = if profile.current_rent_type == RentType::Monthly {
                profile.current_rent.won()
            } else {
                0.0
            };
            (profile.home_value.won(), profile.home_mortgage.won(), cost)
        }
        HousingType::Jeonse => (profile.jeonse_deposit.won(), 0.0, 0.0),
        HousingType::Monthly => (profile.monthly_deposit.won(), 0.0, profile.monthly_rent.won()),
        HousingType::None => (0.0, 0.0, 0.0),
    }
}

/// Fraction of the housing asset the plan may treat as spendable.
pub fn housing_value_ratio(
    profile: &HouseholdProfile,
    enable_downsizing: bool,
    policy: &Policy,
) -> f64 {
    match profile.housing_type {
        HousingType::OwnedLiving => {
            if !profile.housing_pension.is_zero() {
                1.0
            } else if enable_downsizing {
                policy.downsizing_net_ratio
            } else {
                0.0
            }
        }
        HousingType::OwnedRenting => {
            if enable_downsizing {
                policy.downsizing_net_ratio
            } else {
                0.0
            }
        }
        HousingType::Jeonse | HousingType::Monthly => 1.0,
        HousingType::None => 0.0,
    }
}

/// Applies the spendable ratio and, when a sale is planned, nets out what
/// the sale has to repay. Returns the realized asset and the deposit owed
/// back to the tenant of an owned home.
pub fn realized_housing_asset(
    profile: &HouseholdProfile,
    housing_asset: f64,
    housing_debt: f64,
    value_ratio: f64,
    enable_downsizing: bool,
) -> (f64, f64) {
    let tenant_deposit_debt = profile.owned_house_deposit.won();
    let scaled = housing_asset * value_ratio;
    let realized = match profile.housing_type {
        HousingType::OwnedLiving if enable_downsizing => (scaled - housing_debt).max(0.0),
        HousingType::OwnedRenting if enable_downsizing => {
            (scaled - tenant_deposit_debt - housing_debt).max(0.0)
        }
        _ => scaled,
    };
    (realized, tenant_deposit_debt)
}

/// A home pledged for a housing pension cannot also be drawn down.
pub fn housing_asset_for_usable(profile: &HouseholdProfile, realized_asset: f64) -> f64 {
    if !profile.housing_pension.is_zero() {
        0.0
    } else {
        realized_asset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::money::ManWon;

    fn owned_living_profile() -> HouseholdProfile {
        HouseholdProfile {
            housing_type: HousingType::OwnedLiving,
            home_value: ManWon::new(80_000),
            home_mortgage: ManWon::new(10_000),
            ..HouseholdProfile::default()
        }
    }

    #[test]
    fn owned_home_without_sale_plan_stays_untouchable() {
        let profile = owned_living_profile();
        let position = evaluate_housing(&profile, false, &Policy::default());
        assert_eq!(position.asset, 800_000_000.0);
        assert_eq!(position.debt, 100_000_000.0);
        assert_eq!(position.value_ratio, 0.0);
        assert_eq!(position.realized_asset, 0.0);
        assert_eq!(position.asset_for_usable, 0.0);
    }

    #[test]
    fn downsizing_nets_ratio_and_mortgage() {
        // 800m * 0.75 - 100m = 500m.
        let profile = owned_living_profile();
        let position = evaluate_housing(&profile, true, &Policy::default());
        assert_eq!(position.value_ratio, 0.75);
        assert_eq!(position.realized_asset, 500_000_000.0);
        assert_eq!(position.asset_for_usable, 500_000_000.0);
    }

    #[test]
    fn downsizing_never_realizes_below_zero() {
        // 10m * 0.75 - 100m would be negative.
        let mut profile = owned_living_profile();
        profile.home_value = ManWon::new(1_000);
        let position = evaluate_housing(&profile, true, &Policy::default());
        assert_eq!(position.realized_asset, 0.0);
    }

    #[test]
    fn housing_pension_realizes_fully_but_blocks_usable() {
        let mut profile = owned_living_profile();
        profile.housing_pension = ManWon::new(80);
        let position = evaluate_housing(&profile, false, &Policy::default());
        assert_eq!(position.value_ratio, 1.0);
        assert_eq!(position.realized_asset, 800_000_000.0);
        assert_eq!(position.asset_for_usable, 0.0);
    }

    #[test]
    fn owned_renting_nets_tenant_deposit_on_sale() {
        // 800m * 0.75 - 200m deposit - 100m mortgage = 300m.
        let mut profile = owned_living_profile();
        profile.housing_type = HousingType::OwnedRenting;
        profile.owned_house_deposit = ManWon::new(20_000);
        let position = evaluate_housing(&profile, true, &Policy::default());
        assert_eq!(position.realized_asset, 300_000_000.0);
        assert_eq!(position.tenant_deposit_debt, 200_000_000.0);
    }

    #[test]
    fn owned_renting_ignores_housing_pension_for_ratio() {
        let mut profile = owned_living_profile();
        profile.housing_type = HousingType::OwnedRenting;
        profile.housing_pension = ManWon::new(80);
        let position = evaluate_housing(&profile, false, &Policy::default());
        assert_eq!(position.value_ratio, 0.0);
        assert_eq!(position.realized_asset, 0.0);
    }

    #[test]
    fn owned_renting_counts_rent_paid_only_for_monthly_tenancy() {
        let mut profile = owned_living_profile();
        profile.housing_type = HousingType::OwnedRenting;
        profile.current_rent = ManWon::new(100);

        profile.current_rent_type = RentType::Monthly;
        let (_, _, cost) = housing_assets(&profile);
        assert_eq!(cost, 1_000_000.0);

        profile.current_rent_type = RentType::Jeonse;
        let (_, _, cost) = housing_assets(&profile);
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn jeonse_deposit_is_fully_recoverable() {
        let profile = HouseholdProfile {
            housing_type: HousingType::Jeonse,
            jeonse_deposit: ManWon::new(20_000),
            home_value: ManWon::new(80_000),
            ..HouseholdProfile::default()
        };
        let position = evaluate_housing(&profile, false, &Policy::default());
        // The deposit, not the unrelated home value field, drives the asset.
        assert_eq!(position.asset, 200_000_000.0);
        assert_eq!(position.value_ratio, 1.0);
        assert_eq!(position.realized_asset, 200_000_000.0);
        assert_eq!(position.asset_for_usable, 200_000_000.0);
        assert_eq!(position.monthly_cost, 0.0);
    }

    #[test]
    fn monthly_tenancy_carries_deposit_and_rent() {
        let profile = HouseholdProfile {
            housing_type: HousingType::Monthly,
            monthly_deposit: ManWon::new(5_000),
            monthly_rent: ManWon::new(60),
            ..HouseholdProfile::default()
        };
        let position = evaluate_housing(&profile, false, &Policy::default());
        assert_eq!(position.asset, 50_000_000.0);
        assert_eq!(position.monthly_cost, 600_000.0);
        assert_eq!(position.realized_asset, 50_000_000.0);
    }

    #[test]
    fn no_housing_regime_yields_zeroes() {
        let profile = HouseholdProfile::default();
        let position = evaluate_housing(&profile, true, &Policy::default());
        assert_eq!(position, HousingPosition::default());
    }
}

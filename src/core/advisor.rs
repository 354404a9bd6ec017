use super::results::CalculatorResult;
use serde::Serialize;

pub const BASE_PRICE_MIN: i64 = 30_000;
pub const BASE_PRICE_MAX: i64 = 100_000;
pub const HIGH_NET_WORTH_PRICE_MAX: i64 = 200_000;
pub const HIGH_NET_WORTH_FLOOR: f64 = 500_000_000.0;
pub const MIDDLE_NET_WORTH_FLOOR: f64 = 200_000_000.0;
pub const FRUGAL_MONTHLY_FLOOR: i64 = 2_000_000;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisorPriority {
    Basic,
    Medium,
    High,
    Urgent,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Specialization {
    HighNetWorth,
    MiddleNetWorth,
    GeneralPlanning,
    RealEstate,
    FrugalPlanning,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorCriteria {
    pub priority: AdvisorPriority,
    pub specializations: Vec<Specialization>,
    pub price_range: PriceRange,
}

/// Derives what kind of advisor a household should be matched with from
/// its calculation result: net worth sets the tier, home ownership adds a
/// real-estate focus, and a thin monthly budget escalates to urgent.
pub fn advisor_criteria(result: &CalculatorResult) -> AdvisorCriteria {
    let breakdown = &result.asset_breakdown;
    let mut criteria = AdvisorCriteria {
        priority: AdvisorPriority::Medium,
        specializations: Vec::new(),
        price_range: PriceRange {
            min: BASE_PRICE_MIN,
            max: BASE_PRICE_MAX,
        },
    };

    if breakdown.total_assets > HIGH_NET_WORTH_FLOOR {
        criteria.priority = AdvisorPriority::High;
        criteria.price_range.max = HIGH_NET_WORTH_PRICE_MAX;
        criteria.specializations.push(Specialization::HighNetWorth);
    } else if breakdown.total_assets > MIDDLE_NET_WORTH_FLOOR {
        criteria.priority = AdvisorPriority::Medium;
        criteria.specializations.push(Specialization::MiddleNetWorth);
    } else {
        criteria.priority = AdvisorPriority::Basic;
        criteria.specializations.push(Specialization::GeneralPlanning);
    }

    if breakdown.housing_type.is_owned() {
        criteria.specializations.push(Specialization::RealEstate);
    }

    if result.monthly_amount < FRUGAL_MONTHLY_FLOOR {
        criteria.specializations.push(Specialization::FrugalPlanning);
        criteria.priority = AdvisorPriority::Urgent;
    }

    criteria
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::calculate_results;
    use crate::core::money::ManWon;
    use crate::core::profile::{HouseholdProfile, HousingType};

    fn profile(financial: i64, housing_type: HousingType, life_expectancy: u32) -> AdvisorCriteria {
        let profile = HouseholdProfile {
            age: 60,
            housing_type,
            financial_assets: ManWon::new(financial),
            ..HouseholdProfile::default()
        };
        advisor_criteria(&calculate_results(&profile, life_expectancy, false).unwrap())
    }

    #[test]
    fn large_estates_get_high_priority_and_wider_price_range() {
        // 1.1bn net worth, 2,062,500 a month over 40 years.
        let criteria = profile(110_000, HousingType::OwnedLiving, 100);
        assert_eq!(criteria.priority, AdvisorPriority::High);
        assert_eq!(criteria.price_range.max, HIGH_NET_WORTH_PRICE_MAX);
        assert_eq!(
            criteria.specializations,
            vec![Specialization::HighNetWorth, Specialization::RealEstate]
        );
    }

    #[test]
    fn middle_estates_stay_medium() {
        // 300m net worth over a 2-year horizon keeps the budget healthy.
        let criteria = profile(30_000, HousingType::None, 62);
        assert_eq!(criteria.priority, AdvisorPriority::Medium);
        assert_eq!(criteria.specializations, vec![Specialization::MiddleNetWorth]);
        assert_eq!(
            criteria.price_range,
            PriceRange {
                min: BASE_PRICE_MIN,
                max: BASE_PRICE_MAX
            }
        );
    }

    #[test]
    fn thin_budgets_escalate_to_urgent_frugal_planning() {
        // 100m over 40 years leaves 187,500 a month.
        let criteria = profile(10_000, HousingType::None, 100);
        assert_eq!(criteria.priority, AdvisorPriority::Urgent);
        assert_eq!(
            criteria.specializations,
            vec![Specialization::GeneralPlanning, Specialization::FrugalPlanning]
        );
    }

    #[test]
    fn tier_floors_are_exclusive() {
        // Exactly 500m is still the middle tier.
        let criteria = profile(50_000, HousingType::None, 62);
        assert_eq!(criteria.priority, AdvisorPriority::Medium);
        assert_eq!(criteria.specializations, vec![Specialization::MiddleNetWorth]);
    }

    #[test]
    fn urgency_overrides_the_asset_tier_priority() {
        // Wealthy on paper but the home is kept, so the budget is thin.
        let profile = HouseholdProfile {
            age: 60,
            housing_type: HousingType::OwnedLiving,
            home_value: ManWon::new(100_000),
            financial_assets: ManWon::new(5_000),
            ..HouseholdProfile::default()
        };
        let criteria = advisor_criteria(&calculate_results(&profile, 100, false).unwrap());
        assert_eq!(criteria.priority, AdvisorPriority::Urgent);
        assert!(criteria.specializations.contains(&Specialization::HighNetWorth));
        assert!(criteria.specializations.contains(&Specialization::RealEstate));
        assert!(criteria.specializations.contains(&Specialization::FrugalPlanning));
    }

    #[test]
    fn criteria_serialize_with_kebab_case_specializations() {
        let criteria = profile(10_000, HousingType::OwnedLiving, 100);
        let value = serde_json::to_value(&criteria).unwrap();
        assert_eq!(value["priority"], "urgent");
        assert_eq!(value["specializations"][0], "general-planning");
        assert_eq!(value["specializations"][1], "real-estate");
        assert_eq!(value["specializations"][2], "frugal-planning");
        assert_eq!(value["priceRange"]["min"], 30_000);
    }
}

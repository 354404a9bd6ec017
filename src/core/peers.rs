use super::money::ManWon;
use serde::Serialize;

pub const SAMPLE_SIZE: u32 = 127;

pub const HIGH_SPEND_RATIO: f64 = 1.2;
pub const LOW_SPEND_RATIO: f64 = 0.8;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeGroup {
    UnderFifty,
    Fifties,
    Sixties,
    Seventies,
    EightyPlus,
}

pub fn age_group(age: u32) -> AgeGroup {
    if age < 50 {
        AgeGroup::UnderFifty
    } else if age < 60 {
        AgeGroup::Fifties
    } else if age < 70 {
        AgeGroup::Sixties
    } else if age < 80 {
        AgeGroup::Seventies
    } else {
        AgeGroup::EightyPlus
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetBadge {
    UnderOneEok,
    OneToThreeEok,
    ThreeToFiveEok,
    FiveToTenEok,
    TenEokPlus,
}

/// Peer cohort badge from total assets in base currency units. Coarser
/// at the low end than the display band used on the results screen.
pub fn asset_badge(total_assets: f64) -> AssetBadge {
    if total_assets < 100_000_000.0 {
        AssetBadge::UnderOneEok
    } else if total_assets < 300_000_000.0 {
        AssetBadge::OneToThreeEok
    } else if total_assets < 500_000_000.0 {
        AssetBadge::ThreeToFiveEok
    } else if total_assets < 1_000_000_000.0 {
        AssetBadge::FiveToTenEok
    } else {
        AssetBadge::TenEokPlus
    }
}

pub fn spending_multiplier(badge: AssetBadge) -> f64 {
    match badge {
        AssetBadge::UnderOneEok => 0.8,
        AssetBadge::OneToThreeEok => 1.0,
        AssetBadge::ThreeToFiveEok => 1.3,
        AssetBadge::FiveToTenEok => 1.6,
        AssetBadge::TenEokPlus => 2.0,
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Communication,
    Utilities,
    Living,
    Medical,
    Hobby,
}

pub const EXPENSE_CATEGORIES: [ExpenseCategory; 6] = [
    ExpenseCategory::Food,
    ExpenseCategory::Communication,
    ExpenseCategory::Utilities,
    ExpenseCategory::Living,
    ExpenseCategory::Medical,
    ExpenseCategory::Hobby,
];

/// Monthly spending by category, in man-won.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ExpenseProfile {
    pub food: ManWon,
    pub communication: ManWon,
    pub utilities: ManWon,
    pub living: ManWon,
    pub medical: ManWon,
    pub hobby: ManWon,
}

impl ExpenseProfile {
    pub fn amount(&self, category: ExpenseCategory) -> ManWon {
        match category {
            ExpenseCategory::Food => self.food,
            ExpenseCategory::Communication => self.communication,
            ExpenseCategory::Utilities => self.utilities,
            ExpenseCategory::Living => self.living,
            ExpenseCategory::Medical => self.medical,
            ExpenseCategory::Hobby => self.hobby,
        }
    }

    pub fn total(&self) -> ManWon {
        let sum = EXPENSE_CATEGORIES
            .iter()
            .map(|category| self.amount(*category).amount())
            .sum();
        ManWon::new(sum)
    }
}

fn base_pattern(group: AgeGroup) -> ExpenseProfile {
    let (food, communication, utilities, living, medical, hobby) = match group {
        AgeGroup::Fifties => (80, 12, 25, 30, 15, 40),
        AgeGroup::Seventies => (60, 8, 20, 20, 25, 25),
        // Cohorts without their own survey row borrow the sixties one.
        _ => (70, 10, 22, 25, 20, 35),
    };
    ExpenseProfile {
        food: ManWon::new(food),
        communication: ManWon::new(communication),
        utilities: ManWon::new(utilities),
        living: ManWon::new(living),
        medical: ManWon::new(medical),
        hobby: ManWon::new(hobby),
    }
}

/// What a same-age, same-wealth household typically spends each month.
pub fn baseline_expenses(group: AgeGroup, badge: AssetBadge) -> ExpenseProfile {
    let base = base_pattern(group);
    let multiplier = spending_multiplier(badge);
    let scale = |amount: ManWon| ManWon::new((amount.amount() as f64 * multiplier).round() as i64);
    ExpenseProfile {
        food: scale(base.food),
        communication: scale(base.communication),
        utilities: scale(base.utilities),
        living: scale(base.living),
        medical: scale(base.medical),
        hobby: scale(base.hobby),
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonStatus {
    None,
    High,
    Low,
    Average,
}

pub fn comparison_status(household: ManWon, peer: ManWon) -> ComparisonStatus {
    if household.is_zero() {
        return ComparisonStatus::None;
    }
    // A zero peer average makes any spending count as high.
    let ratio = household.won() / peer.won();
    if ratio > HIGH_SPEND_RATIO {
        ComparisonStatus::High
    } else if ratio < LOW_SPEND_RATIO {
        ComparisonStatus::Low
    } else {
        ComparisonStatus::Average
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CategoryComparison {
    pub category: ExpenseCategory,
    pub household: ManWon,
    pub peer: ManWon,
    pub status: ComparisonStatus,
}

pub fn compare_expenses(
    household: &ExpenseProfile,
    peer: &ExpenseProfile,
) -> Vec<CategoryComparison> {
    EXPENSE_CATEGORIES
        .iter()
        .map(|category| {
            let own = household.amount(*category);
            let theirs = peer.amount(*category);
            CategoryComparison {
                category: *category,
                household: own,
                peer: theirs,
                status: comparison_status(own, theirs),
            }
        })
        .collect()
}

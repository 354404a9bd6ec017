use super::money::ManWon;
use serde::Serialize;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HousingType {
    OwnedLiving,
    OwnedRenting,
    Jeonse,
    Monthly,
    #[default]
    None,
}

impl HousingType {
    pub fn from_token(token: &str) -> HousingType {
        match token {
            "owned_living" => HousingType::OwnedLiving,
            "owned_renting" => HousingType::OwnedRenting,
            "jeonse" => HousingType::Jeonse,
            "monthly" => HousingType::Monthly,
            _ => HousingType::None,
        }
    }

    pub fn is_owned(self) -> bool {
        matches!(self, HousingType::OwnedLiving | HousingType::OwnedRenting)
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum RentType {
    Jeonse,
    Monthly,
    #[default]
    None,
}

impl RentType {
    pub fn from_token(token: &str) -> RentType {
        match token {
            "jeonse" => RentType::Jeonse,
            "monthly" => RentType::Monthly,
            _ => RentType::None,
        }
    }
}

/// Everything the household tells us about itself. Amounts are man-won
/// except where a field name says otherwise.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HouseholdProfile {
    pub age: u32,
    pub health: String,
    pub life_mode: String,
    pub housing_type: HousingType,
    pub current_rent_type: RentType,

    pub financial_assets: ManWon,
    pub severance_pay: ManWon,
    pub home_value: ManWon,
    pub home_mortgage: ManWon,
    pub jeonse_deposit: ManWon,
    pub monthly_deposit: ManWon,
    pub monthly_rent: ManWon,
    pub investment_real_estate: ManWon,
    pub investment_loan: ManWon,
    pub current_deposit: ManWon,
    pub current_rent: ManWon,
    pub owned_house_deposit: ManWon,
    pub debt: ManWon,
    pub inheritance: ManWon,

    pub national_pension: ManWon,
    pub private_pension: ManWon,
    pub housing_pension: ManWon,
    pub rental_income: ManWon,
    pub work_income: ManWon,
    pub financial_income: ManWon,
    pub other_income: ManWon,

    pub home_mortgage_interest: ManWon,
    pub investment_loan_interest: ManWon,
    pub debt_interest: ManWon,
    pub deposit_loan_interest: ManWon,
    pub deposit_loan: ManWon,
}

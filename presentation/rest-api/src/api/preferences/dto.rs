use poem_openapi::Enum;

use business::domain::preferences::value_objects::{CalorieFilter, DietaryFilter, Tier, TimeFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum DietaryFilterDto {
    #[oai(rename = "Vegetarian")]
    Vegetarian,
    #[oai(rename = "Vegan")]
    Vegan,
    #[oai(rename = "Gluten Free")]
    GlutenFree,
    #[oai(rename = "Dairy Free")]
    DairyFree,
    #[oai(rename = "Sugar Free")]
    SugarFree,
    #[oai(rename = "No Pork")]
    NoPork,
    #[oai(rename = "No Beef")]
    NoBeef,
    #[oai(rename = "No Peanuts")]
    NoPeanuts,
    #[oai(rename = "No Tree Nuts")]
    NoTreeNuts,
    #[oai(rename = "No Shrimp")]
    NoShrimp,
    #[oai(rename = "No Shellfish")]
    NoShellfish,
    #[oai(rename = "No Fish")]
    NoFish,
    #[oai(rename = "No Soy")]
    NoSoy,
    #[oai(rename = "No Eggs")]
    NoEggs,
    #[oai(rename = "No Sesame")]
    NoSesame,
    #[oai(rename = "Keto")]
    Keto,
    #[oai(rename = "Paleo")]
    Paleo,
    #[oai(rename = "Pescatarian")]
    Pescatarian,
    #[oai(rename = "Low FODMAP")]
    LowFodmap,
}

impl From<DietaryFilterDto> for DietaryFilter {
    fn from(dto: DietaryFilterDto) -> Self {
        match dto {
            DietaryFilterDto::Vegetarian => DietaryFilter::Vegetarian,
            DietaryFilterDto::Vegan => DietaryFilter::Vegan,
            DietaryFilterDto::GlutenFree => DietaryFilter::GlutenFree,
            DietaryFilterDto::DairyFree => DietaryFilter::DairyFree,
            DietaryFilterDto::SugarFree => DietaryFilter::SugarFree,
            DietaryFilterDto::NoPork => DietaryFilter::NoPork,
            DietaryFilterDto::NoBeef => DietaryFilter::NoBeef,
            DietaryFilterDto::NoPeanuts => DietaryFilter::NoPeanuts,
            DietaryFilterDto::NoTreeNuts => DietaryFilter::NoTreeNuts,
            DietaryFilterDto::NoShrimp => DietaryFilter::NoShrimp,
            DietaryFilterDto::NoShellfish => DietaryFilter::NoShellfish,
            DietaryFilterDto::NoFish => DietaryFilter::NoFish,
            DietaryFilterDto::NoSoy => DietaryFilter::NoSoy,
            DietaryFilterDto::NoEggs => DietaryFilter::NoEggs,
            DietaryFilterDto::NoSesame => DietaryFilter::NoSesame,
            DietaryFilterDto::Keto => DietaryFilter::Keto,
            DietaryFilterDto::Paleo => DietaryFilter::Paleo,
            DietaryFilterDto::Pescatarian => DietaryFilter::Pescatarian,
            DietaryFilterDto::LowFodmap => DietaryFilter::LowFodmap,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum TimeFilterDto {
    #[oai(rename = "Under 30 Min")]
    Under30,
    #[oai(rename = "Under 60 Min")]
    Under60,
    #[oai(rename = "Any")]
    Any,
}

impl From<TimeFilterDto> for TimeFilter {
    fn from(dto: TimeFilterDto) -> Self {
        match dto {
            TimeFilterDto::Under30 => TimeFilter::Under30,
            TimeFilterDto::Under60 => TimeFilter::Under60,
            TimeFilterDto::Any => TimeFilter::Any,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum CalorieFilterDto {
    #[oai(rename = "Light")]
    Light,
    #[oai(rename = "Moderate")]
    Moderate,
    #[oai(rename = "Hearty")]
    Hearty,
}

impl From<CalorieFilterDto> for CalorieFilter {
    fn from(dto: CalorieFilterDto) -> Self {
        match dto {
            CalorieFilterDto::Light => CalorieFilter::Light,
            CalorieFilterDto::Moderate => CalorieFilter::Moderate,
            CalorieFilterDto::Hearty => CalorieFilter::Hearty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum TierDto {
    #[oai(rename = "free")]
    Free,
    #[oai(rename = "pro")]
    Pro,
}

impl From<TierDto> for Tier {
    fn from(dto: TierDto) -> Self {
        match dto {
            TierDto::Free => Tier::Free,
            TierDto::Pro => Tier::Pro,
        }
    }
}

pub fn to_dietary_filters(dtos: Vec<DietaryFilterDto>) -> Vec<DietaryFilter> {
    dtos.into_iter().map(DietaryFilter::from).collect()
}

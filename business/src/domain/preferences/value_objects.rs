use serde::{Deserialize, Serialize};

/// Dietary preference a user can toggle on.
///
/// The label returned by [`DietaryFilter::as_str`] is the wire form and the
/// value fingerprints are sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DietaryFilter {
    #[serde(rename = "Vegetarian")]
    Vegetarian,
    #[serde(rename = "Vegan")]
    Vegan,
    #[serde(rename = "Gluten Free")]
    GlutenFree,
    #[serde(rename = "Dairy Free")]
    DairyFree,
    #[serde(rename = "Sugar Free")]
    SugarFree,
    #[serde(rename = "No Pork")]
    NoPork,
    #[serde(rename = "No Beef")]
    NoBeef,
    #[serde(rename = "No Peanuts")]
    NoPeanuts,
    #[serde(rename = "No Tree Nuts")]
    NoTreeNuts,
    #[serde(rename = "No Shrimp")]
    NoShrimp,
    #[serde(rename = "No Shellfish")]
    NoShellfish,
    #[serde(rename = "No Fish")]
    NoFish,
    #[serde(rename = "No Soy")]
    NoSoy,
    #[serde(rename = "No Eggs")]
    NoEggs,
    #[serde(rename = "No Sesame")]
    NoSesame,
    #[serde(rename = "Keto")]
    Keto,
    #[serde(rename = "Paleo")]
    Paleo,
    #[serde(rename = "Pescatarian")]
    Pescatarian,
    #[serde(rename = "Low FODMAP")]
    LowFodmap,
}

impl DietaryFilter {
    pub const ALL: [DietaryFilter; 19] = [
        DietaryFilter::Vegetarian,
        DietaryFilter::Vegan,
        DietaryFilter::GlutenFree,
        DietaryFilter::DairyFree,
        DietaryFilter::SugarFree,
        DietaryFilter::NoPork,
        DietaryFilter::NoBeef,
        DietaryFilter::NoPeanuts,
        DietaryFilter::NoTreeNuts,
        DietaryFilter::NoShrimp,
        DietaryFilter::NoShellfish,
        DietaryFilter::NoFish,
        DietaryFilter::NoSoy,
        DietaryFilter::NoEggs,
        DietaryFilter::NoSesame,
        DietaryFilter::Keto,
        DietaryFilter::Paleo,
        DietaryFilter::Pescatarian,
        DietaryFilter::LowFodmap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryFilter::Vegetarian => "Vegetarian",
            DietaryFilter::Vegan => "Vegan",
            DietaryFilter::GlutenFree => "Gluten Free",
            DietaryFilter::DairyFree => "Dairy Free",
            DietaryFilter::SugarFree => "Sugar Free",
            DietaryFilter::NoPork => "No Pork",
            DietaryFilter::NoBeef => "No Beef",
            DietaryFilter::NoPeanuts => "No Peanuts",
            DietaryFilter::NoTreeNuts => "No Tree Nuts",
            DietaryFilter::NoShrimp => "No Shrimp",
            DietaryFilter::NoShellfish => "No Shellfish",
            DietaryFilter::NoFish => "No Fish",
            DietaryFilter::NoSoy => "No Soy",
            DietaryFilter::NoEggs => "No Eggs",
            DietaryFilter::NoSesame => "No Sesame",
            DietaryFilter::Keto => "Keto",
            DietaryFilter::Paleo => "Paleo",
            DietaryFilter::Pescatarian => "Pescatarian",
            DietaryFilter::LowFodmap => "Low FODMAP",
        }
    }
}

impl std::fmt::Display for DietaryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DietaryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DietaryFilter::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| format!("Invalid dietary filter: {}", s))
    }
}

/// Maximum preparation time a drawn recipe may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFilter {
    #[serde(rename = "Under 30 Min")]
    Under30,
    #[serde(rename = "Under 60 Min")]
    Under60,
    #[serde(rename = "Any")]
    Any,
}

impl std::fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeFilter::Under30 => write!(f, "Under 30 Min"),
            TimeFilter::Under60 => write!(f, "Under 60 Min"),
            TimeFilter::Any => write!(f, "Any"),
        }
    }
}

impl std::str::FromStr for TimeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Under 30 Min" => Ok(TimeFilter::Under30),
            "Under 60 Min" => Ok(TimeFilter::Under60),
            "Any" => Ok(TimeFilter::Any),
            _ => Err(format!("Invalid time filter: {}", s)),
        }
    }
}

/// Calorie band a drawn recipe should fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalorieFilter {
    Light,
    Moderate,
    Hearty,
}

impl std::fmt::Display for CalorieFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalorieFilter::Light => write!(f, "Light"),
            CalorieFilter::Moderate => write!(f, "Moderate"),
            CalorieFilter::Hearty => write!(f, "Hearty"),
        }
    }
}

impl std::str::FromStr for CalorieFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Light" => Ok(CalorieFilter::Light),
            "Moderate" => Ok(CalorieFilter::Moderate),
            "Hearty" => Ok(CalorieFilter::Hearty),
            _ => Err(format!("Invalid calorie filter: {}", s)),
        }
    }
}

/// Subscription tier. Decides the upstream fetch strategy and whether
/// nutrition data reaches the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Free,
    Pro,
}

impl Tier {
    pub fn from_is_pro(is_pro: bool) -> Self {
        if is_pro { Tier::Pro } else { Tier::Free }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Free => write!(f, "free"),
            Tier::Pro => write!(f, "pro"),
        }
    }
}

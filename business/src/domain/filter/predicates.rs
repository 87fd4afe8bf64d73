use crate::domain::preferences::value_objects::{CalorieFilter, DietaryFilter, TimeFilter};
use crate::domain::recipe::model::{Recipe, leading_integer};
use crate::domain::recipe::raw::RawRecipe;

/// Ingredient keywords that exclude a recipe while the filter is active.
///
/// Matching is plain substring matching, so "egg" also rules out "eggplant".
/// Filters without keywords are enforced upstream only.
pub fn exclusion_keywords(filter: DietaryFilter) -> &'static [&'static str] {
    match filter {
        DietaryFilter::NoPork => &[
            "pork", "bacon", "ham", "lard", "prosciutto", "pancetta", "salami", "chorizo",
            "sausage",
        ],
        DietaryFilter::NoBeef => &["beef", "steak", "brisket", "veal", "ground beef"],
        DietaryFilter::NoPeanuts => &["peanut", "peanut butter"],
        DietaryFilter::NoTreeNuts => &[
            "almond",
            "walnut",
            "cashew",
            "pecan",
            "pistachio",
            "hazelnut",
            "macadamia",
            "pine nut",
        ],
        DietaryFilter::NoShrimp => &["shrimp", "prawn"],
        DietaryFilter::NoShellfish => &[
            "shellfish", "crab", "lobster", "clam", "oyster", "scallop", "mussel", "shrimp",
            "prawn",
        ],
        DietaryFilter::NoFish => &[
            "fish", "salmon", "tuna", "cod", "tilapia", "halibut", "trout", "anchovy", "sardine",
        ],
        DietaryFilter::NoSoy => &["soy", "tofu", "tempeh", "edamame", "miso", "tamari"],
        DietaryFilter::NoEggs => &["egg", "eggs", "yolk"],
        DietaryFilter::NoSesame => &["sesame", "tahini"],
        _ => &[],
    }
}

/// Scans raw ingredient names and phrases for excluded keywords.
///
/// Returns `false` as soon as any active filter's keyword appears anywhere in
/// the lowercased ingredient text.
pub fn ingredient_exclusion_passes(raw: &RawRecipe, dietary: &[DietaryFilter]) -> bool {
    let haystack = raw
        .extended_ingredients
        .iter()
        .map(|ingredient| format!("{} {}", ingredient.name, ingredient.original))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    !dietary
        .iter()
        .flat_map(|filter| exclusion_keywords(*filter))
        .any(|keyword| haystack.contains(keyword))
}

/// Unparseable times pass.
pub fn time_filter_passes(recipe: &Recipe, time: TimeFilter) -> bool {
    let limit = match time {
        TimeFilter::Any => return true,
        TimeFilter::Under30 => 30,
        TimeFilter::Under60 => 60,
    };
    match leading_integer(&recipe.time) {
        Some(minutes) => minutes <= limit,
        None => true,
    }
}

/// Recipes without calorie data (or with unparseable calories) always pass.
pub fn calorie_filter_passes(recipe: &Recipe, calories: CalorieFilter) -> bool {
    if !recipe.has_calorie_data() {
        return true;
    }
    let Some(cal) = leading_integer(&recipe.calories) else {
        return true;
    };
    match calories {
        CalorieFilter::Light => cal < 400,
        CalorieFilter::Moderate => (400..=700).contains(&cal),
        CalorieFilter::Hearty => cal > 700,
    }
}

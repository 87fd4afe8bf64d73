use crate::domain::preferences::value_objects::{DietaryFilter, Tier};

/// Tag always requested from the random endpoint.
pub const BASE_INCLUDE_TAG: &str = "main+course";
/// Dish type always requested from the search endpoint.
pub const BASE_DISH_TYPE: &str = "main course";

/// Query for the tag-based (free tier) random endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagQuery {
    pub include_tags: String,
    /// Empty when nothing is excluded; callers omit the parameter then.
    pub exclude_tags: String,
}

/// Query for the diet/intolerance based (pro tier) search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub dish_type: String,
    pub diet: String,
    pub intolerances: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamQuery {
    Tags(TagQuery),
    Search(SearchQuery),
}

fn include_tag(filter: DietaryFilter) -> Option<&'static str> {
    match filter {
        DietaryFilter::Vegetarian => Some("vegetarian"),
        DietaryFilter::Vegan => Some("vegan"),
        DietaryFilter::GlutenFree => Some("gluten+free"),
        DietaryFilter::DairyFree => Some("dairy+free"),
        DietaryFilter::Keto => Some("ketogenic"),
        DietaryFilter::Paleo => Some("paleo"),
        DietaryFilter::Pescatarian => Some("pescatarian"),
        DietaryFilter::LowFodmap => Some("fodmap+friendly"),
        _ => None,
    }
}

fn exclude_tag(filter: DietaryFilter) -> Option<&'static str> {
    match filter {
        DietaryFilter::NoPork => Some("pork"),
        DietaryFilter::NoBeef => Some("beef"),
        DietaryFilter::NoPeanuts => Some("peanuts"),
        DietaryFilter::NoTreeNuts => Some("tree+nuts"),
        DietaryFilter::NoShrimp => Some("shrimp"),
        DietaryFilter::NoShellfish => Some("shellfish"),
        DietaryFilter::NoFish => Some("fish"),
        DietaryFilter::NoSoy => Some("soy"),
        DietaryFilter::NoEggs => Some("eggs"),
        DietaryFilter::NoSesame => Some("sesame"),
        _ => None,
    }
}

fn diet_param(filter: DietaryFilter) -> Option<&'static str> {
    match filter {
        DietaryFilter::Vegetarian => Some("vegetarian"),
        DietaryFilter::Vegan => Some("vegan"),
        DietaryFilter::GlutenFree => Some("gluten free"),
        DietaryFilter::DairyFree => Some("dairy free"),
        DietaryFilter::Keto => Some("ketogenic"),
        DietaryFilter::Paleo => Some("paleo"),
        DietaryFilter::Pescatarian => Some("pescetarian"),
        DietaryFilter::LowFodmap => Some("fodmap"),
        _ => None,
    }
}

fn intolerance(filter: DietaryFilter) -> Option<&'static str> {
    match filter {
        DietaryFilter::NoPeanuts => Some("peanut"),
        DietaryFilter::NoTreeNuts => Some("tree nut"),
        DietaryFilter::NoShellfish => Some("shellfish"),
        DietaryFilter::NoFish => Some("seafood"),
        DietaryFilter::NoShrimp => Some("shellfish"),
        DietaryFilter::NoSoy => Some("soy"),
        DietaryFilter::NoEggs => Some("egg"),
        DietaryFilter::NoSesame => Some("sesame"),
        DietaryFilter::NoPork => Some("pork"),
        DietaryFilter::NoBeef => Some("red meat"),
        _ => None,
    }
}

/// Joins mapped values with "," keeping first-seen order and dropping repeats.
fn join_unique(
    dietary: &[DietaryFilter],
    mapping: fn(DietaryFilter) -> Option<&'static str>,
) -> String {
    let mut values: Vec<&str> = Vec::new();
    for value in dietary.iter().filter_map(|filter| mapping(*filter)) {
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values.join(",")
}

pub fn build_tag_query(dietary: &[DietaryFilter]) -> TagQuery {
    let mut include = vec![BASE_INCLUDE_TAG];
    let mut exclude = Vec::new();

    for filter in dietary {
        if let Some(tag) = include_tag(*filter) {
            include.push(tag);
        }
        if let Some(tag) = exclude_tag(*filter) {
            exclude.push(tag);
        }
    }

    TagQuery {
        include_tags: include.join(","),
        exclude_tags: exclude.join(","),
    }
}

pub fn build_search_query(dietary: &[DietaryFilter]) -> SearchQuery {
    SearchQuery {
        dish_type: BASE_DISH_TYPE.to_string(),
        diet: join_unique(dietary, diet_param),
        intolerances: join_unique(dietary, intolerance),
    }
}

/// Picks the query variant for the tier's fetch strategy.
pub fn build_upstream_query(dietary: &[DietaryFilter], tier: Tier) -> UpstreamQuery {
    match tier {
        Tier::Free => UpstreamQuery::Tags(build_tag_query(dietary)),
        Tier::Pro => UpstreamQuery::Search(build_search_query(dietary)),
    }
}

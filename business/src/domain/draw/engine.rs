use std::collections::{HashMap, HashSet};

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use uuid::Builder;

use crate::domain::draw::model::{DrawRequest, PlanDay, SharedIngredient, WEEK_DAYS, WeeklyPlan};
use crate::domain::errors::ApiError;
use crate::domain::filter::predicates::{calorie_filter_passes, time_filter_passes};
use crate::domain::pool::model::Pool;
use crate::domain::recipe::model::Recipe;

/// Recipes in the pool that satisfy the request's time and calorie filters.
/// Dietary exclusion already happened when the pool was built.
fn candidates<'a>(pool: Option<&'a Pool>, request: &DrawRequest) -> Result<Vec<&'a Recipe>, ApiError> {
    let pool = match pool {
        Some(pool) if !pool.is_empty() => pool,
        _ => return Err(ApiError::empty_pool()),
    };

    Ok(pool
        .recipes()
        .iter()
        .filter(|recipe| time_filter_passes(recipe, request.time))
        .filter(|recipe| calorie_filter_passes(recipe, request.calories))
        .collect())
}

/// Picks one recipe uniformly among the pool entries matching the request.
pub fn draw_one<R: Rng + ?Sized>(
    pool: Option<&Pool>,
    request: &DrawRequest,
    rng: &mut R,
) -> Result<Recipe, ApiError> {
    let candidates = candidates(pool, request)?;

    candidates
        .choose(rng)
        .map(|recipe| (*recipe).clone())
        .ok_or_else(ApiError::no_matching_recipes)
}

/// Draws seven distinct recipes, Monday to Sunday.
pub fn draw_week<R: Rng + ?Sized>(
    pool: Option<&Pool>,
    request: &DrawRequest,
    rng: &mut R,
) -> Result<WeeklyPlan, ApiError> {
    let mut candidates = candidates(pool, request)?;
    if candidates.len() < WEEK_DAYS.len() {
        return Err(ApiError::not_enough_for_week(candidates.len()));
    }

    candidates.shuffle(rng);
    let picked: Vec<Recipe> = candidates
        .into_iter()
        .take(WEEK_DAYS.len())
        .cloned()
        .collect();

    let shared_ingredients = shared_ingredients(&picked);
    // Raw line counts; duplicates inside one recipe are not collapsed here.
    let total_items: usize = picked.iter().map(Recipe::ingredient_count).sum();
    let saved: usize = shared_ingredients.iter().map(|s| s.count - 1).sum();

    let days = WEEK_DAYS
        .iter()
        .zip(picked)
        .map(|(day, recipe)| PlanDay {
            day: day.to_string(),
            recipe,
        })
        .collect();

    Ok(WeeklyPlan {
        id: format!("wp-{}", Builder::from_random_bytes(rng.random()).into_uuid()),
        days,
        shared_ingredients,
        total_items,
        reduced_items: total_items.saturating_sub(saved),
    })
}

/// Ingredient names used by two or more recipes, most shared first.
pub fn shared_ingredients(recipes: &[Recipe]) -> Vec<SharedIngredient> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for recipe in recipes {
        let mut seen_here = HashSet::new();
        for ingredient in recipe.ingredients.iter().flatten() {
            let key = ingredient.name.trim().to_lowercase();
            if key.is_empty() || !seen_here.insert(key.clone()) {
                continue;
            }
            let count = counts.entry(key.clone()).or_insert(0);
            if *count == 0 {
                first_seen.push(key);
            }
            *count += 1;
        }
    }

    let mut shared: Vec<SharedIngredient> = first_seen
        .into_iter()
        .filter_map(|key| {
            let count = counts.get(&key).copied().unwrap_or(0);
            (count >= 2).then(|| SharedIngredient {
                name: title_case(&key),
                count,
            })
        })
        .collect();
    // sort_by is stable, ties keep first-seen order
    shared.sort_by(|a, b| b.count.cmp(&a.count));
    shared
}

fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ApiErrorCode;
    use crate::domain::preferences::value_objects::{CalorieFilter, Tier, TimeFilter};
    use crate::domain::recipe::model::{CALORIES_UNKNOWN, Ingredient};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ingredient(name: &str) -> Ingredient {
        Ingredient {
            id: 0,
            name: name.to_string(),
            amount: 1.0,
            unit: String::new(),
            original: name.to_string(),
        }
    }

    fn recipe(id: u32, minutes: u32, calories: Option<u32>, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: format!("Recipe {}", id),
            time: format!("{} min", minutes),
            calories: calories.map_or(CALORIES_UNKNOWN.to_string(), |c| format!("{} cal", c)),
            servings: "2 servings".to_string(),
            description: String::new(),
            tags: vec![],
            emoji: "🍲".to_string(),
            image_url: None,
            ingredients: Some(ingredients.iter().map(|name| ingredient(name)).collect()),
            instructions: None,
            rating: None,
            source_url: None,
        }
    }

    fn request(time: TimeFilter, calories: CalorieFilter) -> DrawRequest {
        DrawRequest {
            dietary: vec![],
            time,
            calories,
            tier: Tier::Free,
        }
    }

    fn any_request() -> DrawRequest {
        request(TimeFilter::Any, CalorieFilter::Moderate)
    }

    fn pool_of(count: u32) -> Pool {
        Pool::new(
            (0..count)
                .map(|i| recipe(i, 20, None, &["salt", "pepper"]))
                .collect(),
        )
    }

    #[test]
    fn should_fail_with_empty_pool_when_absent() {
        let mut rng = StdRng::seed_from_u64(1);

        let one = draw_one(None, &any_request(), &mut rng).unwrap_err();
        let week = draw_week(None, &any_request(), &mut rng).unwrap_err();

        assert_eq!(one.code, ApiErrorCode::EmptyPool);
        assert_eq!(week.code, ApiErrorCode::EmptyPool);
    }

    #[test]
    fn should_fail_with_empty_pool_when_pool_has_no_recipes() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = Pool::default();

        let err = draw_one(Some(&pool), &any_request(), &mut rng).unwrap_err();

        assert_eq!(err.code, ApiErrorCode::EmptyPool);
    }

    #[test]
    fn should_fail_with_no_matching_when_filters_exclude_everything() {
        // Arrange
        let mut rng = StdRng::seed_from_u64(7);
        let pool = Pool::new(vec![
            recipe(1, 45, Some(300), &[]),
            recipe(2, 90, Some(900), &[]),
        ]);

        // Act
        let err = draw_one(
            Some(&pool),
            &request(TimeFilter::Under30, CalorieFilter::Moderate),
            &mut rng,
        )
        .unwrap_err();

        // Assert
        assert_eq!(err.code, ApiErrorCode::NoMatchingRecipes);
    }

    #[test]
    fn should_only_draw_matching_recipes() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = Pool::new(vec![
            recipe(1, 45, Some(300), &[]),
            recipe(2, 25, Some(350), &[]),
            recipe(3, 20, Some(900), &[]),
        ]);
        let req = request(TimeFilter::Under30, CalorieFilter::Light);

        for _ in 0..20 {
            let drawn = draw_one(Some(&pool), &req, &mut rng).unwrap();
            assert_eq!(drawn.id, "2");
        }
    }

    #[test]
    fn should_keep_recipes_without_calorie_data() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = Pool::new(vec![recipe(1, 20, None, &[])]);

        let drawn = draw_one(
            Some(&pool),
            &request(TimeFilter::Any, CalorieFilter::Hearty),
            &mut rng,
        )
        .unwrap();

        assert_eq!(drawn.calories, CALORIES_UNKNOWN);
    }

    #[test]
    fn should_be_reproducible_with_same_seed() {
        let pool = pool_of(20);

        let first = draw_one(Some(&pool), &any_request(), &mut StdRng::seed_from_u64(42)).unwrap();
        let second = draw_one(Some(&pool), &any_request(), &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn should_refuse_week_with_six_candidates() {
        let mut rng = StdRng::seed_from_u64(9);
        let pool = pool_of(6);

        let err = draw_week(Some(&pool), &any_request(), &mut rng).unwrap_err();

        assert_eq!(err.code, ApiErrorCode::NoMatchingRecipes);
        assert!(err.message.contains("7-day plan"));
        assert_ne!(err.message, ApiError::no_matching_recipes().message);
    }

    #[test]
    fn should_draw_week_with_seven_candidates() {
        let mut rng = StdRng::seed_from_u64(9);
        let pool = pool_of(7);

        let plan = draw_week(Some(&pool), &any_request(), &mut rng).unwrap();

        let days: Vec<&str> = plan.days.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(days, WEEK_DAYS.to_vec());
        let ids: HashSet<&str> = plan.days.iter().map(|d| d.recipe.id.as_str()).collect();
        assert_eq!(ids.len(), 7);
        assert!(plan.id.starts_with("wp-"));
    }

    #[test]
    fn should_count_shared_ingredients() {
        // Arrange: garlic in 5 recipes (twice in one), 10 lines per recipe
        let mut rng = StdRng::seed_from_u64(11);
        let recipes: Vec<Recipe> = (0..7)
            .map(|i| {
                let mut names: Vec<String> = (0..10).map(|n| format!("item-{}-{}", i, n)).collect();
                if i < 5 {
                    names[0] = "garlic".to_string();
                }
                if i == 0 {
                    names[1] = " Garlic ".to_string();
                }
                let refs: Vec<&str> = names.iter().map(String::as_str).collect();
                recipe(i, 20, None, &refs)
            })
            .collect();
        let pool = Pool::new(recipes);

        // Act
        let plan = draw_week(Some(&pool), &any_request(), &mut rng).unwrap();

        // Assert
        assert_eq!(
            plan.shared_ingredients,
            vec![SharedIngredient {
                name: "Garlic".to_string(),
                count: 5
            }]
        );
        assert_eq!(plan.total_items, 70);
        assert_eq!(plan.reduced_items, 66);
    }

    #[test]
    fn should_sort_shared_ingredients_by_count_then_first_seen() {
        let recipes = vec![
            recipe(1, 20, None, &["soy sauce", "olive oil", "garlic"]),
            recipe(2, 20, None, &["olive oil", "soy sauce"]),
            recipe(3, 20, None, &["garlic", "olive oil"]),
            recipe(4, 20, None, &["rice"]),
        ];

        let shared = shared_ingredients(&recipes);

        let names: Vec<(&str, usize)> = shared.iter().map(|s| (s.name.as_str(), s.count)).collect();
        assert_eq!(
            names,
            vec![("Olive Oil", 3), ("Soy Sauce", 2), ("Garlic", 2)]
        );
    }

    #[test]
    fn should_ignore_missing_ingredient_lists() {
        let mut bare = recipe(1, 20, None, &[]);
        bare.ingredients = None;

        assert!(shared_ingredients(&[bare.clone(), bare]).is_empty());
    }
}

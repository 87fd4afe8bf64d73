use serde::{Deserialize, Serialize};

/// Calories marker for recipes without nutrition data.
pub const CALORIES_UNKNOWN: &str = "—";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub original: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
}

/// Display-ready recipe, identical in shape whether it came from the live API
/// or from the fixture table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    /// e.g. "25 min"
    pub time: String,
    /// "420 cal" or [`CALORIES_UNKNOWN`]
    pub calories: String,
    pub servings: String,
    pub description: String,
    pub tags: Vec<String>,
    pub emoji: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Ingredient>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<RecipeStep>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl Recipe {
    pub fn has_calorie_data(&self) -> bool {
        self.calories != CALORIES_UNKNOWN
    }

    /// Number of raw ingredient lines, duplicates included.
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.as_ref().map_or(0, Vec::len)
    }
}

/// Parses the leading integer of a display string ("25 min" -> 25).
///
/// Returns `None` when the string does not start with digits.
pub fn leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_leading_integer_of_display_strings() {
        assert_eq!(leading_integer("25 min"), Some(25));
        assert_eq!(leading_integer("  420 cal"), Some(420));
        assert_eq!(leading_integer("-3 min"), Some(-3));
        assert_eq!(leading_integer("90"), Some(90));
    }

    #[test]
    fn should_return_none_for_non_numeric_strings() {
        assert_eq!(leading_integer(CALORIES_UNKNOWN), None);
        assert_eq!(leading_integer("about 20 min"), None);
        assert_eq!(leading_integer(""), None);
    }
}

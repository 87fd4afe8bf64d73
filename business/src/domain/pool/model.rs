use crate::domain::recipe::model::Recipe;

/// Default number of recipes requested for one pool.
pub const DEFAULT_POOL_SIZE: usize = 50;

/// Candidate recipes cached under one fingerprint. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pool {
    recipes: Vec<Recipe>,
}

impl Pool {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn into_recipes(self) -> Vec<Recipe> {
        self.recipes
    }
}

impl From<Vec<Recipe>> for Pool {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self::new(recipes)
    }
}

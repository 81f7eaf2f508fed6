//! RecipeBook entity - the session's ordered recipe collection
//!
//! The book is the only owner of recipes for the life of the process.
//! Recipes are addressed by 1-based menu number.

use super::Recipe;

#[derive(Debug, Default)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Sort ascending by name, case-sensitive. Equal names keep insertion order.
    pub fn sort_by_name(&mut self) {
        self.recipes.sort_by(|a, b| a.name().cmp(b.name()));
    }

    /// Look up a recipe by its 1-based menu number
    pub fn get(&self, number: usize) -> Option<&Recipe> {
        number.checked_sub(1).and_then(|i| self.recipes.get(i))
    }

    pub fn get_mut(&mut self, number: usize) -> Option<&mut Recipe> {
        number.checked_sub(1).and_then(|i| self.recipes.get_mut(i))
    }

    /// Drop every recipe in the book
    pub fn clear(&mut self) {
        self.recipes.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.recipes.iter().map(Recipe::name).collect()
    }

    /// Numbered menu lines, `1. Name`
    pub fn menu_lines(&self) -> Vec<String> {
        self.recipes
            .iter()
            .enumerate()
            .map(|(i, recipe)| format!("{}. {}", i + 1, recipe.name()))
            .collect()
    }
}

impl FromIterator<Recipe> for RecipeBook {
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        Self {
            recipes: iter.into_iter().collect(),
        }
    }
}

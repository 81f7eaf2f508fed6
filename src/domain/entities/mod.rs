//! Domain Entities
//!
//! - `Ingredient` - one entry of a recipe's ingredient list
//! - `Recipe` - ingredients, steps, scale and calorie observers
//! - `RecipeBook` - the ordered collection a session owns

mod ingredient;
mod recipe;
mod recipe_book;

pub use ingredient::Ingredient;
pub use recipe::Recipe;
pub use recipe_book::RecipeBook;

//! Session Use Case
//!
//! Drives the three phases of a session over a `Console`:
//! 1. Collect recipes until the exit word
//! 2. Sort the book by name (stable, case-sensitive)
//! 3. Browse: pick a recipe by number, then scale, reset, clear or go back
//!
//! The recipe book is owned by `run` and lent to each phase.

use std::io::{BufRead, Write};

use crate::domain::entities::{Recipe, RecipeBook};
use crate::error::{NumberKind, RecipeResult};
use crate::infrastructure::console::{parse_number, Console};

use super::observer::CalorieWarning;
use super::options::SessionOptions;
use super::result::{BrowseOutcome, SessionSummary};

/// Session use case - orchestrates collection, sorting and browsing
pub struct SessionUseCase {
    options: SessionOptions,
}

impl SessionUseCase {
    pub fn new(options: SessionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Run a full session
    pub fn run<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> RecipeResult<SessionSummary> {
        let mut book = RecipeBook::new();
        let mut summary = SessionSummary::default();

        self.collect(console, &mut book)?;
        summary.collected = book.len();

        book.sort_by_name();
        tracing::debug!(recipes = ?book.names(), "sorted recipe book");

        self.browse(console, &mut book, &mut summary)?;
        summary.remaining = book.len();

        tracing::info!(
            collected = summary.collected,
            remaining = summary.remaining,
            renders = summary.renders,
            "session finished"
        );
        Ok(summary)
    }

    /// Phase 1: read recipes until the exit word or end of input
    pub fn collect<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        book: &mut RecipeBook,
    ) -> RecipeResult<()> {
        let prompt = self.options.recipe_name_prompt();
        while let Some(name) = console.ask(&prompt)? {
            if name == self.options.commands.exit {
                break;
            }
            let recipe = self.read_recipe(console, name)?;
            tracing::info!(
                recipe = recipe.name(),
                ingredients = recipe.ingredients().len(),
                steps = recipe.steps().len(),
                "recipe added"
            );
            book.push(recipe);
        }
        Ok(())
    }

    fn read_recipe<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        name: String,
    ) -> RecipeResult<Recipe> {
        let mut recipe = Recipe::new(name).with_threshold(self.options.threshold);
        recipe.subscribe(CalorieWarning);

        let ingredient_count: usize = console.ask_number(
            "Enter number of ingredients:",
            "number of ingredients",
            NumberKind::Integer,
        )?;
        for _ in 0..ingredient_count {
            let name = console.ask_required("Enter ingredient name:")?;
            let quantity: f64 = console.ask_number(
                "Enter ingredient quantity:",
                "ingredient quantity",
                NumberKind::Decimal,
            )?;
            let unit = console.ask_required("Enter ingredient unit:")?;
            let calories: i64 = console.ask_number(
                "Enter ingredient calories:",
                "ingredient calories",
                NumberKind::Integer,
            )?;
            let food_group = console.ask_required("Enter ingredient food group:")?;
            recipe.add_ingredient(name, quantity, unit, calories, food_group);
        }

        let step_count: usize = console.ask_number(
            "Enter number of steps:",
            "number of steps",
            NumberKind::Integer,
        )?;
        for _ in 0..step_count {
            recipe.add_step(console.ask_required("Enter step description:")?);
        }

        Ok(recipe)
    }

    /// Phase 3: numbered menu until the exit word or end of input.
    ///
    /// Numbers outside the menu are ignored and the menu is shown again.
    pub fn browse<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        book: &mut RecipeBook,
        summary: &mut SessionSummary,
    ) -> RecipeResult<()> {
        let prompt = self.options.menu_prompt();
        loop {
            console.say("")?;
            console.say("Recipes:")?;
            for line in book.menu_lines() {
                console.say(&line)?;
            }
            console.say("")?;

            let Some(number) = self.ask_selection(console, &prompt)? else {
                break;
            };

            let selected = usize::try_from(number)
                .ok()
                .filter(|n| book.get(*n).is_some());
            let Some(number) = selected else {
                tracing::debug!(number, available = book.len(), "selection out of range");
                continue;
            };

            if self.browse_recipe(console, book, number, summary)? == BrowseOutcome::Cleared {
                summary.cleared = true;
            }
        }
        Ok(())
    }

    /// Read a menu answer. `None` means exit or end of input.
    ///
    /// Unparseable answers re-ask only the prompt line, not the menu.
    fn ask_selection<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        prompt: &str,
    ) -> RecipeResult<Option<i64>> {
        loop {
            let Some(input) = console.ask(prompt)? else {
                return Ok(None);
            };
            if input == self.options.commands.exit {
                return Ok(None);
            }
            match parse_number(&input, "recipe number", NumberKind::Integer) {
                Ok(number) => return Ok(Some(number)),
                Err(err) => console.reject(err)?,
            }
        }
    }

    /// Inner loop for one recipe: scale factor, reset, clear or back
    pub fn browse_recipe<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        book: &mut RecipeBook,
        number: usize,
        summary: &mut SessionSummary,
    ) -> RecipeResult<BrowseOutcome> {
        let commands = &self.options.commands;
        let prompt = self.options.scale_prompt();

        let Some(recipe) = book.get(number) else {
            return Ok(BrowseOutcome::Back);
        };
        console.say(&recipe.render())?;
        summary.renders += 1;

        loop {
            console.say("")?;
            let input = console.ask_required(&prompt)?;

            if input == commands.back {
                return Ok(BrowseOutcome::Back);
            }
            if input == commands.clear {
                tracing::info!(removed = book.len(), "recipe book cleared");
                book.clear();
                return Ok(BrowseOutcome::Cleared);
            }

            let Some(recipe) = book.get_mut(number) else {
                return Ok(BrowseOutcome::Back);
            };
            if input == commands.reset {
                recipe.reset_scale();
                tracing::info!(recipe = recipe.name(), "scale reset");
            } else {
                match parse_number::<f64>(&input, "scale factor", NumberKind::Decimal) {
                    Ok(factor) => {
                        recipe.scale(factor);
                        tracing::info!(recipe = recipe.name(), factor, "recipe scaled");
                    }
                    Err(err) => {
                        console.reject(err)?;
                        continue;
                    }
                }
            }

            console.say(&recipe.render())?;
            summary.renders += 1;
        }
    }
}

impl Default for SessionUseCase {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

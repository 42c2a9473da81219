use serde::{Deserialize, Serialize};
use std::fmt;

/// Which page an operation originates from, and which collection a view shows.
///
/// `Primary` is the catalog-wide list. `Secondary` is the "added on this page"
/// list, which only lives as long as the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Context {
    #[default]
    Primary,
    Secondary,
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Context::Primary => write!(f, "home"),
            Context::Secondary => write!(f, "add"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub name: String,
    pub ingredients: String,
    // Older payloads may omit the image entirely
    #[serde(default)]
    pub image: String,
}

impl Recipe {
    pub fn new(id: u64, name: impl Into<String>, ingredients: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ingredients: ingredients.into(),
            image: String::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Splits the ingredients on commas, dropping empty entries.
    pub fn ingredient_list(&self) -> Vec<&str> {
        self.ingredients
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn apply(&mut self, draft: &Draft) {
        self.name = draft.name.clone();
        self.ingredients = draft.ingredients.clone();
        self.image = draft.image.clone();
    }
}

/// The form buffer for a recipe being created or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub ingredients: String,
    pub image: String,
}

impl Draft {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            image: recipe.image.clone(),
        }
    }

    /// A draft can only be committed when both name and ingredients have
    /// non-whitespace content.
    pub fn is_committable(&self) -> bool {
        !self.name.trim().is_empty() && !self.ingredients.trim().is_empty()
    }

    pub fn merge(&mut self, update: DraftUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(ingredients) = update.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
    }

    pub(crate) fn to_recipe(&self, id: u64) -> Recipe {
        Recipe {
            id,
            name: self.name.clone(),
            ingredients: self.ingredients.clone(),
            image: self.image.clone(),
        }
    }

    pub(crate) fn apply_to(&self, recipe: &mut Recipe) {
        recipe.apply(self);
    }
}

/// Partial update for a [`Draft`]. Fields left as `None` are untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftUpdate {
    pub name: Option<String>,
    pub ingredients: Option<String>,
    pub image: Option<String>,
}

impl DraftUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.ingredients.is_none() && self.image.is_none()
    }
}

/// The collection used when nothing has been persisted yet.
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(1, "Spaghetti Bolognese", "Pasta, Tomato, Beef, Cheese"),
        Recipe::new(2, "Pancakes", "Flour, Milk, Eggs, Syrup"),
    ]
}

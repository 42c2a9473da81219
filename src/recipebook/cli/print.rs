use colored::Colorize;
use recipebook::api::{CmdMessage, MessageLevel};
use recipebook::config::RecipeConfig;
use recipebook::model::{Draft, Recipe};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const IMAGE_MARKER: &str = "▣";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    let id_width = recipes
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(1);

    for recipe in recipes {
        let idx_str = format!("{:>width$}. ", recipe.id, width = id_width);
        let marker = if recipe.image.is_empty() {
            "  ".to_string()
        } else {
            format!("{} ", IMAGE_MARKER)
        };

        let fixed_width = 4 + idx_str.width() + marker.width();
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let name = truncate_to_width(&recipe.name, available);
        let rest = available.saturating_sub(name.width() + 2);
        let ingredients: String = recipe
            .ingredients
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let ingredients = truncate_to_width(&ingredients, rest);

        println!(
            "    {}{}{}  {}",
            idx_str.yellow(),
            marker,
            name.bold(),
            ingredients.dimmed()
        );
    }
}

pub fn print_full_recipe(recipe: &Recipe) {
    println!("{} {}", format!("{}.", recipe.id).yellow(), recipe.name.bold());
    println!("--------------------------------");
    for item in recipe.ingredient_list() {
        println!("  - {}", item);
    }
    if !recipe.image.is_empty() {
        println!("{} {}", IMAGE_MARKER, recipe.image.dimmed());
    }
}

pub fn print_draft(draft: &Draft, editing: Option<u64>) {
    match editing {
        Some(id) => println!("{}", format!("Editing recipe {}", id).yellow()),
        None => println!("{}", "New recipe".yellow()),
    }
    println!("  name:        {}", draft.name);
    println!("  ingredients: {}", draft.ingredients);
    println!("  image:       {}", draft.image);
}

pub fn print_config(config: &RecipeConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key, value);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

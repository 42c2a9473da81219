use clap::Parser;
use recipebook::api::{self, ConfigAction};
use recipebook::error::{RecipeError, Result};
use recipebook::init::{initialize, RecipeContext};
use recipebook::model::{Context, DraftUpdate};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{print_config, print_full_recipe, print_messages, print_recipes};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = initialize(cli.data_dir.as_deref())?;

    match cli.command {
        None => handle_list(&mut ctx, None),
        Some(Commands::List { search }) => handle_list(&mut ctx, search),
        Some(Commands::Add {
            name,
            ingredients,
            image,
        }) => handle_add(&mut ctx, name, ingredients, image),
        Some(Commands::Update {
            id,
            name,
            ingredients,
            image,
        }) => handle_update(&mut ctx, id, name, ingredients, image),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::View { id }) => handle_view(&ctx, id),
        Some(Commands::Shell) => handle_shell(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Path) => handle_path(&ctx),
    }
}

fn handle_list(ctx: &mut RecipeContext, search: Option<String>) -> Result<()> {
    if let Some(term) = search {
        ctx.api.set_search_term(term);
    }
    let result = ctx.api.visible(Context::Primary);
    print_recipes(&result.listed_recipes);
    Ok(())
}

fn handle_add(
    ctx: &mut RecipeContext,
    name: String,
    ingredients: String,
    image: Option<String>,
) -> Result<()> {
    let mut update = DraftUpdate::new().name(name).ingredients(ingredients);
    if let Some(image) = image {
        update = update.image(image);
    }
    ctx.api.set_draft(update);
    commit_or_fail(ctx)
}

fn handle_update(
    ctx: &mut RecipeContext,
    id: u64,
    name: Option<String>,
    ingredients: Option<String>,
    image: Option<String>,
) -> Result<()> {
    let update = DraftUpdate {
        name,
        ingredients,
        image,
    };
    if update.is_empty() {
        return Err(RecipeError::InvalidRecipe(
            "Nothing to update: pass --name, --ingredients or --image".to_string(),
        ));
    }

    if ctx.api.begin_edit_by_id(id).is_none() {
        return Err(RecipeError::RecipeNotFound(id));
    }
    ctx.api.set_draft(update);
    commit_or_fail(ctx)
}

/// Commit the draft from the home page, turning a rejected draft into an
/// error so scripts see a non-zero exit.
fn commit_or_fail(ctx: &mut RecipeContext) -> Result<()> {
    let result = ctx.api.commit(Context::Primary);
    if result.has_warnings() {
        let reason = result
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(RecipeError::InvalidRecipe(reason));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut RecipeContext, ids: Vec<u64>) -> Result<()> {
    for id in ids {
        let result = ctx.api.delete_recipe(id);
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_view(ctx: &RecipeContext, id: u64) -> Result<()> {
    let recipe = ctx.api.find(id).ok_or(RecipeError::RecipeNotFound(id))?;
    print_full_recipe(recipe);
    Ok(())
}

fn handle_shell(ctx: &mut RecipeContext) -> Result<()> {
    let stdin = std::io::stdin();
    cli::session::run(&mut ctx.api, stdin.lock())
}

fn handle_config(ctx: &RecipeContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api::config(&ctx.paths, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &RecipeContext) -> Result<()> {
    println!("{}", ctx.api.data_location().display());
    Ok(())
}

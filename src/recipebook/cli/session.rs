//! Interactive session: one command per line against a single live
//! [`RecipeApi`], so the draft, the edit pointer and the recipes added on the
//! "add" page survive between commands.

use super::print::{print_draft, print_messages, print_recipes};
use colored::Colorize;
use recipebook::api::RecipeApi;
use recipebook::error::{RecipeError, Result};
use recipebook::model::{Context, DraftUpdate};
use recipebook::store::KeyValueStore;
use std::io::{BufRead, IsTerminal, Write};

const HELP: &str = "\
Commands:
  name TEXT          set the draft name
  ingredients TEXT   set the draft ingredients (comma separated)
  image URL          set the draft image URL
  draft              show the draft
  save               add the draft, or apply the edit in progress
  edit ID            load a recipe into the draft for editing
  delete ID          delete a recipe everywhere
  search [TEXT]      filter lists by name (empty clears)
  page home|add      switch page; recipes saved on `add` are listed there
  list               list recipes on the current page
  help               show this help
  quit               leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Name(String),
    Ingredients(String),
    Image(String),
    Draft,
    Save,
    Edit(u64),
    Delete(u64),
    Search(String),
    Page(Context),
    List,
    Help,
    Quit,
    Empty,
}

pub fn parse_line(line: &str) -> Result<SessionCommand> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim_end().is_empty() {
        return Ok(SessionCommand::Empty);
    }

    let (cmd, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim_start()),
        None => (trimmed, ""),
    };

    let command = match cmd.to_lowercase().as_str() {
        "name" | "n" => SessionCommand::Name(rest.to_string()),
        "ingredients" | "i" => SessionCommand::Ingredients(rest.to_string()),
        "image" | "img" => SessionCommand::Image(rest.trim().to_string()),
        "draft" | "d" => SessionCommand::Draft,
        "save" | "commit" | "s" => SessionCommand::Save,
        "edit" | "e" => SessionCommand::Edit(parse_id(rest)?),
        "delete" | "rm" => SessionCommand::Delete(parse_id(rest)?),
        "search" | "/" => SessionCommand::Search(rest.to_string()),
        "page" | "p" => SessionCommand::Page(parse_page(rest)?),
        "list" | "ls" => SessionCommand::List,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => return Err(RecipeError::Parse(format!("Unknown command: {}", other))),
    };
    Ok(command)
}

fn parse_id(s: &str) -> Result<u64> {
    let s = s.trim();
    s.parse()
        .map_err(|_| RecipeError::Parse(format!("Invalid recipe id: {:?}", s)))
}

fn parse_page(s: &str) -> Result<Context> {
    match s.trim().to_lowercase().as_str() {
        "home" | "all" | "primary" => Ok(Context::Primary),
        "add" | "secondary" => Ok(Context::Secondary),
        other => Err(RecipeError::Parse(format!(
            "Unknown page: {:?} (expected home or add)",
            other
        ))),
    }
}

/// Read commands from `input` until it ends or `quit` is entered.
pub fn run<S: KeyValueStore, R: BufRead>(api: &mut RecipeApi<S>, input: R) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();
    let mut page = Context::Primary;

    if interactive {
        println!("{}", "Type `help` for commands.".dimmed());
        prompt(api, page)?;
    }

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(SessionCommand::Quit) => break,
            Ok(command) => apply(api, &mut page, command),
            Err(e) => println!("{}", e.to_string().red()),
        }
        if interactive {
            prompt(api, page)?;
        }
    }

    Ok(())
}

fn apply<S: KeyValueStore>(api: &mut RecipeApi<S>, page: &mut Context, command: SessionCommand) {
    match command {
        SessionCommand::Name(name) => {
            api.set_draft(DraftUpdate::new().name(name));
        }
        SessionCommand::Ingredients(ingredients) => {
            api.set_draft(DraftUpdate::new().ingredients(ingredients));
        }
        SessionCommand::Image(image) => {
            api.set_draft(DraftUpdate::new().image(image));
        }
        SessionCommand::Draft => print_draft(api.draft(), api.editing()),
        SessionCommand::Save => {
            let result = api.commit(*page);
            print_messages(&result.messages);
        }
        SessionCommand::Edit(id) => match api.begin_edit_by_id(id) {
            Some(result) => {
                print_messages(&result.messages);
                print_draft(api.draft(), api.editing());
            }
            None => println!("{}", format!("No recipe with id {}", id).red()),
        },
        SessionCommand::Delete(id) => {
            let result = api.delete_recipe(id);
            print_messages(&result.messages);
        }
        SessionCommand::Search(term) => {
            api.set_search_term(term);
            print_recipes(&api.visible(*page).listed_recipes);
        }
        SessionCommand::Page(next) => {
            *page = next;
            println!("{}", format!("On the {} page", next).dimmed());
            print_recipes(&api.visible(*page).listed_recipes);
        }
        SessionCommand::List => print_recipes(&api.visible(*page).listed_recipes),
        SessionCommand::Help => println!("{}", HELP),
        SessionCommand::Quit | SessionCommand::Empty => {}
    }
}

fn prompt<S: KeyValueStore>(api: &RecipeApi<S>, page: Context) -> Result<()> {
    let mode = if api.is_editing() { "*" } else { "" };
    print!("{}{}> ", page, mode);
    std::io::stdout().flush()?;
    Ok(())
}

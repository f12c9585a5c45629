//! Interactive session: one management-view command per input line.
//!
//! Lines are split on whitespace and parsed with clap, so `help` and `<command> --help`
//! work as usual. Values for `filter` and `set` are then read from the raw line: the rest
//! of the line after the field name, inner spaces included.
//! Blank lines and lines starting with `#` are skipped.

use super::render::{
    print_listing, print_messages, render_counselor, render_dashboard, render_form, render_status,
};
use clap::{error::ErrorKind, Parser, Subcommand};
use colored::Colorize;
use counselapp::api::CounselApi;
use counselapp::error::{CounselError, Result};
use counselapp::filter::FilterField;
use counselapp::model::{Collection, RecordId};
use counselapp::view::ViewMode;
use std::io::{BufRead, IsTerminal, Write};

const PROMPT: &str = "counsel> ";

#[derive(Parser, Debug)]
#[command(name = "session", no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// List the active collection with the current filters
    #[command(alias = "ls")]
    List,

    /// Show another collection (clears filters)
    Switch { collection: String },

    /// Set a filter: query, category or status
    Filter {
        field: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Clear one filter
    Clear { field: String },

    /// Open the new counselor form
    New,

    /// Open the edit form for a counselor
    Edit { id: RecordId },

    /// Ask to delete a counselor
    Delete { id: RecordId },

    /// Fill in a field of the open form
    Set {
        field: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Save the open form
    Submit,

    /// Confirm the pending deletion
    Confirm,

    /// Leave the form or confirmation without saving
    Cancel,

    /// Show collection, mode, filters and the open form
    Status,

    /// Show dashboard statistics
    Dashboard {
        college: Option<String>,
        #[arg(long, default_value = "weekly")]
        range: String,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

pub(super) fn run<R: BufRead>(api: &mut CounselApi, input: R) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();
    prompt(interactive)?;

    for line in input.lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() || words[0].starts_with('#') {
            prompt(interactive)?;
            continue;
        }

        match SessionLine::try_parse_from(words) {
            Ok(parsed) => match execute(api, parsed.command, &line) {
                Ok(Flow::Quit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(e) => eprintln!("{} {}", "Error:".red(), e),
            },
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    print!("{}", e)
                }
                _ => eprint!("{}", e),
            },
        }
        prompt(interactive)?;
    }
    Ok(())
}

fn prompt(interactive: bool) -> Result<()> {
    if interactive {
        print!("{}", PROMPT);
        std::io::stdout().flush()?;
    }
    Ok(())
}

/// `line` with its first `skip` words removed, inner whitespace kept.
fn rest_of_line(line: &str, skip: usize) -> &str {
    let mut rest = line.trim_start();
    for _ in 0..skip {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        rest = rest[end..].trim_start();
    }
    rest.trim_end()
}

/// The value words as typed, taken from `line` after the command and field words.
fn raw_value<'a>(words: &[String], line: &'a str) -> &'a str {
    if words.is_empty() {
        ""
    } else {
        rest_of_line(line, 2)
    }
}

fn execute(api: &mut CounselApi, command: SessionCommand, line: &str) -> Result<Flow> {
    match command {
        SessionCommand::List => {
            print_listing(&api.list_records(api.collection())?);
        }
        SessionCommand::Switch { collection } => {
            let collection: Collection = collection.parse()?;
            api.switch_collection(collection)?;
            println!("Showing {}.", collection);
            print_listing(&api.list_records(collection)?);
        }
        SessionCommand::Filter { field, value } => {
            let field: FilterField = field.parse()?;
            api.set_filter(field, raw_value(&value, line))?;
            print_listing(&api.list_records(api.collection())?);
        }
        SessionCommand::Clear { field } => {
            api.clear_filter(field.parse()?);
            print_listing(&api.list_records(api.collection())?);
        }
        SessionCommand::New => {
            api.request_create()?;
            println!("New counselor. Fill in fields with `set <field> <value>`, then `submit`.");
            if let Some(form) = api.form() {
                print!("{}", render_form(form));
            }
        }
        SessionCommand::Edit { id } => {
            let counselor = api.request_edit(id)?;
            println!("Editing counselor {}.", id);
            print!("{}", render_counselor(&counselor));
        }
        SessionCommand::Delete { id } => {
            let counselor = api.request_delete(id)?;
            println!(
                "Delete counselor {} ({})? Type `confirm` or `cancel`.",
                counselor.id, counselor.email
            );
        }
        SessionCommand::Set { field, value } => {
            api.set_form_field(&field, raw_value(&value, line))?;
        }
        SessionCommand::Submit => {
            let result = api.submit()?;
            print_messages(&result.messages);
        }
        SessionCommand::Confirm => {
            let id = match api.mode() {
                ViewMode::ConfirmDelete(id) => id,
                mode => {
                    return Err(CounselError::InvalidTransition(format!(
                        "nothing to confirm while in {} mode",
                        mode
                    )))
                }
            };
            let result = api.confirm_delete(id)?;
            print_messages(&result.messages);
        }
        SessionCommand::Cancel => {
            api.cancel();
            println!("Back to {}.", api.collection());
        }
        SessionCommand::Status => {
            print!(
                "{}",
                render_status(api.mode(), api.collection().as_str(), api.filter())
            );
            if let Some(form) = api.form() {
                print!("{}", render_form(form));
            }
        }
        SessionCommand::Dashboard { college, range } => {
            let dataset = api.dashboard(college.as_deref(), range.parse()?)?;
            print!("{}", render_dashboard(&dataset, &api.summary()));
        }
        SessionCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

//! # CLI Layer
//!
//! One possible UI client for phonebook. This layer is the only place that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Handles argument parsing
//! - Formats output for human consumption
//! - Installs the tracing subscriber
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `handle_*()`: Per-command handlers that call the API and print results
//! - [`super::shell`]: The interactive menu, used when no subcommand is given

use super::print::{write_config, write_entries, write_messages, write_page_footer};
use super::setup::{Cli, Commands, EntryFields};
use super::shell::Shell;
use clap::Parser;
use phonebook::api::{CmdMessage, ConfigAction, PhonebookApi};
use phonebook::error::Result;
use phonebook::init::{initialize, PhonebookContext, StoreLocation};
use phonebook::model::Entry;
use phonebook::store::fs::FileStore;
use std::io::{self, Write};
use tracing_subscriber::{fmt, EnvFilter};

const LOG_ENV_VAR: &str = "PHONEBOOK_LOG";

struct AppContext {
    api: PhonebookApi<FileStore>,
    page_size: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { page, page_size }) => handle_list(&ctx, page, page_size),
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields),
        Some(Commands::Edit { position, fields }) => handle_edit(&mut ctx, position, fields),
        Some(Commands::View { position }) => handle_view(&ctx, position),
        Some(Commands::Search { query }) => handle_search(&ctx, query.unwrap_or_default()),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Shell) | None => handle_shell(&mut ctx),
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "warn,phonebook=debug"
        } else {
            "warn"
        })
    });

    // Logs go to stderr so they never mix with listings
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir()?;
    let location = StoreLocation {
        file: cli.file.clone(),
        global: cli.global,
    };

    let PhonebookContext { api, config } = initialize(&cwd, &location)?;
    Ok(AppContext {
        api,
        page_size: config.page_size,
    })
}

fn handle_list(ctx: &AppContext, page: i64, page_size: Option<usize>) -> Result<()> {
    let page_size = page_size.unwrap_or(ctx.page_size);
    let result = ctx.api.list_entries(page, page_size)?;

    let mut out = io::stdout().lock();
    write_entries(&mut out, &result.listed_entries)?;
    if let Some(info) = &result.page {
        write_page_footer(&mut out, info)?;
    }
    write_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: EntryFields) -> Result<()> {
    let entry = fields.apply_to(Entry::default());
    let result = ctx.api.add_entry(entry)?;
    write_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, position: i64, fields: EntryFields) -> Result<()> {
    let mut out = io::stdout().lock();
    let current = ctx.api.view_entry(position)?;

    if fields.is_empty() {
        let message = CmdMessage::warning(format!(
            "Nothing to change for entry {} (pass at least one field flag)",
            position
        ));
        write_messages(&mut out, &[message])?;
        return Ok(());
    }

    let base = current
        .listed_entries
        .into_iter()
        .next()
        .map(|de| de.entry)
        .unwrap_or_default();
    let result = ctx.api.edit_entry(position, fields.apply_to(base))?;
    write_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_view(ctx: &AppContext, position: i64) -> Result<()> {
    let result = ctx.api.view_entry(position)?;
    write_entries(&mut io::stdout().lock(), &result.listed_entries)?;
    Ok(())
}

fn handle_search(ctx: &AppContext, query: String) -> Result<()> {
    let result = ctx.api.search_entries(&query)?;
    write_entries(&mut io::stdout().lock(), &result.listed_entries)?;
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    let mut out = io::stdout().lock();
    // Set echoes the new value through its message
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            write_config(&mut out, config, &ctx.api.paths().store_file)?;
        }
    }
    write_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    Shell::new(&mut ctx.api, ctx.page_size, stdin, &mut stdout).run()?;
    stdout.flush()?;
    Ok(())
}

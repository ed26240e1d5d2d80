use colored::Colorize;
use phonebook::api::{CmdMessage, MessageLevel};
use phonebook::config::PhonebookConfig;
use phonebook::index::{DisplayEntry, PageInfo};
use phonebook::model::EntryField;
use std::io::{self, Write};
use std::path::Path;

const DETAIL_INDENT: &str = "   ";

pub fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn write_error<W: Write>(out: &mut W, error: &dyn std::fmt::Display) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().red())
}

/// Prints numbered entries, one block per entry.
pub fn write_entries<W: Write>(out: &mut W, entries: &[DisplayEntry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No entries found.");
    }

    for de in entries {
        writeln!(
            out,
            "{} {}",
            format!("{}.", de.index).yellow(),
            de.entry.full_name().bold()
        )?;
        for field in [
            EntryField::Organization,
            EntryField::WorkPhone,
            EntryField::PersonalPhone,
        ] {
            writeln!(
                out,
                "{}{}: {}",
                DETAIL_INDENT,
                field.label().dimmed(),
                de.entry.get(field)
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_page_footer<W: Write>(out: &mut W, info: &PageInfo) -> io::Result<()> {
    let noun = if info.total == 1 { "entry" } else { "entries" };
    let footer = format!(
        "Page {} of {} ({} {})",
        info.page,
        info.page_count(),
        info.total,
        noun
    );
    writeln!(out, "{}", footer.dimmed())
}

/// Prints every setting as `key = value`, after the record document in use.
pub fn write_config<W: Write>(
    out: &mut W,
    config: &PhonebookConfig,
    store_file: &Path,
) -> io::Result<()> {
    writeln!(out, "{} {}", "file =".dimmed(), store_file.display())?;
    for key in PhonebookConfig::KEYS {
        if let Some(value) = config.get(key) {
            writeln!(out, "{} = {}", key, value)?;
        }
    }
    Ok(())
}

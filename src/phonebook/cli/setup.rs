use clap::{Args, Parser, Subcommand};
use phonebook::model::{Entry, EntryField};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook", bin_name = "phonebook", version)]
#[command(about = "Plain-file contact directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Record document to use (overrides PHONEBOOK_FILE)
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Use the per-user phonebook instead of ./phonebook.json
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List entries one page at a time
    #[command(alias = "ls")]
    List {
        /// Page number, starting at 1
        #[arg(default_value_t = 1, allow_negative_numbers = true)]
        page: i64,

        /// Entries per page (defaults to the page-size setting)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Add an entry
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        fields: EntryFields,
    },

    /// Replace the entry at a position
    #[command(alias = "e")]
    Edit {
        /// Position of the entry (as shown by list)
        #[arg(allow_negative_numbers = true)]
        position: i64,

        #[command(flatten)]
        fields: EntryFields,
    },

    /// Show the entry at a position
    #[command(alias = "v")]
    View {
        /// Position of the entry (as shown by list)
        #[arg(allow_negative_numbers = true)]
        position: i64,
    },

    /// Search all fields, ignoring case
    #[command(alias = "s")]
    Search {
        /// Text to look for (empty matches everything)
        #[arg(allow_hyphen_values = true)]
        query: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., page-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Interactive menu (the default with no command)
    Shell,
}

/// Field flags shared by `add` and `edit`.
#[derive(Args, Debug, Default, Clone)]
pub struct EntryFields {
    #[arg(long, allow_hyphen_values = true)]
    pub last_name: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub first_name: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub middle_name: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub organization: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub work_phone: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub personal_phone: Option<String>,
}

impl EntryFields {
    /// Overlays the given flags on `base`. Fields without a flag keep their value.
    pub fn apply_to(self, mut base: Entry) -> Entry {
        let given = [
            (EntryField::LastName, self.last_name),
            (EntryField::FirstName, self.first_name),
            (EntryField::MiddleName, self.middle_name),
            (EntryField::Organization, self.organization),
            (EntryField::WorkPhone, self.work_phone),
            (EntryField::PersonalPhone, self.personal_phone),
        ];
        for (field, value) in given {
            if let Some(value) = value {
                base.set(field, value);
            }
        }
        base
    }

    pub fn is_empty(&self) -> bool {
        self.last_name.is_none()
            && self.first_name.is_none()
            && self.middle_name.is_none()
            && self.organization.is_none()
            && self.work_phone.is_none()
            && self.personal_phone.is_none()
    }
}

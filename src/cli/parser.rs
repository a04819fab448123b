use crate::export::ExportFormat;
use crate::models::EntryForm;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for workhours
/// CLI application to log working hours with SQLite
#[derive(Parser)]
#[command(
    name = "workhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal work-hours log: record work, leave and vacation, export monthly summaries",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Fields shared by `add` and `edit`.
#[derive(Args, Debug, Clone, Default)]
pub struct EntryArgs {
    /// Date of the entry (YYYY-MM-DD or DD/MM/YYYY), default today
    #[arg(long = "date")]
    pub date: Option<String>,

    #[arg(long = "start", help = "Start time (HH:MM)")]
    pub start: Option<String>,

    #[arg(long = "end", help = "End time (HH:MM), may be past midnight")]
    pub end: Option<String>,

    #[arg(long = "break", help = "Break duration in minutes")]
    pub break_minutes: Option<i32>,

    #[arg(long = "task", help = "Task description")]
    pub task: Option<String>,

    #[arg(
        long = "type",
        help = "Entry type: work, leave or vacation (localized names accepted)"
    )]
    pub entry_type: Option<String>,

    #[arg(long = "kms", help = "Travel distance in km")]
    pub travel_kms: Option<String>,

    #[arg(long = "travel-hours", help = "Travel time in hours (e.g. 1.5)")]
    pub travel_hours: Option<String>,

    #[arg(long = "company", help = "Company or client")]
    pub company: Option<String>,
}

impl EntryArgs {
    pub fn to_form(&self) -> EntryForm {
        EntryForm {
            date: self.date.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
            break_minutes: self.break_minutes,
            task: self.task.clone(),
            entry_type: self.entry_type.clone(),
            travel_kms: self.travel_kms.clone(),
            travel_hours: self.travel_hours.clone(),
            company: self.company.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their defaults")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a new entry
    Add {
        #[command(flatten)]
        fields: EntryArgs,
    },

    /// Change an existing entry
    Edit {
        /// Entry id
        id: i64,

        #[command(flatten)]
        fields: EntryArgs,
    },

    /// Delete an entry by id
    Del {
        /// Entry id
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show one entry with its computed duration
    Show {
        /// Entry id
        id: i64,
    },

    /// List entries, newest first
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "type", help = "Only entries of this type")]
        entry_type: Option<String>,
    },

    /// List the months that have entries
    Months,

    /// Export a monthly summary
    Export {
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(long, value_name = "YYYY-MM", help = "Month to export (default: current)")]
        month: Option<String>,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,

        #[arg(
            long,
            conflicts_with = "file",
            help = "Write to the temp directory and open it"
        )]
        preview: bool,
    },

    /// List saved summaries in the export folder
    Files {
        #[arg(
            long,
            value_name = "N|NAME",
            help = "Open the N-th listed file, or a file by name"
        )]
        open: Option<String>,
    },

    /// Show or change colors and text size
    Theme {
        #[arg(long = "text-color", value_name = "#RRGGBB", help = "Text color, or 'none'")]
        text_color: Option<String>,

        #[arg(long = "text-size", help = "Text size (12-24)")]
        text_size: Option<u8>,

        #[arg(long = "bg-color", value_name = "#RRGGBB", help = "Solid background color")]
        bg_color: Option<String>,

        #[arg(long = "bg-gradient", value_name = "gradient_N", help = "Named gradient")]
        bg_gradient: Option<String>,

        #[arg(long = "bg-image", value_name = "PATH", help = "Background image")]
        bg_image: Option<String>,

        #[arg(long = "reset-background", help = "Restore the white background")]
        reset_background: bool,

        #[arg(long, help = "Show the current theme")]
        show: bool,
    },

    /// List, switch or download languages
    Lang {
        #[arg(long, help = "List languages")]
        list: bool,

        #[arg(long, value_name = "CODE", help = "Switch to an installed language")]
        set: Option<String>,

        #[arg(
            long,
            value_name = "CODE",
            conflicts_with = "set",
            help = "Download a language pack and switch to it"
        )]
        download: Option<String>,
    },

    /// Check for a newer release
    Update {
        #[arg(long, help = "Only report, never open the download page")]
        check: bool,
    },

    /// Show version and paths in use
    Info,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup")]
        force: bool,
    },

    /// Import entries from another database
    Import {
        #[arg(
            long,
            value_name = "FILE",
            help = "Database exported from the mobile app (Room schema)"
        )]
        room: String,
    },
}

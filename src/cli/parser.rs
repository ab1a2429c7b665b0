use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::{Query, StatusFilter};
use crate::utils::date;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for attendlog
#[derive(Parser)]
#[command(
    name = "attendlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: check people in and out, filter the log and export it as CSV",
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

/// Filters shared by `list` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long, short = 's', help = "Case-insensitive match on name or ID")]
    pub search: Option<String>,

    #[arg(long, value_enum, help = "Filter by action or current presence")]
    pub status: Option<StatusFilter>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "First day to include (local time)")]
    pub from: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Last day to include (local time)")]
    pub to: Option<String>,

    #[arg(
        long,
        conflicts_with_all = ["from", "to", "all_dates"],
        help = "Only today's records"
    )]
    pub today: bool,

    #[arg(
        long = "all-dates",
        conflicts_with_all = ["from", "to"],
        help = "Ignore the default today-only window"
    )]
    pub all_dates: bool,
}

impl FilterArgs {
    /// Build the query, applying config defaults for status and date window.
    pub fn to_query(&self, cfg: &Config) -> AppResult<Query> {
        let parse = |s: &String| {
            date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
        };

        let mut from = self.from.as_ref().map(parse).transpose()?;
        let mut to = self.to.as_ref().map(parse).transpose()?;

        let use_today = self.today
            || (cfg.today_by_default && !self.all_dates && from.is_none() && to.is_none());
        if use_today {
            let today = date::today();
            from = Some(today);
            to = Some(today);
        }

        let status = match self.status {
            Some(s) => s,
            None => cfg.status_filter()?,
        };

        Ok(Query {
            text: self.search.clone(),
            from,
            to,
            status,
        })
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record an attendance event
    Add {
        #[arg(long, help = "Person ID")]
        id: String,

        #[arg(long, help = "Person name")]
        name: String,

        #[arg(
            long,
            default_value = "checkin",
            help = "checkin or checkout (anything else counts as checkin)"
        )]
        action: String,
    },

    /// Quick check-in
    In {
        /// Person ID
        id: String,
        /// Person name
        name: String,
    },

    /// Quick check-out
    Out {
        /// Person ID
        id: String,
        /// Person name
        name: String,
    },

    /// List records matching the filters
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show who is present and how many events were recorded today
    Summary {
        #[arg(long = "who", help = "List the people currently present")]
        who: bool,
    },

    /// Export the filtered records
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: attendance_<YYYY-MM-DD>.<ext> in export_dir)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Delete every record (irreversible)
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

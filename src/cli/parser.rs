use crate::export::{ExportFormat, ExportKind};
use crate::models::period::PeriodKind;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for hirebill
/// Recruiting hour log and client billing on SQLite
#[derive(Parser)]
#[command(
    name = "hirebill",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track candidate hours, client work records and payments using SQLite",
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

/// Period selection shared by the reporting commands.
#[derive(Args, Clone, Debug, Default)]
pub struct PeriodArgs {
    #[arg(long, value_enum, help = "Period kind (default from config)")]
    pub period: Option<PeriodKind>,

    #[arg(long, help = "Reference date (YYYY-MM-DD, default today)")]
    pub date: Option<String>,
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

        #[arg(long = "migrate", help = "Add missing configuration fields with defaults")]
        migrate: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity and pending migrations")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage clients
    Client {
        #[command(subcommand)]
        action: ClientAction,
    },

    /// Manage candidates
    Candidate {
        #[command(subcommand)]
        action: CandidateAction,
    },

    /// Log, edit or delete candidate hours
    Entry {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// Client-facing work records
    Record {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Period summaries
    Summary {
        #[command(subcommand)]
        action: SummaryAction,
    },

    /// Mark work records as paid (batch mates included)
    Paid {
        /// Record ids
        ids: Vec<String>,

        #[arg(long, help = "Mark every unpaid record of this client in the period")]
        client: Option<String>,

        #[command(flatten)]
        period: PeriodArgs,
    },

    /// Record a client payment over hour-log entries, or clear recorded payments
    Pay {
        #[arg(long, help = "Client whose entries receive the payment")]
        client: Option<String>,

        #[arg(long, help = "Amount paid", requires = "client")]
        amount: Option<String>,

        #[arg(long, num_args = 1.., value_name = "ENTRY_ID", conflicts_with = "amount")]
        clear: Vec<String>,

        #[command(flatten)]
        period: PeriodArgs,
    },

    /// Export a summary
    Export {
        #[arg(long, value_enum, default_value = "hours")]
        kind: ExportKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute output path")]
        file: String,

        #[command(flatten)]
        period: PeriodArgs,

        #[arg(long, help = "Only this candidate (hours)")]
        candidate: Option<String>,

        #[arg(long, help = "Client (records)")]
        client: Option<String>,

        #[arg(long, help = "Paid history instead of unpaid (records)")]
        paid: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress (zip on Windows, tar.gz on Unix)")]
        compress: bool,
    },
}

#[derive(Subcommand)]
pub enum ClientAction {
    /// Add a client
    Add { name: String },
    /// List clients
    List,
}

#[derive(Subcommand)]
pub enum CandidateAction {
    /// Add a candidate
    Add {
        name: String,

        #[arg(long)]
        client: Option<String>,

        #[arg(long, default_value_t = 0.0)]
        rate: f64,

        #[arg(long)]
        alias: Option<String>,
    },
    /// List candidates with their running totals
    List {
        #[arg(long)]
        client: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum EntryAction {
    /// Log hours for a candidate
    Add {
        candidate: String,

        #[arg(long, help = "Hours worked (decimal or HH:MM:SS)")]
        hours: String,

        #[arg(long, help = "Entry date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, help = "Hourly rate (default: candidate's rate)")]
        rate: Option<f64>,

        #[arg(long, default_value_t = 0)]
        sets: i64,

        #[arg(long = "break", default_value_t = 0.0, help = "Break hours: 0.5, 0.75 or 1")]
        break_hours: f64,

        #[arg(long, default_value_t = 0.0, help = "Meeting hours: 0.5, 0.75 or 1")]
        meetings: f64,

        #[arg(long, default_value_t = 0.0)]
        balance: f64,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Edit an entry (counters follow the hour/set deltas)
    Edit {
        id: String,

        #[arg(long)]
        hours: Option<String>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        rate: Option<f64>,

        #[arg(long)]
        sets: Option<i64>,

        #[arg(long = "break")]
        break_hours: Option<f64>,

        #[arg(long)]
        meetings: Option<f64>,

        #[arg(long)]
        balance: Option<f64>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete an entry
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
    /// List entries in a period
    List {
        #[arg(long)]
        candidate: Option<String>,

        #[command(flatten)]
        period: PeriodArgs,
    },
}

#[derive(Subcommand)]
pub enum RecordAction {
    /// Add a work record
    Add {
        employee: String,

        #[arg(long)]
        date: Option<String>,

        #[arg(long, help = "Talk time (minutes or HH:MM:SS)")]
        talk: Option<String>,

        #[arg(long, help = "Wait time (minutes or HH:MM:SS)")]
        wait: Option<String>,

        #[arg(long = "break", help = "Break (minutes or HH:MM:SS)")]
        break_time: Option<String>,

        #[arg(long, help = "Meetings (minutes or HH:MM:SS)")]
        meeting: Option<String>,

        #[arg(long, help = "Hourly rate (default: candidate's rate)")]
        rate: Option<f64>,

        #[arg(long, default_value_t = 0)]
        sets: i64,

        #[arg(long, default_value_t = 0.0)]
        moes: f64,

        #[arg(long)]
        batch: Option<String>,

        #[arg(long, help = "pending | unpaid | paid | archived")]
        status: Option<String>,
    },
    /// List work records of a client
    List {
        #[arg(long)]
        client: String,

        #[arg(long)]
        paid: bool,

        #[command(flatten)]
        period: PeriodArgs,
    },
}

#[derive(Subcommand)]
pub enum SummaryAction {
    /// Hour-log summary
    Hours {
        #[command(flatten)]
        period: PeriodArgs,

        #[arg(long)]
        candidate: Option<String>,
    },
    /// Work-record summary of a client
    Records {
        #[arg(long)]
        client: String,

        #[arg(long)]
        paid: bool,

        #[command(flatten)]
        period: PeriodArgs,
    },
    /// Moe's hours summary
    Moes {
        #[command(flatten)]
        period: PeriodArgs,
    },
    /// Client payment totals (records + Moe's)
    Payment {
        #[arg(long)]
        client: String,

        #[arg(long)]
        paid: bool,

        #[command(flatten)]
        period: PeriodArgs,
    },
}

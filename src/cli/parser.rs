use clap::{Parser, Subcommand};

/// Command-line interface definition for timetracker
#[derive(Parser)]
#[command(
    name = "timetracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee time/attendance tracker: daily entries, time balance and team holiday planning",
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

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database schema integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage user profiles and authorization links
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Add or update a tracking entry (one per user and date)
    Add {
        /// User the entry belongs to
        user_id: i64,

        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Day type code, e.g. WKDAY, HOLIS, SICKD (see `daytypes`)
        day_type: String,

        /// Worked/absent time for a partial day, e.g. "4h30m".
        /// Omit for a full day of the given type.
        #[arg(long = "hours")]
        hours: Option<String>,
    },

    /// Delete a tracking entry
    Del {
        /// User the entry belongs to
        user_id: i64,

        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Print the day-type vocabulary (codes and labels)
    Daytypes,

    /// Render the month calendar for a user
    Calendar {
        /// User to render the calendar for
        user_id: i64,

        /// Year (default: current year)
        #[arg(long = "year")]
        year: Option<i32>,

        /// Month 1-12 (default: current month)
        #[arg(long = "month")]
        month: Option<u32>,
    },

    /// Print a user's accrued time balance
    Balance {
        /// User to compute the balance for
        user_id: i64,
    },

    /// List the employees visible to a manager or team leader
    Team {
        /// Requesting admin or team leader
        requester_id: i64,
    },

    /// Per-employee absence report for a month
    Holidays {
        /// Requesting admin or team leader
        requester_id: i64,

        /// Year (default: current year)
        #[arg(long = "year")]
        year: Option<i32>,

        /// Month 1-12 (default: current month)
        #[arg(long = "month")]
        month: Option<u32>,

        /// Emit the report as JSON instead of a table
        #[arg(long = "json")]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Create a user profile
    Add {
        /// Display name
        name: String,

        /// Role: employee, teaml or admin
        #[arg(long = "type", default_value = "employee")]
        user_type: String,

        /// Shift length, e.g. "8h" or "7h30m" (default from config)
        #[arg(long = "shift")]
        shift: Option<String>,

        /// Manager (admin) this user reports to
        #[arg(long = "manager")]
        manager: Option<i64>,
    },

    /// List all user profiles
    List,

    /// Put an employee under an admin's authorization link
    Link {
        /// Employee to attach
        employee_id: i64,

        /// Owning admin
        admin_id: i64,
    },

    /// Remove an employee from their authorization link
    Unlink {
        /// Employee to detach
        employee_id: i64,
    },
}

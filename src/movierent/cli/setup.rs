use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "movierent",
    bin_name = "movierent",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Inventory of movies, customers and rentals", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// SQLite database file to use
    #[arg(long, global = true, env = "MOVIERENT_DB", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Output format for `show`
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add a movie or a customer
    Insert {
        #[command(subcommand)]
        record: InsertCommands,
    },

    /// List movies, customers or rentals
    Show {
        #[command(subcommand)]
        listing: ShowCommands,
    },

    /// Change a customer's email address
    Update {
        customer_id: i64,
        #[arg(allow_hyphen_values = true)]
        new_email: String,
    },

    /// Remove a customer and their rental history
    Remove { customer_id: i64 },

    /// Rent a movie to a customer
    Rent { customer_id: i64, movie_id: i64 },

    /// Mark a rental as returned
    Return { rental_id: i64 },

    /// Delete every rental, customer and movie
    Clear,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum InsertCommands {
    /// Add a movie
    Movie {
        #[arg(allow_hyphen_values = true)]
        title: String,
        #[arg(allow_negative_numbers = true)]
        year: i32,
        #[arg(allow_hyphen_values = true)]
        genre: String,
        #[arg(allow_hyphen_values = true)]
        director: String,
    },

    /// Add a customer
    Customer {
        #[arg(allow_hyphen_values = true)]
        first_name: String,
        #[arg(allow_hyphen_values = true)]
        last_name: String,
        #[arg(allow_hyphen_values = true)]
        email: String,
        #[arg(allow_hyphen_values = true)]
        phone: Option<String>,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShowCommands {
    /// List all movies
    Movies,
    /// List all customers
    Customers,
    /// List all rentals, newest first
    Rentals,
}

const USAGE_LINES: &[(&str, &str)] = &[
    (
        "insert movie <title> <year> <genre> <director>",
        "Add a movie",
    ),
    (
        "insert customer <first_name> <last_name> <email> [phone]",
        "Add a customer",
    ),
    ("show movies", "List all movies"),
    ("show customers", "List all customers"),
    ("show rentals", "List all rentals"),
    (
        "update <customer_id> <new_email>",
        "Change a customer's email",
    ),
    (
        "remove <customer_id>",
        "Remove a customer and their rentals",
    ),
    ("rent <customer_id> <movie_id>", "Rent a movie to a customer"),
    ("return <rental_id>", "Mark a rental as returned"),
    ("clear", "Delete all data"),
];

/// Returns the usage text shown for missing, unknown or malformed commands.
pub fn get_usage() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("movierent {version}\n"));
    output.push_str("Inventory of movies, customers and rentals\n");
    output.push('\n');
    output.push_str("Usage:\n");

    let width = USAGE_LINES
        .iter()
        .map(|(synopsis, _)| synopsis.len())
        .max()
        .unwrap_or(0);
    for (synopsis, about) in USAGE_LINES {
        output.push_str(&format!("  movierent {synopsis:<width$}  {about}\n"));
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --database <PATH>     SQLite database file [env: MOVIERENT_DB]\n");
    output.push_str("      --output <text|json>  Output format for show\n");
    output.push_str("  -v, --verbose             Verbose output\n");
    output.push_str("  -h, --help                Print help\n");
    output.push_str("  -V, --version             Print version\n");

    output
}

pub fn print_usage() {
    print!("{}", get_usage());
}

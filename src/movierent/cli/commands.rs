//! # CLI Dispatch
//!
//! The only place that knows about arguments, terminal output and exit codes.
//!
//! 1. Parse arguments into [`Commands`]; anything malformed prints the usage
//!    text and exits successfully without opening the database.
//! 2. Install logging, load config, open the store (which creates the schema).
//! 3. Call exactly one `RentalApi` method and print its result.
//!
//! Exit status is `0` for success, not-found outcomes and usage text, and `1`
//! when the store rejected a write. Store failures bubble up to `main`, which
//! also exits with `1`.

use super::render::{print_messages, render_json, render_table};
use super::setup::{print_usage, Cli, Commands, InsertCommands, OutputFormat, ShowCommands};
use clap::error::ErrorKind;
use clap::Parser;
use movierent::api::{CmdResult, RentalApi};
use movierent::config::RentalConfig;
use movierent::error::Result;
use movierent::model::{NewCustomer, NewMovie};
use movierent::store::sqlite::SqliteStore;
use serde::Serialize;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{prelude::*, EnvFilter};

struct AppContext {
    api: RentalApi<SqliteStore>,
    output: OutputFormat,
}

pub fn run() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return Ok(handle_parse_error(e)),
    };

    let Some(command) = cli.command else {
        print_usage();
        return Ok(ExitCode::SUCCESS);
    };

    init_logging(cli.verbose);
    let mut ctx = init_context(cli.database, cli.output)?;
    debug!(?command, "dispatching");

    let result = match command {
        Commands::Insert { record } => match record {
            InsertCommands::Movie {
                title,
                year,
                genre,
                director,
            } => ctx
                .api
                .insert_movie(NewMovie::new(title, year, genre, director))?,
            InsertCommands::Customer {
                first_name,
                last_name,
                email,
                phone,
            } => ctx
                .api
                .insert_customer(NewCustomer::new(first_name, last_name, email, phone))?,
        },
        Commands::Show { listing } => return handle_show(&ctx, listing),
        Commands::Update {
            customer_id,
            new_email,
        } => ctx.api.update_customer_email(customer_id, &new_email)?,
        Commands::Remove { customer_id } => ctx.api.remove_customer(customer_id)?,
        Commands::Rent {
            customer_id,
            movie_id,
        } => ctx.api.rent_movie(customer_id, movie_id)?,
        Commands::Return { rental_id } => ctx.api.return_movie(rental_id)?,
        Commands::Clear => ctx.api.clear_all()?,
    };

    Ok(finish(&result))
}

fn handle_parse_error(e: clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayVersion => {
            let _ = e.print();
        }
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            print_usage();
        }
        _ => {
            // Keep clap's one-line reason, then fall back to the full usage.
            let rendered = e.render().to_string();
            if let Some(reason) = rendered.lines().next() {
                eprintln!("{}", reason);
            }
            print_usage();
        }
    }
    ExitCode::SUCCESS
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "movierent=debug"
    } else {
        "movierent=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    let fmt_layer = if verbose {
        fmt_layer.boxed()
    } else {
        fmt_layer.without_time().boxed()
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn init_context(database: Option<std::path::PathBuf>, output: OutputFormat) -> Result<AppContext> {
    let config_dir = RentalConfig::default_dir()?;
    let config = RentalConfig::load(&config_dir)?;
    let db_path = config.database_path(database.as_deref())?;
    debug!(config_dir = %config_dir.display(), database = %db_path.display(), "resolved paths");

    let store = SqliteStore::open(&db_path)?.with_busy_timeout(config.busy_timeout())?;
    let api = RentalApi::new(store)?;

    Ok(AppContext { api, output })
}

fn handle_show(ctx: &AppContext, listing: ShowCommands) -> Result<ExitCode> {
    let result = match listing {
        ShowCommands::Movies => {
            let result = ctx.api.list_movies()?;
            print_listing(ctx.output, &result.listed_movies, "No movies found.")?;
            result
        }
        ShowCommands::Customers => {
            let result = ctx.api.list_customers()?;
            print_listing(ctx.output, &result.listed_customers, "No customers found.")?;
            result
        }
        ShowCommands::Rentals => {
            let result = ctx.api.list_rentals()?;
            print_listing(ctx.output, &result.listed_rentals, "No rentals found.")?;
            result
        }
    };
    Ok(finish(&result))
}

fn print_listing<T: Serialize>(output: OutputFormat, rows: &[T], empty_message: &str) -> Result<()> {
    match output {
        OutputFormat::Text => print!("{}", render_table(rows, empty_message)),
        OutputFormat::Json => print!("{}", render_json(rows)?),
    }
    Ok(())
}

fn finish(result: &CmdResult) -> ExitCode {
    print_messages(&result.messages);
    if result.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

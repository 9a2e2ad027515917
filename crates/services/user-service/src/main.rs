//! User Service - command-line entry point for the user use cases.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::{AppError, AppResult};
use domain::{EmployeeInput, RegistrationInput, UserResponse};
use user_service_lib::config::{RepositoryBackend, UserServiceConfig};
use user_service_lib::MigrateAction;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "Marketplace user management")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Repository backend (overrides USER_SERVICE_REPOSITORY)
    #[arg(long, global = true)]
    backend: Option<RepositoryBackend>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// User commands
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Employee profile commands
    Employees {
        #[command(subcommand)]
        action: EmployeeCommands,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[derive(Subcommand)]
enum UserCommands {
    /// Register a user from a JSON registration form
    Register { payload: String },
    /// List all users
    List,
    /// Show one user by id
    Show { id: String },
    /// Show one user by email
    FindByEmail { email: String },
    /// Delete a user
    Delete { id: String },
}

#[derive(Subcommand)]
enum EmployeeCommands {
    /// Save the worker profile of a user from a JSON payload
    Save { id: String, payload: String },
    /// List all worker profiles
    List,
    /// Show the worker profile of a user
    Watch { id: String },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = UserServiceConfig::from_env();
    if let Some(backend) = cli.backend {
        config = config.with_backend(backend);
    }
    tracing::debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Migrate { action } => {
            let action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            user_service_lib::run_migrations(&config, action).await
        }
        Commands::Users { action } => run_users(&config, action).await,
        Commands::Employees { action } => run_employees(&config, action).await,
    };

    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        eprintln!("{} ({}): {}", e.code(), e.status_code(), e.user_message());
        std::process::exit(1);
    }
}

async fn run_users(config: &UserServiceConfig, action: UserCommands) -> AppResult<()> {
    let services = user_service_lib::build_services(config).await?;

    match action {
        UserCommands::Register { payload } => {
            let input: RegistrationInput = parse_payload(&payload)?;
            let user = services.register.run(&input).await?;
            print_json(&UserResponse::from(user))
        }
        UserCommands::List => {
            let users: Vec<UserResponse> = services
                .get_all
                .run()
                .await?
                .into_iter()
                .map(UserResponse::from)
                .collect();
            print_json(&users)
        }
        UserCommands::Show { id } => {
            let user = services.get_by_id.run(&id).await?;
            print_json(&UserResponse::from(user))
        }
        UserCommands::FindByEmail { email } => {
            let user = services.get_by_email.run(&email).await?;
            print_json(&UserResponse::from(user))
        }
        UserCommands::Delete { id } => services.delete.run(&id).await,
    }
}

async fn run_employees(config: &UserServiceConfig, action: EmployeeCommands) -> AppResult<()> {
    let services = user_service_lib::build_services(config).await?;

    match action {
        EmployeeCommands::Save { id, payload } => {
            let input: EmployeeInput = parse_payload(&payload)?;
            let profile = services.employee_save.run(&id, &input).await?;
            print_json(&profile)
        }
        EmployeeCommands::List => print_json(&services.employee_list.run().await?),
        EmployeeCommands::Watch { id } => print_json(&services.employee_watch.run(&id).await?),
    }
}

fn parse_payload<T: serde::de::DeserializeOwned>(payload: &str) -> AppResult<T> {
    serde_json::from_str(payload).map_err(|e| AppError::validation(format!("Invalid JSON: {}", e)))
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("Failed to render output: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}

/// Initialize tracing subscriber (verbose mode sets debug level)
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

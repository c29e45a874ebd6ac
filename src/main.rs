//! `authctl` — terminal front end for the login/dashboard flow.

use std::process::ExitCode;

use authgate::config::{ClientConfig, normalize_base_url, normalize_csrf_token};
use authgate::error::{ClientError, ConfigError};
use authgate::{Credentials, Decision, HttpAuthService, SessionDriver, TransportResult, ViewId, ViewSink};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "authctl", about = "Log in and out of the user management dashboard")]
struct Cli {
    /// API base URL; `/login` and `/logout` are resolved beneath it.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Anti-forgery token sent in the `CSRF` header.
    #[arg(long, global = true, env = "AUTHGATE_CSRF_TOKEN", hide_env_values = true)]
    csrf_token: Option<String>,

    /// Print each decision as JSON instead of plain text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit credentials; succeeds when the dashboard is reached.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "AUTHGATE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// End the current session; succeeds when the login view is reached.
    Logout,
    /// Log in, then log out again within one process.
    Session {
        #[arg(long)]
        email: String,
        #[arg(long, env = "AUTHGATE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Check that the server answers at all.
    Ping,
}

// =============================================================================
// TERMINAL VIEW
// =============================================================================

/// Two-view router state plus the message line of the current view.
struct TerminalView {
    route: ViewId,
    message: String,
}

impl TerminalView {
    fn at(route: ViewId) -> Self {
        Self { route, message: String::new() }
    }
}

impl ViewSink for TerminalView {
    fn navigate(&mut self, view: ViewId) {
        self.route = view;
    }

    fn show_message(&mut self, message: &str) {
        message.clone_into(&mut self.message);
    }

    fn clear_message(&mut self) {
        self.message.clear();
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env()?;
    apply_overrides(&cli, &mut config)?;
    tracing::debug!(?config, "authctl starting");

    let service = HttpAuthService::from_config(&config)?;

    match cli.command {
        Command::Ping => run_ping(&service).await,
        Command::Login { email, password } => {
            let mut driver = SessionDriver::new(service, TerminalView::at(ViewId::Login));
            let decision = driver.submit_login(Credentials::new(email, password)).await;
            report(&decision, driver.view(), cli.json)?;
            Ok(exit_for(driver.view(), ViewId::Dashboard))
        }
        Command::Logout => {
            let mut driver = SessionDriver::new(service, TerminalView::at(ViewId::Dashboard));
            let decision = driver.submit_logout().await;
            report(&decision, driver.view(), cli.json)?;
            Ok(exit_for(driver.view(), ViewId::Login))
        }
        Command::Session { email, password } => {
            let mut driver = SessionDriver::new(service, TerminalView::at(ViewId::Login));
            let decision = driver.submit_login(Credentials::new(email, password)).await;
            report(&decision, driver.view(), cli.json)?;
            if driver.view().route != ViewId::Dashboard {
                return Ok(ExitCode::FAILURE);
            }
            let decision = driver.submit_logout().await;
            report(&decision, driver.view(), cli.json)?;
            Ok(exit_for(driver.view(), ViewId::Login))
        }
    }
}

/// Layer command-line flags over the environment config, with the same
/// validation `ClientConfig::from_env` applies.
fn apply_overrides(cli: &Cli, config: &mut ClientConfig) -> Result<(), ConfigError> {
    if let Some(base_url) = &cli.base_url {
        config.api_base_url = normalize_base_url(base_url)?;
    }
    if let Some(token) = normalize_csrf_token(cli.csrf_token.clone())? {
        config.csrf_token = Some(token);
    }
    Ok(())
}

async fn run_ping(service: &HttpAuthService) -> Result<ExitCode, CliError> {
    match service.ping().await {
        TransportResult::Completed { status: 200..=299 } => {
            println!("ok");
            Ok(ExitCode::SUCCESS)
        }
        TransportResult::Completed { status } => {
            eprintln!("ping failed: HTTP {status}");
            Ok(ExitCode::FAILURE)
        }
        TransportResult::NoResponse { reason } => {
            eprintln!("ping failed: {reason}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn report(decision: &Decision, view: &TerminalView, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string(decision)?);
    } else if view.message.is_empty() {
        println!("{}", view.route);
    } else {
        eprintln!("{}", view.message);
    }
    Ok(())
}

fn exit_for(view: &TerminalView, target: ViewId) -> ExitCode {
    if view.route == target { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

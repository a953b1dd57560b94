//! Command-line entry-point: drives the Aluno and Login workflows against a
//! configured API.

use std::ffi::OsString;
use std::io::{self, Write};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use url::Url;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use escola_client::ClientSettings;
use escola_client::domain::ports::PagePorts;
use escola_client::domain::{
    AlunoField, AlunoId, AlunoPage, LoadOutcome, LoginField, LoginPage, SubmitOutcome,
};
use escola_client::outbound::{
    AlunoHttpGateway, HistoryNavigator, InMemorySessionStore, TracingNotifier,
};

#[derive(Debug, Parser)]
#[command(name = "escola-client", about = "Escola student administration client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load or save aluno records.
    #[command(subcommand)]
    Aluno(AlunoCommand),
    /// Validate credentials and queue a login request.
    Login(LoginArgs),
}

#[derive(Debug, Subcommand)]
enum AlunoCommand {
    /// Fetch a record and print the populated form.
    Show {
        /// Record identifier.
        id: AlunoId,
    },
    /// Create a record, or update it when `--id` is given.
    Save(SaveArgs),
}

#[derive(Debug, Args)]
struct SaveArgs {
    /// Record to update; omit to create.
    #[arg(long)]
    id: Option<AlunoId>,
    #[arg(long, default_value = "")]
    nome: String,
    #[arg(long, default_value = "")]
    sobrenome: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    idade: String,
    #[arg(long, default_value = "")]
    peso: String,
    #[arg(long, default_value = "")]
    altura: String,
}

#[derive(Debug, Args)]
struct LoginArgs {
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    password: String,
    /// Route to return to after login.
    #[arg(long)]
    prev_path: Option<String>,
}

/// Application bootstrap.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let settings = ClientSettings::load_from_iter([OsString::from("escola-client")])
        .map_err(|error| eyre!("failed to load client settings: {error}"))?;

    let session = Arc::new(InMemorySessionStore::new());
    let history = Arc::new(HistoryNavigator::new());
    let ports = PagePorts {
        session: session.clone(),
        notifier: Arc::new(TracingNotifier),
        navigator: history.clone(),
    };

    let succeeded = match cli.command {
        Command::Aluno(command) => {
            let gateway = Arc::new(build_gateway(&settings)?);
            run_aluno(command, gateway, ports).await?
        }
        Command::Login(args) => {
            let mut page = LoginPage::new(ports, args.prev_path);
            page.set_field(LoginField::Email, args.email);
            page.set_field(LoginField::Password, args.password);
            let outcome = page.submit();
            if let Some(request) = session.take_pending_login() {
                writeln!(
                    io::stdout().lock(),
                    "login queued for {} (return to {})",
                    request.credentials.email(),
                    request.prev_path
                )?;
            }
            !outcome.is_failure()
        }
    };

    if succeeded {
        writeln!(io::stdout().lock(), "location: {}", history.current())?;
        Ok(())
    } else {
        Err(eyre!("workflow did not complete; see log output"))
    }
}

fn build_gateway(settings: &ClientSettings) -> color_eyre::Result<AlunoHttpGateway> {
    let base_url = Url::parse(settings.api_base_url())
        .wrap_err_with(|| format!("invalid API base URL {}", settings.api_base_url()))?;
    let mut gateway = AlunoHttpGateway::new(base_url, settings.request_timeout())
        .wrap_err("failed to build HTTP client")?;
    if let Some(token) = settings.api_token() {
        gateway = gateway.with_token(token);
    }
    Ok(gateway)
}

async fn run_aluno(
    command: AlunoCommand,
    gateway: Arc<AlunoHttpGateway>,
    ports: PagePorts,
) -> color_eyre::Result<bool> {
    match command {
        AlunoCommand::Show { id } => {
            let mut page = AlunoPage::new(gateway, ports, Some(id));
            let loaded = matches!(page.load().await, LoadOutcome::Loaded);
            if loaded {
                let rendered = serde_json::to_string_pretty(page.form())?;
                writeln!(io::stdout().lock(), "{rendered}")?;
            }
            Ok(loaded)
        }
        AlunoCommand::Save(args) => {
            let mut page = AlunoPage::new(gateway, ports, args.id);
            if let LoadOutcome::Failed(_) = page.load().await {
                return Ok(false);
            }
            for (field, value) in [
                (AlunoField::Nome, args.nome),
                (AlunoField::Sobrenome, args.sobrenome),
                (AlunoField::Email, args.email),
                (AlunoField::Idade, args.idade),
                (AlunoField::Peso, args.peso),
                (AlunoField::Altura, args.altura),
            ] {
                if !value.is_empty() {
                    page.set_field(field, value);
                }
            }
            let outcome = page.submit().await;
            if let SubmitOutcome::Created(record) | SubmitOutcome::Updated(record) = &outcome {
                let id = record.id.map_or_else(|| "?".to_owned(), |id| id.to_string());
                writeln!(io::stdout().lock(), "saved aluno {id}")?;
            }
            Ok(!outcome.is_failure())
        }
    }
}

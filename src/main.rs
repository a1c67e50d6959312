use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use regform::config::Config;
use regform::logging::{init_tracing, LogSink};
use regform::registration::{schema, FormValues};
use regform::submit::RegistrationClient;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "regform", version, about = "Create an account from the terminal")]
struct Cli {
    /// Path to the config file (default: platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the registration endpoint URL
    #[arg(long, global = true, value_name = "URL")]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate and submit a registration without the interactive form
    Submit(SubmitArgs),
}

#[derive(Debug, Args)]
struct SubmitArgs {
    #[arg(long, default_value = "")]
    username: String,

    /// javascript or rust
    #[arg(long, default_value = "")]
    fav_language: String,

    /// pizza, broccoli or spaghetti
    #[arg(long, default_value = "")]
    fav_food: String,

    /// Accept the terms of service
    #[arg(long)]
    agree: bool,
}

impl From<SubmitArgs> for FormValues {
    fn from(args: SubmitArgs) -> Self {
        FormValues {
            username: args.username,
            fav_language: args.fav_language,
            fav_food: args.fav_food,
            agreement: args.agree,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    if let Some(url) = cli.endpoint {
        config.endpoint.url = url;
        config.validate().context("invalid --endpoint")?;
    }

    match cli.command {
        Some(Command::Submit(args)) => {
            init_tracing(&config.logging.level, LogSink::Stderr)?;
            submit_once(&config, args.into())
        }
        None => {
            let log_file = config.log_file();
            init_tracing(&config.logging.level, LogSink::File(log_file.clone()))
                .with_context(|| format!("failed to open log file '{}'", log_file.display()))?;
            regform::ui::run(config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Exit codes: 0 accepted, 1 rejected or unreachable, 2 invalid input.
fn submit_once(config: &Config, values: FormValues) -> anyhow::Result<ExitCode> {
    let errors = schema().validate_all(&values);
    if !errors.is_empty() {
        for (field, message) in errors.iter() {
            eprintln!("{}: {}", field, message);
        }
        return Ok(ExitCode::from(2));
    }

    let client = RegistrationClient::new(&config.endpoint)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    match runtime.block_on(client.submit(&values)) {
        Ok(message) => {
            println!("{}", message);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("Registration failed: {}", err.user_message());
            Ok(ExitCode::from(1))
        }
    }
}

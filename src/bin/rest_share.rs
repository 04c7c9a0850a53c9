//! Command line front end for shareable requests.
//!
//! `request.json` holds a serialized request (`method`, `url`, `body`,
//! `headers`); variable files hold an array of `{id, name, value}`.
//! Variables may instead come from the per-user store named by the
//! `variablesFile` setting (`--user <id>`).
//! Results go to stdout, logs to stderr (`RUST_LOG=debug` for detail).

use clap::{Parser, Subcommand};
use rest_share::codec;
use rest_share::codegen::{self, Language};
use rest_share::config::{load_config, load_config_file, RestClientConfig};
use rest_share::executor::{ExecutionConfig, RequestExecutor};
use rest_share::history::HistoryEntry;
use rest_share::models::{RequestSpec, Variable};
use rest_share::validator;
use rest_share::variables::{substitute, VariableStore};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "rest-share",
    about = "Encode, decode, generate code for and send shareable HTTP requests",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Settings file, either the full settings document or the
    /// rest-client object itself
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Where a command takes its variables from.
#[derive(clap::Args, Debug, Default, PartialEq)]
struct VariableSource {
    /// JSON file holding the variable list
    #[arg(value_name = "VARIABLES")]
    variables: Option<PathBuf>,

    /// Load variables stored for this user
    #[arg(long, value_name = "ID", conflicts_with = "variables")]
    user: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Print the shareable path for a request
    Encode {
        #[arg(value_name = "REQUEST")]
        request: PathBuf,
        #[command(flatten)]
        source: VariableSource,
    },
    /// Print a shared path as a JSON request
    Decode {
        path: String,
        /// Store the decoded variables for this user
        #[arg(long, value_name = "ID")]
        save_as: Option<String>,
    },
    /// Print a code snippet for a request
    Generate {
        #[arg(value_name = "REQUEST")]
        request: PathBuf,
        /// Target language id; defaults to the defaultLanguage setting
        #[arg(short, long, value_name = "ID")]
        language: Option<String>,
    },
    /// List the code generation targets
    Languages,
    /// Check that a URL is absolute once variables are applied
    Validate {
        url: String,
        #[command(flatten)]
        source: VariableSource,
    },
    /// Execute a request and print the response
    Send {
        #[arg(value_name = "REQUEST")]
        request: PathBuf,
        #[command(flatten)]
        source: VariableSource,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let config = match &cli.config {
        Some(path) => load_config_file(path)?,
        None => load_config(None)?,
    };

    match cli.command {
        Command::Encode { request, source } => {
            let spec: RequestSpec = read_json(&request)?;
            let variables = load_variables(&config, &source)?;
            let parts = codec::encode_parts(&spec, variables.as_deref());
            println!("{}", parts.to_path_with_prefix(&config.route_prefix));
            Ok(())
        }
        Command::Decode { path, save_as } => {
            let decoded = codec::decode_path(&path, &config.route_prefix)
                .map_err(|e| e.to_string())?;
            if let Some(user) = save_as {
                config
                    .variable_store()
                    .save(&decoded.variables, &user)
                    .map_err(|e| e.to_string())?;
                log::info!("Stored {} variables for {}", decoded.variables.len(), user);
            }
            let output = json!({
                "method": decoded.method,
                "url": decoded.url,
                "body": decoded.body,
                "headers": decoded.headers,
                "variables": decoded.variables,
            });
            print_json(&output)
        }
        Command::Generate { request, language } => {
            let spec: RequestSpec = read_json(&request)?;
            let language = config
                .resolve_language(language.as_deref())
                .map_err(|e| e.to_string())?;
            log::debug!("Generating {} snippet", language.label());
            let code =
                codegen::generate_for(language, spec.method, &spec.url, &spec.body, &spec.headers);
            println!("{}", code);
            Ok(())
        }
        Command::Languages => {
            let default = config.language();
            for language in Language::all() {
                let marker = if language == default { " (default)" } else { "" };
                println!("{:<18} {}{}", language.id(), language.label(), marker);
            }
            Ok(())
        }
        Command::Validate { url, source } => {
            let variables = load_variables(&config, &source)?.unwrap_or_default();
            validator::validate(&url, &variables).map_err(|e| e.to_string())?;
            println!("valid");
            Ok(())
        }
        Command::Send { request, source } => {
            let spec: RequestSpec = read_json(&request)?;
            let variables = load_variables(&config, &source)?;
            send(&config, &spec, variables).await
        }
    }
}

async fn send(
    config: &RestClientConfig,
    spec: &RequestSpec,
    variables: Option<Vec<Variable>>,
) -> Result<(), String> {
    let executor =
        RequestExecutor::new(ExecutionConfig::from(config)).map_err(|e| e.to_string())?;
    log::debug!("Sending as {}", executor.config().user_agent);

    let resolved = variables.as_deref().unwrap_or_default();
    let response = executor.execute_with_variables(spec, resolved).await;

    let entry = HistoryEntry::record(
        substitute(&spec.url, resolved),
        spec.method,
        &response,
        &spec.body,
        codec::encode(spec, variables.as_deref()),
    );
    log::info!(
        "{} {} -> {:?} in {:?}ms",
        entry.method,
        entry.endpoint,
        entry.status_code,
        entry.duration
    );

    print_json(&response)?;
    match response.error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// Variables from a file, from the user's store, or none at all.
fn load_variables(
    config: &RestClientConfig,
    source: &VariableSource,
) -> Result<Option<Vec<Variable>>, String> {
    if let Some(path) = &source.variables {
        return read_json(path).map(Some);
    }
    match &source.user {
        Some(user) => config
            .variable_store()
            .load(user)
            .map(Some)
            .map_err(|e| e.to_string()),
        None => Ok(None),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let output = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", output);
    Ok(())
}

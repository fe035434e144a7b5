use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use crate::application::ports::{ApiError, BrasilApi};
use crate::application::use_cases;
use crate::domain::address::{Cep, CepError};
use crate::domain::bank::{BankCode, BankCodeError};
use crate::infrastructure::{
    brasil_api::BrasilApiClient,
    config::{load_config, AppConfig, ConfigError},
    http_transport::ReqwestTransport,
};

use super::{logging, render};

/// Interact with BrasilAPI services directly from your terminal.
///
/// Check out more at: https://github.com/BrasilAPI/BrasilAPI
#[derive(Debug, Parser)]
#[command(name = "bra", version)]
pub struct Cli {
    /// Output raw JSON response from the API
    #[arg(long, global = true)]
    pub raw: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read configuration from this file instead of the per-user one
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List Brazilian banks or get details of a specific bank
    ///
    /// When called without arguments, lists all available banks sorted by
    /// COMPE code. With a code (up to 3 digits), shows that bank, e.g.
    /// `bra banks 341`.
    Banks {
        /// COMPE bank code
        code: Option<String>,
    },
    /// Get address information by Brazilian postal code (CEP)
    ///
    /// The CEP must be exactly 8 digits, with or without the hyphen, e.g.
    /// `bra cep 01001-000`.
    Cep {
        /// Postal code
        cep: String,
    },
}

/// A command whose arguments passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    ListBanks,
    Bank(BankCode),
    Address(Cep),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// Raw mode printed the upstream error body to stdout.
    ReportedServiceError,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    BankCode(#[from] BankCodeError),
    #[error(transparent)]
    Cep(#[from] CepError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] ApiError),
    #[error("failed to fetch banks: {0}")]
    FetchBanks(#[source] ApiError),
    #[error("failed to fetch bank: {0}")]
    FetchBank(#[source] ApiError),
    #[error("failed to fetch CEP: {0}")]
    FetchCep(#[source] ApiError),
    #[error("failed to encode JSON: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

pub fn run() -> Result<Outcome, CliError> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let request = validate(&cli.command)?;

    let config = load_config(cli.config.as_deref())?;
    let api = build_client(&config)?;

    let stdout = io::stdout();
    execute(&request, cli.raw, &api, &mut stdout.lock())
}

pub fn build_client(
    config: &AppConfig,
) -> Result<BrasilApiClient<ReqwestTransport>, CliError> {
    debug!(
        base_url = %config.base_url,
        timeout_secs = config.timeout.as_secs(),
        "using BrasilAPI"
    );
    let transport = ReqwestTransport::new(config.timeout).map_err(CliError::Client)?;
    Ok(BrasilApiClient::with_base_url(transport, config.base_url.clone()))
}

pub fn validate(command: &Command) -> Result<Request, CliError> {
    match command {
        Command::Banks { code: None } => Ok(Request::ListBanks),
        Command::Banks { code: Some(code) } => Ok(Request::Bank(BankCode::parse(code.as_str())?)),
        Command::Cep { cep } => Ok(Request::Address(Cep::parse(cep)?)),
    }
}

pub fn execute(
    request: &Request,
    raw: bool,
    api: &dyn BrasilApi,
    out: &mut dyn Write,
) -> Result<Outcome, CliError> {
    match request {
        Request::ListBanks => match use_cases::list_banks(api) {
            Ok(banks) if raw => writeln!(out, "{}", render::raw_json(&banks)?)?,
            Ok(banks) => write!(out, "{}", render::bank_table(&banks))?,
            Err(e) => return report(e, raw, out, CliError::FetchBanks),
        },
        Request::Bank(code) => match use_cases::get_bank(api, code) {
            Ok(bank) if raw => writeln!(out, "{}", render::raw_json(&bank)?)?,
            Ok(bank) => write!(out, "{}", render::bank_detail(&bank))?,
            Err(e) => return report(e, raw, out, CliError::FetchBank),
        },
        Request::Address(cep) => match use_cases::get_address(api, cep) {
            Ok(address) if raw => writeln!(out, "{}", render::raw_json(&address)?)?,
            Ok(address) => write!(out, "{}", render::address_detail(&address))?,
            Err(e) => return report(e, raw, out, CliError::FetchCep),
        },
    }

    Ok(Outcome::Done)
}

fn report(
    err: ApiError,
    raw: bool,
    out: &mut dyn Write,
    wrap: fn(ApiError) -> CliError,
) -> Result<Outcome, CliError> {
    match err.as_service_error() {
        Some(service) if raw => {
            writeln!(out, "{}", render::raw_json(service)?)?;
            Ok(Outcome::ReportedServiceError)
        }
        _ => Err(wrap(err)),
    }
}

use std::{error::Error, path::PathBuf, process};

use clap::{command, Parser, ValueHint};
use log::{debug, error, info, LevelFilter};

use myradio::{
    api::Request,
    config::{Config, DEFAULT_BASE_URL},
    key::{self, ApiKey},
    Session,
};

/// Profile to display when not built in release mode.
#[cfg(debug_assertions)]
const BUILD_PROFILE: &str = "debug";
/// Profile to display when not built release mode.
#[cfg(not(debug_assertions))]
const BUILD_PROFILE: &str = "release";

/// Group name for mutually exclusive logging options.
const ARGS_GROUP_LOGGING: &str = "logging";

/// Command line arguments as parsed by `clap`.
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// MyRadio API base URL
    #[arg(short, long, value_name = "URL", value_hint = ValueHint::Url, default_value_t = String::from(DEFAULT_BASE_URL))]
    url: String,

    /// API key file
    ///
    /// Keep this file private: the key grants access to MyRadio with your
    /// permissions.
    ///
    /// [default: $MYRADIOKEYFILE, then .myradio.key, ~/.myradio.key,
    /// /etc/myradio.key and /usr/local/etc/myradio.key]
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    key_file: Option<PathBuf>,

    /// Mixin to request
    ///
    /// Can be given more than once.
    #[arg(short, long = "mixin", value_name = "MIXIN")]
    mixins: Vec<String>,

    /// Request parameter
    ///
    /// Can be given more than once, also for the same key.
    #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// Suppresses all output except warnings and errors.
    #[arg(short, long, default_value_t = false, group = ARGS_GROUP_LOGGING)]
    quiet: bool,

    /// Enable verbose logging
    ///
    /// Specify twice for trace logging.
    #[arg(short, long, action = clap::ArgAction::Count, group = ARGS_GROUP_LOGGING)]
    verbose: u8,

    /// Endpoint to call, such as `/timeslot/currentandnext`
    endpoint: String,
}

/// Splits a `KEY=VALUE` argument.
fn parse_param(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{arg}`")),
    }
}

/// Initializes the logger facade.
///
/// The logging level is determined as follows, in order of precedence from
/// highest to lowest:
/// 1. Command line arguments
/// 2. `RUST_LOG` environment variable
/// 3. Hard coded default
///
/// # Panics
///
/// Panics when a logger facade is already initialized.
fn init_logger(config: &Args) {
    let mut logger = env_logger::Builder::from_env(
        // Note: if you change the default logging level here, then you should
        // probably also change the verbosity levels below.
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    );

    if config.quiet || config.verbose > 0 {
        let level = match config.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        // Filter log messages of external crates.
        logger.filter_module(module_path!(), level);
        logger.filter_module("myradio", level);
    }

    logger.init();
}

/// Loads the API key from `key_file`, or from the first key file found.
fn load_key(key_file: Option<&PathBuf>) -> Result<ApiKey, Box<dyn Error>> {
    let Some(path) = key_file else {
        return key::locate().map_err(|e| {
            info!("put your API key in a file, or point {} at one", key::KEY_FILE_ENV);
            e.into()
        });
    };

    debug!("reading API key from {}", path.display());
    Ok(ApiKey::from_file(path)?)
}

/// Calls the endpoint and prints its payload as pretty JSON.
///
/// An empty payload prints as `null`.
async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let api_key = load_key(args.key_file.as_ref())?;
    let config = Config::for_server(&args.url)?;
    let session = Session::with_config(&config, api_key)?;

    let mut request = Request::new(args.endpoint).with_mixins(args.mixins);
    for (key, value) in args.params {
        request.params.entry(key).or_default().push(value);
    }

    let payload: serde_json::Value = session
        .execute(request)
        .await
        .decode()?
        .unwrap_or_default();

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

#[tokio::main]
async fn main() {
    // `clap` handles our command line arguments and help text.
    let args = Args::parse();
    init_logger(&args);

    debug!("Command {:#?}", args);

    let cmd = command!();
    let name = cmd.get_name().to_string();
    let version = cmd.get_version().unwrap_or("UNKNOWN").to_string();
    debug!("starting {name}/{version}; {BUILD_PROFILE}");

    if let Err(e) = run(args).await {
        error!("{e}");
        process::exit(1);
    }
}

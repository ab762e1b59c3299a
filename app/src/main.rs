//! Vendor client entry-point: loads settings, wires adapters, runs one command.

use std::ffi::OsString;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use vendor_app::config::AppSettings;
use vendor_app::domain::SessionStore;
use vendor_app::inbound::cli::{App, Cli};
use vendor_app::outbound::checkout::{PromptCheckout, stdin_lines};
use vendor_app::outbound::http::HttpBackend;
use vendor_app::outbound::storage::FileSessionStorage;
use vendor_app::runtime;

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> Result<()> {
    color_eyre::install()?;
    let mut cli = Cli::parse();
    let mut settings = AppSettings::load_from_iter([OsString::from("vendor-app")])
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    if let Some(url) = cli.api_base_url.take() {
        settings.api_base_url = Some(url);
    }
    if let Some(dir) = cli.session_dir.take() {
        settings.session_dir = Some(dir);
    }
    init_tracing(settings.log_json);

    let tokio = runtime::build().wrap_err("failed to build runtime")?;
    runtime::block_on_detached(tokio, run(cli, &settings))
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

async fn run(cli: Cli, settings: &AppSettings) -> Result<()> {
    let backend = HttpBackend::new(settings.api_base_url()?, settings.request_timeout())
        .wrap_err("failed to build HTTP client")?;
    let session_dir = settings.session_dir();
    let storage = FileSessionStorage::open(&session_dir)
        .wrap_err_with(|| format!("failed to open session directory {session_dir}"))?;

    let app = App::new(
        Arc::new(backend),
        Arc::new(SessionStore::new(Arc::new(storage))),
        Arc::new(PromptCheckout::terminal()),
        settings.checkout(),
    );
    let mut input = stdin_lines();
    let mut out = std::io::stdout().lock();
    app.run(cli.command, &mut input, &mut out).await?;
    Ok(())
}

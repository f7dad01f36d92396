//! Vendedores: seller directory lookup
//!
//! Usage:
//!   vendedores                          - Open the search form
//!   vendedores buscar [--por MODO] VAL  - Search and print the results
//!
//! The backend address comes from `--api-url` or `VENDEDORES_API_BASE_URL`.

mod app;
mod backend;
mod commands;
mod config;
mod form;
mod ui;

use anyhow::bail;
use clap::Parser;
use iced::{Size, Task};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::Vendedores;
use backend::{SearchClient, SearchMode};
use commands::{Cli, Command, SearchArgs};
use config::Settings;
use form::{FieldUpdate, SearchFormState};

fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let cli = Cli::parse();
    let settings = Settings::resolve(cli.api_url);

    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => run_gui(&settings),
        Command::Buscar(args) => run_search(&settings, args),
    }
}

fn run_gui(settings: &Settings) -> anyhow::Result<()> {
    let client = SearchClient::new(&settings.api_base_url)?;
    tracing::info!("Starting search form against {}", client.endpoint());

    iced::application(app::TITLE, Vendedores::update, Vendedores::view)
        .theme(Vendedores::theme)
        .window_size(Size::new(960.0, 720.0))
        .run_with(move || (Vendedores::new(client), Task::none()))?;

    Ok(())
}

fn run_search(settings: &Settings, args: SearchArgs) -> anyhow::Result<()> {
    let client = SearchClient::new(&settings.api_base_url)?;

    let mode = SearchMode::from(args.mode);
    let mut state = SearchFormState::new();
    state.set_mode(mode);
    state.set_field(FieldUpdate::for_mode(mode, args.value));
    state.set_field(FieldUpdate::ActiveOnly(!args.include_inactive));

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(state.search(&client));

    if state.has_failed() {
        bail!("{}", state.message());
    }
    if !state.message().is_empty() {
        eprintln!("{}", state.message());
    }
    if !state.results().is_empty() {
        print!(
            "{}",
            ui::results_table::render_text(state.results(), state.total_count())
        );
    }

    Ok(())
}

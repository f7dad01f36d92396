//! Command line parsing
//!
//! With no subcommand the search form opens; `buscar` runs one search and
//! prints the table.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::backend::SearchMode;
use crate::config::API_BASE_URL_ENV;

#[derive(Debug, Parser)]
#[command(name = "vendedores", version, about = "Búsqueda de vendedores")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the vendedores API
    #[arg(long, global = true, env = API_BASE_URL_ENV)]
    pub api_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Open the search form (default)
    Gui,
    /// Search from the command line and print the results
    Buscar(SearchArgs),
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct SearchArgs {
    /// Field to search by
    #[arg(long = "por", value_enum, default_value_t = ModeArg::Cla)]
    pub mode: ModeArg,

    /// Include inactive sellers
    #[arg(long = "todos")]
    pub include_inactive: bool,

    /// Value to search for (case-insensitive)
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// First name
    Nom,
    /// Surname
    Ape,
    /// Commission type code
    Comi,
    /// Seller key
    Cla,
}

impl From<ModeArg> for SearchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Nom => SearchMode::ByFirstName,
            ModeArg::Ape => SearchMode::BySurname,
            ModeArg::Comi => SearchMode::ByCommissionType,
            ModeArg::Cla => SearchMode::ByKey,
        }
    }
}

//! Command-line interface for the Cityscout recommendation engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use std::sync::Arc;
use thiserror::Error;

use cityscout_core::{EmbedError, GeocodeError, VenueSourceError};
use cityscout_data::ProviderBuildError;

mod recommend;

use recommend::RecommendArgs;
pub use recommend::{Method, RecommendConfig};

pub(crate) const ARG_CITY: &str = "city";
pub(crate) const ARG_CATEGORY: &str = "category";
pub(crate) const ARG_API_KEY: &str = "api-key";
pub(crate) const ENV_CITY: &str = "CITYSCOUT_CMDS_RECOMMEND_CITY";
pub(crate) const ENV_CATEGORY: &str = "CITYSCOUT_CMDS_RECOMMEND_CATEGORY";
pub(crate) const ENV_API_KEY: &str = "CITYSCOUT_CMDS_RECOMMEND_API_KEY";

/// Run the Cityscout CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging, or
/// the recommendation pipeline fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => recommend::run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "cityscout",
    about = "Dual-track venue recommendations near a city",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend venues near a city.
    Recommend(RecommendArgs),
}

/// Errors emitted by the Cityscout CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Argument name as spelled on the command line.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// Constructing an HTTP provider failed.
    #[error("failed to build the {service} provider")]
    BuildProvider {
        /// Human-readable provider name.
        service: &'static str,
        /// Source error from `cityscout-data`.
        #[source]
        source: ProviderBuildError,
    },
    /// The geocoding collaborator failed.
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
    /// The places-directory collaborator failed.
    #[error(transparent)]
    VenueSearch(#[from] VenueSourceError),
    /// The embedding collaborator failed.
    #[error(transparent)]
    Embed(#[from] EmbedError),
    /// The directory answered but held no venues for the search.
    #[error("no venues found near '{city}' for category '{category}'")]
    NoVenues {
        /// City the caller asked about.
        city: String,
        /// Category the caller asked about.
        category: String,
    },
    /// Serialising the result to JSON failed.
    #[error("failed to serialise recommendations")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the result to the output stream failed.
    #[error("failed to write recommendations")]
    WriteOutput(#[source] std::io::Error),
}

#[cfg(test)]
mod tests;

//! Recommend command implementation for the Cityscout CLI.

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use cityscout_core::{
    CategoryMap, Embedder, Geocoder, Recommendations, TrackVocabulary, VenueSource,
    classify_and_build,
};
use cityscout_data::embed::{HttpEmbedder, HttpEmbedderConfig};
use cityscout_data::geocode::{HttpGeocoder, HttpGeocoderConfig};
use cityscout_data::places::{HttpVenueSource, HttpVenueSourceConfig};
use cityscout_ranker::{aggregate, rank_rated, rank_semantic};

use crate::{ARG_API_KEY, ARG_CATEGORY, ARG_CITY, CliError, ENV_API_KEY, ENV_CATEGORY, ENV_CITY};

const DEFAULT_TOP_K: usize = 10;
const DEFAULT_MAX_RESULTS: usize = 60;
const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com";
const DEFAULT_EMBED_BASE_URL: &str = "http://localhost:8100";
const DEFAULT_EMBED_MODEL: &str = "all-MiniLM-L6-v2";

/// Which ranking track(s) to run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Rank the rated track only.
    #[default]
    Rated,
    /// Rank the semantic track only.
    Semantic,
    /// Run both rankers and return both tracks.
    Both,
}

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Recommend venues near a city. Candidates are fetched from \
                 the places directory, split into a rated and a semantic \
                 track, and the requested track(s) are ranked. Options can \
                 come from CLI flags, configuration files, or environment \
                 variables.",
    about = "Recommend venues near a city"
)]
#[ortho_config(prefix = "CITYSCOUT")]
pub struct RecommendArgs {
    /// City to search around.
    #[arg(value_name = "city")]
    #[serde(default)]
    pub city: Option<String>,
    /// Venue category to search for (e.g. "temple", "restaurant").
    #[arg(long = ARG_CATEGORY, value_name = "category")]
    #[serde(default)]
    pub category: Option<String>,
    /// Free-text query for the semantic track; defaults to the category.
    #[arg(long, value_name = "text")]
    #[serde(default)]
    pub query: Option<String>,
    /// Which ranking track(s) to run.
    #[arg(long, value_enum)]
    #[serde(default)]
    pub method: Option<Method>,
    /// Maximum results per track.
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pub top_k: Option<usize>,
    /// Cap on venues fetched from the directory.
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pub max_results: Option<usize>,
    /// API key for the places directory.
    #[arg(long = ARG_API_KEY, value_name = "key")]
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL for the places directory.
    #[arg(long, value_name = "url")]
    #[serde(default)]
    pub places_base_url: Option<String>,
    /// Base URL for the embedding service.
    #[arg(long, value_name = "url")]
    #[serde(default)]
    pub embed_base_url: Option<String>,
    /// Model identifier the embedding service encodes with.
    #[arg(long, value_name = "model")]
    #[serde(default)]
    pub embed_model: Option<String>,
}

impl RecommendArgs {
    fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendConfig {
    /// City to search around.
    pub city: String,
    /// Caller-facing venue category.
    pub category: String,
    /// Free-text query for the semantic track.
    pub query: String,
    /// Which ranking track(s) to run.
    pub method: Method,
    /// Maximum results per track.
    pub top_k: usize,
    /// Cap on venues fetched from the directory.
    pub max_results: usize,
    /// API key for the places directory.
    pub api_key: String,
    /// Base URL for the places directory.
    pub places_base_url: String,
    /// Base URL for the embedding service.
    pub embed_base_url: String,
    /// Model identifier the embedding service encodes with.
    pub embed_model: String,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let city = args.city.ok_or(CliError::MissingArgument {
            field: ARG_CITY,
            env: ENV_CITY,
        })?;
        let category = args.category.ok_or(CliError::MissingArgument {
            field: ARG_CATEGORY,
            env: ENV_CATEGORY,
        })?;
        let api_key = args.api_key.ok_or(CliError::MissingArgument {
            field: ARG_API_KEY,
            env: ENV_API_KEY,
        })?;

        // The original semantic path matches the requested category when no
        // explicit query is given.
        let query = args.query.unwrap_or_else(|| category.clone());

        Ok(Self {
            city,
            category,
            query,
            method: args.method.unwrap_or_default(),
            top_k: args.top_k.unwrap_or(DEFAULT_TOP_K),
            max_results: args.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
            api_key,
            places_base_url: args
                .places_base_url
                .unwrap_or_else(|| DEFAULT_PLACES_BASE_URL.to_owned()),
            embed_base_url: args
                .embed_base_url
                .unwrap_or_else(|| DEFAULT_EMBED_BASE_URL.to_owned()),
            embed_model: args
                .embed_model
                .unwrap_or_else(|| DEFAULT_EMBED_MODEL.to_owned()),
        })
    }
}

/// The collaborators one recommend invocation talks to.
pub(super) struct Providers {
    pub(super) geocoder: Box<dyn Geocoder>,
    pub(super) source: Box<dyn VenueSource>,
    pub(super) embedder: Box<dyn Embedder>,
}

/// Builds the collaborator set for the current invocation.
pub(super) trait RecommendProviderBuilder {
    fn build(&self, config: &RecommendConfig) -> Result<Providers, CliError>;
}

pub(super) struct DefaultProviderBuilder;

impl RecommendProviderBuilder for DefaultProviderBuilder {
    fn build(&self, config: &RecommendConfig) -> Result<Providers, CliError> {
        let geocoder = HttpGeocoder::with_config(HttpGeocoderConfig::new(
            config.places_base_url.clone(),
            config.api_key.clone(),
        ))
        .map_err(|source| CliError::BuildProvider {
            service: "geocoding",
            source,
        })?;
        let source = HttpVenueSource::with_config(HttpVenueSourceConfig::new(
            config.places_base_url.clone(),
            config.api_key.clone(),
        ))
        .map_err(|source| CliError::BuildProvider {
            service: "places",
            source,
        })?;
        let embedder = HttpEmbedder::with_config(
            HttpEmbedderConfig::new(config.embed_base_url.clone())
                .with_model(config.embed_model.clone()),
        )
        .map_err(|source| CliError::BuildProvider {
            service: "embedding",
            source,
        })?;
        Ok(Providers {
            geocoder: Box::new(geocoder),
            source: Box::new(source),
            embedder: Box::new(embedder),
        })
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultProviderBuilder;
    run_recommend_with(args, &builder, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn RecommendProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let recommendations = execute_recommend(args, builder)?;
    write_recommendations(writer, &recommendations)
}

fn execute_recommend(
    args: RecommendArgs,
    builder: &dyn RecommendProviderBuilder,
) -> Result<Recommendations, CliError> {
    let config = args.into_config()?;
    let providers = builder.build(&config)?;

    log::info!("resolving '{}'", config.city);
    let location = providers.geocoder.geocode(&config.city)?;

    let directory_category = CategoryMap::default().resolve(&config.category).to_owned();
    log::info!(
        "searching for '{}' venues (directory type '{}')",
        config.category,
        directory_category
    );
    let raw = providers
        .source
        .search_nearby(location, &directory_category, config.max_results)?;

    let records = classify_and_build(raw, &TrackVocabulary::default());
    if records.is_empty() {
        return Err(CliError::NoVenues {
            city: config.city,
            category: config.category,
        });
    }

    let rated = match config.method {
        Method::Rated | Method::Both => rank_rated(&records, config.top_k),
        Method::Semantic => Vec::new(),
    };
    let semantic = match config.method {
        Method::Semantic | Method::Both => rank_semantic(
            &records,
            &config.query,
            config.top_k,
            providers.embedder.as_ref(),
        )?,
        Method::Rated => Vec::new(),
    };

    Ok(aggregate(&records, rated, semantic))
}

fn write_recommendations(
    writer: &mut dyn Write,
    recommendations: &Recommendations,
) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(recommendations).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_args_for_test(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    RecommendConfig::try_from(args)
}

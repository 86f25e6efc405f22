//! smgres - input resolution for a modified-gravity cosmological solver.
//!
//! This crate turns a user-supplied parameter file into a fully
//! validated [`resolve::ResolvedConfig`] for the scalar-modified-gravity
//! sector of a background/perturbation solver: alias resolution for
//! enumerated settings, default layering, model-registry lookups,
//! cross-field consistency checks and the shooting-algorithm setup.

#![warn(missing_docs)]

pub mod cli;
pub mod constants;
pub mod error;
pub mod keystore;
pub mod precision;
pub mod registry;
pub mod resolve;

use clap::Parser;
use cli::Cli;
use keystore::KeyStore;
use registry::ModelRegistry;
use serde::Serialize;
use std::path::Path;
use tracing::info;

pub use error::{Error, Result};

/// JSON envelope for `--json` output.
#[derive(Debug, Serialize)]
struct ResolvedOutput<'a> {
    config: &'a resolve::ResolvedConfig,
    precision: &'a precision::Precision,
}

/// Main entry point for the smgres CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let registry = ModelRegistry::builtin();

    if cli.list_models {
        print_model_list(&registry);
        return Ok(());
    }

    let Some(input) = cli.input.as_deref() else {
        // clap enforces the positional unless --list-models was given.
        return Ok(());
    };

    let (config, precision) = check_parameter_file(input, &registry, cli.verbose)?;

    if cli.json {
        print_json(&config, &precision)?;
    } else {
        print_summary(&config, &precision);
    }

    Ok(())
}

/// Resolve a parameter file against `registry` and apply the precision
/// post-pass. Returns the configuration the solver would run with.
pub fn check_parameter_file(
    path: &Path,
    registry: &ModelRegistry,
    input_verbose: u8,
) -> Result<(resolve::ResolvedConfig, precision::Precision)> {
    info!("Resolving parameter file: {}", path.display());

    let keystore = KeyStore::from_toml_file(path)?;
    info!("Read {} parameter(s)", keystore.len());

    let mut precision = precision::Precision::default();
    let config = resolve::resolve(&keystore, registry, &mut precision)?;
    precision::adjust(&mut precision);

    resolve::warn_input_choices(&config, input_verbose);

    Ok((config, precision))
}

#[allow(clippy::print_stdout)]
fn print_model_list(registry: &ModelRegistry) {
    println!("Available gravity models:");
    println!();
    for name in registry.gravity_model_names() {
        println!("  {name}");
    }
}

#[allow(clippy::print_stdout)]
fn print_summary(config: &resolve::ResolvedConfig, precision: &precision::Precision) {
    println!("Gravity model: {}", config.gravity_model);
    if let Some(expansion) = &config.expansion_model {
        println!("Expansion model: {expansion}");
    } else {
        println!("Expansion model: (self-consistent field evolution)");
    }
    println!("QS method: {}", config.qs_method);
    println!("Perturbation ICs: {}", config.pert_initial_conditions);
    println!(
        "Parameters: {:?} (tuning index {}, dx/dy guess {})",
        config.parameters, config.tuning_index, config.tuning_dxdy_guess
    );
    if config.omega_debug_mode {
        println!("Shooting: bypassed (omega debug mode)");
    } else {
        println!("Shooting: enabled");
    }
    println!(
        "Sampling stepsize: {}",
        precision.perturbations_sampling_stepsize
    );
}

fn print_json(config: &resolve::ResolvedConfig, precision: &precision::Precision) -> Result<()> {
    let output = ResolvedOutput { config, precision };
    let json =
        serde_json::to_string_pretty(&output).map_err(|e| Error::OutputSerialize { source: e })?;
    #[allow(clippy::print_stdout)]
    {
        println!("{json}");
    }
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

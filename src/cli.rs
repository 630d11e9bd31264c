//! Command-line front end for configured bindings.
//!
//! Usage: `catpal [--config PATH] <binding> [label...]`. The `--config` flag
//! may appear anywhere in the argument list.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::binding::BindingError;
use crate::config::{ConfigError, PaletteConfig};

/// Usage line shown on argument errors.
pub const USAGE: &str = "usage: catpal [--config PATH] <binding> [label...]";

/// Errors reported by the command-line tool.
#[derive(Error, Debug)]
pub enum CliError {
    /// Arguments could not be parsed
    #[error("{0}")]
    Usage(String),

    /// Configuration could not be loaded or a binding could not be built
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A requested label is not bound
    #[error(transparent)]
    Binding(#[from] BindingError),

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parsed command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Explicit configuration file
    pub config: Option<PathBuf>,
    /// Binding to use
    pub binding: String,
    /// Labels to resolve; empty lists the whole binding
    pub labels: Vec<String>,
}

impl CliArgs {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = None;
        let mut positional = Vec::new();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "--config" {
                let path = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--config requires a path".to_string()))?;
                if config.replace(PathBuf::from(path)).is_some() {
                    return Err(CliError::Usage("--config given more than once".to_string()));
                }
            } else {
                positional.push(arg);
            }
        }

        let mut positional = positional.into_iter();
        let binding = positional
            .next()
            .ok_or_else(|| CliError::Usage(USAGE.to_string()))?;

        Ok(Self {
            config,
            binding,
            labels: positional.collect(),
        })
    }
}

/// Resolve `args` against `config` and write the result to `out`.
///
/// Without labels every `label color` pair is listed in binding order.
/// With labels one color per line is written, in the requested order.
pub fn run(args: &CliArgs, config: &PaletteConfig, out: &mut impl Write) -> Result<(), CliError> {
    let binding = config.binding(&args.binding)?;

    if args.labels.is_empty() {
        for (label, color) in binding.iter() {
            writeln!(out, "{} {}", label, color)?;
        }
    } else {
        for color in binding.resolve(&args.labels)? {
            writeln!(out, "{}", color)?;
        }
    }

    Ok(())
}

/// Parse arguments, pick the configuration, and write the result to `out`.
///
/// `default_path` is consulted only when no `--config` flag is given.
pub fn execute<I>(
    args: I,
    default_path: Option<&Path>,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    I: IntoIterator<Item = String>,
{
    let args = CliArgs::parse(args)?;
    let config = PaletteConfig::select(args.config.as_deref(), default_path)?;
    run(&args, &config, out)
}

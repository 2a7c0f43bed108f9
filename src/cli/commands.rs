use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::augment::{GeneratedClass, GeneratedInterface};
use crate::compiler::compile;
use crate::feature::FEATURES;
use crate::linter::{has_errors, lint_properties, print_lint_issues, LintSeverity};
use crate::plugin::{AnnotationPlugin, IntrospectedTable, Plugin};
use crate::properties::{load_properties, Properties};

/// Command-line interface for annogen
///
/// Compiles plugin properties into the annotations attached to generated
/// model classes.
#[derive(Parser)]
#[command(name = "annogen")]
#[command(about = "Annotation plugin compiler for generated model classes", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Where plugin properties come from
#[derive(Args, Debug, Clone, Default)]
pub struct PropertySource {
    /// Properties file (TOML, YAML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Extra `key=value` property, applied after the file (repeatable)
    #[arg(short, long = "set", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub set: Vec<(String, String)>,
}

impl PropertySource {
    /// Load the file, if any, then apply `--set` pairs in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the properties file cannot be loaded.
    pub fn load(&self) -> anyhow::Result<Properties> {
        let mut props = match &self.config {
            Some(path) => load_properties(path)?,
            None => Properties::new(),
        };
        for (key, value) in &self.set {
            props.insert(key.clone(), value.clone());
        }
        Ok(props)
    }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the imports and annotations compiled from the properties
    Render {
        #[command(flatten)]
        source: PropertySource,
    },
    /// Print the header generated for a model class
    Annotate {
        #[command(flatten)]
        source: PropertySource,

        /// Name of the model class
        #[arg(long = "class", value_name = "NAME")]
        class_name: String,

        /// Also print the `<NAME>Mapper` client interface
        #[arg(long, default_value_t = false)]
        mapper: bool,
    },
    /// Lint plugin properties
    ///
    /// Reports keys that are silently ignored during compilation:
    /// - unknown feature keys
    /// - non-boolean feature flags
    /// - options without an enabled owner
    /// - option values with unbalanced braces
    Lint {
        #[command(flatten)]
        source: PropertySource,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,

        /// Print issues as a JSON array instead of a report
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the available features
    Features {
        /// Print the catalog as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// Parse the command line and execute it, writing to stdout.
///
/// # Errors
///
/// Returns an error if properties cannot be loaded, output cannot be written,
/// or `lint --fail-on-error` finds errors.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}

/// Execute a parsed command, writing results to `out`.
///
/// Human-readable lint reports are printed to stdout directly.
///
/// # Errors
///
/// See [`run_cli`].
pub fn execute(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Render { source } => {
            let selection = compile(&source.load()?);
            for import in selection.imports() {
                writeln!(out, "import {import};")?;
            }
            for annotation in selection.annotations() {
                writeln!(out, "{annotation}")?;
            }
            Ok(())
        }
        Commands::Annotate {
            source,
            class_name,
            mapper,
        } => {
            let plugin = AnnotationPlugin::with_properties(&source.load()?);
            let table = IntrospectedTable::new(class_name.clone());

            let mut class = GeneratedClass::new(class_name.clone());
            plugin.model_base_record_class_generated(&mut class, &table);
            writeln!(out, "{class}")?;

            if *mapper {
                let mut iface = GeneratedInterface::new(format!("{class_name}Mapper"));
                plugin.client_generated(&mut iface, &table);
                writeln!(out)?;
                writeln!(out, "{iface}")?;
            }
            Ok(())
        }
        Commands::Lint {
            source,
            fail_on_error,
            errors_only,
            json,
        } => {
            let mut issues = lint_properties(&source.load()?);
            if *errors_only {
                issues.retain(|i| i.severity == LintSeverity::Error);
            }
            if *json {
                serde_json::to_writer_pretty(&mut *out, &issues)
                    .context("Failed to serialize lint issues")?;
                writeln!(out)?;
            } else {
                print_lint_issues(&issues);
            }
            if *fail_on_error && has_errors(&issues) {
                let location = source
                    .config
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "command-line properties".to_string());
                bail!("lint errors found in {location}");
            }
            Ok(())
        }
        Commands::Features { json: true } => {
            serde_json::to_writer_pretty(&mut *out, &FEATURES)
                .context("Failed to serialize feature catalog")?;
            writeln!(out)?;
            Ok(())
        }
        Commands::Features { json: false } => {
            for def in FEATURES.iter() {
                let deps: Vec<_> = def.depends_on.to_vec();
                let suffix = if def.is_default() {
                    " (always on)".to_string()
                } else if deps.is_empty() {
                    String::new()
                } else {
                    format!(" (requires {})", deps.join(", "))
                };
                writeln!(out, "{:<20} {:<20} {}{}", def.key, def.name, def.import, suffix)
                    .context("Failed to write feature list")?;
            }
            Ok(())
        }
    }
}

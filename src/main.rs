mod adapters;
mod application;
mod cli;
mod config;
mod model_scan;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter, StdoutPresenter};
use adapters::outbound::formatters::DEFAULT_LAYOUT;
use application::dto::{AnalysisRequest, ArtifactKind, WrittenArtifact, DEFAULT_EXTENSION};
use application::factories::FormatterFactory;
use application::read_models::ModelReadModel;
use application::use_cases::AnalyzeModelUseCase;
use cli::{Args, Command, OrderArgs, RunArgs};
use config::{discover_config, load_config_from_path, validate_extension, ConfigFile};
use model_scan::policies::ROOT_NAMESPACE;
use owo_colors::OwoColorize;
use ports::outbound::OutputPresenter;
use shared::error::ExitCode;
use shared::Result;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

/// Settings for one `run`, after command-line flags were laid over the
/// configuration file and the defaults
#[derive(Debug, PartialEq, Eq)]
struct RunSettings {
    request: AnalysisRequest,
    graph_layout: String,
    write_graph: bool,
    write_notebook: bool,
}

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here and are not failures
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing(&args.log_level);

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

/// Diagnostics go to stderr; RUST_LOG wins over --log-level.
fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: Args) -> Result<()> {
    let reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    match args.command {
        Command::Run(run_args) => run_pipeline(run_args, reporter, args.quiet),
        Command::Order(order_args) => print_order(order_args, reporter),
    }
}

fn run_pipeline(args: RunArgs, reporter: StderrProgressReporter, quiet: bool) -> Result<()> {
    let config = load_config(args.config.as_deref(), &args.folder)?;
    let settings = resolve_run_settings(&args, config)?;
    tracing::debug!(?settings, "run settings resolved");

    // Create use case with injected dependencies
    let use_case = AnalyzeModelUseCase::new(FileSystemReader::new(), reporter);
    let response = use_case.execute(settings.request)?;
    let model = ModelReadModel::from_response(&response);

    // The graph goes first: a graph that cannot be drawn fails the run
    // before the other artifacts are touched
    let targets = [
        (ArtifactKind::Graph, settings.write_graph, args.graph_out),
        (ArtifactKind::Sysml, true, args.sysml_out),
        (ArtifactKind::Notebook, settings.write_notebook, args.notebook_out),
    ];

    let mut written = Vec::new();
    for (kind, enabled, path) in targets {
        if !enabled {
            continue;
        }
        if !quiet {
            eprintln!("{}", FormatterFactory::progress_message(kind));
        }
        let content =
            FormatterFactory::create_artifact(kind, &settings.graph_layout).format(&model)?;
        FileSystemWriter::new(path.clone()).present(&content)?;
        written.push(WrittenArtifact::new(kind, path));
    }

    let summary = FormatterFactory::create_summary(args.format, written).format(&model)?;
    StdoutPresenter::new().present(&summary)
}

fn print_order(args: OrderArgs, reporter: StderrProgressReporter) -> Result<()> {
    let config = discover_config(&args.folder)?.unwrap_or_default();
    let extension = args
        .extension
        .or(config.extension)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    validate_extension(&extension)?;
    let dependencies_first = if args.importers_first {
        false
    } else {
        config.dependencies_first.unwrap_or(true)
    };

    let use_case = AnalyzeModelUseCase::new(FileSystemReader::new(), reporter);
    let order = use_case.order_only(&args.folder, &extension, dependencies_first)?;

    StdoutPresenter::new().present(&format_order(&order))
}

/// `   1. Name` lines, numbered from one
fn format_order(order: &[String]) -> String {
    order
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:4}. {}\n", i + 1, name))
        .collect()
}

/// An explicit --config must exist; otherwise the folder is searched.
fn load_config(explicit: Option<&Path>, folder: &Path) -> Result<ConfigFile> {
    let config = match explicit {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(folder)?,
    };
    Ok(config.unwrap_or_default())
}

fn resolve_run_settings(args: &RunArgs, config: ConfigFile) -> Result<RunSettings> {
    let extension = args
        .extension
        .clone()
        .or(config.extension)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    validate_extension(&extension)?;

    let ignore_missing: Vec<String> = if !args.ignore_missing.is_empty() {
        args.ignore_missing.clone()
    } else {
        config
            .ignore_missing
            .unwrap_or_else(|| vec![ROOT_NAMESPACE.to_string()])
    };

    let graph_layout = args
        .graph_layout
        .clone()
        .or(config.graph_layout)
        .unwrap_or_else(|| DEFAULT_LAYOUT.to_string());

    // Artifacts keep the default dependencies-first order: a notebook kernel
    // must see every imported package before its importer.
    let request = AnalysisRequest::new(args.folder.clone())
        .with_extension(extension)
        .with_ignore_missing(ignore_missing)
        .with_strict_missing(args.strict_missing || config.strict_missing.unwrap_or(false));

    Ok(RunSettings {
        request,
        graph_layout,
        write_graph: !args.no_graph && config.write_graph.unwrap_or(true),
        write_notebook: !args.no_notebook && config.write_notebook.unwrap_or(true),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn run_args(argv: &[&str]) -> RunArgs {
        let mut full = vec!["sysml-deps", "run"];
        full.extend_from_slice(argv);
        match Args::try_parse_from(full).unwrap().command {
            Command::Run(run) => run,
            Command::Order(_) => panic!("expected run"),
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = resolve_run_settings(&run_args(&[]), ConfigFile::default()).unwrap();

        assert_eq!(settings.request.extension, "sysml");
        assert_eq!(
            settings.request.ignore_missing.iter().collect::<Vec<_>>(),
            vec!["<root>"]
        );
        assert!(!settings.request.strict_missing);
        assert!(settings.request.dependencies_first);
        assert_eq!(settings.graph_layout, "kamada_kawai");
        assert!(settings.write_graph);
        assert!(settings.write_notebook);
    }

    #[test]
    fn test_resolve_config_overrides_defaults() {
        let config = ConfigFile {
            extension: Some("kerml".to_string()),
            ignore_missing: Some(vec!["ISQ".to_string()]),
            strict_missing: Some(true),
            graph_layout: Some("shell".to_string()),
            write_graph: Some(false),
            write_notebook: Some(false),
            dependencies_first: Some(false),
            ..ConfigFile::default()
        };

        let settings = resolve_run_settings(&run_args(&[]), config).unwrap();

        assert_eq!(settings.request.extension, "kerml");
        assert!(settings.request.ignore_missing.contains("ISQ"));
        assert!(!settings.request.ignore_missing.contains("<root>"));
        assert!(settings.request.strict_missing);
        assert_eq!(settings.graph_layout, "shell");
        assert!(!settings.write_graph);
        assert!(!settings.write_notebook);
    }

    #[test]
    fn test_resolve_cli_overrides_config() {
        let config = ConfigFile {
            extension: Some("kerml".to_string()),
            ignore_missing: Some(vec!["ISQ".to_string()]),
            graph_layout: Some("shell".to_string()),
            ..ConfigFile::default()
        };

        let settings = resolve_run_settings(
            &run_args(&[
                "--extension",
                "sysml",
                "--ignore-missing",
                "SI",
                "--graph-layout",
                "spring",
                "--no-graph",
            ]),
            config,
        )
        .unwrap();

        assert_eq!(settings.request.extension, "sysml");
        assert_eq!(
            settings.request.ignore_missing.iter().collect::<Vec<_>>(),
            vec!["SI"]
        );
        assert_eq!(settings.graph_layout, "spring");
        assert!(!settings.write_graph);
    }

    #[test]
    fn test_resolve_run_ignores_config_importers_first() {
        let config = ConfigFile {
            dependencies_first: Some(false),
            ..ConfigFile::default()
        };

        let settings = resolve_run_settings(&run_args(&[]), config).unwrap();
        assert!(settings.request.dependencies_first);
    }

    #[test]
    fn test_resolve_rejects_dotted_extension() {
        let err =
            resolve_run_settings(&run_args(&["--extension", ".sysml"]), ConfigFile::default())
                .unwrap_err();
        assert!(format!("{}", err).contains("must not start with a dot"));
    }

    #[test]
    fn test_load_config_explicit_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.yml");

        let err = load_config(Some(&missing), dir.path()).unwrap_err();
        assert!(format!("{}", err).contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_discovers_in_folder() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(config::CONFIG_FILENAME), "extension: kerml\n").unwrap();

        let config = load_config(None, dir.path()).unwrap();
        assert_eq!(config.extension.as_deref(), Some("kerml"));
    }

    #[test]
    fn test_format_order_numbering() {
        let order = vec!["Lib".to_string(), "App".to_string()];
        assert_eq!(format_order(&order), "   1. Lib\n   2. App\n");
        assert_eq!(format_order(&[]), "");
    }
}

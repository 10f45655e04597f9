use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::ReportFormat;

/// Log levels accepted by --log-level
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Order SysML v2 packages by their imports and build notebooks from them
#[derive(Parser, Debug)]
#[command(name = "sysml-deps")]
#[command(version)]
#[command(
    about = "Recover package imports from SysML v2 sources, order packages by dependency and export notebooks",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Diagnostic log level (RUST_LOG takes precedence when set)
    #[arg(long, global = true, default_value = "warn", value_parser = LOG_LEVELS)]
    pub log_level: String,

    /// Suppress progress output on stderr (warnings and errors are still shown)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan, validate and write the ordered source, notebook and import graph
    Run(RunArgs),
    /// Print the topological package order
    Order(OrderArgs),
}

#[derive(ClapArgs, Debug)]
pub struct RunArgs {
    /// Root folder of the model tree
    #[arg(short, long, default_value = ".")]
    pub folder: PathBuf,

    /// Configuration file (defaults to sysml-deps.config.yml in the folder)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Source file extension, without the leading dot [default: sysml]
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Summary format: text or json
    #[arg(long, default_value = "text")]
    pub format: ReportFormat,

    /// Output path for the packages in dependency order
    #[arg(long, value_name = "PATH", default_value = "packages_in_dependency_order.sysml")]
    pub sysml_out: PathBuf,

    /// Output path for the Jupyter notebook
    #[arg(long, value_name = "PATH", default_value = "packages_in_dependency_order.ipynb")]
    pub notebook_out: PathBuf,

    /// Skip writing the notebook
    #[arg(long)]
    pub no_notebook: bool,

    /// Output path for the Graphviz import graph
    #[arg(long, value_name = "PATH", default_value = "imports.dot")]
    pub graph_out: PathBuf,

    /// Skip writing the import graph
    #[arg(long)]
    pub no_graph: bool,

    /// Graph layout: spring, kamada_kawai or shell [default: kamada_kawai]
    #[arg(long, value_name = "LAYOUT")]
    pub graph_layout: Option<String>,

    /// Imported package allowed to be missing (repeatable) [default: <root>]
    #[arg(long = "ignore-missing", value_name = "NAME")]
    pub ignore_missing: Vec<String>,

    /// Fail when an import is not found among the scanned files
    #[arg(long)]
    pub strict_missing: bool,
}

#[derive(ClapArgs, Debug)]
pub struct OrderArgs {
    /// Root folder of the model tree
    #[arg(short, long, default_value = ".")]
    pub folder: PathBuf,

    /// Source file extension, without the leading dot [default: sysml]
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Emit importers before the packages they import
    #[arg(long)]
    pub importers_first: bool,
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

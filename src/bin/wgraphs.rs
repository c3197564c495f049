//! Reads a graph in the text format from a file (or stdin) and prints its report.

use std::{
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wgraphs::{
    io::{GraphReader, TextReader},
    prelude::*,
    report::GraphReport,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Components, bipartiteness, diameters and cut structure of a labelled weighted graph",
    long_about = None
)]
struct Cli {
    /// Graph file; reads stdin if omitted
    file: Option<PathBuf>,

    /// Reject malformed lines instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Prefix of comment lines
    #[arg(long, value_name = "PREFIX", default_value = "//")]
    comment: String,

    /// Output format of the report
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `field: value` line per query
    Text,
    /// Values only, one per line
    Plain,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let reader = TextReader::new()
        .strict(cli.strict)
        .comment_identifier(cli.comment.as_str());

    let result: io::Result<LabelledGraph> = match &cli.file {
        Some(path) => {
            info!(path = %path.display(), "Reading graph");
            reader.try_read_graph_file(path)
        }
        None => {
            info!("Reading graph from stdin");
            reader.try_read_graph(BufReader::new(io::stdin().lock()))
        }
    };

    let graph = match result {
        Ok(graph) => graph,
        Err(err) => {
            error!("Failed to read graph: {err}");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let report = GraphReport::new(&graph);
    match cli.format {
        Format::Text => println!("{report}"),
        Format::Plain => println!("{}", report.to_plain_string()),
    }

    ExitCode::SUCCESS
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("WGRAPHS_LOG").unwrap_or_else(|_| EnvFilter::new("wgraphs=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .init();
}

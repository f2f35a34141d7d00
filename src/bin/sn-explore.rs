//! Exploratory console report over batches of social-network graph files.
//!
//! Mirrors the typical first look at a Facebook100-style dataset: a detailed
//! report for the first file(s) followed by a quick node/edge/density table
//! over the whole batch. A file that fails to parse is reported and skipped;
//! the batch continues.

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use tracing::{debug, warn};

use sngraphs::{
    algo::*,
    io::{FileFormat, GraphRead},
    prelude::*,
};

type SocialGraph = AttributedGraph<AdjArrayUndir>;

#[derive(Debug, Parser)]
#[command(
    name = "sn-explore",
    about = "Exploratory statistics for social-network graph files"
)]
struct Args {
    /// Graph files or directories to scan for graph files
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// File format to assume instead of guessing from the extension (gml, edgelist)
    #[arg(short, long)]
    format: Option<String>,

    /// Number of leading files to report in detail
    #[arg(long, default_value_t = 1)]
    detail: usize,

    /// Upper limit of rows in the summary table
    #[arg(long)]
    limit: Option<usize>,

    /// Increases the log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let format_override = match args.format.as_deref() {
        Some(s) => Some(s.parse::<FileFormat>().with_context(|| {
            format!("invalid --format {s:?} (expected gml or edgelist)")
        })?),
        None => None,
    };

    let files = discover_files(&args.paths, format_override)?;
    if files.is_empty() {
        bail!("no graph files found in the given paths");
    }

    println!("{:=<80}", "");
    println!("FILES FOUND: {} graph file(s)", files.len());
    println!("{:=<80}", "");

    for path in files.iter().take(args.detail) {
        match detailed_report(path, format_override) {
            Ok(()) => {}
            Err(error) => warn!("skipping {}: {error}", path.display()),
        }
    }

    summary_table(&files, format_override, args.limit);

    println!();
    println!("Total: {} file(s)", files.len());
    Ok(())
}

/// Collects all graph files in the given paths: files are taken as-is,
/// directories are scanned (non-recursively) for files of a recognized
/// format. The resulting list is sorted by path.
fn discover_files(paths: &[PathBuf], format: Option<FileFormat>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let entries = std::fs::read_dir(path)
                .with_context(|| format!("cannot read directory {}", path.display()))?;
            for entry in entries {
                let entry_path = entry?.path();
                if !entry_path.is_file() {
                    continue;
                }
                let matches = match format {
                    Some(wanted) => FileFormat::from_path(&entry_path) == Some(wanted),
                    None => FileFormat::from_path(&entry_path).is_some(),
                };
                if matches {
                    files.push(entry_path);
                }
            }
        } else {
            files.push(path.clone());
        }
    }

    files.sort();
    Ok(files)
}

/// Determines the format of a single file, preferring an explicit override
fn resolve_format(path: &Path, format: Option<FileFormat>) -> Result<FileFormat> {
    format.or_else(|| FileFormat::from_path(path)).with_context(|| {
        format!(
            "cannot determine the file format of {} (use --format)",
            path.display()
        )
    })
}

fn load(path: &Path, format: Option<FileFormat>) -> Result<SocialGraph> {
    let format = resolve_format(path, format)?;
    let start = Instant::now();
    let graph = SocialGraph::try_from_file(path, format)
        .with_context(|| format!("cannot parse {}", path.display()))?;
    debug!(
        "loaded {} ({} nodes, {} edges) in {:.1?}",
        path.display(),
        graph.number_of_nodes(),
        graph.number_of_edges(),
        start.elapsed()
    );
    Ok(graph)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn detailed_report(path: &Path, format: Option<FileFormat>) -> Result<()> {
    let graph = load(path, format)?;

    println!();
    println!("{:=<80}", "");
    println!("DETAILED ANALYSIS: {}", file_stem(path));
    println!("{:=<80}", "");

    let stats = graph.summary_stats();
    println!();
    println!("Nodes: {}", stats.num_nodes);
    println!("Edges: {}", stats.num_edges);
    println!("Density: {:.6}", stats.density);
    println!("Average degree: {:.2}", stats.avg_degree);

    let lcc = graph.largest_connected_component();
    println!(
        "Connected components: {}",
        graph.number_of_connected_components()
    );
    println!(
        "Largest component: {} nodes, {} edges",
        lcc.number_of_nodes(),
        lcc.number_of_edges()
    );

    let distr = graph.degree_distribution();
    println!("Maximum degree: {}", distr.max_degree());

    let clustering = graph.clustering_metrics();
    println!("Global clustering (transitivity): {:.4}", clustering.global_transitivity);
    println!("Mean local clustering: {:.4}", clustering.mean_local);

    let attribute_names = graph.attribute_names();
    if !attribute_names.is_empty() {
        println!();
        println!("--- NODE ATTRIBUTES ---");
        println!("Available attributes: {attribute_names:?}");

        for name in &attribute_names {
            let Some(summary) = graph.attribute_summary(name) else {
                continue;
            };

            println!();
            println!("  {name}:");
            println!("    Type: {}", summary.type_name);
            println!(
                "    Non-null values: {}/{}",
                summary.non_null,
                graph.number_of_nodes()
            );
            println!("    Unique values: {}", summary.unique);
            if let Some(numeric) = &summary.numeric {
                println!("    Min: {}, Max: {}", numeric.min, numeric.max);
                println!("    Mean: {:.2}", numeric.mean);
            }
            if let Some(values) = &summary.string_values {
                println!("    Values: {values:?}");
            }
        }
    }

    println!();
    println!("--- 3 SAMPLE NODES ---");
    for u in graph.vertices().take(3) {
        println!();
        println!(
            "Node {} ({:?}): degree={}",
            u,
            graph.label_of(u),
            graph.degree_of(u)
        );
        for (key, value) in graph.attrs_of(u) {
            println!("  {key}: {value}");
        }
    }

    Ok(())
}

fn summary_table(files: &[PathBuf], format: Option<FileFormat>, limit: Option<usize>) {
    let rows = limit.unwrap_or(files.len()).min(files.len());

    println!();
    println!("{:=<80}", "");
    println!("QUICK STATISTICS ({rows} file(s))");
    println!("{:=<80}", "");

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["File", "Nodes", "Edges", "Density"]);

    for path in files.iter().take(rows) {
        match load(path, format) {
            Ok(graph) => {
                let stats = graph.summary_stats();
                table.add_row(vec![
                    file_stem(path),
                    stats.num_nodes.to_string(),
                    stats.num_edges.to_string(),
                    format!("{:.6}", stats.density),
                ]);
            }
            Err(error) => {
                warn!("{error:#}");
                table.add_row(vec![
                    file_stem(path),
                    "ERROR".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                ]);
            }
        }
    }

    println!("{table}");
}

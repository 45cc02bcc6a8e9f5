//! Tsumugi CLI
//!
//! Command-line tools for Tsumugi template documents.

use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use tokio::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tsumugi_ast::{
    Node, NodeType, ParseResult, SerializeOptions, Severity, Visit, VisitResult, load_document,
    serialize_with_options, walk_tree,
};

/// Tsumugi - template document tools
#[derive(Parser)]
#[command(name = "tsumugi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct template source from an AST document
    Render {
        /// AST document in JSON form, or `-` for stdin
        file: PathBuf,

        /// Write childless tags as `<name></name>` instead of `<name />`
        #[arg(long)]
        no_self_close: bool,

        /// Write the output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize the nodes and diagnostics of an AST document
    Inspect {
        /// AST document in JSON form, or `-` for stdin
        file: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

/// Node kinds in their fixed reporting order.
const KINDS: [NodeType; 10] = [
    NodeType::Root,
    NodeType::Frontmatter,
    NodeType::Doctype,
    NodeType::Comment,
    NodeType::Text,
    NodeType::Expression,
    NodeType::Element,
    NodeType::CustomElement,
    NodeType::Component,
    NodeType::Fragment,
];

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Render {
            ref file,
            no_self_close,
            ref output,
        } => {
            run_render(file, no_self_close, output.as_deref())?;
            Ok(false)
        }
        Commands::Inspect {
            ref file,
            ref format,
        } => run_inspect(file, format),
    }
}

fn run_render(file: &Path, no_self_close: bool, output: Option<&Path>) -> Result<()> {
    let document = load_input(file)?;

    let options = SerializeOptions {
        self_close: !no_self_close,
    };
    let rendered = serialize_with_options(&document.ast, &options);

    match output {
        Some(path) => {
            std::fs::write(path, rendered).into_diagnostic()?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn run_inspect(file: &Path, format: &str) -> Result<bool> {
    let document = load_input(file)?;

    let stats = NodeStats::default();
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .into_diagnostic()?
        .block_on(walk_tree(&stats, &document.ast))
        .map_err(|e| miette::miette!("document walk failed: {e}"))?;

    let counts = stats.counts.into_inner();
    output_summary(&counts, &document, format)?;

    Ok(document.has_errors())
}

/// Counts visited nodes per kind.
#[derive(Default)]
struct NodeStats {
    counts: Mutex<HashMap<NodeType, usize>>,
}

#[async_trait]
impl Visit for NodeStats {
    async fn visit(&self, node: &Node, _: Option<&Node>, _: Option<usize>) -> VisitResult {
        let mut counts = self.counts.lock().await;
        *counts.entry(node.node_type()).or_default() += 1;
        Ok(())
    }
}

fn output_summary(
    counts: &HashMap<NodeType, usize>,
    document: &ParseResult,
    format: &str,
) -> Result<()> {
    let total: usize = counts.values().sum();

    match format {
        "json" => {
            let mut by_type = serde_json::Map::new();
            for kind in KINDS {
                if let Some(count) = counts.get(&kind) {
                    by_type.insert(kind.to_string(), (*count).into());
                }
            }

            let output = serde_json::json!({
                "nodes": total,
                "byType": by_type,
                "diagnostics": document.diagnostics,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&output).into_diagnostic()?
            );
        }
        _ => {
            // Text format
            for kind in KINDS {
                if let Some(count) = counts.get(&kind) {
                    println!("{:<15} {}", kind.to_string(), count);
                }
            }

            if !document.diagnostics.is_empty() {
                println!();
                for diagnostic in &document.diagnostics {
                    let severity = match diagnostic.severity {
                        Severity::Error => "error",
                        Severity::Warning => "warning",
                        Severity::Information => "info",
                        Severity::Hint => "hint",
                    };
                    match &diagnostic.location {
                        Some(location) => println!(
                            "  {}:{} {} [{}]: {}",
                            location.start.line,
                            location.start.column,
                            severity,
                            diagnostic.code.0,
                            diagnostic.text
                        ),
                        None => println!(
                            "  {} [{}]: {}",
                            severity, diagnostic.code.0, diagnostic.text
                        ),
                    }
                }
            }

            println!();
            println!(
                "{} nodes, {} diagnostics",
                total,
                document.diagnostics.len()
            );
        }
    }

    Ok(())
}

fn load_input(file: &Path) -> Result<ParseResult> {
    let input = if file.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .into_diagnostic()?;
        buffer
    } else {
        std::fs::read_to_string(file).into_diagnostic()?
    };

    load_document(&input).into_diagnostic()
}

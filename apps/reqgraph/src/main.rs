use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use reqgraph_crawl::{CrawlOptions, Record};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "reqgraph")]
#[command(about = "Statically crawl the import graph of JavaScript/TypeScript files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Recursively list every file reachable from the entry files
    Crawl {
        /// Entry files; output paths are relative to the first one
        #[arg(required = true)]
        entries: Vec<PathBuf>,

        #[command(flatten)]
        options: CrawlOptions,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the direct imports of a single file
    Children {
        file: PathBuf,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the absolute path of every local file outside any package
    Local { entry: PathBuf },
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Crawl { entries, options, json } => {
            info!(
                "Crawling {} entries (traverse modules: {}, absolute: {})",
                entries.len(),
                options.traverse_modules,
                options.absolute
            );
            let records = reqgraph_crawl::crawl(&entries, options)
                .with_context(|| format!("Failed to crawl {}", entries[0].display()))?;
            emit(&mut stdout, &records, json)?;
            if !json {
                finished(&mut stdout, start, records.len())?;
            }
        }
        Commands::Children { file, json } => {
            let records = reqgraph_crawl::children(&file)
                .with_context(|| format!("Failed to list imports of {}", file.display()))?;
            emit(&mut stdout, &records, json)?;
            if !json {
                finished(&mut stdout, start, records.len())?;
            }
        }
        Commands::Local { entry } => {
            let entry = std::path::absolute(&entry)
                .with_context(|| format!("Invalid entry path {}", entry.display()))?;
            let records = reqgraph_crawl::crawl(&[&entry], CrawlOptions::default())
                .with_context(|| format!("Failed to crawl {}", entry.display()))?;
            let files = reqgraph_crawl::local_files(&records, &entry);
            debug!("{} of {} records are local files", files.len(), records.len());
            reqgraph_crawl::print_local_files(&mut stdout, &files)?;
        }
    }

    Ok(())
}

fn emit<W: Write>(writer: &mut W, records: &[Record], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *writer, records)?;
        writeln!(writer)?;
        writer.flush()?;
    } else {
        reqgraph_crawl::print_records(writer, records)?;
    }
    Ok(())
}

fn finished<W: Write>(writer: &mut W, start: Instant, count: usize) -> Result<()> {
    writeln!(
        writer,
        "\n{} Finished in {}ms on {} files.",
        "●".bright_blue(),
        start.elapsed().as_millis().to_string().cyan(),
        count.to_string().cyan()
    )?;
    writer.flush()?;
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use markdown_to_html_config::Config;
use markdown_to_html_engine::{convert, io};
use std::{path::PathBuf, process};

#[derive(Parser)]
#[command(name = "markdown-to-html")]
#[command(about = "Convert a Markdown file to HTML")]
struct Cli {
    /// Input Markdown file
    #[arg(short, long)]
    input_file: PathBuf,

    /// Output HTML file (defaults to `output_file` from the config, then output.html)
    #[arg(short, long)]
    output_file: Option<PathBuf>,

    /// Config file (defaults to ~/.config/markdown-to-html/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log each classified block
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from_path(&config_path)
        .context("Failed to load config file")?
        .unwrap_or_default();
    let output = config.resolve_output_file(cli.output_file);

    let markdown = io::read_markdown(&cli.input_file)?;
    let html = convert(&markdown)
        .with_context(|| format!("Error while parsing {}", cli.input_file.display()))?;
    io::write_html(&output, &html)?;

    log::debug!(
        "Converted {} to {}",
        cli.input_file.display(),
        output.display()
    );
    Ok(())
}

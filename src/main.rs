use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

use readview::config::{Config, LogFormat};
use readview::{ReadabilityExtractor, Reader, source};

/// Print the reading view of an HTML page as JSON.
#[derive(Parser, Debug)]
#[command(name = "readview", version, about)]
struct Cli {
    /// HTML file to read; stdin when omitted
    file: Option<PathBuf>,

    /// Address the page was loaded from, used to resolve relative links
    #[arg(long)]
    url: Option<Url>,

    /// Minimum article length in characters
    #[arg(long)]
    char_threshold: Option<usize>,

    /// Keep the extracted markup unsanitized
    #[arg(long)]
    no_sanitize: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_format());

    match run(cli, config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("readview=info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

/// Returns whether an article was found.
fn run(cli: Cli, mut config: Config) -> Result<bool> {
    if let Some(url) = cli.url {
        config.set_base_url(url);
    }
    if let Some(threshold) = cli.char_threshold {
        config.set_char_threshold(threshold);
    }
    if cli.no_sanitize {
        config.set_sanitize(false);
    }

    let bytes = read_input(cli.file.as_ref())?;
    let html = source::decode_html(&bytes);

    let reader = Reader::new(ReadabilityExtractor);
    let mut document = reader.parse_html(&html)?;
    document.set_url(config.base_url().cloned());

    let result = reader.extract_from_document(&document, &config.extract_options())?;
    let found = result.is_some();
    if let Some(result) = &result {
        info!(images = result.images.len(), title = %result.article.title, "article extracted");
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");

    Ok(found)
}

fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("failed to read stdin")?;
            Ok(bytes)
        }
    }
}

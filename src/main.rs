use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use nurl::config::{NurlConfig, OutputFormat};
use nurl::utils::logger::init_logger;
use nurl::Url;

#[derive(Debug, Parser)]
#[command(name = "nurl", version, about = "Inspect and rewrite URLs")]
struct Cli {
    /// Configuration file (defaults to ./nurl.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every component of a URL
    Inspect { url: String },

    /// Replace one component and print the new URL
    ///
    /// FIELD is one of: scheme, host, path, auth (VALUE is user[:password]),
    /// query:<name>, segment:<index>, subdomain:<index>
    Set {
        url: String,
        field: String,
        value: String,
    },

    /// Fill the components missing from URL with those of OTHER
    Merge { url: String, other: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = NurlConfig::load(cli.config.as_deref())?;
    init_logger(config.log_dir.as_deref(), &config.log_level)?;
    debug!("Loaded configuration: {:?}", config);

    let output = if cli.json { OutputFormat::Json } else { config.output };

    match cli.command {
        Command::Inspect { url } => inspect(&url, output),
        Command::Set { url, field, value } => {
            let url = Url::parse(&url)?;
            print_url(&set_field(&url, &field, &value)?, output)
        }
        Command::Merge { url, other } => {
            let merged = Url::parse(&url)?.merge_with(&Url::parse(&other)?);
            print_url(&merged, output)
        }
    }
}

fn inspect(input: &str, output: OutputFormat) -> Result<()> {
    let components = Url::parse(input)?.components();

    if output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&components)?);
        return Ok(());
    }

    let show = |value: Option<&str>| value.unwrap_or("-").to_string();
    println!("href:       {}", components.href);
    println!("scheme:     {}", show(components.scheme.as_deref()));
    println!("auth:       {}", show(components.auth.as_deref()));
    println!("hostname:   {}", show(components.hostname.as_deref()));
    println!(
        "port:       {}",
        components.port.map_or_else(|| "-".to_string(), |p| p.to_string())
    );
    println!("pathname:   {}", components.pathname);
    println!("search:     {}", show(components.search.as_deref()));
    println!("hash:       {}", show(components.hash.as_deref()));
    println!("absolute:   {}", components.is_absolute);
    println!("segments:   {:?}", components.path_segments);
    println!("subdomains: {:?}", components.subdomains);
    if !components.query_params.is_empty() {
        println!("query:");
        for (name, value) in components.query_params.iter() {
            println!("  {} = {}", name, value);
        }
    }

    Ok(())
}

fn set_field(url: &Url, field: &str, value: &str) -> Result<Url> {
    let (field, argument) = match field.split_once(':') {
        Some((field, argument)) => (field, Some(argument)),
        None => (field, None),
    };
    let index = || -> Result<usize> {
        argument
            .context("missing index, e.g. segment:0")?
            .parse()
            .context("index must be a non-negative integer")
    };

    let url = match field {
        "scheme" | "protocol" => url.set_scheme(value),
        "host" | "hostname" => url.set_hostname(value),
        "path" | "pathname" => url.set_pathname(value),
        "auth" => match value.split_once(':') {
            Some((user, password)) => url.set_auth(user, Some(password)),
            None => url.set_auth(value, None),
        },
        "query" => {
            let name = argument.context("missing parameter name, e.g. query:q")?;
            url.set_query_param(name, value)
        }
        "segment" => url.set_path_segment(index()?, value)?,
        "subdomain" => url.set_subdomain(index()?, value),
        other => bail!("unknown field '{}'", other),
    };
    Ok(url)
}

fn print_url(url: &Url, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string(url)?),
        OutputFormat::Text => println!("{}", url),
    }
    Ok(())
}

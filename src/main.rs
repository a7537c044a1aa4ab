mod cli;

use audioforge::{config, server};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

async fn start_server(host: String, port: u16, config_path: Option<&Path>) -> Result<()> {
    // Load config
    let mut config = config::load_config_or_default(config_path)?;

    // Override host/port from CLI if specified
    config.server.host = host;
    config.server.port = port;

    tracing::info!("Starting audioforge bridge server");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );

    server::start_server(config).await
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "audioforge=trace,audioforge_av=trace,tower_http=debug".to_string()
        } else {
            "audioforge=debug,audioforge_av=debug,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            // Create tokio runtime
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::Convert {
            input,
            output,
            command,
        } => convert_file(&input, &output, &command),
        Commands::Info { file, json } => inspect_file(&file, json),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("audioforge {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn convert_file(input: &Path, output: &Path, command: &str) -> Result<()> {
    tracing::info!("Converting file: {:?}", input);

    let result = audioforge_av::convert(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
        command,
    );

    if !result.success {
        let message = result.error.as_deref().unwrap_or("unknown error");
        anyhow::bail!("Conversion failed: {}", message);
    }

    println!("{}", result.output);
    println!("Output: {}", output.display());
    println!("Estimated duration: {} ms", result.duration_ms);

    Ok(())
}

fn inspect_file(file: &Path, json: bool) -> Result<()> {
    let info = audioforge_av::inspect(&file.to_string_lossy());

    if json {
        let json_str = serde_json::to_string_pretty(&info)?;
        println!("{}", json_str);
        return Ok(());
    }

    if !info.success {
        let message = info.error.as_deref().unwrap_or("unknown error");
        anyhow::bail!("{}", message);
    }

    println!("File: {}", info.file_path);
    println!("Format: {}", info.format);
    println!("Size: {} bytes", info.file_size_bytes);

    let secs = info.duration_ms / 1000;
    let mins = secs / 60;
    let hours = mins / 60;
    println!(
        "Estimated duration: {:02}:{:02}:{:02}",
        hours,
        mins % 60,
        secs % 60
    );

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Server: {}:{}", config.server.host, config.server.port);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Server: {}:{}", config.server.host, config.server.port);
        }
    }

    Ok(())
}

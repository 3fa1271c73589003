use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "loadspeed")]
#[command(about = "Measure page-load time in a headless browser, then capture a screenshot")]
#[command(version)]
struct Cli {
    /// URL to load
    #[arg(required_unless_present = "config")]
    url: Option<String>,

    /// Config file (YAML); CLI flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Screenshot output path (overrides config)
    #[arg(short, long)]
    output: Option<String>,

    /// Settle delay before the screenshot, in milliseconds (overrides config)
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Run with a visible browser window (overrides config)
    #[arg(long)]
    headed: bool,

    /// Print the run result as JSON
    #[arg(long)]
    json: bool,

    /// Validate config without running
    #[arg(long)]
    check: bool,

    /// Verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (only errors)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> loadspeed::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    // Start from the config file if given, otherwise from the CLI URL alone
    let mut config = match cli.config {
        Some(ref path) => loadspeed::Config::load(path)?,
        None => loadspeed::Config::for_url(cli.url.clone().unwrap_or_default()),
    };

    // CLI overrides
    if let Some(url) = cli.url {
        config.target.url = url;
    }
    if let Some(output) = cli.output {
        config.capture.path = output;
    }
    if let Some(delay) = cli.delay_ms {
        config.capture.delay_ms = delay;
    }
    if cli.headed {
        config.browser.headless = false;
    }

    if cli.check {
        println!("Config valid: {}", config.name);
        println!("  Target: {}", config.target.url);
        println!(
            "  Capture: {} after {}ms",
            config.capture.path, config.capture.delay_ms
        );
        println!("  Headless: {}", config.browser.headless);
        if let Some(ref ua) = config.browser.user_agent {
            println!("  User agent: {}", ua);
        }
        return Ok(());
    }

    if !cli.json {
        println!("Running: {}", config.name);
    }

    let mut runner = loadspeed::Runner::new(&config.browser).await?;

    if !cli.json {
        if let Some(ref ua) = config.browser.user_agent {
            println!("User agent override: {}", ua);
        }
        println!("User agent: {}", runner.user_agent().await?);
    }

    let result = runner.run(&config).await?;
    runner.close().await?;

    // Print result
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!();
        if result.loaded {
            println!("✓ Loaded");
            if let Some(ms) = result.load_ms {
                println!("  Load time: {}ms", ms);
            }
        } else {
            println!("✗ Load failed");
            if let Some(ref error) = result.error {
                println!("  Error: {}", error);
            }
        }
        println!("  Screenshot: {}", result.screenshot);
        println!("  Total: {}ms", result.duration_ms);
    }

    if !result.loaded {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_shape() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_requires_url_or_config() {
        assert!(Cli::try_parse_from(["loadspeed"]).is_err());
        assert!(Cli::try_parse_from(["loadspeed", "https://example.com"]).is_ok());
        assert!(Cli::try_parse_from(["loadspeed", "--config", "bench.yaml"]).is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "loadspeed",
            "https://example.com",
            "--output",
            "shot.png",
            "--delay-ms",
            "500",
            "--headed",
        ])
        .unwrap();
        assert_eq!(cli.url.as_deref(), Some("https://example.com"));
        assert_eq!(cli.output.as_deref(), Some("shot.png"));
        assert_eq!(cli.delay_ms, Some(500));
        assert!(cli.headed);
    }
}

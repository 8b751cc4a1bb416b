use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use unixtime::config::Config;
use unixtime::convert::{self, ConversionRequest, Converter};
use unixtime::params::UrlParams;
use unixtime::time::{self, TimeUnit};

#[derive(Parser)]
#[command(name = "unixtime")]
#[command(about = "Convert between Unix timestamps and human-readable dates", long_about = None)]
struct Cli {
    /// Config file (default: $UNIXTIME_CONFIG or ./unixtime.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Unix timestamp to dates
    Convert {
        /// Timestamp in s, ms, us or ns (unit is detected from the digit count)
        timestamp: String,

        /// Force a unit instead of detecting it (s, ms, us, ns)
        #[arg(short, long)]
        unit: Option<TimeUnit>,

        /// IANA timezone for the zoned output (e.g. "America/New_York")
        #[arg(long)]
        tz: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a date and time to a Unix timestamp
    Date {
        /// Date as YYYY-MM-DDTHH:MM, optionally with :SS and a fraction
        date: String,

        /// Timezone the date is written in
        #[arg(long)]
        tz: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the current Unix time
    Now {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert using the time/unit/tz parameters of a shared URL
    Url {
        /// Query string or full URL (e.g. "?time=1700000000&unit=s&tz=UTC")
        query: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the supported time units
    Units,

    /// List the timezones offered for selection
    Zones,
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::discover(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    init_logging(&config, cli.verbose);

    let result = match cli.command {
        Commands::Convert {
            timestamp,
            unit,
            tz,
            json,
        } => convert_timestamp(&config, &timestamp, unit, tz.as_deref(), json),
        Commands::Date { date, tz, json } => date_to_timestamp(&config, &date, tz.as_deref(), json),
        Commands::Now { json } => print_now(json),
        Commands::Url { query, json } => convert_url(&config, &query, json),
        Commands::Units => {
            list_units();
            Ok(())
        }
        Commands::Zones => {
            list_zones();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(config: &Config, verbose: u8) {
    let default_level = match verbose {
        0 => config.log_level.as_str(),
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_zone(config: &Config, tz: Option<&str>) -> Result<chrono_tz::Tz, Box<dyn std::error::Error>> {
    match tz {
        Some(name) => Ok(time::resolve_timezone(name)?),
        None => Ok(config.timezone()?),
    }
}

fn convert_timestamp(
    config: &Config,
    timestamp: &str,
    unit: Option<TimeUnit>,
    tz: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let timezone = resolve_zone(config, tz)?;
    let request = ConversionRequest::new(timestamp)
        .with_unit(unit)
        .with_timezone(timezone);
    print_conversion(config, &request, json)
}

fn convert_url(config: &Config, query: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let params = UrlParams::parse(query);
    tracing::info!(?params, "parsed URL parameters");

    let raw = params
        .time
        .as_deref()
        .ok_or("URL has no 'time' parameter")?;
    let timezone = resolve_zone(config, params.tz.as_deref())?;
    let request = ConversionRequest::new(raw)
        .with_unit(params.unit)
        .with_timezone(timezone);
    print_conversion(config, &request, json)
}

fn print_conversion(
    config: &Config,
    request: &ConversionRequest,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let converter = Converter::with_default_unit(config.default_unit);
    let result = converter.convert(request, &time::clock::now());

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    // Same placeholder the widget shows for input that is not a number yet
    let Some(conversion) = result else {
        println!("-");
        return Ok(());
    };

    println!(
        "Detected:  {} ({})",
        conversion.detected_label(),
        conversion.detected_unit.code()
    );
    if conversion.effective_unit != conversion.detected_unit {
        println!(
            "Using:     {} ({})",
            conversion.effective_unit.label(),
            conversion.effective_unit.code()
        );
    }
    println!("UTC:       {}", conversion.utc_display);
    println!("ISO-8601:  {}", conversion.utc_iso);
    println!("Relative:  {}", conversion.relative);
    println!("{}: {}", conversion.timezone, conversion.zoned);

    let share = UrlParams {
        time: Some(conversion.input.trim().to_string()),
        unit: request.unit,
        tz: Some(conversion.timezone.clone()).filter(|tz| time::is_known_timezone(tz)),
    };
    println!("Share:     {}", share.to_query());

    Ok(())
}

fn date_to_timestamp(
    config: &Config,
    date: &str,
    tz: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let timezone = resolve_zone(config, tz)?;
    let result = convert::date_to_timestamp(date, timezone)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.seconds);
        println!("Milliseconds: {}", result.millis);
        println!("Interpreted in {}", result.timezone);
    }

    Ok(())
}

fn print_now(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let now = time::clock::now();

    if json {
        let value = serde_json::json!({
            "seconds": now.timestamp(),
            "millis": now.timestamp_millis(),
            "utc": now.format("%Y-%m-%d %H:%M:%S").to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", now.timestamp());
        println!("UTC: {}", now.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}

fn list_units() {
    for unit in TimeUnit::ALL {
        println!("{:<3} {}", unit.code(), unit.label());
    }
}

fn list_zones() {
    for zone in time::TIMEZONES {
        println!("{}", zone);
    }
}

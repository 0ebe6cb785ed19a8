use clap::{Args, Parser, Subcommand};
use spotquote::{AppConfig, Exchange, PriceAggregator};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Spot ticker lookup across Binance, Bitget and OKX
#[derive(Parser)]
#[command(name = "spotquote")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a 24h ticker, e.g. `price btc` or `price ETH/BTC --exchange okx`
    Price(PriceArgs),
    /// List cached coins
    Coins(ListArgs),
    /// List cached pairs
    Pairs(ListArgs),
}

#[derive(Args)]
struct PriceArgs {
    symbol: String,
    #[arg(short, long)]
    exchange: Option<Exchange>,
    /// Print the record as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ListArgs {
    /// Restrict to one exchange (default: union of all)
    #[arg(short, long)]
    exchange: Option<Exchange>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    // Setup Logging
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let config = AppConfig::load()?;
    info!("Loaded Configuration: {:?}", config);

    let aggregator = PriceAggregator::connect(&config).await?;

    match cli.command {
        Commands::Price(args) => {
            let record = aggregator.fetch_price_data(&args.symbol, args.exchange).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", record);
            }
        }
        Commands::Coins(args) => {
            let coins = match args.exchange {
                Some(exchange) => aggregator.coins(exchange),
                None => aggregator.all_coins(),
            };
            for coin in coins {
                println!("{}", coin);
            }
        }
        Commands::Pairs(args) => {
            let pairs = match args.exchange {
                Some(exchange) => aggregator.pairs(exchange),
                None => aggregator.all_pairs(),
            };
            for pair in pairs {
                println!("{}", pair);
            }
        }
    }

    Ok(())
}

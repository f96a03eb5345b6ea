use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront::mock_data::SeedSizes;
use storefront::{AppState, Config};

/// Storefront - Seed a demo store and print an admin view as JSON
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of demo products to generate
    #[arg(long, default_value = "24", env = "SEED_PRODUCTS")]
    products: usize,

    /// Number of demo users to generate
    #[arg(long, default_value = "12", env = "SEED_USERS")]
    users: usize,

    /// Number of demo orders to generate
    #[arg(long, default_value = "40", env = "SEED_ORDERS")]
    orders: usize,

    /// Which view to print
    #[arg(long, short, value_enum, default_value_t = View::Stats)]
    view: View,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    Stats,
    Pie,
    Bar,
    Line,
    Latest,
    Categories,
    Orders,
    Users,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the JSON view
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=debug".into()),
        )
        .with(
            cli.json_logs
                .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with(
            (!cli.json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
        .init();

    let config = Config::from_env();
    let sizes = SeedSizes {
        products: cli.products,
        users: cli.users,
        orders: cli.orders,
    };
    let state = AppState::with_demo_data(&config, sizes).await?;

    let output = render(&state, cli.view).await?;
    println!("{output}");

    Ok(())
}

async fn render(state: &AppState, view: View) -> Result<String> {
    let json = match view {
        View::Stats => serde_json::to_string_pretty(&state.dashboard.stats().await?)?,
        View::Pie => serde_json::to_string_pretty(&state.dashboard.pie_charts().await?)?,
        View::Bar => serde_json::to_string_pretty(&state.dashboard.bar_charts().await?)?,
        View::Line => serde_json::to_string_pretty(&state.dashboard.line_charts().await?)?,
        View::Latest => serde_json::to_string_pretty(&state.products.latest_products().await?)?,
        View::Categories => serde_json::to_string_pretty(&state.products.categories().await?)?,
        View::Orders => serde_json::to_string_pretty(&state.orders.all_orders().await?)?,
        View::Users => serde_json::to_string_pretty(&state.users.all_users().await?)?,
    };
    tracing::debug!(?view, "View rendered");
    Ok(json)
}

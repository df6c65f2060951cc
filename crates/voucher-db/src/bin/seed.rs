//! # Seed Data Generator
//!
//! Populates the database with test vouchers for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 vouchers (default)
//! cargo run -p voucher-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p voucher-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p voucher-db --bin seed -- --db ./vouchers_dev.db
//! ```
//!
//! ## Generated Vouchers
//! Each voucher has:
//! - Unique code: `{CAMPAIGN}{PERCENT}-{INDEX}` (e.g., `SPRING15-0007`)
//! - A discount cycled through common campaign percentages

use std::env;
use tracing_subscriber::EnvFilter;
use voucher_core::{DiscountRate, VoucherService};
use voucher_db::{Database, DbConfig};

/// Campaign prefixes for realistic test codes.
const CAMPAIGNS: &[&str] = &["WELCOME", "SPRING", "SUMMER", "AUTUMN", "WINTER", "LOYALTY"];

/// Discounts in basis points: 5%, 10%, 15%, 20%, 25%, 50%.
const DISCOUNTS_BPS: &[u32] = &[500, 1000, 1500, 2000, 2500, 5000];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut db_path = String::from("./vouchers_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Voucher Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of vouchers to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./vouchers_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Voucher Seed Data Generator");
    println!("==============================");
    println!("Database: {}", db_path);
    println!("Vouchers: {}", count);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing vouchers
    let existing = db.vouchers().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} vouchers", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Generate vouchers through the service so every record passes the
    // same validation as production input
    println!();
    println!("Generating vouchers...");

    let service = VoucherService::new(db.vouchers());
    let start = std::time::Instant::now();

    for index in 0..count {
        let campaign = CAMPAIGNS[index % CAMPAIGNS.len()];
        let discount_bps = DISCOUNTS_BPS[index % DISCOUNTS_BPS.len()];
        let code = format!("{}{}-{:04}", campaign, discount_bps / 100, index);

        service
            .create_voucher(&code, DiscountRate::from_bps(discount_bps))
            .await?;
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} vouchers in {:.2}s", count, elapsed.as_secs_f64());
    println!();
    println!("Try redeeming one:");
    println!("  code: WELCOME5-0000 (5% off purchases of $1.00 or more)");

    db.close().await;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,voucher=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

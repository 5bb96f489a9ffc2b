mod api;
mod config;
mod models;
mod processing;
mod utils;

use config::Config;
use dotenv::dotenv;
use processing::filings_processing;
use sqlx::postgres::PgPoolOptions;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
	dotenv().ok();

	if std::env::var_os("RUST_LOG").is_none() {
		std::env::set_var("RUST_LOG", "info");
	}
	env_logger::init();

	let config = Config::init();
	println!("Starting 990 pipeline...");

	let pool = match PgPoolOptions::new()
		.max_connections(10)
		.connect(&config.database_url)
		.await
	{
		Ok(pool) => {
			println!("✅ Connection to the database is successful!");
			pool
		}
		Err(err) => {
			println!("🔥 Failed to connect to the database: {:?}", err);
			std::process::exit(1);
		}
	};

	filings_processing(pool, &config).await?;

	Ok(())
}

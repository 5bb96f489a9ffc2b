use std::env;

pub const DEFAULT_API_BASE_URL: &str =
	"https://990-infrastructure.gtdata.org/irs-data/990basic120fields";

#[derive(Debug, Clone)]
pub struct Config {
	pub database_url: String,
	pub api_base_url: String,
	pub fetch_delay_ms: u64,
}

impl Config {
	pub fn init() -> Config {
		let database_url = env::var("CONNECTION_STRING").expect("CONNECTION_STRING not set");
		let api_base_url =
			env::var("IRS_990_API_URL").unwrap_or_else(|_| String::from(DEFAULT_API_BASE_URL));
		let fetch_delay_ms = env::var("FETCH_DELAY_MS")
			.ok()
			.and_then(|v| v.parse::<u64>().ok())
			.unwrap_or(1000);

		Config {
			database_url,
			api_base_url,
			fetch_delay_ms,
		}
	}
}

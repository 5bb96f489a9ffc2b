use reqwest::Client;
use sqlx::{Pool, Postgres};
use std::collections::HashMap;
use std::collections::HashSet;
use std::error::Error;
use tokio::time::{sleep, Duration};

use crate::config::Config;
use crate::models::{Filing, Organization, OutputRecord};
use crate::processing::fetch_990_filings;
use crate::utils::Ein;

pub async fn filings_processing(
	pool: Pool<Postgres>,
	config: &Config,
) -> Result<(), Box<dyn Error>> {
	println!("start");

	let orgs = Organization::get_all(&pool).await?;
	println!("organizations loaded: {}", orgs.len());

	// уникальные нормализованные EIN в порядке строк реестра
	let mut seen = HashSet::new();
	let mut ein_queries: Vec<String> = Vec::new();
	for org in &orgs {
		let key = org.ein_query();
		if seen.insert(key.clone()) {
			ein_queries.push(key);
		}
	}

	let client = Client::new();
	let mut filings: Vec<Filing> = Vec::new();

	for ein_query in &ein_queries {
		sleep(Duration::from_millis(config.fetch_delay_ms)).await;

		match fetch_990_filings(&client, &config.api_base_url, ein_query).await {
			Ok(mut rows) => {
				println!("EIN {}: {} filings", &ein_query, rows.len());
				filings.append(&mut rows);
			}
			Err(e) => {
				println!("Error processing EIN {}: {}", &ein_query, e);
				continue;
			}
		}
	}

	if filings.is_empty() {
		return Err("no filings fetched for any EIN".into());
	}

	let records = merge_with_registry(filings, &orgs);

	OutputRecord::replace_table(&pool, &records).await?;
	OutputRecord::set_primary_key(&pool).await?;

	println!(
		"Table '{}' written to the database and 'id' set as primary key.",
		crate::api::OUTPUT_TABLE
	);

	Ok(())
}

/// Left join филингов на реестр по нормализованному EIN, пропуски в числах -> 0,
/// суррогатный id 1..N в итоговом порядке строк.
pub fn merge_with_registry(filings: Vec<Filing>, orgs: &[Organization]) -> Vec<OutputRecord> {
	let mut by_ein_query: HashMap<String, &Organization> = HashMap::new();
	for org in orgs {
		by_ein_query.entry(org.ein_query()).or_insert(org);
	}

	filings
		.into_iter()
		.enumerate()
		.map(|(i, f)| {
			let org = by_ein_query.get(&Ein::normalize(&f.ein));

			OutputRecord {
				id: i as i64 + 1,
				year: f.year,
				revenue_total: f.revenue_total.unwrap_or(0.0),
				expenses_total: f.expenses_total.unwrap_or(0.0),
				net_profit_loss: f.net_profit_loss.unwrap_or(0.0),
				total_assets: f.total_assets.unwrap_or(0.0),
				total_liabilities: f.total_liabilities.unwrap_or(0.0),
				net_assets: f.net_assets.unwrap_or(0.0),
				membership_dues: f.membership_dues.unwrap_or(0.0),
				revenue_public: f.revenue_public.unwrap_or(0.0),
				revenue_other_contributions: f.revenue_other_contributions.unwrap_or(0.0),
				revenue_earned: f.revenue_earned.unwrap_or(0.0),
				revenue_fundraising: f.revenue_fundraising.unwrap_or(0.0),
				fundraising_expense: f.fundraising_expense.unwrap_or(0.0),
				expense_program_services: f.expense_program_services.unwrap_or(0.0),
				expense_administration: f.expense_administration.unwrap_or(0.0),
				expense_fundraising: f.expense_fundraising.unwrap_or(0.0),
				num_employees: f.num_employees.unwrap_or(0.0),
				contributed_revenue: f.contributed_revenue.unwrap_or(0.0),
				other_revenue: f.other_revenue.unwrap_or(0.0),
				months_of_cash: f.months_of_cash,
				org_id: org.and_then(|o| o.org_id),
				ein: org.and_then(|o| o.ein.clone()),
				org_type: org.and_then(|o| o.org_type.clone()),
				org_name: org.and_then(|o| o.org_name.clone()),
			}
		})
		.collect()
}

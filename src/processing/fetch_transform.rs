use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::Filing;

#[derive(Debug, Deserialize)]
struct ApiResponse {
	body: ApiBody,
}

#[derive(Debug, Deserialize)]
struct ApiBody {
	#[serde(default)]
	results: Vec<Value>,
}

#[derive(Debug, Error)]
pub enum FetchError {
	#[error("request failed: {0}")]
	Request(#[from] reqwest::Error),
	#[error("no filings in response")]
	Empty,
	#[error("missing field {0}")]
	MissingField(&'static str),
	#[error("field {0} is not numeric")]
	NotNumeric(&'static str),
}

// Числовая колонка: число как есть, строка через parse, остальное NULL
fn num(row: &Value, key: &str) -> Option<f64> {
	match row.get(key) {
		Some(Value::Number(n)) => n.as_f64(),
		Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
		_ => None,
	}
}

fn text(row: &Value, key: &str) -> Option<String> {
	match row.get(key) {
		Some(Value::String(s)) => Some(s.clone()),
		Some(Value::Number(n)) => Some(n.to_string()),
		_ => None,
	}
}

fn date(row: &Value, key: &str) -> Option<NaiveDate> {
	let raw = match row.get(key) {
		Some(Value::String(s)) => s.trim().to_string(),
		_ => return None,
	};
	NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
		.or_else(|_| NaiveDate::parse_from_str(&raw, "%m-%d-%Y"))
		.ok()
}

/// Одна запись из results -> типизированный Filing.
/// FILEREIN и TAXYEAR обязательны, остальные колонки при ошибке парсинга дают NULL.
pub fn transform_filing(row: &Value) -> Result<Filing, FetchError> {
	let ein = text(row, "FILEREIN").ok_or(FetchError::MissingField("FILEREIN"))?;
	if row.get("TAXYEAR").is_none() {
		return Err(FetchError::MissingField("TAXYEAR"));
	}
	let api_year = num(row, "TAXYEAR").ok_or(FetchError::NotNumeric("TAXYEAR"))? as i64;

	let revenue_total = num(row, "TOTREVCURYEA");
	let expenses_total = num(row, "TOTEXPCURYEA");
	let total_assets = num(row, "TOASEOOYY");
	let revenue_public = num(row, "GOVERNGRANTS");
	let total_contributed_revenue = num(row, "TOTACASHCONT");
	let revenue_earned = num(row, "TOTPROSERREV");

	let contributed_revenue = total_contributed_revenue
		.zip(revenue_public)
		.map(|(total, public)| total - public);
	let other_revenue = revenue_total
		.zip(total_contributed_revenue)
		.zip(revenue_earned)
		.map(|((rev, contributed), earned)| rev - contributed - earned);
	let months_of_cash = match (total_assets, expenses_total) {
		(Some(assets), Some(expenses)) => {
			let months = assets / (expenses / 12.0);
			if months.is_finite() {
				months
			} else {
				0.0
			}
		}
		_ => 0.0,
	};

	Ok(Filing {
		ein,
		organization_name: text(row, "FILERNAME1"),
		// в API лежит предыдущий год, наружу отдаем номинальный год формы
		year: api_year + 1,
		year_start: date(row, "TAXPERBEGIN"),
		year_end: date(row, "TAXPEREND"),
		revenue_total,
		expenses_total,
		net_profit_loss: num(row, "CYYRRELEEXXP"),
		total_assets,
		total_liabilities: num(row, "TOLIEOOYY"),
		net_assets: num(row, "NAFBEOY"),
		membership_dues: num(row, "MEMBERDUESUE"),
		revenue_public,
		revenue_other_contributions: num(row, "ALLOOTHECONT"),
		total_contributed_revenue,
		revenue_earned,
		revenue_fundraising: num(row, "GROINCFUNEVE"),
		fundraising_expense: num(row, "FUNDDIREEXPE"),
		expense_program_services: num(row, "PROGSERVEXPE"),
		expense_administration: num(row, "MANAGENEEXPE"),
		expense_fundraising: num(row, "FUNDRAEXPENS"),
		num_employees: num(row, "TOTAEMPLCNTN"),
		contributed_revenue,
		other_revenue,
		months_of_cash,
	})
}

/// GET по нормализованному EIN, пустой results — ошибка, EIN пропускается выше по стеку.
pub async fn fetch_990_filings(
	client: &Client,
	api_base_url: &str,
	ein_query: &str,
) -> Result<Vec<Filing>, FetchError> {
	let url = format!("{}?ein={}", api_base_url, ein_query);
	let res = client.get(&url).send().await?.json::<ApiResponse>().await?;

	if res.body.results.is_empty() {
		return Err(FetchError::Empty);
	}

	res.body.results.iter().map(transform_filing).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn sample_row() -> Value {
		json!({
			"FILEREIN": "123456789",
			"FILERNAME1": "EXAMPLE ORG",
			"TAXYEAR": 2019,
			"TAXPERBEGIN": "2019-07-01",
			"TAXPEREND": "2020-06-30",
			"TOTREVCURYEA": 250000,
			"TOTEXPCURYEA": 120000,
			"CYYRRELEEXXP": 130000,
			"TOASEOOYY": 120000,
			"TOLIEOOYY": 40000,
			"NAFBEOY": 80000,
			"MEMBERDUESUE": 0,
			"GOVERNGRANTS": 50000,
			"ALLOOTHECONT": 20000,
			"TOTACASHCONT": 70000,
			"TOTPROSERREV": 150000,
			"GROINCFUNEVE": 5000,
			"FUNDDIREEXPE": 2000,
			"TORETORECOOL": 250000,
			"TOTFUNEXPTOT": 120000,
			"PROGSERVEXPE": 90000,
			"MANAGENEEXPE": 20000,
			"FUNDRAEXPENS": 10000,
			"TOTAEMPLCNTN": 12
		})
	}

	#[test]
	fn output_year_is_api_year_plus_one() {
		let filing = transform_filing(&sample_row()).unwrap();
		assert_eq!(filing.year, 2020);
	}

	#[test]
	fn months_of_cash_from_assets_and_expenses() {
		let filing = transform_filing(&sample_row()).unwrap();
		assert_eq!(filing.months_of_cash, 12.0);
	}

	#[test]
	fn months_of_cash_is_zero_when_expenses_are_zero() {
		let mut row = sample_row();
		row["TOTEXPCURYEA"] = json!(0);
		let filing = transform_filing(&row).unwrap();
		assert_eq!(filing.months_of_cash, 0.0);
	}

	#[test]
	fn months_of_cash_is_zero_when_inputs_missing() {
		let mut row = sample_row();
		row.as_object_mut().unwrap().remove("TOASEOOYY");
		let filing = transform_filing(&row).unwrap();
		assert_eq!(filing.months_of_cash, 0.0);
	}

	#[test]
	fn contributed_revenue_splits_total_contributions() {
		let filing = transform_filing(&sample_row()).unwrap();
		assert_eq!(filing.contributed_revenue, Some(20000.0));
		// инвариант промежуточного состояния
		assert_eq!(
			filing.contributed_revenue.unwrap() + filing.revenue_public.unwrap(),
			filing.total_contributed_revenue.unwrap()
		);
	}

	#[test]
	fn other_revenue_formula_holds_for_negative_inputs() {
		let mut row = sample_row();
		row["TOTREVCURYEA"] = json!(-100);
		row["TOTACASHCONT"] = json!(400);
		row["TOTPROSERREV"] = json!(-50);
		let filing = transform_filing(&row).unwrap();
		assert_eq!(filing.other_revenue, Some(-100.0 - 400.0 - -50.0));
	}

	#[test]
	fn string_encoded_numbers_are_coerced() {
		let mut row = sample_row();
		row["TOTREVCURYEA"] = json!("250000");
		row["TAXYEAR"] = json!("2019");
		let filing = transform_filing(&row).unwrap();
		assert_eq!(filing.revenue_total, Some(250000.0));
		assert_eq!(filing.year, 2020);
	}

	#[test]
	fn unparsable_numeric_becomes_null() {
		let mut row = sample_row();
		row["TOTREVCURYEA"] = json!("n/a");
		let filing = transform_filing(&row).unwrap();
		assert_eq!(filing.revenue_total, None);
		assert_eq!(filing.other_revenue, None);
	}

	#[test]
	fn period_dates_are_parsed_and_bad_dates_become_null() {
		let mut row = sample_row();
		row["TAXPEREND"] = json!("not a date");
		let filing = transform_filing(&row).unwrap();
		assert_eq!(
			filing.year_start,
			Some(NaiveDate::from_ymd_opt(2019, 7, 1).unwrap())
		);
		assert_eq!(filing.year_end, None);
	}

	#[test]
	fn missing_ein_fails_the_row() {
		let mut row = sample_row();
		row.as_object_mut().unwrap().remove("FILEREIN");
		assert!(matches!(
			transform_filing(&row),
			Err(FetchError::MissingField("FILEREIN"))
		));
	}

	#[test]
	fn non_numeric_tax_year_fails_the_row() {
		let mut row = sample_row();
		row["TAXYEAR"] = json!("unknown");
		assert!(matches!(
			transform_filing(&row),
			Err(FetchError::NotNumeric("TAXYEAR"))
		));
	}
}

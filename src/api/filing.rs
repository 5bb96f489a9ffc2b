use sqlx::{Pool, Postgres};
use std::error::Error;

use crate::models::OutputRecord;

pub const OUTPUT_TABLE: &str = "external_orgs_990_data";

impl OutputRecord {
	/// Полная перезапись выходной таблицы: DROP, CREATE, построчный INSERT.
	/// До завершения этого вызова в базе лежит прошлая версия таблицы.
	pub async fn replace_table(
		db: &Pool<Postgres>,
		records: &[OutputRecord],
	) -> Result<(), Box<dyn Error>> {
		let drop_sql = format!("DROP TABLE IF EXISTS public.{}", OUTPUT_TABLE);
		sqlx::query(&drop_sql).execute(db).await?;

		let create_sql = format!(
			"
			CREATE TABLE public.{} (
				year BIGINT,
				revenue_total DOUBLE PRECISION,
				expenses_total DOUBLE PRECISION,
				net_profit_loss DOUBLE PRECISION,
				total_assets DOUBLE PRECISION,
				total_liabilities DOUBLE PRECISION,
				net_assets DOUBLE PRECISION,
				membership_dues DOUBLE PRECISION,
				revenue_public DOUBLE PRECISION,
				revenue_other_contributions DOUBLE PRECISION,
				revenue_earned DOUBLE PRECISION,
				revenue_fundraising DOUBLE PRECISION,
				fundraising_expense DOUBLE PRECISION,
				expense_program_services DOUBLE PRECISION,
				expense_administration DOUBLE PRECISION,
				expense_fundraising DOUBLE PRECISION,
				num_employees DOUBLE PRECISION,
				contributed_revenue DOUBLE PRECISION,
				other_revenue DOUBLE PRECISION,
				months_of_cash DOUBLE PRECISION,
				org_id BIGINT,
				ein TEXT,
				org_type TEXT,
				org_name TEXT,
				id BIGINT NOT NULL
			)
			",
			OUTPUT_TABLE
		);
		sqlx::query(&create_sql).execute(db).await?;

		let insert_sql = format!(
			"
			INSERT INTO public.{} (
				year, revenue_total, expenses_total, net_profit_loss, total_assets,
				total_liabilities, net_assets, membership_dues, revenue_public,
				revenue_other_contributions, revenue_earned, revenue_fundraising,
				fundraising_expense, expense_program_services, expense_administration,
				expense_fundraising, num_employees, contributed_revenue, other_revenue,
				months_of_cash, org_id, ein, org_type, org_name, id
			)
			VALUES (
				$1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
				$14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25
			)
			",
			OUTPUT_TABLE
		);

		for record in records {
			sqlx::query(&insert_sql)
				.bind(record.year)
				.bind(record.revenue_total)
				.bind(record.expenses_total)
				.bind(record.net_profit_loss)
				.bind(record.total_assets)
				.bind(record.total_liabilities)
				.bind(record.net_assets)
				.bind(record.membership_dues)
				.bind(record.revenue_public)
				.bind(record.revenue_other_contributions)
				.bind(record.revenue_earned)
				.bind(record.revenue_fundraising)
				.bind(record.fundraising_expense)
				.bind(record.expense_program_services)
				.bind(record.expense_administration)
				.bind(record.expense_fundraising)
				.bind(record.num_employees)
				.bind(record.contributed_revenue)
				.bind(record.other_revenue)
				.bind(record.months_of_cash)
				.bind(record.org_id)
				.bind(record.ein.clone())
				.bind(record.org_type.clone())
				.bind(record.org_name.clone())
				.bind(record.id)
				.execute(db)
				.await?;
		}

		Ok(())
	}

	/// Снимает старый pkey, если был, и вешает новый на id
	pub async fn set_primary_key(db: &Pool<Postgres>) -> Result<(), Box<dyn Error>> {
		let drop_sql = format!(
			"ALTER TABLE public.{} DROP CONSTRAINT IF EXISTS {}_pkey",
			OUTPUT_TABLE, OUTPUT_TABLE
		);
		sqlx::query(&drop_sql).execute(db).await?;

		let add_sql = format!("ALTER TABLE public.{} ADD PRIMARY KEY (id)", OUTPUT_TABLE);
		sqlx::query(&add_sql).execute(db).await?;

		Ok(())
	}
}

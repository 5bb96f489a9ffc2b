use chrono::NaiveDate;

/// Одна строка 990 по паре (EIN, налоговый год), уже переименованная и типизированная.
/// Поля year_start/year_end, total_contributed_revenue и organization_name
/// промежуточные, в выходную таблицу не попадают.
#[derive(Debug, Clone, Default)]
pub struct Filing {
	pub ein: String,
	pub organization_name: Option<String>,
	pub year: i64,
	pub year_start: Option<NaiveDate>,
	pub year_end: Option<NaiveDate>,
	pub revenue_total: Option<f64>,
	pub expenses_total: Option<f64>,
	pub net_profit_loss: Option<f64>,
	pub total_assets: Option<f64>,
	pub total_liabilities: Option<f64>,
	pub net_assets: Option<f64>,
	pub membership_dues: Option<f64>,
	pub revenue_public: Option<f64>,
	pub revenue_other_contributions: Option<f64>,
	pub total_contributed_revenue: Option<f64>,
	pub revenue_earned: Option<f64>,
	pub revenue_fundraising: Option<f64>,
	pub fundraising_expense: Option<f64>,
	pub expense_program_services: Option<f64>,
	pub expense_administration: Option<f64>,
	pub expense_fundraising: Option<f64>,
	pub num_employees: Option<f64>,
	pub contributed_revenue: Option<f64>,
	pub other_revenue: Option<f64>,
	pub months_of_cash: f64,
}

/// Строка выходной таблицы external_orgs_990_data.
/// ein — исходное значение из реестра (с дефисами), не ключ джойна.
#[derive(Debug, Clone, Default)]
pub struct OutputRecord {
	pub id: i64,
	pub year: i64,
	pub revenue_total: f64,
	pub expenses_total: f64,
	pub net_profit_loss: f64,
	pub total_assets: f64,
	pub total_liabilities: f64,
	pub net_assets: f64,
	pub membership_dues: f64,
	pub revenue_public: f64,
	pub revenue_other_contributions: f64,
	pub revenue_earned: f64,
	pub revenue_fundraising: f64,
	pub fundraising_expense: f64,
	pub expense_program_services: f64,
	pub expense_administration: f64,
	pub expense_fundraising: f64,
	pub num_employees: f64,
	pub contributed_revenue: f64,
	pub other_revenue: f64,
	pub months_of_cash: f64,
	pub org_id: Option<i64>,
	pub ein: Option<String>,
	pub org_type: Option<String>,
	pub org_name: Option<String>,
}

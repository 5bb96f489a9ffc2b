use sqlx::FromRow;

use crate::utils::Ein;

#[derive(Debug, FromRow, Clone, Default)]
pub struct Organization {
	pub org_id: Option<i64>,
	pub ein: Option<String>,
	pub org_type: Option<String>,
	pub org_name: Option<String>,
}

impl Organization {
	pub fn ein_query(&self) -> String {
		Ein::normalize(self.ein.as_deref().unwrap_or(""))
	}
}

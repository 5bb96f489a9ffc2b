use sqlx::{Pool, Postgres};
use std::io::{Error, ErrorKind};

use crate::models::Organization;

impl Organization {
	/// Читает реестр целиком, порядок строк реестра задает порядок обхода EIN
	pub async fn get_all(db: &Pool<Postgres>) -> Result<Vec<Self>, Error> {
		let query_result = sqlx::query_as::<_, Organization>(
			"SELECT org_id, ein, org_type, org_name FROM organizations",
		)
		.fetch_all(db)
		.await;

		match query_result {
			Ok(orgs) => Ok(orgs),
			Err(e) => Err(Error::new(ErrorKind::NotFound, e)),
		}
	}
}

pub struct Ein {}

impl Ein {
	/// Приводит EIN к ключу для джойна: без дефисов, 9 цифр с ведущими нулями
	pub fn normalize(raw: &str) -> String {
		let digits = raw.trim().replace('-', "");
		format!("{:0>9}", digits)
	}
}

#[cfg(test)]
mod tests {
	use super::Ein;

	#[test]
	fn strips_hyphens() {
		assert_eq!(Ein::normalize("12-3456789"), "123456789");
	}

	#[test]
	fn pads_short_eins_with_zeros() {
		assert_eq!(Ein::normalize("1234567"), "001234567");
		assert_eq!(Ein::normalize("1-234567"), "001234567");
	}

	#[test]
	fn leaves_nine_digit_eins_unchanged() {
		assert_eq!(Ein::normalize("987654321"), "987654321");
	}
}

/// Formats an amount in minor units as `<symbol><major>.<minor>` with the
/// integer part grouped by thousands, e.g. `123456` -> `£1,234.56`.
pub fn format_amount(symbol: &str, minor_units: i64) -> String {
	let sign = if minor_units < 0 { "-" } else { "" };
	let abs = minor_units.unsigned_abs();
	let major = (abs / 100).to_string();
	let minor = abs % 100;

	let mut grouped = String::with_capacity(major.len() + major.len() / 3);
	for (i, digit) in major.chars().enumerate() {
		if i > 0 && (major.len() - i) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(digit);
	}

	format!("{symbol}{sign}{grouped}.{minor:02}")
}

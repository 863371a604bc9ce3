/// Render a whole currency amount with thousands separators, e.g. `₹1,250,000`.
pub fn currency(symbol: &str, amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}{symbol}{grouped}")
}

/// [`currency`] for an optional amount, with a sentinel when there is none.
pub fn currency_or(symbol: &str, amount: Option<i64>, sentinel: &str) -> String {
    amount.map_or_else(|| sentinel.to_string(), |a| currency(symbol, a))
}

/// Group an amount with dots every three digits, the zero-decimal
/// Indonesian-locale rendering ("750000" becomes "750.000").
pub fn grouped(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }

    if amount < 0 {
        format!("-{out}")
    } else {
        out
    }
}

pub fn rupiah(amount: i64) -> String {
    format!("Rp {}", grouped(amount))
}

/// Resolve a stored relative asset path against the storage base URL.
pub fn asset_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

use rand::Rng;

/// Source of the discount code subtracted from the office price. The
/// code lets the payee match an incoming bank transfer that carries no
/// reference field, so it must vary between loads.
pub trait CodeSource: Send + Sync {
    fn unique_code(&self) -> i64;
}

/// Draws uniformly from 100..=999.
pub struct RandomCode;

impl CodeSource for RandomCode {
    fn unique_code(&self) -> i64 {
        rand::thread_rng().gen_range(100..1000)
    }
}

/// Fixed code, for deterministic totals in tests.
pub struct FixedCode(pub i64);

impl CodeSource for FixedCode {
    fn unique_code(&self) -> i64 {
        self.0
    }
}

/// Grand total is price minus the unique code. A code larger than the
/// price yields a negative total; transfers are reconciled by exact
/// amount, so the value is not clamped.
pub fn grand_total(price: i64, unique_code: i64) -> i64 {
    price - unique_code
}

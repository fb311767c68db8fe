//! Conversions between decimal XMR and atomic units (piconero).

/// Number of decimal places in one XMR.
pub const DECIMALS: u32 = 12;
/// Atomic units per XMR (10^12).
pub const ATOMIC_UNITS_PER_XMR: u64 = 1_000_000_000_000;

/// Convert a caller-supplied decimal XMR amount to atomic units.
///
/// Rounds to the nearest atomic unit. Negative and NaN inputs saturate to 0.
pub fn to_atomic_units(xmr: f64) -> u64 {
    (xmr * ATOMIC_UNITS_PER_XMR as f64).round() as u64
}

/// Approximate decimal XMR value of an atomic amount, for display.
pub fn from_atomic_units(atomic: u64) -> f64 {
    atomic as f64 / ATOMIC_UNITS_PER_XMR as f64
}

/// Render an atomic amount as an exact decimal string without trailing zeros.
pub fn format_atomic_units(atomic: u64) -> String {
    let whole = atomic / ATOMIC_UNITS_PER_XMR;
    let fractional = atomic % ATOMIC_UNITS_PER_XMR;

    if fractional == 0 {
        return whole.to_string();
    }

    let fractional_str = format!("{:0width$}", fractional, width = DECIMALS as usize);
    format!("{}.{}", whole, fractional_str.trim_end_matches('0'))
}

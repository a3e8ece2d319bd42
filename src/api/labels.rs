//! Display-label helpers for cards and the detail panel.
//!
//! Number formatting is fixed to the shop's locale convention (dot
//! thousands separator) rather than pulling in locale tables.

use crate::core::catalog::Vehicle;

/// Card/modal title: "{brand} {name}". Falls back to the owning brand's
/// display name when the vehicle record carries no brand label.
#[must_use]
pub fn car_title(brand_name: &str, vehicle: &Vehicle) -> String {
    let brand = if vehicle.brand.is_empty() {
        brand_name
    } else {
        &vehicle.brand
    };
    format!("{brand} {}", vehicle.name)
}

/// Formats a price as `€ 10.000`.
#[must_use]
pub fn format_price(value: u32) -> String {
    format!("€ {}", format_number(value))
}

/// Formats an integer with dot thousands separators: `1234567` → `1.234.567`.
#[must_use]
pub fn format_number(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;

    for (index, ch) in digits.chars().enumerate() {
        if index != 0 && index % 3 == lead % 3 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

//! Serial number masks of equipment types.
//!
//! One mask character per serial character:
//!
//! | mask | accepts                    |
//! |------|----------------------------|
//! | `N`  | digit `0-9`                |
//! | `A`  | uppercase latin letter     |
//! | `a`  | lowercase latin letter     |
//! | `X`  | uppercase letter or digit  |
//! | `Z`  | one of `-`, `_`, `@`       |
//!
//! Any other mask character must match literally. The server does the
//! authoritative check; this only lets the client warn early.

/// Whether `serial` fits `mask` exactly (same length, every slot accepted).
pub fn matches_mask(mask: &str, serial: &str) -> bool {
    let mut slots = mask.chars();
    let mut chars = serial.chars();
    loop {
        match (slots.next(), chars.next()) {
            (None, None) => return true,
            (Some(slot), Some(c)) if slot_accepts(slot, c) => continue,
            _ => return false,
        }
    }
}

/// Serials from `serials` that do not fit `mask`, in input order.
pub fn mismatched_serials<'a>(mask: &str, serials: &'a [String]) -> Vec<&'a str> {
    serials
        .iter()
        .map(String::as_str)
        .filter(|serial| !matches_mask(mask, serial))
        .collect()
}

fn slot_accepts(slot: char, c: char) -> bool {
    match slot {
        'N' => c.is_ascii_digit(),
        'A' => c.is_ascii_uppercase(),
        'a' => c.is_ascii_lowercase(),
        'X' => c.is_ascii_uppercase() || c.is_ascii_digit(),
        'Z' => matches!(c, '-' | '_' | '@'),
        literal => literal == c,
    }
}

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `folio_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("folio_core ping={}", folio_core::ping());
    println!("folio_core version={}", folio_core::core_version());
}

/// Round a monetary value to 2 decimal places.
///
/// Only applied when values leave the crate (reports, exports); the engine
/// keeps full precision internally.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

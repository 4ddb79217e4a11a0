//! Float-to-PCM quantization.
//!
//! Every asset emits through this single function, so its clamp policy bounds
//! all produced buffers.

/// Quantizes a floating-point sample to a signed 16-bit PCM value.
///
/// The input is nominally in [-1.0, 1.0] but mixing may overshoot; anything
/// outside the representable range is silently saturated, never an error.
/// The clamp bound is ±32767 on both sides: the negative limit sits one above
/// i16::MIN, and every produced buffer honors it.
///
/// # Examples
///
/// ```
/// use waveforge::quantize;
///
/// assert_eq!(quantize(0.0), 0);
/// assert_eq!(quantize(1.0), 32767);
/// assert_eq!(quantize(-4.0), -32767);
/// ```
pub fn quantize(value: f64) -> i16 {
    (value * 32767.0).clamp(-32767.0, 32767.0).round() as i16
}

/// Milliseconds per sample at a given sampling frequency
///
/// # Examples
///
/// ```rust
/// use wavedelin::sample_spacing;
///
/// assert_eq!(sample_spacing(500.0), 2.0);
/// assert_eq!(sample_spacing(400.0), 2.5);
/// ```
pub fn sample_spacing(frequency: f64) -> f64 {
    1000.0 / frequency
}

//! # Wave Delineation Library for Rust
//!
//! A pure Rust library for the annotation side of physiological signal
//! datasets: decoding wave delineation annotation streams into structured
//! waveform segments, merging sample-index intervals, and building minimal
//! window coverings around sparse events.
//!
//! Dataset adapters (path resolution, record listing, signal loading) stay
//! outside this crate; they hand in pre-extracted primitive inputs (sample
//! positions, symbol labels, spans) and receive structured values back.
//! Every operation is a pure function of its input: no I/O, no logging, no
//! shared state, safe to call concurrently on independent records.
//!
//! ## Quick Start
//!
//! ### Decoding delineation annotations
//!
//! Wave boundary annotations are stored as a flat symbol stream per lead,
//! with each wave written as `( label )` around its peak. Decoding pairs
//! every point label with its neighboring brackets:
//!
//! ```rust
//! use wavedelin::{AnnotationSymbol, SymbolMap, WaveDecoder, WaveKind, sample_spacing};
//!
//! fn main() -> wavedelin::Result<()> {
//!     // One heartbeat of a 500 Hz record: P wave, QRS complex, T wave
//!     let stream = vec![
//!         AnnotationSymbol::new(90, '('),
//!         AnnotationSymbol::new(100, 'p'),
//!         AnnotationSymbol::new(110, ')'),
//!         AnnotationSymbol::new(140, '('),
//!         AnnotationSymbol::new(150, 'N'),
//!         AnnotationSymbol::new(165, ')'),
//!         AnnotationSymbol::new(250, '('),
//!         AnnotationSymbol::new(270, 't'),
//!         AnnotationSymbol::new(300, ')'),
//!     ];
//!
//!     let decoder = WaveDecoder::new(SymbolMap::ludb(), sample_spacing(500.0));
//!     let waves = decoder.decode(&stream)?;
//!
//!     assert_eq!(waves.len(), 3);
//!     assert_eq!(waves[1].kind, WaveKind::Qrs);
//!     assert_eq!(waves[1].onset, 140);
//!     assert_eq!(waves[1].offset, 165);
//!     assert_eq!(waves[1].duration, 50.0);
//!     Ok(())
//! }
//! ```
//!
//! ### Covering sparse events with windows
//!
//! To visualize or extract the neighborhoods of a few events in a long
//! recording, cover their positions with as few fixed-minimum-length
//! windows as the grouping allows:
//!
//! ```rust
//! use wavedelin::{optimal_covering, Interval};
//!
//! fn main() -> wavedelin::Result<()> {
//!     let covering = optimal_covering(
//!         Interval::new(0, 5000),   // whole record
//!         &[100, 120, 3000],        // event positions
//!         200,                      // minimum window length
//!         50,                       // events closer than this share a window
//!         true,
//!     )?;
//!
//!     assert_eq!(covering.intervals.len(), 2);
//!     assert!(covering.intervals.iter().all(|iv| iv.len() >= 200));
//!     // which window each event landed in
//!     assert_eq!(covering.traceback, Some(vec![0, 0, 1]));
//!     Ok(())
//! }
//! ```
//!
//! ### Merging intervals
//!
//! [`IntervalSet`] deduplicates arbitrary interval collections, e.g.
//! overlapping plot windows collected across leads:
//!
//! ```rust
//! use wavedelin::{Interval, IntervalSet};
//!
//! let set = IntervalSet::build(
//!     &[Interval::new(5, 10), Interval::new(1, 4), Interval::new(9, 12)],
//!     0,
//! ).unwrap();
//!
//! assert_eq!(set.intervals(), &[Interval::new(1, 4), Interval::new(5, 12)]);
//! assert!(set.contains(11));
//! ```

pub mod cover;
pub mod decoder;
pub mod error;
pub mod interval;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use cover::{optimal_covering, CoveringResult};
pub use decoder::WaveDecoder;
pub use error::{Result, WaveError};
pub use interval::{Interval, IntervalSet};
pub use types::{AnnotationSymbol, SymbolMap, WaveForm, WaveKind};
pub use utils::sample_spacing;

/// Opening bracket marking a wave onset in annotation streams
pub const ONSET_MARKER: char = '(';
/// Closing bracket marking a wave offset in annotation streams
pub const OFFSET_MARKER: char = ')';

/// Library version
///
/// Returns the current version of the wavedelin library.
///
/// # Examples
///
/// ```rust
/// use wavedelin;
///
/// let version = wavedelin::version();
/// assert!(!version.is_empty());
/// assert!(version.contains('.'));
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}

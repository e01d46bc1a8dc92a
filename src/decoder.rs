use crate::error::{Result, WaveError};
use crate::types::{AnnotationSymbol, SymbolMap, WaveForm};
use crate::{OFFSET_MARKER, ONSET_MARKER};

/// Decoder turning annotation symbol streams into waveform segments
///
/// Delineation annotations arrive as a flat stream ordered by sample
/// position, where each wave is written as an optional opening bracket,
/// a point label at the wave's peak, and an optional closing bracket:
///
/// ```text
/// ( p ) ( N ) ( t ) ( p ) ( N ) ...
/// ```
///
/// The decoder is built once per dataset with that dataset's symbol
/// table and sampling spacing (milliseconds per sample), then applied
/// to each lead's stream.
///
/// # Examples
///
/// ```rust
/// use wavedelin::{AnnotationSymbol, SymbolMap, WaveDecoder, WaveKind, sample_spacing};
///
/// // LUDB records are sampled at 500 Hz
/// let decoder = WaveDecoder::new(SymbolMap::ludb(), sample_spacing(500.0));
///
/// let stream = vec![
///     AnnotationSymbol::new(10, '('),
///     AnnotationSymbol::new(12, 'N'),
///     AnnotationSymbol::new(15, ')'),
/// ];
///
/// let waves = decoder.decode(&stream)?;
/// assert_eq!(waves.len(), 1);
/// assert_eq!(waves[0].kind, WaveKind::Qrs);
/// assert_eq!(waves[0].onset, 10);
/// assert_eq!(waves[0].peak, 12);
/// assert_eq!(waves[0].offset, 15);
/// assert_eq!(waves[0].duration, 10.0);
/// # Ok::<(), wavedelin::WaveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct WaveDecoder {
    symbols: SymbolMap,
    spacing: f64,
}

impl WaveDecoder {
    /// Creates a decoder for one dataset
    ///
    /// # Arguments
    ///
    /// * `symbols` - point label table of the dataset's annotation format
    /// * `spacing` - milliseconds per sample, see [`sample_spacing`](crate::sample_spacing)
    pub fn new(symbols: SymbolMap, spacing: f64) -> Self {
        WaveDecoder { symbols, spacing }
    }

    /// Decodes one lead's annotation stream into waveform segments
    ///
    /// Only point labels produce a [`WaveForm`]; brackets are context for
    /// their neighbors. For a point label at position `peak`:
    ///
    /// - onset is the preceding symbol's position if that symbol is the
    ///   opening bracket, otherwise `peak` (also when the label starts
    ///   the stream);
    /// - offset is the following symbol's position if that symbol is the
    ///   closing bracket, otherwise `peak` (also when the label ends the
    ///   stream).
    ///
    /// A missing bracket is not an error: waves cut off by the stream
    /// boundary or annotated without brackets degrade to zero-length
    /// ends. Output order follows the input order of point labels;
    /// overlapping waves from noisy annotations are passed through
    /// unchanged.
    ///
    /// # Errors
    ///
    /// * `WaveError::UnknownSymbol` - a point label is absent from the
    ///   symbol table; nothing is returned for the whole stream
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wavedelin::{AnnotationSymbol, SymbolMap, WaveDecoder};
    ///
    /// let decoder = WaveDecoder::new(SymbolMap::ludb(), 2.0);
    ///
    /// // A lone label without brackets collapses onto its peak
    /// let waves = decoder.decode(&[AnnotationSymbol::new(42, 't')])?;
    /// assert_eq!(waves[0].onset, 42);
    /// assert_eq!(waves[0].offset, 42);
    /// assert_eq!(waves[0].duration, 0.0);
    /// # Ok::<(), wavedelin::WaveError>(())
    /// ```
    pub fn decode(&self, stream: &[AnnotationSymbol]) -> Result<Vec<WaveForm>> {
        let mut waves = Vec::new();

        for (i, ann) in stream.iter().enumerate() {
            if ann.symbol == ONSET_MARKER || ann.symbol == OFFSET_MARKER {
                continue;
            }
            let kind = self
                .symbols
                .get(ann.symbol)
                .ok_or(WaveError::UnknownSymbol(ann.symbol))?;

            let peak = ann.sample;

            // 前一个符号是开括号时取其位置，否则退化为峰值本身
            let onset = match i.checked_sub(1).map(|j| &stream[j]) {
                Some(prev) if prev.symbol == ONSET_MARKER => prev.sample,
                _ => peak,
            };
            let offset = match stream.get(i + 1) {
                Some(next) if next.symbol == OFFSET_MARKER => next.sample,
                _ => peak,
            };

            waves.push(WaveForm {
                kind,
                onset,
                peak,
                offset,
                duration: (offset - onset) as f64 * self.spacing,
            });
        }

        Ok(waves)
    }
}

use std::collections::HashMap;

/// Wave types annotated in delineation databases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaveKind {
    /// QRS complex
    Qrs,
    /// P wave
    Pwave,
    /// T wave
    Twave,
}

impl WaveKind {
    /// 波形的规范小写名称
    pub fn name(&self) -> &'static str {
        match self {
            WaveKind::Qrs => "qrs",
            WaveKind::Pwave => "pwave",
            WaveKind::Twave => "twave",
        }
    }
}

/// Mapping from raw annotation point labels to wave kinds
///
/// Each delineation database uses its own symbol alphabet, so the
/// table is supplied once per dataset adapter.
#[derive(Debug, Clone, Default)]
pub struct SymbolMap {
    table: HashMap<char, WaveKind>,
}

impl SymbolMap {
    pub fn new() -> Self {
        SymbolMap {
            table: HashMap::new(),
        }
    }

    /// The symbol table used by the LUDB wave delineation annotations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wavedelin::{SymbolMap, WaveKind};
    ///
    /// let symbols = SymbolMap::ludb();
    /// assert_eq!(symbols.get('N'), Some(WaveKind::Qrs));
    /// assert_eq!(symbols.get('p'), Some(WaveKind::Pwave));
    /// assert_eq!(symbols.get('t'), Some(WaveKind::Twave));
    /// ```
    pub fn ludb() -> Self {
        let mut map = SymbolMap::new();
        map.insert('N', WaveKind::Qrs);
        map.insert('p', WaveKind::Pwave);
        map.insert('t', WaveKind::Twave);
        map
    }

    /// 注册一个点标签
    pub fn insert(&mut self, symbol: char, kind: WaveKind) {
        self.table.insert(symbol, kind);
    }

    pub fn get(&self, symbol: char) -> Option<WaveKind> {
        self.table.get(&symbol).copied()
    }
}

/// One element of a per-lead annotation stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationSymbol {
    /// 样本位置
    pub sample: i64,
    /// 括号标记或点标签
    pub symbol: char,
}

impl AnnotationSymbol {
    pub fn new(sample: i64, symbol: char) -> Self {
        AnnotationSymbol { sample, symbol }
    }
}

/// A delineated waveform segment
///
/// Sample positions satisfy `onset <= peak <= offset`; `duration` is
/// `(offset - onset)` scaled by the recording's sampling spacing, in
/// milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveForm {
    pub kind: WaveKind,
    pub onset: i64,
    pub peak: i64,
    pub offset: i64,
    pub duration: f64,
}

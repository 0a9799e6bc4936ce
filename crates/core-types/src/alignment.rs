/// Converts between the local index of a windowed series and the calendar day
/// (0-based offset into the price series) that index describes.
///
/// A series computed with window `w` starts on day `w - 1`, so local index `i`
/// is day `i + w - 1`. Every cross-window comparison goes through this type
/// instead of repeating the offset arithmetic inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alignment {
    window: usize,
}

impl Alignment {
    /// Creates the alignment for a series computed with `window`. A window must be
    /// at least 1; a zero window is treated as 1.
    pub fn new(window: usize) -> Self {
        debug_assert!(window > 0, "alignment window must be positive");
        Self { window: window.max(1) }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Number of leading days with no value in the series.
    pub fn offset(&self) -> usize {
        self.window - 1
    }

    /// The calendar day of local index `index`.
    pub fn day(&self, index: usize) -> usize {
        index + self.offset()
    }

    /// The local index holding `day`, or `None` when the day precedes the first
    /// full window. Callers still need to bounds-check against the series length.
    pub fn index(&self, day: usize) -> Option<usize> {
        day.checked_sub(self.offset())
    }

    /// Maps a local index of this series onto the local index of `other` that
    /// describes the same calendar day.
    pub fn rebase(&self, index: usize, other: &Alignment) -> Option<usize> {
        other.index(self.day(index))
    }
}

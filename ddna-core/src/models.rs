use std::ops::Range;

/// A half-open span `[start, end)` into the sequence that was searched.
///
/// An empty span means no qualifying region was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PalindromeMatch {
    start: usize,
    end: usize,
}

impl PalindromeMatch {
    /// Panics if `end < start`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(end >= start, "span end {end} is before start {start}");
        PalindromeMatch { start, end }
    }

    pub fn empty() -> Self {
        PalindromeMatch::default()
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The bytes of `seq` covered by this span.
    ///
    /// `seq` must be the sequence the span was computed from.
    pub fn slice<'a>(&self, seq: &'a [u8]) -> &'a [u8] {
        &seq[self.range()]
    }
}

impl From<PalindromeMatch> for Range<usize> {
    fn from(span: PalindromeMatch) -> Self {
        span.range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_span() {
        let span = PalindromeMatch::new(1, 5);
        assert_eq!(span.len(), 4);
        assert_eq!((span.start(), span.end()), (1, 5));
        assert_eq!(span.is_empty(), false);
        assert_eq!(span.slice(b"GATATG"), b"ATAT");
        assert_eq!(Range::from(span), 1..5);
    }

    #[rstest]
    fn test_empty_span() {
        let span = PalindromeMatch::empty();
        assert_eq!(span.len(), 0);
        assert_eq!(span.is_empty(), true);
        assert_eq!(span.slice(b""), b"");
    }

    #[rstest]
    #[case(3, 2)]
    #[case(1, 0)]
    #[should_panic(expected = "is before start")]
    fn test_inverted_span_is_rejected(#[case] start: usize, #[case] end: usize) {
        PalindromeMatch::new(start, end);
    }
}

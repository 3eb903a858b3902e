use std::ops::{Deref, DerefMut};

use crate::config::CaseMode;

/// Owned, fixed-length working copy of an input sequence.
///
/// Every operation copies its input into one of these, mutates it, and either
/// hands the bytes out with [`SequenceBuffer::into_inner`] or drops it. The
/// length never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceBuffer {
    bytes: Vec<u8>,
}

impl SequenceBuffer {
    pub fn new(seq: &[u8]) -> Self {
        SequenceBuffer {
            bytes: seq.to_vec(),
        }
    }

    /// Copy `seq`, folding to uppercase when comparisons should ignore case.
    pub fn with_case_mode(seq: &[u8], case_mode: CaseMode) -> Self {
        let mut buffer = SequenceBuffer::new(seq);
        if case_mode == CaseMode::Insensitive {
            buffer.bytes.make_ascii_uppercase();
        }
        buffer
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.bytes
    }
}

impl Deref for SequenceBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DerefMut for SequenceBuffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl From<&[u8]> for SequenceBuffer {
    fn from(seq: &[u8]) -> Self {
        SequenceBuffer::new(seq)
    }
}

impl From<&str> for SequenceBuffer {
    fn from(seq: &str) -> Self {
        SequenceBuffer::new(seq.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_buffer_is_a_copy() {
        let input = b"ACGT".to_vec();
        let mut buffer = SequenceBuffer::new(&input);
        buffer[0] = b'T';

        assert_eq!(input, b"ACGT".to_vec());
        assert_eq!(buffer.into_inner(), b"TCGT".to_vec());
    }

    #[rstest]
    #[case(CaseMode::Sensitive, "acGt", "acGt")]
    #[case(CaseMode::Insensitive, "acGt", "ACGT")]
    #[case(CaseMode::Insensitive, "", "")]
    fn test_case_mode(#[case] mode: CaseMode, #[case] input: &str, #[case] expected: &str) {
        let buffer = SequenceBuffer::with_case_mode(input.as_bytes(), mode);
        assert_eq!(&*buffer, expected.as_bytes());
    }

    #[rstest]
    fn test_empty_buffer() {
        let buffer = SequenceBuffer::from("");
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
    }
}

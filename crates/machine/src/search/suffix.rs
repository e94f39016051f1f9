//! Suffix matching between machine output and the target.

/// Returns the last `len` digits of `target`, or `None` when `len` exceeds the target length.
///
/// An output longer than the target can never be a suffix of it.
pub fn expected_suffix(target: &[u8], len: usize) -> Option<&[u8]> {
    target.len().checked_sub(len).map(|start| &target[start..])
}

/// Returns true if `output` equals the last `output.len()` digits of `target`.
pub fn is_suffix_match(output: &[u8], target: &[u8]) -> bool {
    expected_suffix(target, output.len()).is_some_and(|expected| expected == output)
}

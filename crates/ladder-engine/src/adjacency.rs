//! One-edit adjacency between equal-length words.

/// `true` iff `a` and `b` have the same length and differ at exactly one
/// position. Comparison is byte-wise and case-sensitive.
pub fn is_one_edit(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }

    let mut mismatches = 0u32;
    for (x, y) in a.iter().zip(b) {
        if x != y {
            mismatches += 1;
            if mismatches > 1 {
                return false;
            }
        }
    }
    mismatches == 1
}

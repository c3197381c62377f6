/// Compares two bound names ignoring case.
///
/// ASCII names, the common case, are compared without allocating. Other
/// names fall back to full Unicode lowercase folding.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

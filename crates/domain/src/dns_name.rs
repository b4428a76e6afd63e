//! Helpers for textual domain names.

/// Lower-cases `name` and appends the root label separator when missing.
pub fn fqdn(name: &str) -> String {
    let mut out = name.to_lowercase();
    if !out.ends_with('.') {
        out.push('.');
    }
    out
}

/// Yields `name` followed by each ancestor, most specific first, ending at
/// the root (`"."`). `name` must already be fully qualified.
///
/// `"www.a.test."` yields `"www.a.test."`, `"a.test."`, `"test."`, `"."`.
pub fn self_and_ancestors(name: &str) -> impl Iterator<Item = &str> {
    let mut next = Some(name);
    std::iter::from_fn(move || {
        let current = next?;
        next = if current == "." || current.is_empty() {
            None
        } else {
            match current.find('.') {
                Some(idx) if idx + 1 < current.len() => Some(&current[idx + 1..]),
                _ => Some("."),
            }
        };
        Some(current)
    })
}

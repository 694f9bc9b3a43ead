/// Normalize a user-supplied style name into a canonical lookup key.
///
/// Trims surrounding whitespace, lower-cases, turns every `-` into `_` and
/// collapses each run of inner whitespace into a single `_`.
///
/// # Example
/// ```
/// use du_core::names::normalize_text;
/// assert_eq!(normalize_text("  Negative circled "), "negative_circled");
/// assert_eq!(normalize_text("NEGATIVE-CIRCLED"), "negative_circled");
/// ```
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.trim().chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
                in_space = true;
            }
            continue;
        }
        in_space = false;
        if c == '-' {
            out.push('_');
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Format a canonical key as a display label.
///
/// # Example
/// ```
/// use du_core::names::humanize;
/// assert_eq!(humanize("negative_circled"), "Negative circled");
/// ```
#[must_use]
pub fn humanize(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out: String = first.to_uppercase().collect();
    out.extend(chars.map(|c| if c == '_' { ' ' } else { c }));
    out
}

/// Canonical key → CLI-friendly form (`negative_circled` → `negative-circled`).
#[must_use]
pub fn hyphenate(name: &str) -> String {
    name.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_spellings_resolve_identically() {
        let expected = normalize_text("Negative circled");
        assert_eq!(normalize_text("negative-circled"), expected);
        assert_eq!(normalize_text("NEGATIVE_CIRCLED"), expected);
        assert_eq!(normalize_text("\tnegative \n  circled  "), expected);
        assert_eq!(expected, "negative_circled");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in [
            "",
            "   ",
            "Math Bold",
            " a - b ",
            "Circled (neg)",
            "ÉCLAT\u{00a0}noir",
            "__x--y  z__",
        ] {
            let once = normalize_text(input);
            assert_eq!(normalize_text(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn hyphens_map_one_to_one() {
        assert_eq!(normalize_text("a--b"), "a__b");
        assert_eq!(normalize_text("a - b"), "a___b");
    }

    #[test]
    fn humanize_edge_cases() {
        assert_eq!(humanize(""), "");
        assert_eq!(humanize("circled"), "Circled");
        assert_eq!(humanize("math_double_struck"), "Math double struck");
        assert_eq!(humanize("x"), "X");
    }

    #[test]
    fn hyphenate_replaces_underscores() {
        assert_eq!(hyphenate("math_sans_bold"), "math-sans-bold");
    }
}

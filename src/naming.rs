//! Identifier derivation for anchors, CSS classes and keyframe names.
//!
//! Every generated identifier goes through [`slugify`] so the same label
//! always maps to the same anchor or class, across sections and rebuilds:
//!
//! - `"About"` → `about` (section anchor, nav link `#about`)
//! - `"Work History"` → `work-history`
//! - `"Node.js"` → `node-js` (tech chip element key)
//! - `"--Full  Stack--"` → `full-stack`

/// Lowercase ASCII slug: alphanumerics kept, every other run of characters
/// collapsed into a single dash, no leading or trailing dash.
///
/// Non-ASCII letters are dropped rather than transliterated.
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_dash = false;
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// In-page anchor for a section or nav label (`"Experience"` → `"#experience"`).
pub fn anchor_href(label: &str) -> String {
    format!("#{}", slugify(label))
}

/// A valid CSS identifier for a stable key.
///
/// CSS identifiers cannot start with a digit, so keys like `"3d-spin"`
/// get an `x-` prefix. Empty keys map to `"x"`.
pub fn css_ident(key: &str) -> String {
    let slug = slugify(key);
    match slug.chars().next() {
        None => "x".to_string(),
        Some(c) if c.is_ascii_digit() => format!("x-{slug}"),
        Some(_) => slug,
    }
}

/// Element key for the `index`-th (0-based) item of a rendered collection.
///
/// Keys are 1-based to match the positional indexes printed by the CLI.
pub fn item_key(prefix: &str, index: usize) -> String {
    format!("{}-{}", prefix, index + 1)
}

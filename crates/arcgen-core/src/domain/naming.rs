//! Name and route transformations.
//!
//! Pure string functions used by the parameter builder. None of them touch
//! the filesystem.

use std::sync::LazyLock;

use regex::Regex;

/// Convert a name to PascalCase, keeping runs of uppercase letters intact.
///
/// | Input | Output |
/// |-------|--------|
/// | "main-menu" | "MainMenu" |
/// | "user card" | "UserCard" |
/// | "fooBAR" | "FooBAR" |
/// | "HTMLParser" | "HTMLParser" |
/// | "user2card" | "User2Card" |
pub fn to_pascal_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for word in input.split(|c: char| !c.is_alphanumeric()) {
        let mut capitalize = true;
        for c in word.chars() {
            if capitalize && c.is_alphabetic() {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            // A letter after a digit run starts a new word.
            capitalize = c.is_ascii_digit();
        }
    }
    out
}

/// Lowercase slug: alphanumerics kept, every other run collapsed to `-`.
///
/// | Input | Output |
/// |-------|--------|
/// | "Home Screen" | "home-screen" |
/// | "MainMenu" | "mainmenu" |
/// | "  a / b!" | "a-b" |
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Split free-form route input into `/`-prefixed paths.
///
/// Commas and whitespace both separate entries; empty entries are dropped.
/// Input order is preserved.
pub fn route_paths(input: &str) -> Vec<String> {
    input
        .replace(',', " ")
        .split_whitespace()
        .map(|item| {
            if item.starts_with('/') {
                item.to_string()
            } else {
                format!("/{item}")
            }
        })
        .collect()
}

/// Format route input as the array literal embedded in `route.js`.
///
/// Paths are sorted, then reversed, so more specific routes come first.
/// The result is a JSON array with single quotes and `", "` separators:
/// `"b, a ,c"` becomes `['/c', '/b', '/a']`.
///
/// This is a convenience for template embedding, not a structured format.
pub fn web_route_literal(input: &str) -> String {
    let mut paths = route_paths(input);
    paths.sort();
    paths.reverse();

    serde_json::Value::from(paths)
        .to_string()
        .replace('"', "'")
        .replace(',', ", ")
}

/// Native routes are a single screen name: `"Home Screen"` → `"home-screen"`.
pub fn native_route_slug(input: &str) -> String {
    slugify(input)
}

static DOMAIN_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"name\s*:\s*['"`]([^'"`]+)['"`]"#).expect("domain name pattern is valid")
});

/// Pull the `name: '...'` value out of an existing `domain.js`.
pub fn extract_domain_name(source: &str) -> Option<String> {
    DOMAIN_NAME
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
}

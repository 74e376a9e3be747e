//! Case conversions for derived identifiers.
//!
//! The conversions here are tuned for schema-derived names rather than
//! general prose: dots and slashes act as package separators, and
//! underscores followed by digits are collapsed without uppercasing
//! (e.g., "model_200" -> "Model200").

/// Convert a string to PascalCase (e.g., "phone_number" -> "PhoneNumber")
pub fn to_pascal_case(s: &str) -> String {
    camelize(s, false)
}

/// Convert a string to camelCase (e.g., "pet_id" -> "petId")
pub fn to_camel_case(s: &str) -> String {
    camelize(s, true)
}

fn camelize(word: &str, lowercase_first: bool) -> String {
    // Slashes separate path segments the same way dots separate packages.
    let word = word.replace('/', ".");

    // Uppercase the head of every dot-separated segment and drop the dots.
    let mut out = String::with_capacity(word.len());
    for part in word.split('.') {
        let mut chars = part.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    // Separators are removed left to right, underscores before hyphens.
    let out = collapse_separator(&out, '_');
    let out = collapse_separator(&out, '-');

    if lowercase_first {
        let mut chars = out.chars();
        match chars.next() {
            None => out,
            Some(head) => head.to_lowercase().chain(chars).collect(),
        }
    } else {
        out
    }
}

/// Drop each `sep`, uppercasing the following letter when it has an
/// uppercase form ("pet_id" -> "petId", "model_200" -> "model200").
/// A trailing separator has nothing to absorb and is kept as-is.
fn collapse_separator(word: &str, sep: char) -> String {
    let mut out = String::with_capacity(word.len());
    let mut chars = word.chars().peekable();
    while let Some(c) = chars.next() {
        if c != sep {
            out.push(c);
            continue;
        }
        match chars.peek() {
            None => out.push(sep),
            Some(&next) if next.is_lowercase() => {
                out.extend(next.to_uppercase());
                chars.next();
            }
            // Digits, further separators and already-uppercase letters
            // stay put; only the separator itself is dropped.
            Some(_) => {}
        }
    }
    out
}

/// Convert a string to snake_case (e.g., "PhoneNumber" -> "phone_number").
/// Acronyms split before their last letter ("HTTPResponse" -> "http_response").
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' {
            out.push('_');
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let acronym_ends = prev.is_uppercase() && next_is_lower;
            if prev.is_lowercase() || prev.is_ascii_digit() || acronym_ends {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}

const DETERMINERS: &[&str] = &["a", "an", "the", "one"];

/// Drop a single leading determiner, unless it is the only token.
/// Whitespace runs collapse to single spaces.
pub fn normalize_object(object: &str) -> String {
    let tokens: Vec<&str> = object.split_whitespace().collect();
    match tokens.split_first() {
        Some((first, rest)) if !rest.is_empty() && DETERMINERS.contains(first) => rest.join(" "),
        _ => tokens.join(" "),
    }
}

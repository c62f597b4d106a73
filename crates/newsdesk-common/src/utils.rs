//! Utility functions used across the newsdesk workspace

/// Title-case every whitespace separated word, lowercasing the rest of it
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive a display title from a document field path.
///
/// A trailing `qcode` segment is dropped since it only names the code
/// attribute, then the last remaining segment is title-cased with
/// underscores read as spaces.
pub fn humanize_field(field: &str) -> String {
    let trimmed = field.strip_suffix(".qcode").unwrap_or(field);
    let segment = trimmed.rsplit('.').next().unwrap_or(trimmed);
    title_case(&segment.replace('_', " "))
}

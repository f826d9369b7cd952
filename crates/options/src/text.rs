/// Upper-cases the first character and lower-cases the rest.
///
/// ```rust
/// use options::capitalize;
///
/// assert_eq!(capitalize("MODERATION"), "Moderation");
/// assert_eq!(capitalize("guild"), "Guild");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_character() {
        assert_eq!(capitalize("g"), "G");
        assert_eq!(capitalize("G"), "G");
    }

    #[test]
    fn mixed_case_is_normalised() {
        assert_eq!(capitalize("cOMMAND"), "Command");
    }

    #[test]
    fn non_ascii_first_letter() {
        assert_eq!(capitalize("éCOLE"), "École");
    }
}

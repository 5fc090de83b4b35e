//! Helpers for admin form input

/// Split comma separated input into trimmed items, dropping empty ones
///
/// `"React, Node ,, MongoDB"` becomes `["React", "Node", "MongoDB"]`.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("React, Node ,, MongoDB"),
            vec!["React", "Node", "MongoDB"]
        );
    }

    #[test]
    fn test_split_list_empty_input() {
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_split_list_keeps_inner_spaces() {
        assert_eq!(
            split_list("uploads/a b.jpg,https://x.dev/c.png"),
            vec!["uploads/a b.jpg", "https://x.dev/c.png"]
        );
    }
}

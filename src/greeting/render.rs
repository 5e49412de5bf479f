//! Greeting message template.

/// Combine a greeting phrase and a name into the final message.
///
/// Empty inputs pass through literally: `render("", "")` is `", !"`.
///
/// # Examples
///
/// ```
/// use hello_users::greeting::render;
///
/// assert_eq!(render("Ada", "Hello"), "Hello, Ada!");
/// ```
#[must_use]
pub fn render(name: &str, greeting: &str) -> String {
    format!("{greeting}, {name}!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(render("Bob", "Hi"), render("Bob", "Hi"));
    }

    #[test]
    fn test_either_input_changes_output() {
        let base = render("Bob", "Hi");
        assert_ne!(base, render("Rob", "Hi"));
        assert_ne!(base, render("Bob", "Hey"));
    }

    #[test]
    fn test_empty_inputs_pass_through() {
        assert_eq!(render("", "Hi"), "Hi, !");
        assert_eq!(render("Bob", ""), ", Bob!");
        assert_eq!(render("", ""), ", !");
    }
}

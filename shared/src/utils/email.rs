//! Email address utilities

/// Mask an email address for logging (e.g., a****e@example.com)
///
/// Keeps the first and last character of the local part and the full domain.
/// Inputs without an `@` are masked entirely.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let chars: Vec<char> = local.chars().collect();
            let masked_local = match chars.len() {
                0 => String::new(),
                1 | 2 => "*".repeat(chars.len()),
                n => format!("{}{}{}", chars[0], "*".repeat(n - 2), chars[n - 1]),
            };
            format!("{}@{}", masked_local, domain)
        }
        None => "*".repeat(email.chars().count()),
    }
}

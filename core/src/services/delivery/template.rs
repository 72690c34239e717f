//! Compiled-in email constants and body rendering

/// Sender address; must be verified with the email transport
pub const SENDER: &str = "sender@example.com";

/// Subject line for verification emails
pub const SUBJECT: &str = "Example Subject";

/// Character encoding for subject and body
pub const CHARSET: &str = "UTF-8";

/// Render the HTML body carrying the code
///
/// The code is embedded verbatim; issued codes are digits only.
pub fn render_html_body(code: &str) -> String {
    format!(
        "<html><h1>Auth Code</h1><p>Your auth code is: {}</p></html>",
        code
    )
}

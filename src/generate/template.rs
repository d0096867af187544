//! Placeholder template rendering.
//!
//! The single substitution primitive shared by all three generators:
//! `{{name}}` tokens in a template are replaced from a name->text mapping.
//! A token with no mapping entry is an error; a template never silently
//! renders an empty or literal placeholder.

use crate::error::GeneratorError;

/// Renders `template`, substituting every `{{name}}` token from `values`.
///
/// Unused mapping entries are fine; unknown tokens are not.
pub fn render(template: &str, values: &[(&str, String)]) -> Result<String, GeneratorError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            // Unterminated braces are literal text, not a token.
            out.push_str(&rest[start..]);
            return Ok(out);
        };
        let name = &after[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                return Err(GeneratorError::MissingPlaceholder {
                    placeholder: name.to_string(),
                })
            }
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

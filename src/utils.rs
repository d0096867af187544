//! String helpers for deriving table and column names from entity names.

/// Converts a CamelCase/StudlyCase name to snake_case.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(snake_case("BlogPost"), "blog_post");
/// assert_eq!(snake_case("User"), "user");
/// ```
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Pluralizes an English word using the rules the schema format relies on.
///
/// Covers the common suffixes (`y` -> `ies`, sibilants -> `es`, default `s`).
/// Irregular nouns are not handled; declare an explicit `table` for those.
pub fn pluralize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y') {
        let before = stem.chars().last();
        // "day" -> "days" but "category" -> "categories"
        let vowel_before = matches!(before, Some('a' | 'e' | 'i' | 'o' | 'u'));
        if !vowel_before && !stem.is_empty() {
            return format!("{stem}ies");
        }
    }
    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        return format!("{word}es");
    }
    format!("{word}s")
}

/// Derives the default table name for an entity: pluralized snake_case.
///
/// Mirrors the Laravel convention: `User` -> `users`, `BlogPost` -> `blog_posts`.
pub fn tableize(entity_name: &str) -> String {
    pluralize(&snake_case(entity_name))
}

/// Derives the conventional foreign-key column name for a belongsTo target:
/// `User` -> `user_id`, `BlogPost` -> `blog_post_id`.
pub fn foreign_key_name(entity_name: &str) -> String {
    format!("{}_id", snake_case(entity_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_single_word() {
        assert_eq!(snake_case("User"), "user");
    }

    #[test]
    fn test_snake_case_multi_word() {
        assert_eq!(snake_case("BlogPost"), "blog_post");
        assert_eq!(snake_case("OrderLineItem"), "order_line_item");
    }

    #[test]
    fn test_snake_case_already_lower() {
        assert_eq!(snake_case("user"), "user");
    }

    #[test]
    fn test_pluralize_default() {
        assert_eq!(pluralize("user"), "users");
        assert_eq!(pluralize("blog_post"), "blog_posts");
    }

    #[test]
    fn test_pluralize_consonant_y() {
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("company"), "companies");
    }

    #[test]
    fn test_pluralize_vowel_y() {
        assert_eq!(pluralize("day"), "days");
    }

    #[test]
    fn test_pluralize_sibilants() {
        assert_eq!(pluralize("address"), "addresses");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("batch"), "batches");
        assert_eq!(pluralize("dish"), "dishes");
    }

    #[test]
    fn test_tableize() {
        assert_eq!(tableize("User"), "users");
        assert_eq!(tableize("BlogPost"), "blog_posts");
        assert_eq!(tableize("Category"), "categories");
    }

    #[test]
    fn test_foreign_key_name() {
        assert_eq!(foreign_key_name("User"), "user_id");
        assert_eq!(foreign_key_name("BlogPost"), "blog_post_id");
    }
}

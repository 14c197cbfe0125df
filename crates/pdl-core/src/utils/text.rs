//! Identifier case conversion
//!
//! PDL speaks snake_case while narrowed records and output filenames use
//! camelCase and snake_case respectively.

/// Split text into lowercase words.
///
/// Words break on any non-alphanumeric character and on a lowercase or digit
/// followed by an uppercase letter. An uppercase run followed by a lowercase
/// letter keeps its last capital for the next word (`HTMLParser` -> `html`, `parser`).
fn split_words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Convert text to snake_case
///
/// # Examples
/// ```
/// use pdl_core::utils::text::snake_case;
/// assert_eq!(snake_case("github:octocat"), "github_octocat");
/// assert_eq!(snake_case("fullName"), "full_name");
/// ```
pub fn snake_case(text: &str) -> String {
    split_words(text).join("_")
}

/// Convert text to camelCase
///
/// # Examples
/// ```
/// use pdl_core::utils::text::camel_case;
/// assert_eq!(camel_case("linkedin_url"), "linkedinUrl");
/// assert_eq!(camel_case("id"), "id");
/// ```
pub fn camel_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, word) in split_words(text).iter().enumerate() {
        if i == 0 {
            out.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

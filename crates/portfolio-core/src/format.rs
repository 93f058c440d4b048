//! Text Formatting

/// Lowercase, then capitalise the first character of every word
///
/// A word starts at a word character (alphanumeric or `_`) that follows a
/// non-word character or the start of the string. Word characters are
/// Unicode-aware, so accented letters never start a new word: `"garcía"`
/// becomes `"García"`, where an ASCII-only `\w` would give `"GarcíA"`.
pub fn to_title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_word = false;

    for c in s.chars().flat_map(char::to_lowercase) {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }
    out
}

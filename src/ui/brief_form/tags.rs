// SPDX-License-Identifier: MPL-2.0
//! Brand color tag input.
//!
//! Iced reports whole-text edits rather than key presses, so a typed
//! delimiter is recognized by comparing the text before and after the edit.

/// Characters that commit the current input as a tag.
pub const DELIMITERS: [char; 2] = [',', ' '];

/// A committed brand color chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTag {
    pub id: u64,
    pub text: String,
}

/// Outcome of an edit to the color input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEdit {
    /// Add this tag and clear the input.
    Commit(String),
    /// A delimiter was typed on blank input; keep the input as it was.
    Ignore,
    /// Ordinary edit; the input now reads this.
    Update(String),
}

/// Classifies an edit of the color input from `old` to `new`.
///
/// Inserting exactly one delimiter anywhere commits `old.trim()` when it is
/// non-empty. The delimiter itself never reaches the input.
#[must_use]
pub fn classify_edit(old: &str, new: &str) -> TagEdit {
    match inserted_char(old, new) {
        Some(ch) if DELIMITERS.contains(&ch) => commit(old),
        _ => TagEdit::Update(new.to_string()),
    }
}

/// Enter behaves like a delimiter key.
#[must_use]
pub fn classify_submit(current: &str) -> TagEdit {
    commit(current)
}

fn commit(text: &str) -> TagEdit {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        TagEdit::Ignore
    } else {
        TagEdit::Commit(trimmed.to_string())
    }
}

/// Returns the single character inserted into `old` to produce `new`.
fn inserted_char(old: &str, new: &str) -> Option<char> {
    let old_chars: Vec<char> = old.chars().collect();
    let new_chars: Vec<char> = new.chars().collect();
    if new_chars.len() != old_chars.len() + 1 {
        return None;
    }

    let split = old_chars
        .iter()
        .zip(&new_chars)
        .take_while(|(a, b)| a == b)
        .count();

    (old_chars[split..] == new_chars[split + 1..]).then(|| new_chars[split])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_after_word_commits_trimmed_tag() {
        assert_eq!(classify_edit("Red", "Red,"), TagEdit::Commit("Red".into()));
        assert_eq!(classify_edit(" Red ", " Red ,"), TagEdit::Commit("Red".into()));
    }

    #[test]
    fn space_commits_like_comma() {
        assert_eq!(classify_edit("Navy", "Navy "), TagEdit::Commit("Navy".into()));
    }

    #[test]
    fn delimiter_inserted_mid_text_commits_previous_text() {
        assert_eq!(classify_edit("Teal", "Te,al"), TagEdit::Commit("Teal".into()));
    }

    #[test]
    fn delimiter_on_blank_input_is_ignored() {
        assert_eq!(classify_edit("", ","), TagEdit::Ignore);
        assert_eq!(classify_edit("  ", "   "), TagEdit::Ignore);
    }

    #[test]
    fn ordinary_typing_updates_input() {
        assert_eq!(classify_edit("Re", "Red"), TagEdit::Update("Red".into()));
        assert_eq!(classify_edit("Red", "Re"), TagEdit::Update("Re".into()));
    }

    #[test]
    fn pasted_text_with_delimiters_is_not_a_keypress() {
        assert_eq!(
            classify_edit("", "Red, Blue"),
            TagEdit::Update("Red, Blue".into())
        );
    }

    #[test]
    fn enter_commits_current_input() {
        assert_eq!(classify_submit(" Gold "), TagEdit::Commit("Gold".into()));
        assert_eq!(classify_submit(""), TagEdit::Ignore);
    }

    #[test]
    fn multibyte_text_is_handled() {
        assert_eq!(classify_edit("Émeraude", "Émeraude,"), TagEdit::Commit("Émeraude".into()));
        assert_eq!(classify_edit("Ém", "Éme"), TagEdit::Update("Éme".into()));
    }
}

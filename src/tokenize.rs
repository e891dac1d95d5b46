//! Splitting text into diffable sequences.
//!
//! Pieces that are empty or only whitespace are dropped, so these helpers
//! suit comparing documents, not rebuilding them byte for byte. Use
//! [`diff_lines`](crate::diff_lines) when the exact text must come back.

/// Splits `text` on `delimiter`, skipping blank pieces.
pub fn split<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    text.split(delimiter)
        .filter(|part| !part.trim().is_empty())
        .collect()
}

pub fn lines(text: &str) -> Vec<&str> {
    split(text, "\n")
}

pub fn sentences(text: &str) -> Vec<&str> {
    split(text, ".")
}

pub fn words(text: &str) -> Vec<&str> {
    split(text, " ")
}

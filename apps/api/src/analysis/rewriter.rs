//! Rule-based resume rewriting — weak-verb substitution plus a "skills to add" header.

use regex::{NoExpand, Regex};

use crate::analysis::lexicon::WEAK_TO_STRONG;

/// Max missing keywords listed in the header.
pub const MAX_SUGGESTED_SKILLS: usize = 12;

/// Holds one compiled whole-word, case-insensitive pattern per lexicon entry,
/// in lexicon order.
pub struct ResumeRewriter {
    rules: Vec<(Regex, &'static str)>,
}

impl ResumeRewriter {
    pub fn new() -> Result<Self, regex::Error> {
        let rules = WEAK_TO_STRONG
            .iter()
            .map(|(weak, strong)| {
                Regex::new(&format!(r"(?i)\b{}\b", regex::escape(weak))).map(|re| (re, *strong))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Rewrites each line independently, then prepends the skills header when
    /// `missing_keywords` is non-empty. `matched_keywords` is accepted for
    /// callers that pass the full match result; it does not affect the output.
    pub fn rewrite(
        &self,
        resume_text: &str,
        _matched_keywords: &[String],
        missing_keywords: &[String],
    ) -> String {
        let body = split_lines(resume_text)
            .into_iter()
            .map(|line| self.rewrite_line(line))
            .collect::<Vec<_>>()
            .join("\n");

        if missing_keywords.is_empty() {
            return body;
        }

        let skills: Vec<&str> = missing_keywords
            .iter()
            .take(MAX_SUGGESTED_SKILLS)
            .map(String::as_str)
            .collect();
        format!("Suggested skills to add: {}\n\n{body}", skills.join(", "))
    }

    fn rewrite_line(&self, line: &str) -> String {
        self.rules
            .iter()
            .fold(line.to_string(), |acc, (pattern, strong)| {
                pattern.replace_all(&acc, NoExpand(strong)).into_owned()
            })
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Splits on every Unicode line boundary, not only `\n` and `\r\n`.
/// `\r\n` counts as one break; a trailing break adds no empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

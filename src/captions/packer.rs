/*!
 * Greedy packing of sentence tokens into caption lines.
 */

use crate::errors::{CaptionError, CaptionResult};

/// Packs tokens into lines no longer than a character budget.
///
/// Lengths are counted in `char`s, separators included. Lines come out in
/// reading order and are never empty.
#[derive(Debug, Clone)]
pub struct LinePacker {
    max_line_length: usize,
    separator: &'static str,
}

impl LinePacker {
    /// Create a packer; a zero budget is rejected
    pub fn new(max_line_length: usize, separator: &'static str) -> CaptionResult<Self> {
        if max_line_length == 0 {
            return Err(CaptionError::InvalidConfig(
                "max_line_length must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            max_line_length,
            separator,
        })
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Pack tokens greedily into caption lines.
    ///
    /// A token is appended while the line stays within budget, otherwise the
    /// line is closed and the token starts the next one. A token that alone
    /// exceeds the budget is cut into budget-sized pieces; the last piece
    /// stays open so following tokens can join it.
    ///
    /// Whitespace tokens count toward the budget but never open a line, and
    /// lines are closed without trailing whitespace.
    pub fn pack<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        let separator_len = self.separator.chars().count();
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for token in tokens {
            let token = token.as_ref();
            let token_len = token.chars().count();
            if token_len == 0 {
                continue;
            }

            if token.trim().is_empty() {
                if current.is_empty() {
                    continue;
                }
                if current_len + separator_len + token_len <= self.max_line_length {
                    current.push_str(self.separator);
                    current.push_str(token);
                    current_len += separator_len + token_len;
                } else {
                    close_line(&mut lines, std::mem::take(&mut current));
                }
                continue;
            }

            if token_len > self.max_line_length {
                close_line(&mut lines, std::mem::take(&mut current));

                let chars: Vec<char> = token.chars().collect();
                let mut pieces = chars.chunks(self.max_line_length).peekable();
                while let Some(piece) = pieces.next() {
                    if pieces.peek().is_some() {
                        lines.push(piece.iter().collect());
                    } else {
                        current = piece.iter().collect();
                        current_len = piece.len();
                    }
                }
                continue;
            }

            if current.is_empty() {
                current.push_str(token);
                current_len = token_len;
            } else if current_len + separator_len + token_len <= self.max_line_length {
                current.push_str(self.separator);
                current.push_str(token);
                current_len += separator_len + token_len;
            } else {
                close_line(&mut lines, std::mem::replace(&mut current, token.to_string()));
                current_len = token_len;
            }
        }

        close_line(&mut lines, current);
        lines
    }
}

fn close_line(lines: &mut Vec<String>, mut line: String) {
    let content_len = line.trim_end().len();
    line.truncate(content_len);
    if !line.is_empty() {
        lines.push(line);
    }
}

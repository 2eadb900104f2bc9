//! Sentence and word segmentation tuned for resume text.

use unicode_segmentation::UnicodeSegmentation;

/// A word or punctuation token. Offsets are byte offsets into the owning sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub lower: String,
    pub start: usize,
    pub end: usize,
}

impl Token<'_> {
    pub fn is_wordlike(&self) -> bool {
        self.text.chars().any(char::is_alphanumeric)
    }
}

/// Splits text into sentences. Resume text is line-oriented (headings, bullet
/// lists, skill rows), so every line break also ends a sentence.
pub fn sentences(text: &str) -> Vec<&str> {
    text.lines()
        .flat_map(|line| line.unicode_sentences())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Splits a sentence into tokens, keeping tech-style compounds such as `C++`,
/// `C#`, `CI/CD` and `full-stack` as single tokens.
pub fn tokenize(sentence: &str) -> Vec<Token<'_>> {
    let segments: Vec<(usize, &str)> = sentence
        .split_word_bound_indices()
        .filter(|(_, s)| !s.trim().is_empty())
        .collect();

    let mut tokens = Vec::with_capacity(segments.len());
    let mut i = 0;
    while i < segments.len() {
        let (start, first) = segments[i];
        let mut end = start + first.len();
        i += 1;

        if is_wordlike(first) {
            loop {
                let Some(&(next_start, next)) = segments.get(i) else {
                    break;
                };
                if next_start != end {
                    break;
                }

                if (next == "+" || next == "#") && end - start <= 3 {
                    // C++, C#, F#, g++
                    end = next_start + next.len();
                    i += 1;
                    while let Some(&(s, "+")) = segments.get(i) {
                        if s != end {
                            break;
                        }
                        end += 1;
                        i += 1;
                    }
                    break;
                }

                if next == "-" || next == "/" {
                    let Some(&(after_start, after)) = segments.get(i + 1) else {
                        break;
                    };
                    let adjacent = after_start == next_start + next.len();
                    let joinable = match next {
                        "-" => true,
                        _ => has_uppercase(&sentence[start..end]) || has_uppercase(after),
                    };
                    if adjacent && is_wordlike(after) && joinable {
                        end = after_start + after.len();
                        i += 2;
                        continue;
                    }
                }
                break;
            }
        }

        let text = &sentence[start..end];
        tokens.push(Token {
            text,
            lower: text.to_lowercase(),
            start,
            end,
        });
    }

    tokens
}

fn is_wordlike(s: &str) -> bool {
    s.chars().any(char::is_alphanumeric)
}

fn has_uppercase(s: &str) -> bool {
    s.chars().any(char::is_uppercase)
}

//! Rule-based coarse part-of-speech tagging.
//!
//! Tags come from closed-class word lists first, then suffix and capitalization
//! heuristics. Anything left over is a common noun, which is the right default
//! for the skill lists and headings that make up most of a resume.

use super::lexicon::{
    ADJECTIVES, ADJECTIVE_SUFFIXES, ADVERBS, AUXILIARIES, COMMON_CAPITALIZED, CONJUNCTIONS,
    DETERMINERS, NOUN_EXCEPTIONS, PREPOSITIONS, PRONOUNS, VERBS,
};
use super::tokenize::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Det,
    Pron,
    Prep,
    Conj,
    Aux,
    Adv,
    Verb,
    Adj,
    Noun,
    Propn,
    Num,
    Punct,
}

impl PosTag {
    /// Tags that may sit inside a noun chunk before its head.
    pub fn is_nominal_modifier(self) -> bool {
        matches!(self, PosTag::Adj | PosTag::Noun | PosTag::Propn | PosTag::Num)
    }

    pub fn is_noun(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::Propn)
    }

    /// Tags whose tokens become keyphrase graph vertices.
    pub fn is_rankable(self) -> bool {
        matches!(self, PosTag::Adj | PosTag::Noun | PosTag::Propn)
    }
}

#[derive(Debug, Clone)]
pub struct Tagged<'a> {
    pub token: Token<'a>,
    pub tag: PosTag,
}

/// Tags one sentence worth of tokens.
pub fn tag(tokens: Vec<Token<'_>>) -> Vec<Tagged<'_>> {
    let mut tagged: Vec<Tagged<'_>> = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.into_iter().enumerate() {
        let prev = tagged.last().map(|t| t.tag);
        let tag = tag_token(&token, i == 0, prev);
        tagged.push(Tagged { token, tag });
    }
    tagged
}

fn tag_token(token: &Token<'_>, sentence_start: bool, prev: Option<PosTag>) -> PosTag {
    let text = token.text;
    let lower = token.lower.as_str();

    if !token.is_wordlike() {
        return PosTag::Punct;
    }
    if is_numeric(text) {
        return PosTag::Num;
    }

    let capitalized = text.chars().next().is_some_and(char::is_uppercase);
    if is_tech_shaped(text) || (capitalized && !sentence_start && !is_closed_class(lower)) {
        return PosTag::Propn;
    }

    if DETERMINERS.contains(lower) {
        return PosTag::Det;
    }
    if PRONOUNS.contains(lower) {
        return PosTag::Pron;
    }
    if PREPOSITIONS.contains(lower) {
        return PosTag::Prep;
    }
    if CONJUNCTIONS.contains(lower) {
        return PosTag::Conj;
    }
    if AUXILIARIES.contains(lower) {
        return PosTag::Aux;
    }
    if ADVERBS.contains(lower) || (lower.len() > 4 && lower.ends_with("ly")) {
        return PosTag::Adv;
    }
    if VERBS.contains(lower) {
        return PosTag::Verb;
    }
    if NOUN_EXCEPTIONS.contains(lower) {
        return PosTag::Noun;
    }
    if ADJECTIVES.contains(lower) {
        return PosTag::Adj;
    }
    if lower.len() > 4 && lower.ends_with("ed") {
        return PosTag::Verb;
    }
    if lower.len() > 5
        && lower.ends_with("ing")
        && matches!(prev, Some(PosTag::Aux | PosTag::Pron))
    {
        return PosTag::Verb;
    }
    if has_adjective_suffix(lower) {
        return PosTag::Adj;
    }

    if capitalized && sentence_start && !COMMON_CAPITALIZED.contains(lower) {
        return PosTag::Propn;
    }

    PosTag::Noun
}

fn is_closed_class(lower: &str) -> bool {
    DETERMINERS.contains(lower)
        || PRONOUNS.contains(lower)
        || PREPOSITIONS.contains(lower)
        || CONJUNCTIONS.contains(lower)
        || AUXILIARIES.contains(lower)
}

fn is_numeric(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%' | '+' | '-' | '/'))
}

/// Acronyms (`SQL`, `AWS`), camel case (`JavaScript`), versioned or dotted names
/// (`S3`, `Node.js`) and symbol-suffixed languages (`C++`, `C#`).
pub fn is_tech_shaped(text: &str) -> bool {
    let letters = text.chars().filter(|c| c.is_alphabetic()).count();
    if letters == 0 {
        return false;
    }
    let uppers = text.chars().filter(|c| c.is_uppercase()).count();

    let acronym = letters >= 2 && uppers == letters;
    let camel = text.chars().skip(1).any(char::is_uppercase) && uppers < letters;
    let alnum_mix = text.chars().any(|c| c.is_ascii_digit());
    let symbol = text.ends_with('+') || text.ends_with('#');
    let dotted = text.contains('.') && !text.ends_with('.') && letters > 2;

    acronym || camel || alnum_mix || symbol || dotted
}

fn has_adjective_suffix(lower: &str) -> bool {
    lower.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s))
}

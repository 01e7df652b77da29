//! Local sentence and token segmentation.
//!
//! Sentence boundaries follow Unicode text segmentation (UAX #29). Extracted text
//! wraps long lines, so a single line break is whitespace inside a sentence; only
//! blank lines and page breaks are hard boundaries.

use unicode_segmentation::UnicodeSegmentation;

use super::{Sentence, Token};
use crate::loader::PAGE_SEPARATOR;

/// Characters split out of a word as standalone tokens.
const INFIX_SEPARATORS: &[char] = &['/', ',', ';', '|'];

pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();

    for block in blocks(text) {
        for raw in block.unicode_sentences() {
            push_sentence(&mut sentences, raw);
        }
    }

    sentences
}

/// Splits text at blank lines and page breaks, re-joining wrapped lines with a space.
fn blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();

    for page in text.split(PAGE_SEPARATOR) {
        let mut lines: Vec<&str> = Vec::new();
        for line in page.lines() {
            let line = line.trim();
            if line.is_empty() {
                flush_block(&mut blocks, &mut lines);
            } else {
                lines.push(line);
            }
        }
        flush_block(&mut blocks, &mut lines);
    }

    blocks
}

fn flush_block(blocks: &mut Vec<String>, lines: &mut Vec<&str>) {
    if !lines.is_empty() {
        blocks.push(lines.join(" "));
        lines.clear();
    }
}

fn push_sentence(sentences: &mut Vec<Sentence>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        sentences.push(Sentence {
            text: trimmed.to_string(),
        });
    }
}

pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for word in text.split_whitespace() {
        for piece in split_infixes(word) {
            push_word(&mut tokens, piece);
        }
    }
    tokens
}

/// Splits `python/django` into `python`, `/`, `django`.
fn split_infixes(word: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for (idx, c) in word.char_indices() {
        if INFIX_SEPARATORS.contains(&c) {
            if start < idx {
                pieces.push(&word[start..idx]);
            }
            pieces.push(&word[idx..idx + c.len_utf8()]);
            start = idx + c.len_utf8();
        }
    }
    if start < word.len() {
        pieces.push(&word[start..]);
    }
    pieces
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '+' || c == '#'
}

/// Peels leading and trailing punctuation into their own tokens, keeping inner
/// punctuation (`node.js`, `b.tech`) and `+`/`#` (`c++`, `c#`) attached.
fn push_word(tokens: &mut Vec<Token>, word: &str) {
    let first = word.find(is_word_char);
    let last = word.rfind(is_word_char);

    let (Some(first), Some(last)) = (first, last) else {
        tokens.extend(word.chars().map(|c| Token::new(c.to_string())));
        return;
    };

    let core_end = last + word[last..].chars().next().map_or(1, char::len_utf8);
    tokens.extend(word[..first].chars().map(|c| Token::new(c.to_string())));
    tokens.push(Token::new(&word[first..core_end]));
    tokens.extend(word[core_end..].chars().map(|c| Token::new(c.to_string())));
}

//! Token-stream builders for unit tests.

use unicode_normalization::char::is_combining_mark;

use super::scope::alignment_scope;
use super::token::Token;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_combining_mark(c)
}

/// Unaligned verse: word runs, single spaces, and one token per punctuation mark.
///
/// An apostrophe between two word characters stays inside the word.
pub fn plain(chapter: &str, verse: &str, text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut word = String::new();

    let flush = |word: &mut String, tokens: &mut Vec<Token>| {
        if !word.is_empty() {
            tokens.push(Token::word(word, chapter, verse));
            word.clear();
        }
    };

    for (i, &c) in chars.iter().enumerate() {
        let inner_apostrophe = (c == '’' || c == '\'')
            && !word.is_empty()
            && chars.get(i + 1).is_some_and(|next| is_word_char(*next));
        if is_word_char(c) || inner_apostrophe {
            word.push(c);
            continue;
        }
        flush(&mut word, &mut tokens);
        if c.is_whitespace() {
            if !matches!(tokens.last(), Some(last) if last.payload == " ") {
                tokens.push(Token::space(chapter, verse));
            }
        } else {
            tokens.push(Token::punctuation(&c.to_string(), chapter, verse));
        }
    }
    flush(&mut word, &mut tokens);
    tokens
}

/// Aligned verse built from items such as `both{καὶ:1}` or `cut{וְנִכְרְתָה:1},`.
///
/// Items are separated by single spaces. Each `word:occurrence` pair inside
/// the braces becomes one alignment scope; anything after the closing brace
/// is emitted as punctuation tokens. Items without braces are unaligned words.
pub fn aligned(chapter: &str, verse: &str, text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (i, item) in text.split(' ').filter(|item| !item.is_empty()).enumerate() {
        if i > 0 {
            tokens.push(Token::space(chapter, verse));
        }

        let (payload, scopes, trailing) = match (item.find('{'), item.find('}')) {
            (Some(open), Some(close)) if open < close => {
                let scopes: Vec<String> = item[open + 1..close]
                    .split(';')
                    .filter_map(|pair| {
                        let (word, occurrence) = pair.rsplit_once(':')?;
                        Some(alignment_scope(word, occurrence.parse().ok()?, 1))
                    })
                    .collect();
                (&item[..open], scopes, &item[close + 1..])
            }
            _ => {
                let end = item
                    .char_indices()
                    .rev()
                    .take_while(|(_, c)| !is_word_char(*c))
                    .last()
                    .map_or(item.len(), |(index, _)| index);
                (&item[..end], Vec::new(), &item[end..])
            }
        };

        if !payload.is_empty() {
            tokens.push(Token::word(payload, chapter, verse).with_scopes(scopes));
        }
        for c in trailing.chars() {
            tokens.push(Token::punctuation(&c.to_string(), chapter, verse));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use crate::core::fixtures::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_splits_words_spaces_and_punctuation() {
        let tokens = plain("1", "1", "God’s word, amen.");
        let payloads: Vec<&str> = tokens.iter().map(|t| t.payload.as_str()).collect();
        assert_eq!(payloads, vec!["God’s", " ", "word", ",", " ", "amen", "."]);
    }

    #[test]
    fn test_aligned_attaches_scopes_and_trailing_punctuation() {
        let tokens = aligned("1", "1", "Word{λόγος:1}, and{καὶ:2}");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].payload, "Word");
        assert_eq!(tokens[0].scopes, vec![alignment_scope("λόγος", 1, 1)]);
        assert_eq!(tokens[1].payload, ",");
        assert_eq!(tokens[2].payload, " ");
        assert_eq!(tokens[3].scopes, vec![alignment_scope("καὶ", 2, 1)]);
    }

    #[test]
    fn test_aligned_unbraced_items_are_plain_words() {
        let tokens = aligned("1", "1", "peace.");
        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].scopes.is_empty());
        assert_eq!(tokens[1].payload, ".");
    }
}

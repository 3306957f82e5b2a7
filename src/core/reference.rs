//! Expansion of reference strings such as `1:5,7-9;2:3` into single verses.

use std::fmt;

use super::error::ResolveError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChapterVerse {
    pub chapter: String,
    pub verse: String,
}

impl ChapterVerse {
    pub fn new(chapter: impl Into<String>, verse: impl Into<String>) -> Self {
        Self {
            chapter: chapter.into(),
            verse: verse.into(),
        }
    }
}

impl fmt::Display for ChapterVerse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

/// Expand a reference into its `chapter:verse` list, in reference order.
///
/// Parts are split on `;` then `,`. A part with a `:` sets the chapter for
/// the parts that follow it; `a-b` expands inclusively.
pub fn expand_reference(reference: &str) -> Result<Vec<ChapterVerse>, ResolveError> {
    let trimmed = reference.trim();
    if trimmed.is_empty() {
        return Err(ResolveError::invalid_reference(reference, "empty reference"));
    }

    let mut verses = Vec::new();
    let mut chapter: Option<String> = None;

    for part in trimmed.split(';').flat_map(|part| part.split(',')) {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let verse_part = match part.split_once(':') {
            Some((c, v)) => {
                let c = c.trim();
                if c.is_empty() {
                    return Err(ResolveError::invalid_reference(reference, "missing chapter"));
                }
                chapter = Some(c.to_string());
                v.trim()
            }
            None => part,
        };
        let Some(chapter) = chapter.as_deref() else {
            return Err(ResolveError::invalid_reference(
                reference,
                "verse reference without chapter",
            ));
        };
        if verse_part.contains(':') {
            return Err(ResolveError::invalid_reference(
                reference,
                "ranges across chapters are not supported",
            ));
        }

        match verse_part.split_once('-') {
            Some((start, end)) => {
                let (start, end) = parse_range(reference, start, end)?;
                verses.extend((start..=end).map(|verse| ChapterVerse::new(chapter, verse.to_string())));
            }
            None if verse_part.is_empty() => {
                return Err(ResolveError::invalid_reference(reference, "missing verse"));
            }
            None => verses.push(ChapterVerse::new(chapter, verse_part)),
        }
    }

    if verses.is_empty() {
        return Err(ResolveError::invalid_reference(reference, "no verses"));
    }
    Ok(verses)
}

fn parse_range(reference: &str, start: &str, end: &str) -> Result<(u32, u32), ResolveError> {
    let parse = |value: &str| {
        value.trim().parse::<u32>().map_err(|_| {
            ResolveError::invalid_reference(reference, format!("\"{}\" is not a verse number", value.trim()))
        })
    };
    let (start, end) = (parse(start)?, parse(end)?);
    if start > end {
        return Err(ResolveError::invalid_reference(
            reference,
            format!("range {start}-{end} is reversed"),
        ));
    }
    Ok((start, end))
}

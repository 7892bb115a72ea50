use std::fmt;
use std::str::FromStr;

use nom::Finish;
use regex::{Regex, RegexBuilder};

use super::pattern_literal;
use crate::Error;

/// Regular expression flags, as written after the closing `/` of a literal.
///
/// Only `i`, `m`, `s` and `y` change whether a text matches. The others are
/// accepted so that literals written for a browser compile unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub has_indices: bool,
    pub global: bool,
    pub ignore_case: bool,
    pub multi_line: bool,
    pub dot_all: bool,
    pub unicode: bool,
    pub unicode_sets: bool,
    pub sticky: bool,
}

impl FromStr for Flags {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::default();
        for flag in s.chars() {
            let slot = match flag {
                'd' => &mut flags.has_indices,
                'g' => &mut flags.global,
                'i' => &mut flags.ignore_case,
                'm' => &mut flags.multi_line,
                's' => &mut flags.dot_all,
                'u' => &mut flags.unicode,
                'v' => &mut flags.unicode_sets,
                'y' => &mut flags.sticky,
                _ => return Err(Error::InvalidFlags(s.to_owned())),
            };
            if *slot {
                return Err(Error::InvalidFlags(s.to_owned()));
            }
            *slot = true;
        }
        if flags.unicode && flags.unicode_sets {
            return Err(Error::InvalidFlags(s.to_owned()));
        }
        Ok(flags)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (self.has_indices, 'd'),
            (self.global, 'g'),
            (self.ignore_case, 'i'),
            (self.multi_line, 'm'),
            (self.dot_all, 's'),
            (self.unicode, 'u'),
            (self.unicode_sets, 'v'),
            (self.sticky, 'y'),
        ];
        for (set, flag) in flags {
            if set {
                write!(f, "{flag}")?;
            }
        }
        Ok(())
    }
}

/// A compiled text-matching expression.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    flags: Flags,
    regex: Regex,
}

impl Pattern {
    /// Use `source` as a regular expression without flags, so `"an"` matches
    /// every text containing `an` and `""` matches every text.
    pub fn new(source: impl Into<String>) -> Result<Self, Error> {
        Self::with_flags(source, Flags::default())
    }

    pub fn with_flags(source: impl Into<String>, flags: Flags) -> Result<Self, Error> {
        let source = source.into();
        let regex = RegexBuilder::new(&source)
            .case_insensitive(flags.ignore_case)
            .multi_line(flags.multi_line)
            .dot_matches_new_line(flags.dot_all)
            .build()
            .map_err(|e| Error::InvalidPattern {
                pattern: source.clone(),
                source: e,
            })?;
        Ok(Self {
            source,
            flags,
            regex,
        })
    }

    /// Parse literal notation, `/body/flags`.
    pub fn literal(input: &str) -> Result<Self, Error> {
        let (body, flags) = pattern_literal_parser(input)?;
        Self::with_flags(body, flags.parse()?)
    }

    /// Match texts containing `text` verbatim.
    pub fn substring(text: &str) -> Result<Self, Error> {
        Self::new(regex::escape(text))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn is_match(&self, text: &str) -> bool {
        if self.flags.sticky {
            // leftmost semantics: a match at 0 exists iff the first one starts there
            self.regex.find(text).is_some_and(|m| m.start() == 0)
        } else {
            self.regex.is_match(text)
        }
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.source.is_empty() {
            return write!(f, "/(?:)/{}", self.flags);
        }
        write!(f, "/{}/{}", literal_body(&self.source), self.flags)
    }
}

/// Escape `source` so it reads back as the body of a `/body/flags` literal:
/// `/` outside a character class and line breaks anywhere.
fn literal_body(source: &str) -> String {
    let mut body = String::with_capacity(source.len());
    let mut in_class = false;
    let mut chars = source.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                body.push('\\');
                match chars.next() {
                    Some('\n') => body.push('n'),
                    Some('\r') => body.push('r'),
                    Some(escaped) => body.push(escaped),
                    None => {}
                }
            }
            '\n' => body.push_str("\\n"),
            '\r' => body.push_str("\\r"),
            '/' if !in_class => body.push_str("\\/"),
            '[' if !in_class => {
                in_class = true;
                body.push(c);
            }
            ']' if in_class => {
                in_class = false;
                body.push(c);
            }
            _ => body.push(c),
        }
    }
    body
}

/// main entrance for literal notation: split a `/body/flags` input into its
/// body and flags, failing if anything is left after the flags
pub(crate) fn pattern_literal_parser(input: &str) -> Result<(&str, &str), Error> {
    let (remain, parsed) = pattern_literal(input)
        .map_err(|e| e.to_owned())
        .finish()?;
    if !remain.is_empty() {
        return Err(Error::InvalidLiteral(input.to_owned(), remain.to_owned()));
    }
    Ok(parsed)
}

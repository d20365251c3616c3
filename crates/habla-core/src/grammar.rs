//! Recognition of the `!habla` / `!h` command forms.
//!
//! A fresh message carries the text inline:
//!
//! ```text
//! !h [source] [target] <text...>
//! ```
//!
//! A reply takes its text from the message it answers and only accepts
//! language tokens after the prefix:
//!
//! ```text
//! !h [source] [target]
//! ```
//!
//! With a single token it names the target. With two, the first is the
//! source and `?` may stand in for it.

use habla_config::bot::BotConfig;

use crate::language::{self, UNKNOWN_MARKER};

/// Raw language tokens captured from a command, before resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageHints {
    /// `None` when omitted or given as the unknown marker
    pub source: Option<String>,
    pub target: Option<String>,
}

impl LanguageHints {
    pub fn new(source: Option<&str>, target: Option<&str>) -> Self {
        let clean = |token: Option<&str>| {
            token
                .map(str::trim)
                .filter(|t| !t.is_empty() && *t != UNKNOWN_MARKER)
                .map(str::to_string)
        };

        Self {
            source: clean(source),
            target: clean(target),
        }
    }

    fn from_tokens(tokens: &[Token]) -> Self {
        match tokens {
            [] => Self::default(),
            [Token::Unknown] => Self::default(),
            [Token::Language(target)] => Self {
                source: None,
                target: Some(target.clone()),
            },
            [source, target] => Self {
                source: source.language().map(str::to_string),
                target: target.language().map(str::to_string),
            },
            _ => unreachable!("at most two language tokens are parsed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    NoMatch,
    /// Text to translate is part of the message
    Fresh {
        prefix: &'a str,
        hints: LanguageHints,
        body: &'a str,
    },
    /// Text to translate lives in the referenced message
    Reply {
        prefix: &'a str,
        hints: LanguageHints,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Unknown,
    Language(String),
}

impl Token {
    fn language(&self) -> Option<&str> {
        match self {
            Token::Unknown => None,
            Token::Language(name) => Some(name),
        }
    }
}

/// A whitespace delimited word and the byte offset just past it
#[derive(Debug, Clone, Copy)]
struct Word<'a> {
    text: &'a str,
    end: usize,
}

/// Whether unknown words may be taken as language tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Unknown words start the body
    KnownOnly,
    /// Nothing else can follow, so any word is a language token
    PassThrough,
}

#[derive(Debug, Clone)]
pub struct CommandGrammar {
    /// Longest first so `!habla` isn't read as `!h` + `abla`
    prefixes: Vec<String>,
}

impl CommandGrammar {
    pub fn new(prefix: impl Into<String>, short_prefix: impl Into<String>) -> Self {
        let mut prefixes: Vec<String> = [prefix.into(), short_prefix.into()]
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();
        prefixes.sort_by_key(|p| std::cmp::Reverse(p.len()));
        prefixes.dedup();

        Self { prefixes }
    }

    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(config.prefix.clone(), config.short_prefix.clone())
    }

    pub fn classify<'a>(&self, content: &'a str, is_reply: bool) -> Command<'a> {
        let Some((prefix, rest)) = self.split_prefix(content) else {
            return Command::NoMatch;
        };

        if is_reply {
            parse_reply(rest)
                .map(|hints| Command::Reply { prefix, hints })
                .unwrap_or(Command::NoMatch)
        } else {
            parse_fresh(rest)
                .map(|(hints, body)| Command::Fresh {
                    prefix,
                    hints,
                    body,
                })
                .unwrap_or(Command::NoMatch)
        }
    }

    /// `!h help`
    pub fn is_help(&self, content: &str) -> bool {
        self.split_prefix(content)
            .is_some_and(|(_, rest)| rest.trim() == "help")
    }

    /// Anything that starts with one of the prefixes
    pub fn is_bot_command(&self, content: &str) -> bool {
        self.split_prefix(content).is_some()
    }

    pub fn prefix(&self) -> &str {
        self.prefixes.first().map(String::as_str).unwrap_or_default()
    }

    pub fn short_prefix(&self) -> &str {
        self.prefixes.last().map(String::as_str).unwrap_or_default()
    }

    /// Prefix must be followed by whitespace or the end of the message
    fn split_prefix<'a>(&self, content: &'a str) -> Option<(&'a str, &'a str)> {
        self.prefixes.iter().find_map(|prefix| {
            let rest = content.strip_prefix(prefix.as_str())?;
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                Some((&content[..prefix.len()], rest))
            } else {
                None
            }
        })
    }
}

fn parse_fresh(rest: &str) -> Option<(LanguageHints, &str)> {
    // Language tokens only ever sit on the command line itself
    let line_end = rest.find('\n').unwrap_or(rest.len());
    let words = split_words(&rest[..line_end]);

    // Give tokens back to the body, last one first, until there is text left
    (0..=2).rev().find_map(|limit| {
        let (tokens, consumed) = parse_tokens(&words, Mode::KnownOnly, limit);
        if tokens.len() < limit {
            return None;
        }

        let body_start = match consumed {
            0 => 0,
            n => words[n - 1].end,
        };
        let body = rest[body_start..].trim_start();
        (!body.is_empty()).then(|| (LanguageHints::from_tokens(&tokens), body))
    })
}

fn parse_reply(rest: &str) -> Option<LanguageHints> {
    let words = split_words(rest);
    let (tokens, consumed) = parse_tokens(&words, Mode::PassThrough, 2);
    if consumed != words.len() {
        return None;
    }

    // `?` only makes sense as the source
    if tokens.len() == 2 && tokens[1] == Token::Unknown {
        return None;
    }

    Some(LanguageHints::from_tokens(&tokens))
}

/// Reads up to `limit` language tokens, returning them and the number of words used
fn parse_tokens(words: &[Word<'_>], mode: Mode, limit: usize) -> (Vec<Token>, usize) {
    let mut tokens = Vec::with_capacity(limit);
    let mut index = 0;

    while tokens.len() < limit && index < words.len() {
        if words[index].text == UNKNOWN_MARKER {
            if !tokens.is_empty() && mode == Mode::KnownOnly {
                break;
            }
            tokens.push(Token::Unknown);
            index += 1;
            continue;
        }

        match language_token(&words[index..], mode) {
            Some((name, used)) => {
                tokens.push(Token::Language(name));
                index += used;
            }
            None => break,
        }
    }

    (tokens, index)
}

/// Longest known name first, then a single word
fn language_token(words: &[Word<'_>], mode: Mode) -> Option<(String, usize)> {
    for len in (2..=language::max_name_words().min(words.len())).rev() {
        let phrase = words[..len]
            .iter()
            .map(|w| w.text)
            .collect::<Vec<_>>()
            .join(" ");
        if language::is_known(&phrase) {
            return Some((phrase, len));
        }
    }

    let word = words.first()?;
    if word.text == UNKNOWN_MARKER {
        return None;
    }
    match mode {
        Mode::PassThrough => Some((word.text.to_string(), 1)),
        Mode::KnownOnly if language::is_known(word.text) => Some((word.text.to_string(), 1)),
        Mode::KnownOnly => None,
    }
}

fn split_words(text: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                words.push(Word {
                    text: &text[s..i],
                    end: i,
                });
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push(Word {
            text: &text[s..],
            end: text.len(),
        });
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar() -> CommandGrammar {
        CommandGrammar::new("!habla", "!h")
    }

    fn fresh(content: &str) -> (Option<String>, Option<String>, String) {
        match grammar().classify(content, false) {
            Command::Fresh { hints, body, .. } => (hints.source, hints.target, body.to_string()),
            other => panic!("expected fresh request for {content:?}, got {other:?}"),
        }
    }

    fn reply(content: &str) -> (Option<String>, Option<String>) {
        match grammar().classify(content, true) {
            Command::Reply { hints, .. } => (hints.source, hints.target),
            other => panic!("expected reply request for {content:?}, got {other:?}"),
        }
    }

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_fresh_with_source_and_target() {
        assert_eq!(
            fresh("!h en fr pls translate this"),
            (some("en"), some("fr"), "pls translate this".to_string())
        );
    }

    #[test]
    fn test_fresh_with_unknown_source() {
        assert_eq!(
            fresh("!h ? fr pls translate this"),
            (None, some("fr"), "pls translate this".to_string())
        );
    }

    #[test]
    fn test_fresh_without_languages() {
        assert_eq!(
            fresh("!h some text"),
            (None, None, "some text".to_string())
        );
    }

    #[test]
    fn test_fresh_with_target_only() {
        assert_eq!(
            fresh("!h fr some text"),
            (None, some("fr"), "some text".to_string())
        );
    }

    #[test]
    fn test_fresh_with_unknown_marker_alone() {
        assert_eq!(fresh("!h ? Bonjour"), (None, None, "Bonjour".to_string()));
    }

    #[test]
    fn test_fresh_two_word_language_names() {
        assert_eq!(
            fresh("!h brazilian portuguese english Olá amigo"),
            (some("brazilian portuguese"), some("english"), "Olá amigo".to_string())
        );
        assert_eq!(
            fresh("!h english scottish gaelic good morning"),
            (some("english"), some("scottish gaelic"), "good morning".to_string())
        );
    }

    #[test]
    fn test_fresh_long_language_names() {
        assert_eq!(
            fresh("!habla english french pls translate this"),
            (some("english"), some("french"), "pls translate this".to_string())
        );
    }

    #[test]
    fn test_fresh_keeps_multiline_body_verbatim() {
        assert_eq!(
            fresh("!h en fr\npls translate this\nand this\nand this"),
            (
                some("en"),
                some("fr"),
                "pls translate this\nand this\nand this".to_string()
            )
        );
    }

    #[test]
    fn test_fresh_does_not_take_languages_from_later_lines() {
        assert_eq!(
            fresh("!h\nfr en"),
            (None, None, "fr en".to_string())
        );
    }

    #[test]
    fn test_fresh_rejects_missing_body() {
        let grammar = grammar();
        assert_eq!(grammar.classify("!h", false), Command::NoMatch);
        assert_eq!(grammar.classify("!h   ", false), Command::NoMatch);
        assert_eq!(grammar.classify("!h \n  ", false), Command::NoMatch);
    }

    #[test]
    fn test_fresh_body_that_is_a_language_word_stays_body() {
        assert_eq!(fresh("!h es hi"), (None, some("es"), "hi".to_string()));
        assert_eq!(fresh("!h en no"), (None, some("en"), "no".to_string()));
        assert_eq!(fresh("!h german it"), (None, some("german"), "it".to_string()));
        assert_eq!(fresh("!h fr en hi"), (some("fr"), some("en"), "hi".to_string()));
    }

    #[test]
    fn test_fresh_body_that_is_a_two_word_name_stays_body() {
        assert_eq!(
            fresh("!h english scottish gaelic"),
            (None, some("english"), "scottish gaelic".to_string())
        );
        assert_eq!(
            fresh("!h fr scottish gaelic"),
            (None, some("fr"), "scottish gaelic".to_string())
        );
        assert_eq!(
            fresh("!h scottish gaelic"),
            (None, None, "scottish gaelic".to_string())
        );
    }

    #[test]
    fn test_fresh_lone_language_word_is_the_body() {
        assert_eq!(fresh("!h en"), (None, None, "en".to_string()));
        assert_eq!(fresh("!h en fr"), (None, some("en"), "fr".to_string()));
        assert_eq!(fresh("!h en\nfr"), (None, some("en"), "fr".to_string()));
    }

    #[test]
    fn test_fresh_three_word_language_name() {
        assert_eq!(
            fresh("!h old church slavonic en hello"),
            (some("old church slavonic"), some("en"), "hello".to_string())
        );
        assert_eq!(
            fresh("!h old church slavonic hello"),
            (None, some("old church slavonic"), "hello".to_string())
        );
    }

    #[test]
    fn test_prefix_must_stand_alone() {
        let grammar = grammar();
        assert_eq!(grammar.classify("!hello world", false), Command::NoMatch);
        assert_eq!(grammar.classify("hello !h fr world", false), Command::NoMatch);
        assert_eq!(grammar.classify("!H fr world", false), Command::NoMatch);
    }

    #[test]
    fn test_captures_the_prefix_used() {
        let grammar = grammar();
        match grammar.classify("!habla fr Hello", false) {
            Command::Fresh { prefix, .. } => assert_eq!(prefix, "!habla"),
            other => panic!("unexpected {other:?}"),
        }
        match grammar.classify("!h", true) {
            Command::Reply { prefix, .. } => assert_eq!(prefix, "!h"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_reply_forms() {
        assert_eq!(reply("!h"), (None, None));
        assert_eq!(reply("!h fr"), (None, some("fr")));
        assert_eq!(reply("!h ?"), (None, None));
        assert_eq!(reply("!h en fr"), (some("en"), some("fr")));
        assert_eq!(reply("!h ? fr"), (None, some("fr")));
        assert_eq!(reply("!habla english french"), (some("english"), some("french")));
        assert_eq!(reply("!h fr  \n"), (None, some("fr")));
    }

    #[test]
    fn test_reply_passes_unknown_tokens_through() {
        assert_eq!(reply("!h klingon"), (None, some("klingon")));
    }

    #[test]
    fn test_reply_two_word_names() {
        assert_eq!(reply("!h brazilian portuguese"), (None, some("brazilian portuguese")));
        assert_eq!(
            reply("!h brazilian portuguese english"),
            (some("brazilian portuguese"), some("english"))
        );
    }

    #[test]
    fn test_reply_rejects_trailing_text() {
        let grammar = grammar();
        assert_eq!(grammar.classify("!h en fr please", true), Command::NoMatch);
        assert_eq!(grammar.classify("!h en ?", true), Command::NoMatch);
    }

    #[test]
    fn test_help_and_bot_command() {
        let grammar = grammar();
        assert!(grammar.is_help("!h help"));
        assert!(grammar.is_help("!habla help "));
        assert!(!grammar.is_help("!h help me"));
        assert!(grammar.is_bot_command("!h"));
        assert!(grammar.is_bot_command("!habla whatever"));
        assert!(!grammar.is_bot_command("!hey"));
    }
}

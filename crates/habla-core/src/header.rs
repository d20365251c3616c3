const HEADER_OPEN: &str = "_(Translated from ";
const HEADER_SEPARATOR: &str = " to ";
const HEADER_CLOSE: &str = ")_:\n\n";

/// Line the bot puts in front of every translation it posts
pub fn render(from: &str, to: &str) -> String {
    format!("{HEADER_OPEN}{from}{HEADER_SEPARATOR}{to}{HEADER_CLOSE}")
}

/// Drops one leading translation header, if there is one
pub fn strip(content: &str) -> &str {
    parse(content).map_or(content, |(_, _, rest)| rest)
}

/// Splits a header off `content` into `(from, to, rest)`
pub fn parse(content: &str) -> Option<(&str, &str, &str)> {
    let inner = content.strip_prefix(HEADER_OPEN)?;
    let close = inner.find(HEADER_CLOSE)?;
    let (names, rest) = (&inner[..close], &inner[close + HEADER_CLOSE.len()..]);

    let (from, to) = names.split_once(HEADER_SEPARATOR)?;
    if is_language_name(from) && is_language_name(to) {
        Some((from, to, rest))
    } else {
        None
    }
}

/// One or more words separated by single spaces
fn is_language_name(name: &str) -> bool {
    !name.is_empty()
        && name.split(' ').all(|word| {
            !word.is_empty()
                && word
                    .chars()
                    .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '\''))
        })
}

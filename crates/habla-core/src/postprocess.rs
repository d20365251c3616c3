/// Undoes the space translation providers insert into user mentions.
///
/// `<@! 123>` becomes `<@!123>` and `<@ 123>` becomes `<@123>`; any other
/// spacing is left alone.
pub fn repair_mentions(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut repaired = String::with_capacity(text.len());
    let mut copied = 0;
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find("<@") {
        let start = cursor + found;
        let mut sigil_end = start + 2;
        if bytes.get(sigil_end) == Some(&b'!') {
            sigil_end += 1;
        }

        if bytes.get(sigil_end) == Some(&b' ') {
            let digits_start = sigil_end + 1;
            let digits = bytes[digits_start..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();

            if digits > 0 && bytes.get(digits_start + digits) == Some(&b'>') {
                repaired.push_str(&text[copied..sigil_end]);
                copied = digits_start;
                cursor = digits_start + digits + 1;
                continue;
            }
        }

        cursor = start + 2;
    }

    repaired.push_str(&text[copied..]);
    repaired
}

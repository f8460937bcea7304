use crate::sprite::Attribute;

const DELIMITER: char = '=';

/// Splits `data` into lines, each keeping its terminator.
pub fn lines(data: &str) -> impl Iterator<Item = &str> {
    data.split_inclusive('\n')
}

/// Parses one line of a sprite file.
///
/// Only the first `=` separates the key from the value. The key is kept
/// verbatim and the value loses exactly one trailing character: its line
/// terminator (`\r\n` counts as one), or on an unterminated last line its
/// final character, as the legacy converter's fixed slice did.
/// Lines without a delimiter (blank lines, comments, `[section]` headers)
/// yield `None`.
pub fn parse_line(line: &str) -> Option<Attribute<'_>> {
    let (key, value) = line.split_once(DELIMITER)?;
    Some(Attribute::new(key, strip_terminator(value)))
}

fn strip_terminator(value: &str) -> &str {
    if let Some(value) = value.strip_suffix("\r\n") {
        return value;
    }
    let mut chars = value.chars();
    chars.next_back();
    chars.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(line: &str) -> Option<(&str, &str)> {
        parse_line(line).map(|a| (a.key, a.value))
    }

    #[test]
    fn simple_pair() {
        assert_eq!(pair("name=Hero\n"), Some(("name", "Hero")));
    }

    #[test]
    fn no_delimiter() {
        assert_eq!(pair("# comment\n"), None);
        assert_eq!(pair("[Sprite]\n"), None);
        assert_eq!(pair("\n"), None);
        assert_eq!(pair(""), None);
    }

    /// Only the first `=` is the delimiter.
    #[test]
    fn extra_delimiters_stay_in_value() {
        assert_eq!(pair("a=b=c\n"), Some(("a", "b=c")));
    }

    #[test]
    fn empty_key_and_value() {
        assert_eq!(pair("=\n"), Some(("", "")));
        assert_eq!(pair("key=\n"), Some(("key", "")));
    }

    #[test]
    fn whitespace_is_preserved() {
        assert_eq!(pair("  key = value \n"), Some(("  key ", " value ")));
        assert_eq!(pair("key=value\t\n"), Some(("key", "value\t")));
    }

    #[test]
    fn terminators() {
        assert_eq!(pair("key=value\r\n"), Some(("key", "value")));
        // only one terminator goes
        assert_eq!(pair("key=value\n\n"), Some(("key", "value\n")));
        // unterminated last line still loses its final character
        assert_eq!(pair("key=value"), Some(("key", "valu")));
        assert_eq!(pair("Delay0000=0.5"), Some(("Delay0000", "0.")));
        assert_eq!(pair("key="), Some(("key", "")));
        assert_eq!(pair("name=é"), Some(("name", "")));
    }

    #[test]
    fn lines_keep_terminators() {
        let got: Vec<_> = lines("a=1\nb=2\r\nc=3").collect();
        assert_eq!(got, ["a=1\n", "b=2\r\n", "c=3"]);
        assert_eq!(lines("").count(), 0);
    }
}

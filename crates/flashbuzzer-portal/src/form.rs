//! `application/x-www-form-urlencoded` decoding.

use alloc::string::String;
use alloc::vec::Vec;

/// Decoded form arguments in the order they were sent.
pub type FormArgs = Vec<(String, String)>;

/// Decode an urlencoded string into `(name, value)` pairs and append them to `args`.
///
/// Empty segments are skipped; a segment without `=` has an empty value.
pub fn parse_into(input: &str, args: &mut FormArgs) {
    for pair in input.split('&').filter(|pair| !pair.is_empty()) {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        args.push((decode_component(name), decode_component(value)));
    }
}

/// Decode an urlencoded string into `(name, value)` pairs.
pub fn parse(input: &str) -> FormArgs {
    let mut args = FormArgs::new();
    parse_into(input, &mut args);
    args
}

/// Decode `+` and `%XX` escapes.
///
/// Malformed escapes are kept literally and invalid UTF-8 is replaced.
pub fn decode_component(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => match (hex(bytes.get(i + 1)), hex(bytes.get(i + 2))) {
                (Some(hi), Some(lo)) => {
                    out.push((hi << 4) | lo);
                    i += 2;
                }
                _ => out.push(b'%'),
            },
            byte => out.push(byte),
        }
        i += 1;
    }
    String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

fn hex(byte: Option<&u8>) -> Option<u8> {
    let byte = *byte?;
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_escapes() {
        assert_eq!(decode_component("Hall+way%21"), "Hall way!");
        assert_eq!(decode_component("%E2%9C%93"), "\u{2713}");
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
    }

    #[test]
    fn splits_pairs() {
        let args = parse("Color_Red=10&&Title=&flag");
        assert_eq!(
            args,
            [
                ("Color_Red".into(), "10".into()),
                ("Title".into(), String::new()),
                ("flag".into(), String::new()),
            ]
        );
    }
}

// Evcodegen Definition Scanner
// Extracts `#define NAME VALUE` integer constants from header text

use std::io::{self, BufRead};
use std::sync::OnceLock;

use regex::Regex;

/// A single integer constant recognized in header text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub value: u32,
}

impl Definition {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

const DEFINE_KEYWORD: &str = "#define";

fn define_pattern() -> &'static Regex {
    static DEFINE: OnceLock<Regex> = OnceLock::new();
    DEFINE.get_or_init(|| {
        Regex::new(r"^#define\s+(\w+)\s+(\w+)").expect("define pattern is a valid regex")
    })
}

/// Parse one header line into a definition.
///
/// Returns `None` for anything that is not `#define <NAME> <INTEGER>`,
/// including macros whose value is an expression or another macro name.
///
/// # Examples
/// ```
/// use evcodegen_core::scanner::parse_define;
/// let def = parse_define("#define KEY_A\t\t\t30").unwrap();
/// assert_eq!(def.name, "KEY_A");
/// assert_eq!(def.value, 30);
/// assert!(parse_define("#define KEY_CNT (KEY_MAX+1)").is_none());
/// ```
pub fn parse_define(line: &str) -> Option<Definition> {
    if !line.starts_with(DEFINE_KEYWORD) {
        return None;
    }

    let caps = define_pattern().captures(line)?;
    let value = parse_int_literal(&caps[2])?;
    Some(Definition::new(&caps[1], value))
}

/// Parse a C integer literal token, detecting the radix from its prefix.
///
/// `0x` is hex, `0b` binary, `0o` or a bare leading `0` octal, anything else
/// decimal. Suffixes (`U`, `L`) and values wider than `u32` are rejected.
pub fn parse_int_literal(token: &str) -> Option<u32> {
    let (digits, radix) = match token.as_bytes() {
        [b'0', b'x' | b'X', ..] => (&token[2..], 16),
        [b'0', b'b' | b'B', ..] => (&token[2..], 2),
        [b'0', b'o' | b'O', ..] => (&token[2..], 8),
        [b'0', _, ..] => (&token[1..], 8),
        _ => (token, 10),
    };

    // from_str_radix tolerates a leading sign, a literal never carries one
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }

    u32::from_str_radix(digits, radix).ok()
}

/// Lazily scan a reader for definitions.
///
/// Lines that are not integer definitions are skipped; the only items that
/// can be `Err` are read failures from the underlying reader.
pub fn definitions<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<Definition>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) => parse_define(&line).map(Ok),
        Err(e) => Some(Err(e)),
    })
}

//! Escaping for TeamCity service message values.
//!
//! TeamCity uses `|` as its escape character. Quotes, brackets and the pipe
//! itself are prefixed with `|`; line breaks are written as `|n` and `|r`.
//!
//! See <https://www.jetbrains.com/help/teamcity/service-messages.html#Escaped+Values>

/// Escape a string for use as a service message value.
///
/// Already escaped text is escaped again; TeamCity unescapes exactly once.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("|n"),
            '\r' => out.push_str("|r"),
            '\'' | '[' | ']' | '|' => {
                out.push('|');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

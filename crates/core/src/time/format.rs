//! Token-substitution rendering for [`FlexTime`](super::FlexTime)
//!
//! | Token | Output |
//! |-------|--------|
//! | `HH` | 24-hour hour, zero padded (`00`–`23`) |
//! | `hh` | 12-hour hour, unpadded (`1`–`12`) |
//! | `mm` / `MM` | minutes, zero padded |
//! | `TT` / `tt` | `AM`/`PM`, `am`/`pm` |
//! | `T` / `t` | `A`/`P`, `a`/`p` |
//!
//! Each token replaces only its first occurrence, and tokens are applied in
//! the order listed, each over the output of the previous substitution.

/// Format used by `Display`
pub const DEFAULT_FORMAT: &str = "hh:mm tt";

/// Render `hour:minute` through `fmt`
pub(crate) fn render(hour: u32, minute: u32, fmt: &str) -> String {
    let is_am = hour < 12;
    let twelve_hour = match hour % 12 {
        0 => 12,
        h => h,
    };

    let result = fmt.replacen("HH", &format!("{hour:02}"), 1);
    let result = result.replacen("hh", &twelve_hour.to_string(), 1);
    let result = replace_first_ignore_ascii_case(&result, "mm", &format!("{minute:02}"));
    let result = result.replacen("TT", if is_am { "AM" } else { "PM" }, 1);
    let result = result.replacen("tt", if is_am { "am" } else { "pm" }, 1);
    let result = result.replacen('T', if is_am { "A" } else { "P" }, 1);
    result.replacen('t', if is_am { "a" } else { "p" }, 1)
}

fn replace_first_ignore_ascii_case(haystack: &str, needle: &str, replacement: &str) -> String {
    let found = haystack
        .char_indices()
        .map(|(i, _)| i)
        .find(|&i| haystack.get(i..i + needle.len()).is_some_and(|s| s.eq_ignore_ascii_case(needle)));

    match found {
        Some(i) => {
            let mut out = String::with_capacity(haystack.len() + replacement.len());
            out.push_str(&haystack[..i]);
            out.push_str(replacement);
            out.push_str(&haystack[i + needle.len()..]);
            out
        }
        None => haystack.to_string(),
    }
}

//! Small utility helpers used across modules.

/// True if the string is non-empty and made only of ASCII decimal digits.
pub fn is_ascii_digits(s: &str) -> bool {
  !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Length of the leading run of ASCII digits, in bytes.
pub fn leading_digits(s: &str) -> usize {
  s.bytes().take_while(|b| b.is_ascii_digit()).count()
}

/// Log-safe truncation for untrusted inputs.
/// Cuts on a char boundary so CJK input never panics.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut end = max;
  while !s.is_char_boundary(end) {
    end -= 1;
  }
  format!("{}… ({} bytes total)", &s[..end], s.len())
}

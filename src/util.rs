//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
/// This is intentionally simple (no nested/conditional logic).
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request/response payloads.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    s.to_string()
  } else {
    let mut end = max;
    while !s.is_char_boundary(end) {
      end -= 1;
    }
    format!("{}… ({} bytes total)", &s[..end], s.len())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn template_fills_all_occurrences() {
    let out = fill_template("{lang} and {lang} at {level}", &[("lang", "js"), ("level", "easy")]);
    assert_eq!(out, "js and js at easy");
  }

  #[test]
  fn truncation_respects_char_boundaries() {
    let t = trunc_for_log("héllo wörld", 3);
    assert!(t.starts_with("hé") || t.starts_with("h"));
    assert!(t.contains("bytes total"));
  }
}

/* src/server/engine/rust/src/escape.rs */

use std::fmt::Write as _;

/// Make serialized JSON safe to embed in an inline `<script>` element.
///
/// Walks the JSON text tracking whether the current position is inside a
/// JSON string (handling `\"` and `\\` correctly). Inside strings, `<`, `>`
/// and `&` become `\u003c`-style escapes so `</script>` can never close the
/// element early, and non-ASCII codepoints are written as `\uXXXX`
/// (surrogate pairs outside the BMP).
pub fn script_safe_json(json: &str) -> String {
  let mut out = String::with_capacity(json.len());
  let mut in_string = false;
  let mut chars = json.chars();

  while let Some(ch) = chars.next() {
    if !in_string {
      if ch == '"' {
        in_string = true;
      }
      out.push(ch);
      continue;
    }
    match ch {
      '\\' => {
        out.push(ch);
        if let Some(next) = chars.next() {
          out.push(next);
        }
      }
      '"' => {
        in_string = false;
        out.push(ch);
      }
      '<' | '>' | '&' => push_unit(&mut out, ch as u32),
      c if c as u32 > 0x7F => {
        let code = c as u32;
        if code > 0xFFFF {
          let adjusted = code - 0x1_0000;
          push_unit(&mut out, (adjusted >> 10) + 0xD800);
          push_unit(&mut out, (adjusted & 0x3FF) + 0xDC00);
        } else {
          push_unit(&mut out, code);
        }
      }
      c => out.push(c),
    }
  }
  out
}

fn push_unit(out: &mut String, unit: u32) {
  let _ = write!(out, "\\u{unit:04x}");
}

use crate::check::CheckResult;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io;
use std::io::Write;

const INDENT: &[u8] = b"    ";

/// Writes a [`CheckResult`] as a JSON object, followed by a newline.
///
/// The object is pretty-printed with a 4-space indent, with one boolean field per selector, in sorted order:
///
/// ```
/// use htmlcheck::check::check_html;
/// use htmlcheck::output::write_json;
///
/// let result = check_html("<html><h1>Hi</h1></html>", &["h2", "h1"]).unwrap();
/// let mut out = Vec::new();
/// write_json(&result, &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "{\n    \"h1\": true,\n    \"h2\": false\n}\n");
/// ```
pub fn write_json<W: Write>(result: &CheckResult, out: &mut W) -> io::Result<()> {
    let mut serializer = serde_json::Serializer::with_formatter(&mut *out, PrettyFormatter::with_indent(INDENT));
    result.serialize(&mut serializer)?;
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::check_html;
    use crate::util::utils_for_test::*;

    fn to_string(result: &CheckResult) -> String {
        let mut out = Vec::new();
        unwrap!(write_json(result, &mut out), Ok(()));
        String::from_utf8(out).expect("not utf8")
    }

    #[test]
    fn empty() {
        assert_eq!(to_string(&CheckResult::default()), "{}\n");
    }

    #[test]
    fn four_space_indent() {
        let result = check_html(r#"<div id="footer"></div>"#, &["div#footer"]).expect("valid selectors");
        assert_eq!(
            to_string(&result),
            indoc::indoc! {r#"
                {
                    "div#footer": true
                }
            "#}
        );
    }

    #[test]
    fn selectors_are_escaped() {
        let result = check_html(r#"<input type="text">"#, &[r#"input[type="text"]"#]).expect("valid selectors");
        assert_eq!(to_string(&result), "{\n    \"input[type=\\\"text\\\"]\": true\n}\n");
    }
}

/// Return the JSON payload of a JSONP response such as `callback({...});`.
///
/// Plain JSON bodies are returned unchanged.
pub fn strip_padding(body: &str) -> &str {
    let trimmed = body.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return trimmed;
    }

    let open = match trimmed.find('(') {
        Some(open) => open,
        None => return trimmed,
    };

    // The callback name must be a JavaScript identifier path, e.g. `jQuery1_2` or `a.b`.
    let callback = trimmed[..open].trim_end();
    if callback.is_empty()
        || !callback
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '.')
    {
        return trimmed;
    }

    let rest = trimmed.trim_end_matches(';').trim_end();
    match rest.strip_suffix(')') {
        Some(inner) if inner.len() > open => inner[open + 1..].trim(),
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_json_is_untouched() {
        assert_eq!(strip_padding(r#" {"data": {}} "#), r#"{"data": {}}"#);
    }

    #[test]
    fn callback_wrapper_is_removed() {
        assert_eq!(
            strip_padding(r#"jQuery2140_1500({"meta": {}, "data": {}});"#),
            r#"{"meta": {}, "data": {}}"#
        );
        assert_eq!(strip_padding("cb ( {\"a\":1} )\n"), "{\"a\":1}");
    }

    #[test]
    fn non_jsonp_text_is_returned_as_is() {
        assert_eq!(strip_padding("Not found"), "Not found");
        assert_eq!(strip_padding("<html>(x)</html>"), "<html>(x)</html>");
    }
}

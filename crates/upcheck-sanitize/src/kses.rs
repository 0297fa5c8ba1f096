use ego_tree::NodeRef;
use scraper::{Html, Node};

use crate::policy::AllowList;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "source", "wbr"];

/// Reduce an untrusted HTML fragment to the given allow-list.
///
/// Tags outside the list are dropped while their text content is kept, so
/// `<script>alert(1)</script>` becomes `alert(1)`. Listed tags keep only
/// their listed attributes. Comments and doctypes are removed, and text is
/// entity-escaped on the way out, which makes the whole transform
/// idempotent: sanitizing already-sanitized output is a no-op.
#[must_use]
pub fn sanitize(html: &str, allowed: &AllowList) -> String {
    if html.is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(html);
    let mut out = String::with_capacity(html.len());
    write_children(fragment.tree.root(), allowed, &mut out);
    out
}

fn write_children(node: NodeRef<'_, Node>, allowed: &AllowList, out: &mut String) {
    for child in node.children() {
        write_node(child, allowed, out);
    }
}

fn write_node(node: NodeRef<'_, Node>, allowed: &AllowList, out: &mut String) {
    match node.value() {
        Node::Text(text) => escape_text(&text.text, out),
        Node::Element(element) => {
            let name = element.name();
            if !allowed.allows_tag(name) {
                // Unlisted tag: drop it, keep its content. The fragment
                // parser's synthetic <html> wrapper lands here too.
                write_children(node, allowed, out);
                return;
            }

            out.push('<');
            out.push_str(name);
            for (attribute, value) in element.attrs() {
                if allowed.allows_attribute(name, attribute) {
                    out.push(' ');
                    out.push_str(attribute);
                    out.push_str("=\"");
                    escape_attribute(value, out);
                    out.push('"');
                }
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&name) {
                return;
            }

            write_children(node, allowed, out);
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        // Comments, doctypes, and processing instructions are stripped.
        _ => {}
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
}

fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::changelog_allow_list;

    #[test]
    fn plain_text_passes_through() {
        let allowed = changelog_allow_list();

        assert_eq!(sanitize("Download description", &allowed), "Download description");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(sanitize("", &changelog_allow_list()), "");
    }

    #[test]
    fn script_tags_are_stripped_but_content_survives() {
        let allowed = changelog_allow_list();
        let input = r#"<p>Hello world!</p><script>alert("ha!");</script>"#;

        assert_eq!(
            sanitize(input, &allowed),
            r#"<p>Hello world!</p>alert("ha!");"#
        );
    }

    #[test]
    fn listed_attributes_are_kept_in_document_order() {
        let allowed = changelog_allow_list();
        let input = r#"<a href="https://example.com/" title="Example">link</a>"#;

        assert_eq!(
            sanitize(input, &allowed),
            r#"<a href="https://example.com/" title="Example">link</a>"#
        );
    }

    #[test]
    fn unlisted_attributes_are_dropped() {
        let allowed = changelog_allow_list();
        let input = r#"<a href="/x" onclick="evil()">link</a>"#;

        assert_eq!(sanitize(input, &allowed), r#"<a href="/x">link</a>"#);
    }

    #[test]
    fn void_elements_serialize_without_closing_tag() {
        let allowed = changelog_allow_list();

        assert_eq!(
            sanitize(r#"<img src="/shot.png" alt="shot">"#, &allowed),
            r#"<img src="/shot.png" alt="shot">"#
        );
    }

    #[test]
    fn comments_are_removed() {
        let allowed = changelog_allow_list();

        assert_eq!(sanitize("before<!-- hidden -->after", &allowed), "beforeafter");
    }

    #[test]
    fn text_is_entity_escaped() {
        let allowed = changelog_allow_list();

        assert_eq!(sanitize("a & b", &allowed), "a &amp; b");
        assert_eq!(sanitize("1 < 2", &allowed), "1 &lt; 2");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let allowed = changelog_allow_list();
        let inputs = [
            "Download description",
            r#"<p>Hello world!</p><script>alert("ha!");</script>"#,
            "a & b < c",
            r#"<div class="note"><em>new</em> in 2.1</div>"#,
        ];

        for input in inputs {
            let once = sanitize(input, &allowed);
            let twice = sanitize(&once, &allowed);
            assert_eq!(once, twice, "sanitize not idempotent for {input:?}");
        }
    }

    #[test]
    fn nested_disallowed_tags_keep_allowed_children() {
        let allowed = changelog_allow_list();
        let input = "<section><p>kept</p></section>";

        assert_eq!(sanitize(input, &allowed), "<p>kept</p>");
    }

    #[test]
    fn empty_allow_list_strips_everything_but_text() {
        let input = r#"<p>Hello <strong>world</strong></p>"#;

        assert_eq!(sanitize(input, &AllowList::new()), "Hello world");
    }
}

/// Tags that delimit a block of their own and must not be wrapped in `<p>`.
const BLOCK_TAGS: &[&str] = &[
    "address", "blockquote", "dd", "div", "dl", "dt", "fieldset", "figure", "h1", "h2", "h3",
    "h4", "h5", "h6", "hr", "li", "ol", "p", "pre", "table", "tbody", "td", "tfoot", "th",
    "thead", "tr", "ul",
];

/// Wrap bare text blocks in paragraph tags.
///
/// Fixed, deterministic transform: line endings are normalized, block-level
/// tags are broken onto lines of their own, blocks separated by blank lines
/// become `<p>…</p>` followed by a newline unless they are already
/// delimited by block-level tags, and single newlines inside a wrapped
/// block become `<br />`. Empty or whitespace-only input yields an empty
/// string.
#[must_use]
pub fn autop(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let broken = insert_block_breaks(&normalized);
    let mut out = String::with_capacity(broken.len() + 16);

    for block in split_blocks(&broken) {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }

        if opens_with_block_tag(block) && closes_with_block_tag(block) {
            out.push_str(block);
            out.push('\n');
        } else {
            out.push_str("<p>");
            out.push_str(&block.replace('\n', "<br />\n"));
            out.push_str("</p>\n");
        }
    }

    out
}

/// Put a newline before every opening block-level tag and a blank line
/// after every closing one, so the paragraph split below separates block
/// markup from bare text.
fn insert_block_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        let (before, tail) = rest.split_at(open);
        out.push_str(before);

        let Some(end) = tail.find('>') else {
            out.push_str(tail);
            rest = "";
            break;
        };

        let tag = &tail[..=end];
        match leading_tag_name(tag) {
            Some(name) if BLOCK_TAGS.contains(&name.as_str()) => {
                if tag.starts_with("</") {
                    out.push_str(tag);
                    out.push_str("\n\n");
                } else {
                    out.push('\n');
                    out.push_str(tag);
                }
            }
            _ => out.push_str(tag),
        }
        rest = &tail[end + 1..];
    }
    out.push_str(rest);

    out
}

/// Split on blank lines (a newline, optional whitespace, another newline).
fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();

    for line in text.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

fn opens_with_block_tag(block: &str) -> bool {
    leading_tag_name(block).is_some_and(|name| BLOCK_TAGS.contains(&name.as_str()))
}

fn closes_with_block_tag(block: &str) -> bool {
    if !block.ends_with('>') {
        return false;
    }
    let Some(open) = block.rfind('<') else {
        return false;
    };
    leading_tag_name(&block[open..]).is_some_and(|name| BLOCK_TAGS.contains(&name.as_str()))
}

/// Name of the tag a string starts with, if it starts with one.
fn leading_tag_name(s: &str) -> Option<String> {
    let rest = s.strip_prefix('<')?;
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    let name: String = rest
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .collect();
    if name.is_empty() {
        None
    } else {
        Some(name.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_plain_text() {
        assert_eq!(autop("Download description"), "<p>Download description</p>\n");
    }

    #[test]
    fn empty_and_whitespace_input_yield_empty_output() {
        assert_eq!(autop(""), "");
        assert_eq!(autop("  \n \t\n"), "");
    }

    #[test]
    fn leaves_existing_paragraphs_alone() {
        assert_eq!(autop("<p>Hello world!</p>"), "<p>Hello world!</p>\n");
    }

    #[test]
    fn separates_trailing_text_from_a_paragraph() {
        assert_eq!(
            autop("<p>Hello world!</p>alert(\"ha!\");"),
            "<p>Hello world!</p>\n<p>alert(\"ha!\");</p>\n"
        );
    }

    #[test]
    fn blank_lines_split_paragraphs() {
        assert_eq!(autop("one\n\ntwo"), "<p>one</p>\n<p>two</p>\n");
    }

    #[test]
    fn blank_line_with_spaces_still_splits() {
        assert_eq!(autop("one\n   \ntwo"), "<p>one</p>\n<p>two</p>\n");
    }

    #[test]
    fn single_newlines_become_line_breaks() {
        assert_eq!(autop("line1\nline2"), "<p>line1<br />\nline2</p>\n");
    }

    #[test]
    fn windows_line_endings_are_normalized() {
        assert_eq!(autop("one\r\n\r\ntwo"), "<p>one</p>\n<p>two</p>\n");
    }

    #[test]
    fn block_level_chunks_are_not_wrapped() {
        assert_eq!(
            autop("<ul><li>new feature</li></ul>"),
            "<ul>\n<li>new feature</li>\n</ul>\n"
        );
        assert_eq!(
            autop("<div class=\"note\">note</div>"),
            "<div class=\"note\">note</div>\n"
        );
    }

    #[test]
    fn inline_markup_is_wrapped() {
        assert_eq!(
            autop("<strong>2.1.0</strong> is out"),
            "<p><strong>2.1.0</strong> is out</p>\n"
        );
    }

    #[test]
    fn mixed_blocks_keep_their_own_treatment() {
        assert_eq!(
            autop("intro\n\n<ul><li>a</li></ul>\n\noutro"),
            "<p>intro</p>\n<ul>\n<li>a</li>\n</ul>\n<p>outro</p>\n"
        );
    }

    #[test]
    fn unterminated_tag_is_carried_verbatim() {
        assert_eq!(autop("before <a href="), "<p>before <a href=</p>\n");
    }
}

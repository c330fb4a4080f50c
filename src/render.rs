use crate::Mode;
use crate::block::{Block, Page};
use crate::sanitize::sanitize;

/// Render a whole page to its final Markdown text.
///
/// Concatenates every top-level block in order, trims the result, then
/// applies the mode's page-level cleanup. The returned string always
/// ends with exactly one newline.
pub fn page_to_markdown(page: &Page, mode: Mode) -> String {
    let mut out = String::new();
    for block in &page.children {
        render_block(block, 0, mode, &mut out);
    }

    let mut text = out.trim().to_string();

    match mode {
        Mode::Standard => {
            // Depth-0 lines are emitted bare, but a stray bullet can
            // still survive trimming; drop at most one.
            if let Some(rest) = text.strip_prefix("- ") {
                text = rest.to_string();
            }
        }
        Mode::Outline => {
            text = outline_cleanup(&text);
        }
    }

    text.push('\n');
    text
}

/// Render one block and, depth-first, all of its descendants.
fn render_block(block: &Block, depth: usize, mode: Mode, out: &mut String) {
    let content = sanitize(&block.string, mode);

    push_prefix(&content, block.heading, depth, mode, out);
    out.push_str(&content);
    out.push('\n');

    // Blockquote paragraphs get a blank line so they don't run into
    // the next outline item.
    if content.starts_with("> ") {
        out.push('\n');
    }

    for child in &block.children {
        render_block(child, depth + 1, mode, out);
    }
}

/// Classify the line and emit its prefix.
fn push_prefix(content: &str, heading: Option<u8>, depth: usize, mode: Mode, out: &mut String) {
    let heading = match heading {
        Some(level @ 1..=3) => Some(level as usize),
        _ => None,
    };

    match mode {
        Mode::Standard => {
            if let Some(level) = heading {
                // Headings stand alone, never as list items.
                push_heading_marks(level, out);
            } else if content.starts_with("**") || content.starts_with("![") {
                // Bold callouts and images render bare, without
                // indentation or a bullet.
            } else if depth > 0 {
                for _ in 0..depth {
                    out.push_str("  ");
                }
                out.push_str("- ");
            }
            // Depth-0 plain lines are bare too: no prefix at all.
        }
        Mode::Outline => {
            // Every line is a list item, headings included; the
            // universal bullet is stripped again at page level.
            if let Some(level) = heading {
                out.push_str("- ");
                push_heading_marks(level, out);
            } else {
                for _ in 0..depth {
                    out.push_str("     ");
                }
                out.push_str("- ");
            }
        }
    }
}

fn push_heading_marks(level: usize, out: &mut String) {
    for _ in 0..level {
        out.push('#');
    }
    out.push(' ');
}

/// Outline-mode page cleanup: expand task markers, then undo the
/// universal `- ` bullet by stripping the first two characters of
/// every line.
fn outline_cleanup(text: &str) -> String {
    let text = text.replace("{{[[DONE]]}}", "- [x] ");
    let text = text.replace("{{[[TODO]]}}", "- [ ] ");
    // An expanded task marker inside a bullet leaves a doubled bullet.
    let text = text.replace("- - [", "  - [");

    text.lines()
        .map(strip_two_chars)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove the first two characters of a line; lines shorter than two
/// characters pass through unchanged. Operates on characters, not
/// bytes, since block text is frequently non-ASCII.
fn strip_two_chars(line: &str) -> &str {
    let mut indices = line.char_indices().skip(2);
    match indices.next() {
        Some((idx, _)) => &line[idx..],
        None => {
            if line.chars().count() == 2 {
                ""
            } else {
                line
            }
        }
    }
}

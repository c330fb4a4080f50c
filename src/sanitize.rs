use std::sync::LazyLock;

use regex::Regex;

use crate::Mode;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#([A-Za-z0-9_/]+)").unwrap());

/// Clean up a single block's raw text for Markdown output.
///
/// Embedded newlines collapse to spaces so every block renders as one
/// outline line. Roam's `^^highlight^^` becomes `==highlight==` and
/// `__italic__` becomes `_italic_`, both as literal substring
/// replacement. In outline mode, `#tag` additionally becomes
/// `#[[tag]]` so tags survive as page references.
pub fn sanitize(raw: &str, mode: Mode) -> String {
    let mut content = raw.replace('\n', " ");
    content = content.replace("^^", "==");
    content = content.replace("__", "_");

    if mode == Mode::Outline {
        content = TAG.replace_all(&content, "#[[$1]]").into_owned();
    }

    content
}

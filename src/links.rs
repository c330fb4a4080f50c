use std::collections::BTreeMap;

use crate::block::{Block, Page};

/// Rewrite remote asset links to local paths across every block of
/// every page, in place. Runs once, before any rendering.
///
/// Replacement is literal substring replacement per mapping entry. If
/// one mapped link is a substring of another, the outcome depends on
/// map iteration order; callers must not rely on either result.
pub fn rewrite_links(pages: &mut [Page], map: &BTreeMap<String, String>) {
    for page in pages {
        rewrite_blocks(&mut page.children, map);
    }
}

fn rewrite_blocks(blocks: &mut [Block], map: &BTreeMap<String, String>) {
    for block in blocks {
        for (link, path) in map {
            if block.string.contains(link.as_str()) {
                block.string = block.string.replace(link.as_str(), path);
            }
        }
        rewrite_blocks(&mut block.children, map);
    }
}

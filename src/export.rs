use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::Mode;
use crate::block::Page;
use crate::error::{Error, Result};
use crate::links::rewrite_links;
use crate::render::page_to_markdown;

/// Directory-name token in the output path that locates the sibling
/// image-mirror directory holding the link-map file.
const OUTPUT_DIR_TOKEN: &str = "roam_file";
const IMAGE_DIR_TOKEN: &str = "roam_image";
const LINK_MAP_FILE: &str = "firebase_local_records.json";

/// Run a full conversion: load the export and the link map, rewrite
/// links (standard mode), reset the output directory, and write one
/// Markdown file per eligible page. Returns the number of files
/// written.
///
/// The output directory is deleted and recreated on every run, so two
/// runs over the same input produce byte-identical results. A failure
/// on any single page aborts the run; files already written stay on
/// disk.
pub fn export(input_file: &Path, output_dir: &Path, mode: Mode) -> Result<usize> {
    let mut pages: Vec<Page> = load_json(input_file)?;

    // The link map lives next to the mirrored images; both modes load
    // it, but only standard mode applies it.
    let map_path = link_map_path(output_dir);
    let link_map: BTreeMap<String, String> = load_json(&map_path)?;

    if mode == Mode::Standard {
        rewrite_links(&mut pages, &link_map);
    }

    reset_output_dir(output_dir)?;

    let mut written = 0;
    for page in &pages {
        if !page.has_text_content() {
            debug!("skipping empty page {:?}", page.title);
            continue;
        }

        let markdown = page_to_markdown(page, mode);
        let path = output_dir.join(output_filename(&page.title));
        fs::write(&path, &markdown).map_err(|source| Error::WriteFile {
            path: path.clone(),
            source,
        })?;

        info!("wrote {}", path.display());
        written += 1;
    }

    Ok(written)
}

/// Derive the link-map path from the output directory by swapping the
/// file-mirror directory token for the image-mirror one.
pub fn link_map_path(output_dir: &Path) -> PathBuf {
    let image_dir = output_dir
        .to_string_lossy()
        .replace(OUTPUT_DIR_TOKEN, IMAGE_DIR_TOKEN);
    PathBuf::from(image_dir).join(LINK_MAP_FILE)
}

/// Page title to output filename: path separators become fullwidth
/// slashes so titles like `2023/05/09` stay a single file.
pub fn output_filename(title: &str) -> String {
    format!("{}.md", title.replace('/', "／"))
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| Error::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}

fn reset_output_dir(output_dir: &Path) -> Result<()> {
    if output_dir.exists() {
        fs::remove_dir_all(output_dir).map_err(|source| Error::PrepareDir {
            path: output_dir.to_path_buf(),
            source,
        })?;
    }
    fs::create_dir_all(output_dir).map_err(|source| Error::PrepareDir {
        path: output_dir.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_escapes_path_separators() {
        assert_eq!(output_filename("2023/05/09"), "2023／05／09.md");
        assert_eq!(output_filename("Plain"), "Plain.md");
    }

    #[test]
    fn link_map_path_swaps_directory_token() {
        let path = link_map_path(Path::new("/data/roam_file/notes"));
        assert_eq!(
            path,
            Path::new("/data/roam_image/notes/firebase_local_records.json")
        );
    }

    #[test]
    fn link_map_path_without_token_stays_in_place() {
        let path = link_map_path(Path::new("/tmp/out"));
        assert_eq!(path, Path::new("/tmp/out/firebase_local_records.json"));
    }
}

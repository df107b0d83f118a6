use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::model::{AnalysisResult, FileStat, HierarchyNode};

/// The one recognized source extension. Only files ending in this are
/// read and counted; everything else is listed bare.
pub const SOURCE_EXT: &str = ".py";

/// Directory names skipped entirely: not listed, not descended into.
const EXCLUDED_DIRS: &[&str] = &[".git", ".idea", "__pycache__"];

/// File names skipped entirely, even when they carry the source extension.
const EXCLUDED_FILES: &[&str] = &["example.py"];

fn is_source_file(name: &str) -> bool {
    name.ends_with(SOURCE_EXT)
}

/// Non-blank line count plus total character count of one source file's
/// content. A line counts when it contains at least one non-whitespace
/// character; chars include whitespace and line endings.
fn count_lines_chars(content: &str) -> (u64, u64) {
    let lines = content.lines().filter(|l| !l.trim().is_empty()).count() as u64;
    let chars = content.chars().count() as u64;
    (lines, chars)
}

/// Scan `root` and produce a fresh `AnalysisResult`. Any unreadable or
/// non-UTF-8 source file aborts the whole scan.
pub fn scan_directory(root: &Path) -> Result<AnalysisResult> {
    info!(root = %root.display(), "starting directory scan");

    let mut file_stats = BTreeMap::new();
    let (children, total_lines, total_chars) = scan_dir(root, &mut file_stats)?;

    let name = root
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());

    info!(
        total_lines,
        total_chars,
        source_files = file_stats.len(),
        "scan finished"
    );

    Ok(AnalysisResult {
        root: HierarchyNode::Folder { name, children },
        total_lines,
        total_chars,
        file_stats,
    })
}

/// One directory level. Returns the child nodes in listing order plus the
/// subtree's line/char totals; source-file stats accumulate into
/// `file_stats` keyed by full path.
fn scan_dir(
    dir: &Path,
    file_stats: &mut BTreeMap<String, FileStat>,
) -> Result<(Vec<HierarchyNode>, u64, u64)> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .with_context(|| format!("Failed to list directory {}", dir.display()))?
        .map(|entry| {
            entry
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .with_context(|| format!("Failed to read entry in {}", dir.display()))
        })
        .collect::<Result<_>>()?;
    names.sort();

    let mut children = Vec::with_capacity(names.len());
    let mut total_lines = 0u64;
    let mut total_chars = 0u64;

    for name in names {
        let path = dir.join(&name);

        if path.is_dir() {
            if EXCLUDED_DIRS.contains(&name.as_str()) {
                continue;
            }
            let (sub_children, sub_lines, sub_chars) = scan_dir(&path, file_stats)?;
            children.push(HierarchyNode::Folder {
                name,
                children: sub_children,
            });
            total_lines += sub_lines;
            total_chars += sub_chars;
        } else if path.is_file() {
            if EXCLUDED_FILES.contains(&name.as_str()) {
                continue;
            }
            if is_source_file(&name) {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {} as UTF-8 text", path.display()))?;
                let (lines, chars) = count_lines_chars(&content);
                children.push(HierarchyNode::File { name, lines, chars });
                total_lines += lines;
                total_chars += chars;
                let key = path.display().to_string();
                file_stats.insert(
                    key.clone(),
                    FileStat {
                        path: key,
                        lines,
                        chars,
                    },
                );
            } else {
                children.push(HierarchyNode::File {
                    name,
                    lines: 0,
                    chars: 0,
                });
            }
        }
        // Anything else (broken symlink etc.) is neither listed nor counted.
    }

    Ok((children, total_lines, total_chars))
}

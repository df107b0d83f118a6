use std::collections::BTreeMap;

/// One level of the scanned tree. Children of a `Folder` keep the
/// directory-listing order (lexicographic by raw name, case-sensitive),
/// folders and files interleaved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HierarchyNode {
    Folder {
        name: String,
        children: Vec<HierarchyNode>,
    },
    /// A file entry. Non-source files are kept for display with 0/0 counts.
    File {
        name: String,
        lines: u64,
        chars: u64,
    },
}

impl HierarchyNode {
    pub fn name(&self) -> &str {
        match self {
            HierarchyNode::Folder { name, .. } => name,
            HierarchyNode::File { name, .. } => name,
        }
    }
}

/// Per-source-file statistics, independent of nesting depth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileStat {
    pub path: String,
    pub lines: u64,
    pub chars: u64,
}

/// The outcome of one scan. Built fresh each time; nothing survives
/// across scans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Root `Folder` node named after the scanned directory.
    pub root: HierarchyNode,
    pub total_lines: u64,
    pub total_chars: u64,
    /// One entry per recognized source file, keyed by full path.
    pub file_stats: BTreeMap<String, FileStat>,
}

impl AnalysisResult {
    /// Rows for the flat file table: lines descending, then path ascending.
    /// The secondary key makes equal-line ordering deterministic.
    pub fn sorted_stats(&self) -> Vec<&FileStat> {
        let mut rows: Vec<&FileStat> = self.file_stats.values().collect();
        rows.sort_by(|a, b| b.lines.cmp(&a.lines).then_with(|| a.path.cmp(&b.path)));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(path: &str, lines: u64, chars: u64) -> FileStat {
        FileStat {
            path: path.to_string(),
            lines,
            chars,
        }
    }

    #[test]
    fn sorted_stats_orders_by_lines_desc_then_path() {
        let mut file_stats = BTreeMap::new();
        for s in [
            stat("b.py", 5, 10),
            stat("a.py", 5, 12),
            stat("z.py", 9, 1),
            stat("m.py", 1, 99),
        ] {
            file_stats.insert(s.path.clone(), s);
        }
        let res = AnalysisResult {
            root: HierarchyNode::Folder {
                name: "root".into(),
                children: vec![],
            },
            total_lines: 20,
            total_chars: 122,
            file_stats,
        };

        let paths: Vec<&str> = res.sorted_stats().iter().map(|s| s.path.as_str()).collect();
        assert_eq!(paths, vec!["z.py", "a.py", "b.py", "m.py"]);
    }

    #[test]
    fn sorted_stats_is_non_increasing_in_lines() {
        let mut file_stats = BTreeMap::new();
        for s in [stat("a", 3, 0), stat("b", 7, 0), stat("c", 3, 0)] {
            file_stats.insert(s.path.clone(), s);
        }
        let res = AnalysisResult {
            root: HierarchyNode::Folder {
                name: "r".into(),
                children: vec![],
            },
            total_lines: 13,
            total_chars: 0,
            file_stats,
        };

        let rows = res.sorted_stats();
        for pair in rows.windows(2) {
            assert!(pair[0].lines >= pair[1].lines);
        }
    }
}

use crate::model::HierarchyNode;

/// Tree label for one node: folders get a folder glyph, counted source
/// files get their own glyph plus a counts annotation, everything else is
/// shown bare.
pub fn node_label(node: &HierarchyNode) -> String {
    match node {
        HierarchyNode::Folder { name, .. } => format!("\u{1F4C1} {}", name),
        HierarchyNode::File { name, lines, chars } => {
            if *lines > 0 {
                format!("\u{1F40D} {} ({} lines, {} chars)", name, lines, chars)
            } else {
                format!("\u{1F4C4} {}", name)
            }
        }
    }
}

pub fn totals_label(total_lines: u64, total_chars: u64) -> String {
    format!(
        "Total lines of code: {}, characters: {}",
        total_lines, total_chars
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_files_are_annotated_with_counts() {
        let node = HierarchyNode::File {
            name: "a.py".into(),
            lines: 3,
            chars: 42,
        };
        assert!(node_label(&node).ends_with("a.py (3 lines, 42 chars)"));
    }

    #[test]
    fn non_source_files_have_no_annotation() {
        let node = HierarchyNode::File {
            name: "readme.txt".into(),
            lines: 0,
            chars: 0,
        };
        assert!(node_label(&node).ends_with("readme.txt"));
        assert!(!node_label(&node).contains("lines"));
    }

    #[test]
    fn totals_label_includes_both_counts() {
        assert_eq!(
            totals_label(12, 345),
            "Total lines of code: 12, characters: 345"
        );
    }
}

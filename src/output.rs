//! CLI output formatting.
//!
//! Output is information-first: each item leads with its positional index and
//! id, with the source URL as an indented `Source:` line.
//!
//! ## Select
//!
//! ```text
//! Layout: mosaic (5 of 8 items)
//! hero crag-01
//!     Source: /u/alice/crag-01.jpg
//! 001 crag-04
//!     Source: /u/alice/crag-04.jpg
//! ...
//! ```
//!
//! ## Check
//!
//! ```text
//! Items (2)
//! 001 crag-01
//!     Source: /u/alice/crag-01.jpg
//! 002 crag-02
//!     Source: /u/alice/crag-02.jpg
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`, no I/O) and
//! a `print_*` wrapper that writes to stdout.

use crate::layout::Montage;
use crate::types::MediaItem;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn item_lines(label: &str, item: &MediaItem) -> [String; 2] {
    [
        format!("{} {}", label, item.id),
        format!("    Source: {}", item.url),
    ]
}

/// Format the layout and items chosen for one render.
pub fn format_selection(montage: Option<&Montage>, available: usize) -> Vec<String> {
    let Some(montage) = montage else {
        return vec!["Layout: none (no items)".to_string()];
    };

    let mut lines = Vec::new();
    let shown = montage.items();
    lines.push(format!(
        "Layout: {} ({} of {} items)",
        montage.kind().name(),
        shown.len(),
        available
    ));

    let (hero, rest) = match montage {
        Montage::Mosaic { hero, rest } => (Some(hero), rest.iter().collect::<Vec<_>>()),
        _ => (None, shown),
    };
    if let Some(hero) = hero {
        lines.extend(item_lines("hero", hero));
    }
    for (i, item) in rest.into_iter().enumerate() {
        lines.extend(item_lines(&format_index(i + 1), item));
    }
    if let Montage::Pair { rounded: true, .. } = montage {
        lines.push("    (single cell, rounded)".to_string());
    }
    lines
}

/// Print selection output to stdout.
pub fn print_selection(montage: Option<&Montage>, available: usize) {
    for line in format_selection(montage, available) {
        println!("{}", line);
    }
}

/// Format a validated item list.
pub fn format_check(items: &[MediaItem]) -> Vec<String> {
    let mut lines = vec![format!("Items ({})", items.len())];
    for (i, item) in items.iter().enumerate() {
        lines.extend(item_lines(&format_index(i + 1), item));
    }
    lines
}

/// Print check output to stdout.
pub fn print_check(items: &[MediaItem]) {
    for line in format_check(items) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> MediaItem {
        MediaItem::new(id, format!("/{id}.jpg"))
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn selection_none() {
        assert_eq!(format_selection(None, 0), vec!["Layout: none (no items)"]);
    }

    #[test]
    fn selection_single() {
        let montage = Montage::Single { item: item("a") };
        let lines = format_selection(Some(&montage), 3);
        assert_eq!(
            lines,
            vec!["Layout: single (1 of 3 items)", "001 a", "    Source: /a.jpg"]
        );
    }

    #[test]
    fn selection_rounded_pair() {
        let montage = Montage::Pair {
            items: vec![item("a")],
            rounded: true,
        };
        let lines = format_selection(Some(&montage), 1);
        assert_eq!(lines[0], "Layout: pair (1 of 1 items)");
        assert_eq!(lines.last().unwrap(), "    (single cell, rounded)");
    }

    #[test]
    fn selection_mosaic_lists_hero_first() {
        let montage = Montage::Mosaic {
            hero: item("h"),
            rest: [item("a"), item("b"), item("c"), item("d")],
        };
        let lines = format_selection(Some(&montage), 9);
        assert_eq!(lines[0], "Layout: mosaic (5 of 9 items)");
        assert_eq!(lines[1], "hero h");
        assert_eq!(lines[3], "001 a");
        assert_eq!(lines[9], "004 d");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn check_lists_items() {
        let lines = format_check(&[item("a"), item("b")]);
        assert_eq!(
            lines,
            vec![
                "Items (2)",
                "001 a",
                "    Source: /a.jpg",
                "002 b",
                "    Source: /b.jpg",
            ]
        );
    }
}

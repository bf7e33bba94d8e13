//! Centralized UI formatting and color utilities
//!
//! Colors, icons and text helpers shared by the fleet CLI output.

use colored::{ColoredString, Colorize};

use crate::ship::ShipType;

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var("FLEET_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns a colored label for a ship type.
///
/// - Transport: cyan
/// - Military: red
/// - Merchant: yellow
pub fn ship_type_label(ship_type: ShipType) -> ColoredString {
    ship_type_cell(ship_type, 0)
}

/// Ship type label left-aligned to `width` columns, padded before coloring
/// so escape codes do not skew table columns.
pub fn ship_type_cell(ship_type: ShipType, width: usize) -> ColoredString {
    let text = format!("{:<width$}", ship_type.as_str(), width = width);
    match ship_type {
        ShipType::Transport => text.cyan(),
        ShipType::Military => text.red(),
        ShipType::Merchant => text.yellow(),
    }
}

/// Marker for the used flag: ◐ used, ● new
pub fn used_marker(used: bool) -> ColoredString {
    if used {
        "◐".yellow()
    } else {
        "●".green()
    }
}

/// Color scheme for text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (ship ids)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Truncate to `max_len` characters, ending in `...` when cut.
    pub fn truncate(text: &str, max_len: usize) -> String {
        if text.chars().count() <= max_len {
            text.to_string()
        } else {
            let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
            format!("{}...", kept)
        }
    }

    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_type_label_all_types() {
        for ship_type in ShipType::ALL {
            assert!(ship_type_label(ship_type)
                .to_string()
                .contains(ship_type.as_str()));
        }
    }

    #[test]
    fn test_ship_type_cell_pads() {
        colored::control::set_override(false);
        assert_eq!(ship_type_cell(ShipType::Military, 10).to_string(), "MILITARY  ");
        colored::control::unset_override();
    }

    #[test]
    fn test_used_marker() {
        used_marker(true);
        used_marker(false);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(format::truncate("short", 10), "short");
        assert_eq!(format::truncate("exactly ten", 11), "exactly ten");
        assert_eq!(format::truncate("this is a very long name", 10), "this is...");
        assert_eq!(format::truncate("ééééé", 4), "é...");
    }

    #[test]
    fn test_separator() {
        assert_eq!(format::separator(5), "─────");
    }
}

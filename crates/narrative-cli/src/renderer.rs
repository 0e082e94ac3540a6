//! Terminal rendering module for rich markdown output
//!
//! Plans, editors and operation results all implement `Display` as markdown.
//! This module prints them through termimad, or verbatim with `--no-color`.

use std::{
    fmt::Display,
    io::{self, Write},
};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render a markdown `Display` value to stdout
    pub fn render(&self, content: &impl Display) -> Result<()> {
        let markdown = content.to_string();
        let mut out = io::stdout().lock();

        if !self.rich_enabled {
            out.write_all(markdown.as_bytes())?;
            return Ok(());
        }

        for line in markdown.lines() {
            match heading_level(line) {
                // Headings keep their hashes.
                Some(1 | 2) => writeln!(out, "\x1b[1;36m{line}\x1b[0m")?,
                Some(_) => writeln!(out, "\x1b[36m{line}\x1b[0m")?,
                None if line == "---" => writeln!(out, "{}", "─".repeat(40))?,
                None => writeln!(out, "{}", self.skin.inline(line))?,
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

fn heading_level(line: &str) -> Option<usize> {
    let level = line.chars().take_while(|&c| c == '#').count();
    (level > 0 && line[level..].starts_with(' ')).then_some(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("# Operation Harbor"), Some(1));
        assert_eq!(heading_level("## Phase 0: Shaping"), Some(2));
        assert_eq!(heading_level("### narr_1"), Some(3));
        assert_eq!(heading_level("#hashtag campaign"), None);
        assert_eq!(heading_level("- NRP Status: Draft"), None);
    }
}

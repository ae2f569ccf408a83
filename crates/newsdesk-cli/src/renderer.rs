//! Terminal rendering for markdown output via termimad.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renderer that switches between rich markdown and plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.quote_mark.set_fg(Color::DarkGrey);

        Self { rich_enabled, skin }
    }

    /// Renders markdown to stdout, or prints it verbatim in plain mode.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            self.skin.print_text(markdown);
        } else {
            print!("{markdown}");
            if !markdown.ends_with('\n') {
                println!();
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_renderer_is_marked_plain() {
        assert!(!TerminalRenderer::new(false).rich_enabled);
    }

    #[test]
    fn default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }
}

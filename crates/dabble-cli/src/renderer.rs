//! Terminal rendering for the markdown produced by `dabble_core::display`.
//!
//! Rich mode styles the markdown with termimad; plain mode prints it as is.

use std::io::{self, Write};

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
        skin.set_headers_fg(Color::Magenta);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Cyan);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to standard output
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        self.render_to(&mut out, markdown)?;
        out.flush()?;
        Ok(())
    }

    fn render_to<W: Write>(&self, out: &mut W, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            self.skin.write_text_on(out, markdown)?;
        } else {
            out.write_all(markdown.as_bytes())?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

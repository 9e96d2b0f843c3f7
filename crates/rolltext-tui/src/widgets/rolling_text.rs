//! Draws sampled columns into a buffer
//!
//! A terminal row cannot move by a fraction of a cell, so the window is
//! snapped to whole rows: once a column is more than half way to its
//! neighbour, the neighbour takes the baseline.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use rolltext_core::{SampleWindow, Symbol};
use unicode_width::UnicodeWidthChar;

use crate::theme::Theme;

/// Glyphs shown above, on and below the baseline of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRows {
    pub above: Option<Symbol>,
    pub center: Option<Symbol>,
    pub below: Option<Symbol>,
}

impl ColumnRows {
    pub fn from_window(window: &SampleWindow) -> Self {
        if window.offset >= 0.5 {
            Self {
                above: None,
                center: window.next,
                below: window.current,
            }
        } else if window.offset <= -0.5 {
            Self {
                above: window.current,
                center: window.previous,
                below: None,
            }
        } else {
            Self {
                above: window.next,
                center: window.current,
                below: window.previous,
            }
        }
    }
}

fn symbol_width(symbol: Option<Symbol>) -> u16 {
    symbol.and_then(UnicodeWidthChar::width).unwrap_or(0) as u16
}

/// Cells a column occupies; never collapses while it is on screen
pub fn column_width(window: &SampleWindow) -> u16 {
    symbol_width(window.current)
        .max(symbol_width(window.next))
        .max(symbol_width(window.previous))
        .max(1)
}

/// Total cells needed to draw `windows` side by side
pub fn text_width(windows: &[SampleWindow]) -> u16 {
    windows.iter().map(column_width).sum()
}

/// One line of rolling text
///
/// Neighbours are drawn dimmed above and below the baseline while a column
/// is between two symbols. With fewer than three rows only the baseline is
/// drawn.
pub struct RollingText<'a> {
    windows: &'a [SampleWindow],
    theme: &'a Theme,
}

impl<'a> RollingText<'a> {
    pub fn new(windows: &'a [SampleWindow], theme: &'a Theme) -> Self {
        Self { windows, theme }
    }
}

impl Widget for RollingText<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let baseline = area.y + area.height / 2;
        let show_neighbours = area.height >= 3;
        let mut x = area.x;

        for window in self.windows {
            let width = column_width(window);
            if x + width > area.right() {
                break;
            }

            let rows = ColumnRows::from_window(window);
            put(buf, x, baseline, rows.center, self.theme.glyph());
            if show_neighbours && window.offset != 0.0 {
                put(buf, x, baseline - 1, rows.above, self.theme.glyph_dim());
                put(buf, x, baseline + 1, rows.below, self.theme.glyph_dim());
            }
            x += width;
        }
    }
}

fn put(buf: &mut Buffer, x: u16, y: u16, symbol: Option<Symbol>, style: Style) {
    if let Some(symbol) = symbol {
        let mut utf8 = [0u8; 4];
        buf.set_string(x, y, symbol.encode_utf8(&mut utf8), style);
    }
}

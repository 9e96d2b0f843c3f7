use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Ticker};
use crate::widgets::rolling_text::{text_width, RollingText};

/// Width reserved for ticker labels
const LABEL_WIDTH: u16 = 10;
/// Rows per ticker: one above and one below the baseline
const ROW_HEIGHT: u16 = 3;

pub struct TickerPanelWidget;

impl TickerPanelWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" rolltext ")
            .border_style(Style::default().fg(app.theme.dim))
            .title_style(app.theme.label());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical(
            app.tickers
                .iter()
                .map(|_| Constraint::Length(ROW_HEIGHT))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(inner);

        for (ticker, row) in app.tickers.iter().zip(rows.iter()) {
            Self::render_ticker(frame, *row, ticker, app);
        }
    }

    fn render_ticker(frame: &mut Frame, area: Rect, ticker: &Ticker, app: &App) {
        if area.height == 0 || area.width <= LABEL_WIDTH {
            return;
        }
        let baseline = Rect::new(area.x, area.y + area.height / 2, area.width, 1);

        let label = Paragraph::new(Span::styled(format!(" {}", ticker.label), app.theme.label()));
        frame.render_widget(label, Rect { width: LABEL_WIDTH, ..baseline });

        let mut x = area.x + LABEL_WIDTH;
        let right = area.right();

        let prefix = ticker.prefix();
        if !prefix.is_empty() {
            let width = (prefix.width() as u16).min(right - x);
            frame.render_widget(
                Paragraph::new(Span::styled(prefix, app.theme.glyph())),
                Rect { x, width, ..baseline },
            );
            x += width;
        }

        let windows = ticker.sample();
        let width = text_width(&windows).min(right - x);
        frame.render_widget(
            RollingText::new(&windows, &app.theme),
            Rect::new(x, area.y, width, area.height),
        );
        x += width;

        let suffix = ticker.suffix();
        if !suffix.is_empty() && x < right {
            frame.render_widget(
                Paragraph::new(Span::styled(suffix, app.theme.glyph())),
                Rect { x, width: right - x, ..baseline },
            );
        }
    }
}

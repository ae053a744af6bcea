//! Frame composition: sidebar, content area, status bar, toast overlay

pub mod layout;
pub mod widgets;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::{App, Section};
use crate::core::toast::ToastKind;
use crate::modules::overview;
use layout::Tier;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();
    let tier = app.ctx.tier;

    let (sidebar, content) = layout::chrome_split(area, tier);
    if let Some(sidebar) = sidebar {
        render_sidebar(frame, sidebar, app.section);
    }
    let (body, status) = layout::status_split(content);

    match app.active_module() {
        None => overview::view::render(&app.overview, frame, body, tier),
        Some(module) => module.render(frame, body, &app.ctx),
    }

    render_status_bar(frame, status, app, tier);
    render_toasts(frame, area, app);
}

fn render_sidebar(frame: &mut Frame, area: Rect, active: Section) {
    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|section| {
            let style = if *section == active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(section.title(), style))
        })
        .collect();
    let list =
        List::new(items).block(Block::default().borders(Borders::ALL).title(" chirp "));
    frame.render_widget(list, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, tier: Tier) {
    let tier_label = match tier {
        Tier::Mobile => "mobile",
        Tier::Tablet => "tablet",
        Tier::Desktop => "desktop",
    };
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", app.section.title()),
            Style::default().add_modifier(Modifier::REVERSED),
        ),
        Span::raw("  Tab: next section  q: quit  "),
        Span::styled(
            format!("[{tier_label}]"),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(bar, area);
}

fn render_toasts(frame: &mut Frame, area: Rect, app: &App) {
    // The overview panel keeps its own queue; both feed the one overlay
    let mut records: Vec<_> = app.toasts.records().iter().collect();
    if app.section == Section::Overview {
        records.extend(app.overview.toasts.records());
    }
    if records.is_empty() {
        return;
    }
    let width = area.width.min(44);
    for (i, record) in records.iter().rev().take(4).enumerate() {
        let y = area.y + 1 + i as u16;
        if y >= area.bottom() {
            break;
        }
        let rect = Rect::new(area.right().saturating_sub(width), y, width, 1);
        let color = match record.kind {
            ToastKind::Success => Color::Green,
            ToastKind::Info => Color::Blue,
            ToastKind::Warning => Color::Yellow,
            ToastKind::Error => Color::Red,
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {} ", record.description),
                Style::default().fg(Color::Black).bg(color),
            )),
            rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Instant;

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer.get(x, y).symbol())
            .collect()
    }

    #[test]
    fn overview_toasts_share_the_app_overlay() {
        let t0 = Instant::now();
        let mut app = App::new(&Config::default(), t0);
        app.overview.toasts.push("panel toast", ToastKind::Info, t0);
        app.toasts.push("app toast", ToastKind::Success, t0);

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        // Both queues land in the single top-right overlay
        let overlay: String = (1..=2).map(|y| row_text(&terminal, y)).collect();
        assert!(overlay.contains("app toast"));
        assert!(overlay.contains("panel toast"));

        // Nothing renders in the old bottom-right position
        let height = terminal.backend().buffer().area.height;
        let bottom: String = (height - 3..height).map(|y| row_text(&terminal, y)).collect();
        assert!(!bottom.contains("panel toast"));
    }
}

//! Rendering for the overview panel

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::domain::model::Platform;
use crate::ui::layout::Tier;
use crate::ui::widgets::PercentMeter;

use super::{AudienceTab, Modal, NotificationKind, OverviewPanel};

const CALENDAR_SHADES: [Color; 5] = [
    Color::DarkGray,
    Color::Rgb(0, 90, 50),
    Color::Rgb(0, 130, 70),
    Color::Rgb(0, 170, 90),
    Color::Green,
];

pub fn render(panel: &OverviewPanel, frame: &mut Frame, area: Rect, tier: Tier) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(8),
        ])
        .split(area);

    render_header(panel, frame, rows[0]);
    render_metric_cards(panel, frame, rows[1], tier);
    render_body(panel, frame, rows[2], tier);
    render_modal(panel, frame, area);
}

fn render_header(panel: &OverviewPanel, frame: &mut Frame, area: Rect) {
    let online = if panel.online {
        Span::styled("● online", Style::default().fg(Color::Green))
    } else {
        Span::styled("● offline", Style::default().fg(Color::Red))
    };
    let refresh = if panel.refreshing {
        Span::styled("  refreshing…", Style::default().fg(Color::Yellow))
    } else {
        Span::raw("")
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            panel.handle.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        online,
        refresh,
        Span::raw("  "),
        Span::styled(
            panel.current_time.format("%H:%M:%S").to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Overview "));
    frame.render_widget(header, area);
}

fn render_metric_cards(panel: &OverviewPanel, frame: &mut Frame, area: Rect, tier: Tier) {
    let constraints = match tier {
        Tier::Mobile => vec![Constraint::Min(0)],
        _ => vec![
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ],
    };
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let metrics = [
        ("Followers", group_digits(panel.metrics.followers)),
        ("Reach", group_digits(panel.metrics.reach)),
        ("Engagement", format!("{:.1}%", panel.metrics.engagement)),
    ];
    for (i, (label, value)) in metrics.iter().enumerate() {
        // Mobile collapses the row to the first card only
        let Some(card_area) = cards.get(i) else { break };
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                value.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*label, Style::default().fg(Color::DarkGray))),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(card, *card_area);
    }
}

fn render_body(panel: &OverviewPanel, frame: &mut Frame, area: Rect, tier: Tier) {
    let columns = if matches!(tier, Tier::Mobile) {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area)
    };

    render_audience_card(panel, frame, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(4)])
        .split(columns[1]);
    render_calendar(panel, frame, right[0]);
    render_notifications(panel, frame, right[1]);
}

fn render_audience_card(panel: &OverviewPanel, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Audience  [1] Locations  [2] Age ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let titles = [AudienceTab::Locations, AudienceTab::Age].map(|t| t.title());
    let selected = match panel.active_tab {
        AudienceTab::Locations => 0,
        AudienceTab::Age => 1,
    };
    let tabs = Tabs::new(titles.to_vec())
        .select(selected)
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, rows[0]);

    let mut y = rows[1].y;
    match panel.active_tab {
        AudienceTab::Locations => {
            for stat in panel.locations() {
                if y >= rows[1].bottom() {
                    break;
                }
                let row = Rect::new(rows[1].x, y, rows[1].width, 1);
                frame.render_widget(
                    PercentMeter::new(&stat.country, group_digits(stat.count), stat.percentage),
                    row,
                );
                y += 1;
            }
        }
        AudienceTab::Age => {
            for stat in panel.age_groups() {
                if y >= rows[1].bottom() {
                    break;
                }
                let row = Rect::new(rows[1].x, y, rows[1].width, 1);
                frame.render_widget(
                    PercentMeter::new(&stat.range, group_digits(stat.count), stat.percentage)
                        .color(Color::Magenta),
                    row,
                );
                y += 1;
            }
        }
    }
}

fn render_calendar(panel: &OverviewPanel, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Activity ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (week, row) in panel.calendar.iter().enumerate() {
        let y = inner.y + week as u16;
        if y >= inner.bottom() {
            break;
        }
        for (day, level) in row.iter().enumerate() {
            let x = inner.x + day as u16 * 2;
            if x + 1 >= inner.right() {
                break;
            }
            let shade = CALENDAR_SHADES[(*level as usize).min(CALENDAR_SHADES.len() - 1)];
            frame
                .buffer_mut()
                .set_string(x, y, "■", Style::default().fg(shade));
        }
    }
}

fn render_notifications(panel: &OverviewPanel, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = panel
        .notifications
        .iter()
        .map(|record| {
            let color = match record.kind {
                NotificationKind::Success => Color::Green,
                NotificationKind::Info => Color::Blue,
                NotificationKind::Warning => Color::Yellow,
            };
            ListItem::new(Line::from(vec![
                Span::styled("• ", Style::default().fg(color)),
                Span::raw(record.message.clone()),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Notifications ({}) ", panel.notifications.len())),
    );
    frame.render_widget(list, area);
}

fn render_modal(panel: &OverviewPanel, frame: &mut Frame, area: Rect) {
    let (title, body) = match panel.modal {
        Modal::None => return,
        Modal::AddAccount => {
            let platforms = Line::from(
                Platform::ALL
                    .iter()
                    .enumerate()
                    .flat_map(|(i, platform)| {
                        let style = if *platform == panel.add_account_platform {
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default()
                        };
                        [
                            Span::styled(format!("[{}] {}", i + 1, platform.title()), style),
                            Span::raw("  "),
                        ]
                    })
                    .collect::<Vec<Span>>(),
            );
            (
                " Add Account ",
                vec![
                    Line::from("Pick a platform with 1-5, then enter a handle."),
                    Line::from(""),
                    platforms,
                    Line::from(""),
                    Line::from(vec![
                        Span::raw("Handle: @"),
                        Span::styled(
                            panel.add_account_input.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::styled("_", Style::default().fg(Color::DarkGray)),
                    ]),
                    Line::from(""),
                    Line::from("Enter to connect, Esc to close."),
                ],
            )
        }
        Modal::Help => (
            " Keyboard Shortcuts ",
            vec![
                Line::from("Ctrl+R        refresh dashboard data"),
                Line::from("Ctrl+Shift+A  add account"),
                Line::from("Ctrl+H        this help"),
                Line::from("1 / 2         locations / age tab"),
                Line::from("j / c         export JSON / CSV"),
                Line::from("y             copy metrics"),
                Line::from("o             toggle online"),
                Line::from("Esc           close modals"),
            ],
        ),
    };

    let popup = centered_rect(50, 40, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(body)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(title)),
        popup,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// Format an integer with thousands separators
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::group_digits;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(278_534), "278,534");
        assert_eq!(group_digits(5_192_879), "5,192,879");
    }
}

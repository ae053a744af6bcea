//! Campaigns section: browse ad campaigns and raise CRUD intents

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::core::{Action, Context, DashboardCommand, Module, ToastKind};
use crate::domain::model::{Campaign, CampaignStatus, ExportFormat};
use crate::domain::repository::CampaignRepository;

pub struct CampaignsSection {
    campaigns: Vec<Campaign>,
    selected: usize,
}

impl CampaignsSection {
    pub fn new(repo: &dyn CampaignRepository) -> Self {
        Self {
            campaigns: repo.campaigns(),
            selected: 0,
        }
    }

    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn selected(&self) -> Option<&Campaign> {
        self.campaigns.get(self.selected)
    }

    fn submit(&self, ctx: &mut Context, command: DashboardCommand) -> Action {
        let description = command.describe();
        ctx.submit(command);
        Action::Notify(format!("Requested: {description}"), ToastKind::Info)
    }
}

impl Module for CampaignsSection {
    fn title(&self) -> &'static str {
        "Campaigns"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = super::select_next(self.selected, self.campaigns.len());
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = super::select_previous(self.selected);
                Action::None
            }
            KeyCode::Char('n') => self.submit(ctx, DashboardCommand::CreateCampaign),
            KeyCode::Char('e') => match self.selected() {
                Some(campaign) => {
                    let id = campaign.id.clone();
                    self.submit(ctx, DashboardCommand::EditCampaign { id })
                }
                None => Action::None,
            },
            KeyCode::Char('d') => match self.selected() {
                Some(campaign) => {
                    let id = campaign.id.clone();
                    self.submit(ctx, DashboardCommand::DeleteCampaign { id })
                }
                None => Action::None,
            },
            KeyCode::Char('x') => Action::ExportList(ExportFormat::Csv),
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &Context) {
        let header = Row::new(["Name", "Platform", "Status", "Budget", "Spent", "ROAS"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .campaigns
            .iter()
            .enumerate()
            .map(|(i, campaign)| {
                let status_color = match campaign.status {
                    CampaignStatus::Active => Color::Green,
                    CampaignStatus::Paused => Color::Yellow,
                    CampaignStatus::Completed => Color::Blue,
                    CampaignStatus::Draft => Color::DarkGray,
                };
                let style = if i == self.selected {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(campaign.name.clone()),
                    Cell::from(campaign.platform.title()),
                    Cell::from(campaign.status.title())
                        .style(Style::default().fg(status_color)),
                    Cell::from(format!("${}", campaign.budget)),
                    Cell::from(format!("${}", campaign.spent)),
                    Cell::from(format!("{:.1}x", campaign.roas)),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(24),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(9),
                Constraint::Length(9),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Campaigns  [n]ew [e]dit [d]elete [x]port "),
        );

        frame.render_widget(table, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SharedSink;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn delete_submits_command_for_selected_row() {
        let mut section = CampaignsSection::new(&crate::domain::repository::DemoRepository);
        let sink = SharedSink::default();
        let mut ctx = Context {
            sink: Box::new(sink.clone()),
            ..Context::default()
        };

        section.handle_key(key(KeyCode::Down), &mut ctx);
        let expected_id = section.selected().unwrap().id.clone();
        section.handle_key(key(KeyCode::Char('d')), &mut ctx);

        assert_eq!(
            sink.drain(),
            vec![DashboardCommand::DeleteCampaign { id: expected_id }]
        );
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut section = CampaignsSection::new(&crate::domain::repository::DemoRepository);
        let mut ctx = Context::default();
        let last = section.campaigns().len() - 1;

        for _ in 0..50 {
            section.handle_key(key(KeyCode::Down), &mut ctx);
        }
        assert_eq!(section.selected, last);

        for _ in 0..50 {
            section.handle_key(key(KeyCode::Up), &mut ctx);
        }
        assert_eq!(section.selected, 0);
    }
}

//! Users section: team member management intents

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::core::{Action, Context, DashboardCommand, Module, ToastKind};
use crate::domain::model::{TeamUser, UserStatus};
use crate::domain::repository::UserRepository;

pub struct UsersSection {
    users: Vec<TeamUser>,
    selected: usize,
}

impl UsersSection {
    pub fn new(repo: &dyn UserRepository) -> Self {
        Self {
            users: repo.team_users(),
            selected: 0,
        }
    }

    pub fn users(&self) -> &[TeamUser] {
        &self.users
    }

    pub fn selected(&self) -> Option<&TeamUser> {
        self.users.get(self.selected)
    }

    fn submit(&self, ctx: &mut Context, command: DashboardCommand) -> Action {
        let description = command.describe();
        ctx.submit(command);
        Action::Notify(format!("Requested: {description}"), ToastKind::Info)
    }
}

impl Module for UsersSection {
    fn title(&self) -> &'static str {
        "Users"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = super::select_next(self.selected, self.users.len());
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = super::select_previous(self.selected);
                Action::None
            }
            KeyCode::Char('n') => self.submit(ctx, DashboardCommand::InviteUser),
            KeyCode::Char('e') => match self.selected() {
                Some(user) => {
                    let id = user.id.clone();
                    self.submit(ctx, DashboardCommand::EditUser { id })
                }
                None => Action::None,
            },
            KeyCode::Char('d') => match self.selected() {
                Some(user) => {
                    let id = user.id.clone();
                    self.submit(ctx, DashboardCommand::DeleteUser { id })
                }
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &Context) {
        let header = Row::new(["Name", "Role", "Email", "Status"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .users
            .iter()
            .enumerate()
            .map(|(i, user)| {
                let status_color = match user.status {
                    UserStatus::Active => Color::Green,
                    UserStatus::Invited => Color::Blue,
                    UserStatus::Suspended => Color::Red,
                };
                let style = if i == self.selected {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(user.name.clone()),
                    Cell::from(user.role.title()),
                    Cell::from(user.email.clone()),
                    Cell::from(user.status.title())
                        .style(Style::default().fg(status_color)),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(14),
                Constraint::Length(8),
                Constraint::Min(22),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Users  [n] invite [e]dit [d]elete "),
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
    fn invite_and_delete_submit_user_commands() {
        let mut section = UsersSection::new(&crate::domain::repository::DemoRepository);
        let sink = SharedSink::default();
        let mut ctx = Context {
            sink: Box::new(sink.clone()),
            ..Context::default()
        };

        section.handle_key(key(KeyCode::Char('n')), &mut ctx);
        section.handle_key(key(KeyCode::Down), &mut ctx);
        let expected_id = section.selected().unwrap().id.clone();
        section.handle_key(key(KeyCode::Char('d')), &mut ctx);

        assert_eq!(
            sink.drain(),
            vec![
                DashboardCommand::InviteUser,
                DashboardCommand::DeleteUser { id: expected_id },
            ]
        );
    }
}

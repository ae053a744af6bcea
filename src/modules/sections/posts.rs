//! Posts section: the scheduled-content queue

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::core::{Action, Context, DashboardCommand, Module, ToastKind};
use crate::domain::model::{PostStatus, ScheduledPost};
use crate::domain::repository::PostRepository;

pub struct PostsSection {
    posts: Vec<ScheduledPost>,
    selected: usize,
}

impl PostsSection {
    pub fn new(repo: &dyn PostRepository) -> Self {
        Self {
            posts: repo.posts(),
            selected: 0,
        }
    }

    pub fn posts(&self) -> &[ScheduledPost] {
        &self.posts
    }

    pub fn selected(&self) -> Option<&ScheduledPost> {
        self.posts.get(self.selected)
    }

    fn submit(&self, ctx: &mut Context, command: DashboardCommand) -> Action {
        let description = command.describe();
        ctx.submit(command);
        Action::Notify(format!("Requested: {description}"), ToastKind::Info)
    }
}

impl Module for PostsSection {
    fn title(&self) -> &'static str {
        "Posts"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = super::select_next(self.selected, self.posts.len());
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = super::select_previous(self.selected);
                Action::None
            }
            KeyCode::Char('n') => self.submit(ctx, DashboardCommand::SchedulePost),
            KeyCode::Char('e') => match self.selected() {
                Some(post) => {
                    let id = post.id.clone();
                    self.submit(ctx, DashboardCommand::EditPost { id })
                }
                None => Action::None,
            },
            KeyCode::Char('d') => match self.selected() {
                Some(post) => {
                    let id = post.id.clone();
                    self.submit(ctx, DashboardCommand::DeletePost { id })
                }
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &Context) {
        let header = Row::new(["Content", "Platforms", "Scheduled", "Status", "Engagement"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .posts
            .iter()
            .enumerate()
            .map(|(i, post)| {
                let status_color = match post.status {
                    PostStatus::Scheduled => Color::Yellow,
                    PostStatus::Posted => Color::Green,
                    PostStatus::Failed => Color::Red,
                    PostStatus::Draft => Color::DarkGray,
                };
                let platforms = post
                    .platforms
                    .iter()
                    .map(|p| p.title())
                    .collect::<Vec<_>>()
                    .join(", ");
                let style = if i == self.selected {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(post.content.clone()),
                    Cell::from(platforms),
                    Cell::from(post.scheduled_at.clone()),
                    Cell::from(post.status.title())
                        .style(Style::default().fg(status_color)),
                    Cell::from(format!(
                        "{} / {} / {}",
                        post.likes, post.comments, post.shares
                    )),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(28),
                Constraint::Length(20),
                Constraint::Length(17),
                Constraint::Length(10),
                Constraint::Length(16),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Posts  [n]ew [e]dit [d]elete "),
        );

        frame.render_widget(table, area);
    }
}

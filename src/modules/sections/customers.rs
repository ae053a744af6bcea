//! Customers section

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::core::{Action, Context, DashboardCommand, Module, ToastKind};
use crate::domain::model::{Customer, CustomerSegment, ExportFormat};
use crate::domain::repository::CustomerRepository;

pub struct CustomersSection {
    customers: Vec<Customer>,
    selected: usize,
    /// Active segment filter, None shows everyone
    segment_filter: Option<CustomerSegment>,
}

impl CustomersSection {
    pub fn new(repo: &dyn CustomerRepository) -> Self {
        Self {
            customers: repo.customers(),
            selected: 0,
            segment_filter: None,
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn visible(&self) -> Vec<&Customer> {
        self.customers
            .iter()
            .filter(|c| self.segment_filter.map_or(true, |s| c.segment == s))
            .collect()
    }

    pub fn selected(&self) -> Option<&Customer> {
        self.visible().get(self.selected).copied()
    }

    /// Cycle None -> VIP -> Regular -> New -> At Risk -> None
    fn cycle_filter(&mut self) {
        self.segment_filter = match self.segment_filter {
            None => Some(CustomerSegment::ALL[0]),
            Some(current) => CustomerSegment::ALL
                .iter()
                .position(|s| *s == current)
                .and_then(|i| CustomerSegment::ALL.get(i + 1))
                .copied(),
        };
        self.selected = 0;
    }

    fn submit(&self, ctx: &mut Context, command: DashboardCommand) -> Action {
        let description = command.describe();
        ctx.submit(command);
        Action::Notify(format!("Requested: {description}"), ToastKind::Info)
    }
}

impl Module for CustomersSection {
    fn title(&self) -> &'static str {
        "Customers"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = super::select_next(self.selected, self.visible().len());
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = super::select_previous(self.selected);
                Action::None
            }
            KeyCode::Char('f') => {
                self.cycle_filter();
                let label = self
                    .segment_filter
                    .map_or("All", |s| s.title());
                Action::Notify(format!("Segment filter: {label}"), ToastKind::Info)
            }
            KeyCode::Char('n') => self.submit(ctx, DashboardCommand::CreateCustomer),
            KeyCode::Char('e') => match self.selected() {
                Some(customer) => {
                    let id = customer.id.clone();
                    self.submit(ctx, DashboardCommand::EditCustomer { id })
                }
                None => Action::None,
            },
            KeyCode::Char('d') => match self.selected() {
                Some(customer) => {
                    let id = customer.id.clone();
                    self.submit(ctx, DashboardCommand::DeleteCustomer { id })
                }
                None => Action::None,
            },
            KeyCode::Char('x') => Action::ExportList(ExportFormat::Csv),
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &Context) {
        let header = Row::new(["Name", "Segment", "Location", "Spent", "Orders", "Sat."])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .visible()
            .iter()
            .enumerate()
            .map(|(i, customer)| {
                let segment_color = match customer.segment {
                    CustomerSegment::Vip => Color::Magenta,
                    CustomerSegment::Regular => Color::Blue,
                    CustomerSegment::New => Color::Green,
                    CustomerSegment::AtRisk => Color::Red,
                };
                let style = if i == self.selected {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(customer.name.clone()),
                    Cell::from(customer.segment.title())
                        .style(Style::default().fg(segment_color)),
                    Cell::from(customer.location.clone()),
                    Cell::from(format!("${}", customer.total_spent)),
                    Cell::from(customer.orders.to_string()),
                    Cell::from(format!("{}/5", customer.satisfaction)),
                ])
                .style(style)
            })
            .collect();

        let filter_label = self.segment_filter.map_or("All", |s| s.title());
        let table = Table::new(
            rows,
            [
                Constraint::Min(20),
                Constraint::Length(8),
                Constraint::Min(16),
                Constraint::Length(8),
                Constraint::Length(7),
                Constraint::Length(5),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Customers ({filter_label})  [f]ilter [n]ew [e]dit [d]elete [x]port "
        )));

        frame.render_widget(table, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn filter_cycles_through_segments_and_back_to_all() {
        let mut section = CustomersSection::new(&crate::domain::repository::DemoRepository);
        let mut ctx = Context::default();

        assert_eq!(section.segment_filter, None);
        for segment in CustomerSegment::ALL {
            section.handle_key(key(KeyCode::Char('f')), &mut ctx);
            assert_eq!(section.segment_filter, Some(segment));
        }
        section.handle_key(key(KeyCode::Char('f')), &mut ctx);
        assert_eq!(section.segment_filter, None);
    }

    #[test]
    fn filter_resets_cursor() {
        let mut section = CustomersSection::new(&crate::domain::repository::DemoRepository);
        let mut ctx = Context::default();

        section.handle_key(key(KeyCode::Down), &mut ctx);
        section.handle_key(key(KeyCode::Char('f')), &mut ctx);
        assert_eq!(section.selected, 0);
    }
}

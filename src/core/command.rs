//! Mutation intents and the sink that receives them
//!
//! The dashboard renders demo data only; create/edit/delete gestures do not
//! mutate fixtures. They are surfaced as explicit `DashboardCommand` values
//! handed to a `CommandSink`, so a real backend can be attached later and
//! tests can assert that a gesture produced the expected intent.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::model::Platform;

/// Intent produced by a user gesture in one of the sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardCommand {
    ConnectAccount { platform: Platform, username: String },
    CreateCampaign,
    EditCampaign { id: String },
    DeleteCampaign { id: String },
    CreateCustomer,
    EditCustomer { id: String },
    DeleteCustomer { id: String },
    SchedulePost,
    EditPost { id: String },
    DeletePost { id: String },
    InviteUser,
    EditUser { id: String },
    DeleteUser { id: String },
}

impl DashboardCommand {
    /// Short human label used in acknowledgement toasts
    pub fn describe(&self) -> String {
        match self {
            DashboardCommand::ConnectAccount { platform, username } => {
                format!("connect {} account {username}", platform.title())
            }
            DashboardCommand::CreateCampaign => "create campaign".to_string(),
            DashboardCommand::EditCampaign { id } => format!("edit campaign {id}"),
            DashboardCommand::DeleteCampaign { id } => format!("delete campaign {id}"),
            DashboardCommand::CreateCustomer => "create customer".to_string(),
            DashboardCommand::EditCustomer { id } => format!("edit customer {id}"),
            DashboardCommand::DeleteCustomer { id } => format!("delete customer {id}"),
            DashboardCommand::SchedulePost => "schedule post".to_string(),
            DashboardCommand::EditPost { id } => format!("edit post {id}"),
            DashboardCommand::DeletePost { id } => format!("delete post {id}"),
            DashboardCommand::InviteUser => "invite user".to_string(),
            DashboardCommand::EditUser { id } => format!("edit user {id}"),
            DashboardCommand::DeleteUser { id } => format!("delete user {id}"),
        }
    }
}

/// Receiver of mutation intents
pub trait CommandSink {
    fn submit(&mut self, command: DashboardCommand);
}

/// Default sink: accepts and discards every command
#[derive(Debug, Default)]
pub struct NoopSink;

impl CommandSink for NoopSink {
    fn submit(&mut self, _command: DashboardCommand) {}
}

/// Sink that keeps every submitted command, for tests and demos
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub commands: Vec<DashboardCommand>,
}

impl CommandSink for RecordingSink {
    fn submit(&mut self, command: DashboardCommand) {
        self.commands.push(command);
    }
}

/// Recording sink with a shared buffer. Clones observe the same buffer,
/// so a test can keep one handle while the context owns the other.
#[derive(Debug, Default, Clone)]
pub struct SharedSink {
    commands: Rc<RefCell<Vec<DashboardCommand>>>,
}

impl SharedSink {
    pub fn drain(&self) -> Vec<DashboardCommand> {
        self.commands.borrow_mut().drain(..).collect()
    }
}

impl CommandSink for SharedSink {
    fn submit(&mut self, command: DashboardCommand) {
        self.commands.borrow_mut().push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_submission_order() {
        let mut sink = RecordingSink::default();
        sink.submit(DashboardCommand::CreateCampaign);
        sink.submit(DashboardCommand::DeletePost {
            id: "3".to_string(),
        });

        assert_eq!(
            sink.commands,
            vec![
                DashboardCommand::CreateCampaign,
                DashboardCommand::DeletePost {
                    id: "3".to_string()
                },
            ]
        );
        assert_eq!(sink.commands[1].describe(), "delete post 3");
    }
}

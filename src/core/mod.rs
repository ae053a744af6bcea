//! Core glue: actions, commands, shared context, toasts, shortcuts

pub mod action;
pub mod command;
pub mod context;
pub mod module;
pub mod shortcut;
pub mod toast;

pub use action::Action;
pub use command::{CommandSink, DashboardCommand, NoopSink, RecordingSink, SharedSink};
pub use context::Context;
pub use module::Module;
pub use shortcut::ShortcutDispatcher;
pub use toast::{ToastKind, ToastQueue, ToastRecord};

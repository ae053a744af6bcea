//! Actions that section modules return to communicate with the app

use crate::core::toast::ToastKind;
use crate::domain::model::ExportFormat;

/// Actions returned by modules to communicate state changes
#[derive(Debug, Clone)]
pub enum Action {
    /// No action needed
    None,

    /// Show a toast
    Notify(String, ToastKind),

    /// Export the module's list data in the given format
    ExportList(ExportFormat),

    /// Request quit
    Quit,
}

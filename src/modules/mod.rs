//! Feature modules: the overview panel, the sidebar sections, and export

pub mod export;
pub mod overview;
pub mod sections;

//! Domain types, fixtures, and repository seams

pub mod fixtures;
pub mod model;
pub mod repository;

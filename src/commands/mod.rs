//! CLI commands for campus-nav

pub mod dispatch;
pub mod interactive;
pub mod locations;
pub mod map;
pub mod path;

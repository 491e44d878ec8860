//! View state: theme, notifications, form input and collection snapshots.

pub mod forms;
pub mod notice;
pub mod snapshot;
pub mod theme;

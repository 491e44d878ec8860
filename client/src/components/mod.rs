//! Reusable page sections and widgets.

pub mod about;
pub mod blog;
pub mod contact;
pub mod field;
pub mod footer;
pub mod header;
pub mod hero;
pub mod notice;
pub mod projects;
pub mod services;
pub mod theme_toggle;

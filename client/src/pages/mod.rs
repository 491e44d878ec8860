//! Full pages: the public home page and the admin area.

pub mod add_blog;
pub mod add_project;
pub mod admin_layout;
pub mod dashboard;
pub mod home;

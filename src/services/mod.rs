//! Request-independent workflows behind the HTML routes.

pub mod contact;
pub mod submission;

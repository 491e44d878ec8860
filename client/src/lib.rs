//! # client
//!
//! Leptos components and view state for the portfolio site.
//!
//! Pages are rendered on the server (`ssr` feature) and shipped as plain HTML.
//! Forms post back to the server; the only browser-side behavior is the small
//! script under `static/` that previews a selected image.

pub mod components;
pub mod content;
pub mod document;
pub mod model;
pub mod pages;
pub mod state;
pub mod util;

//! Shared application state handed to every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! One repository per collection, both reading from the same document store,
//! plus the media host used by the admin forms and the contact sink used by
//! the contact form. Everything is behind `Arc` so cloning per request is cheap.

use std::sync::Arc;

use client::model::{BlogPost, Project};

use crate::media::MediaHost;
use crate::repo::Repository;
use crate::services::contact::ContactSink;
use crate::store::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub projects: Repository<Project>,
    pub blogs: Repository<BlogPost>,
    pub media: Arc<dyn MediaHost>,
    pub contact: Arc<dyn ContactSink>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, media: Arc<dyn MediaHost>, contact: Arc<dyn ContactSink>) -> Self {
        Self {
            projects: Repository::new(store.clone()),
            blogs: Repository::new(store),
            media,
            contact,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

//! Transient notifications ("toasts").
//!
//! A notice is carried across a redirect as a short slug in a one-shot
//! cookie, so only fixed messages are representable.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Every notification the site can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    ProjectAdded,
    ProjectFailed,
    ProjectImageMissing,
    BlogAdded,
    BlogFailed,
    BlogImageMissing,
    ContactSent,
    ContactFailed,
}

impl Notice {
    const ALL: [Self; 8] = [
        Self::ProjectAdded,
        Self::ProjectFailed,
        Self::ProjectImageMissing,
        Self::BlogAdded,
        Self::BlogFailed,
        Self::BlogImageMissing,
        Self::ContactSent,
        Self::ContactFailed,
    ];

    #[must_use]
    pub fn kind(self) -> NoticeKind {
        match self {
            Self::ProjectAdded | Self::BlogAdded | Self::ContactSent => NoticeKind::Success,
            Self::ProjectFailed
            | Self::ProjectImageMissing
            | Self::BlogFailed
            | Self::BlogImageMissing
            | Self::ContactFailed => NoticeKind::Error,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::ProjectAdded => "Project added successfully!",
            Self::ProjectFailed => "Failed to add project. Please try again.",
            Self::ProjectImageMissing => "Please select an image for the project",
            Self::BlogAdded => "Blog post added successfully!",
            Self::BlogFailed => "Failed to add blog post. Please try again.",
            Self::BlogImageMissing => "Please select an image for the blog post",
            Self::ContactSent => "Message sent successfully! I'll get back to you soon.",
            Self::ContactFailed => "Failed to send message. Please try again.",
        }
    }

    /// Cookie-safe slug.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::ProjectAdded => "project-added",
            Self::ProjectFailed => "project-failed",
            Self::ProjectImageMissing => "project-image-missing",
            Self::BlogAdded => "blog-added",
            Self::BlogFailed => "blog-failed",
            Self::BlogImageMissing => "blog-image-missing",
            Self::ContactSent => "contact-sent",
            Self::ContactFailed => "contact-failed",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.slug() == slug)
    }
}

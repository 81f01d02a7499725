//! Mock post composer behind the share page.
//!
//! Nothing is sent anywhere: submitting validates the draft, reports a
//! notice, and resets the form.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use crate::data::share::{DEFAULT_CATEGORY, DEMO_UPLOAD_IMAGE};

/// Toast-style feedback after a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub error: bool,
}

pub const EMPTY_CONTENT_NOTICE: Notice = Notice {
    title: "Please add some content",
    description: "Your post needs at least some text to share with the community.",
    error: true,
};

pub const SHARED_NOTICE: Notice = Notice {
    title: "Post shared! 🎉",
    description: "Your post has been shared with the community.",
    error: false,
};

/// The notice currently on screen, tagged so a stale dismiss timer cannot
/// clear a newer notice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    notice: Option<Notice>,
    generation: u64,
}

impl NoticeSlot {
    pub fn current(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Replace the visible notice. Returns the token its dismiss timer
    /// passes back to `dismiss`.
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.notice = Some(notice);
        self.generation
    }

    /// Clear the notice if it is still the one `token` was issued for.
    pub fn dismiss(&mut self, token: u64) {
        if token == self.generation {
            self.notice = None;
        }
    }
}

/// Editable share form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareDraft {
    pub category: &'static str,
    pub content: String,
    pub location: String,
    pub tags: String,
    pub images: Vec<&'static str>,
}

impl Default for ShareDraft {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY,
            content: String::new(),
            location: String::new(),
            tags: String::new(),
            images: Vec::new(),
        }
    }
}

impl ShareDraft {
    /// Simulated upload: attaches the demo photo.
    pub fn add_demo_image(&mut self) {
        self.images.push(DEMO_UPLOAD_IMAGE);
    }

    /// Remove the image at `index`; out-of-range indices are ignored.
    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    /// Validate and "share". On success the draft is reset.
    pub fn submit(&mut self) -> Notice {
        if self.content.trim().is_empty() {
            return EMPTY_CONTENT_NOTICE;
        }
        *self = Self::default();
        SHARED_NOTICE
    }
}

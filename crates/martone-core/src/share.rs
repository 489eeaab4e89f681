//! Social share links and the collapsible share sidebar.

use crate::error::AttributeError;
use std::str::FromStr;

pub const SHARE_WINDOW_NAME: &str = "share";
pub const SHARE_WINDOW_FEATURES: &str = "width=600,height=400,scrollbars=yes,resizable=yes";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SharePlatform {
    Facebook,
    Twitter,
    LinkedIn,
}

impl FromStr for SharePlatform {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "facebook" => Ok(SharePlatform::Facebook),
            "twitter" => Ok(SharePlatform::Twitter),
            "linkedin" => Ok(SharePlatform::LinkedIn),
            other => Err(AttributeError::UnknownPlatform(other.to_string())),
        }
    }
}

impl SharePlatform {
    /// Share URL for `page_url`; `title` is only used where the platform
    /// accepts prefilled text.
    pub fn share_url(self, page_url: &str, title: &str) -> String {
        let url = urlencoding::encode(page_url);
        match self {
            SharePlatform::Facebook => {
                format!("https://www.facebook.com/sharer/sharer.php?u={url}")
            }
            SharePlatform::Twitter => format!(
                "https://twitter.com/intent/tweet?url={url}&text={}",
                urlencoding::encode(title)
            ),
            SharePlatform::LinkedIn => {
                format!("https://www.linkedin.com/sharing/share-offsite/?url={url}")
            }
        }
    }
}

/// Expanded/collapsed flag of the share sidebar.
#[derive(Debug, Default)]
pub struct SocialSidebar {
    expanded: bool,
}

impl SocialSidebar {
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

//! Target social platforms.

use serde::{Deserialize, Serialize};

/// Short-form video platform a prompt is written for.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use storyroom_core::Platform;
///
/// let platform = Platform::from_str("tiktok").unwrap();
/// assert_eq!(platform, Platform::Tiktok);
/// assert_eq!(platform.display_name(), "TikTok");
/// assert_eq!(platform.aspect_ratio(), "9:16");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Platform {
    /// TikTok
    Tiktok,
    /// Instagram Reels
    Instagram,
    /// YouTube Shorts
    YoutubeShorts,
    /// Facebook Reels
    Facebook,
    /// Snapchat Spotlight
    Snapchat,
}

impl Platform {
    /// Human-readable platform name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Tiktok => "TikTok",
            Platform::Instagram => "Instagram Reels",
            Platform::YoutubeShorts => "YouTube Shorts",
            Platform::Facebook => "Facebook Reels",
            Platform::Snapchat => "Snapchat Spotlight",
        }
    }

    /// Frame aspect ratio the platform's feed is built around.
    pub fn aspect_ratio(&self) -> &'static str {
        "9:16"
    }

    /// Clip length that performs well on the platform, in seconds.
    pub fn recommended_duration_secs(&self) -> u32 {
        match self {
            Platform::Tiktok | Platform::Instagram | Platform::Facebook => 15,
            Platform::YoutubeShorts => 20,
            Platform::Snapchat => 10,
        }
    }

    /// One-line description used when telling a model who it is writing for.
    pub fn summary(&self) -> String {
        format!(
            "{} ({} vertical, ~{}s)",
            self.display_name(),
            self.aspect_ratio(),
            self.recommended_duration_secs()
        )
    }
}

//! Names of the creative-expert personas that sit at the roundtable.

use serde::{Deserialize, Serialize};

/// Closed set of persona roles.
///
/// The behavioural contract for each role lives in the persona registry
/// (`storyroom_roundtable::personas`); this enum is only the identity.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use storyroom_core::PersonaName;
///
/// assert_eq!(PersonaName::PlatformExpert.to_string(), "platform_expert");
/// assert_eq!(PersonaName::from_str("music_producer").unwrap(), PersonaName::MusicProducer);
/// assert_eq!(PersonaName::ROUND_ONE.len(), 5);
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
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PersonaName {
    /// Owns the creative vision and narrative arc
    Director,
    /// Owns camera, lens, lighting and movement
    PhotographyDirector,
    /// Owns platform-native format, pacing and algorithm fit
    PlatformExpert,
    /// Owns hooks, shareability and hashtags
    SocialMediaMarketer,
    /// Owns music, sound design and audio pacing
    MusicProducer,
    /// Owns on-screen performance, blocking and expression
    SubjectDirector,
}

impl PersonaName {
    /// Personas invited to round one by default.
    pub const ROUND_ONE: [PersonaName; 5] = [
        PersonaName::Director,
        PersonaName::PhotographyDirector,
        PersonaName::PlatformExpert,
        PersonaName::SocialMediaMarketer,
        PersonaName::MusicProducer,
    ];

    /// Personas the round-two protocol addresses by name.
    pub const ROUND_TWO_REQUIRED: [PersonaName; 3] = [
        PersonaName::Director,
        PersonaName::PlatformExpert,
        PersonaName::SocialMediaMarketer,
    ];
}

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::error::TagError;

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-z0-9_.-]+:[a-z0-9_-]+/[A-Za-z0-9_-]+$").expect("invalid regex")
    })
}

/// Namespaced extension type tag: `namespace:extension/Type`.
///
/// Namespace is `[a-z0-9_.-]+`, extension name `[a-z0-9_-]+`; only the
/// type part may contain uppercase letters. Example: `pub.versia:likes/Like`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExtensionTag {
    tag: String,
    colon: usize,
    slash: usize,
}

impl ExtensionTag {
    /// Parses and validates an extension type tag.
    pub fn parse(value: impl Into<String>) -> Result<Self, TagError> {
        let tag = value.into();
        let positions = tag.find(':').zip(tag.find('/'));
        match positions {
            Some((colon, slash)) if tag_pattern().is_match(&tag) => Ok(Self { tag, colon, slash }),
            _ => Err(TagError::InvalidExtensionTag(tag)),
        }
    }

    /// Namespace part, e.g. `pub.versia`.
    pub fn namespace(&self) -> &str {
        &self.tag[..self.colon]
    }

    /// Extension name, e.g. `likes`.
    pub fn extension(&self) -> &str {
        &self.tag[self.colon + 1..self.slash]
    }

    /// Type name within the extension, e.g. `Like`.
    pub fn name(&self) -> &str {
        &self.tag[self.slash + 1..]
    }

    /// Full tag text.
    pub fn as_str(&self) -> &str {
        &self.tag
    }
}

impl TryFrom<String> for ExtensionTag {
    type Error = TagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ExtensionTag> for String {
    fn from(tag: ExtensionTag) -> Self {
        tag.tag
    }
}

impl fmt::Display for ExtensionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

/// Extension entity kinds understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionKind {
    /// `pub.versia:likes/Like`
    Like,
    /// `pub.versia:likes/Dislike`
    Dislike,
    /// `pub.versia:groups/Group`
    Group,
    /// `pub.versia:groups/Subscribe`
    GroupSubscribe,
    /// `pub.versia:groups/Unsubscribe`
    GroupUnsubscribe,
    /// `pub.versia:groups/SubscribeAccept`
    GroupSubscribeAccept,
    /// `pub.versia:groups/SubscribeReject`
    GroupSubscribeReject,
    /// `pub.versia:reactions/Reaction`
    Reaction,
    /// `pub.versia:share/Share`
    Share,
    /// `pub.versia:polls/Vote`
    Vote,
}

impl ExtensionKind {
    /// Every known extension kind.
    pub const ALL: [ExtensionKind; 10] = [
        ExtensionKind::Like,
        ExtensionKind::Dislike,
        ExtensionKind::Group,
        ExtensionKind::GroupSubscribe,
        ExtensionKind::GroupUnsubscribe,
        ExtensionKind::GroupSubscribeAccept,
        ExtensionKind::GroupSubscribeReject,
        ExtensionKind::Reaction,
        ExtensionKind::Share,
        ExtensionKind::Vote,
    ];

    /// Wire tag of this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ExtensionKind::Like => "pub.versia:likes/Like",
            ExtensionKind::Dislike => "pub.versia:likes/Dislike",
            ExtensionKind::Group => "pub.versia:groups/Group",
            ExtensionKind::GroupSubscribe => "pub.versia:groups/Subscribe",
            ExtensionKind::GroupUnsubscribe => "pub.versia:groups/Unsubscribe",
            ExtensionKind::GroupSubscribeAccept => "pub.versia:groups/SubscribeAccept",
            ExtensionKind::GroupSubscribeReject => "pub.versia:groups/SubscribeReject",
            ExtensionKind::Reaction => "pub.versia:reactions/Reaction",
            ExtensionKind::Share => "pub.versia:share/Share",
            ExtensionKind::Vote => "pub.versia:polls/Vote",
        }
    }

    /// Looks up a known kind by its parsed tag.
    pub fn from_tag(tag: &ExtensionTag) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag.as_str())
    }
}

/// Entity kinds understood by the dispatcher, keyed by the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// `Note`
    Note,
    /// `User`
    User,
    /// `Follow`
    Follow,
    /// `FollowAccept`
    FollowAccept,
    /// `FollowReject`
    FollowReject,
    /// `Unfollow`
    Unfollow,
    /// `Delete`
    Delete,
    /// `InstanceMetadata`
    InstanceMetadata,
    /// A namespaced extension kind.
    Extension(ExtensionKind),
}

impl EntityKind {
    /// Wire tag of this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            EntityKind::Note => "Note",
            EntityKind::User => "User",
            EntityKind::Follow => "Follow",
            EntityKind::FollowAccept => "FollowAccept",
            EntityKind::FollowReject => "FollowReject",
            EntityKind::Unfollow => "Unfollow",
            EntityKind::Delete => "Delete",
            EntityKind::InstanceMetadata => "InstanceMetadata",
            EntityKind::Extension(kind) => kind.tag(),
        }
    }

    /// Maps a `type` value to a known kind.
    ///
    /// Returns `None` for anything unrecognized, including well-formed
    /// extension tags of extensions this crate does not know.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "Note" => EntityKind::Note,
            "User" => EntityKind::User,
            "Follow" => EntityKind::Follow,
            "FollowAccept" => EntityKind::FollowAccept,
            "FollowReject" => EntityKind::FollowReject,
            "Unfollow" => EntityKind::Unfollow,
            "Delete" => EntityKind::Delete,
            "InstanceMetadata" => EntityKind::InstanceMetadata,
            other => {
                let tag = ExtensionTag::parse(other).ok()?;
                EntityKind::Extension(ExtensionKind::from_tag(&tag)?)
            }
        };
        Some(kind)
    }

    /// Whether this is a namespaced extension kind.
    pub fn is_extension(&self) -> bool {
        matches!(self, EntityKind::Extension(_))
    }
}

impl From<ExtensionKind> for EntityKind {
    fn from(kind: ExtensionKind) -> Self {
        EntityKind::Extension(kind)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

//! Typed shapes of validated federation entities.
//!
//! Fields mirror the Versia wire format in snake_case. Structural checks
//! stop at required fields and JSON types; richer semantics belong to the
//! validator that produces them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::kind::{EntityKind, ExtensionKind};

/// Content in one or more media types, e.g. `{"text/plain": {...}}`.
pub type ContentFormat = Map<String, Value>;

/// Extension data keyed by extension tag.
pub type Extensions = Map<String, Value>;

/// Public key attached to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorPublicKey {
    /// URI of the actor owning the key.
    pub actor: String,
    /// Signature algorithm, `ed25519` in practice.
    pub algorithm: String,
    /// Base64 SPKI key material.
    pub key: String,
}

/// Public key of an instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstancePublicKey {
    /// Signature algorithm.
    pub algorithm: String,
    /// Base64 SPKI key material.
    pub key: String,
}

/// A post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Entity identifier, unique per origin instance.
    pub id: String,
    /// Canonical URI of the entity.
    pub uri: String,
    /// RFC 3339 creation time.
    pub created_at: String,
    /// URI of the authoring user.
    pub author: String,
    /// Body in one or more media types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentFormat>,
    /// Attached media.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<ContentFormat>>,
    /// Named collection URIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Map<String, Value>>,
    /// Group the note was posted to, or a visibility keyword.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Whether the content is marked sensitive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sensitive: Option<bool>,
    /// URIs of mentioned users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<String>>,
    /// URI of the quoted note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotes: Option<String>,
    /// URI of the note this replies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies_to: Option<String>,
    /// Content warning or subject line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Extension data keyed by extension tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

/// An account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Entity identifier, unique per origin instance.
    pub id: String,
    /// Canonical URI of the entity.
    pub uri: String,
    /// RFC 3339 creation time.
    pub created_at: String,
    /// Local username.
    pub username: String,
    /// Inbox URI.
    pub inbox: String,
    /// Key used to verify signed requests.
    pub public_key: ActorPublicKey,
    /// Named collection URIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Map<String, Value>>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Profile text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<ContentFormat>,
    /// Avatar image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<ContentFormat>,
    /// Header image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<ContentFormat>,
    /// Profile key/value fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Value>>,
    /// Whether search engines may index the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexable: Option<bool>,
    /// Whether follows need explicit approval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manually_approves_followers: Option<bool>,
    /// Extension data keyed by extension tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

/// A follow request from `author` to `followee`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Follow {
    /// Entity identifier, unique per origin instance.
    pub id: String,
    /// RFC 3339 creation time.
    pub created_at: String,
    /// URI of the authoring user.
    pub author: String,
    /// URI of the user being followed.
    pub followee: String,
    /// Canonical URI of the entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// `author` accepted or rejected a follow from `follower`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowResponse {
    /// Entity identifier, unique per origin instance.
    pub id: String,
    /// RFC 3339 creation time.
    pub created_at: String,
    /// URI of the authoring user.
    pub author: String,
    /// URI of the user who sent the follow.
    pub follower: String,
    /// Canonical URI of the entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// `author` stopped following `followee`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unfollow {
    /// Entity identifier, unique per origin instance.
    pub id: String,
    /// RFC 3339 creation time.
    pub created_at: String,
    /// URI of the authoring user.
    pub author: String,
    /// URI of the user being followed.
    pub followee: String,
    /// Canonical URI of the entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Deletion of a previously federated entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delete {
    /// Entity identifier, unique per origin instance.
    pub id: String,
    /// RFC 3339 creation time.
    pub created_at: String,
    /// Type of the deleted entity.
    pub deleted_type: String,
    /// URI of the deleted entity.
    pub deleted: String,
    /// URI of the authoring user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Canonical URI of the entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Software an instance runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Software {
    /// Software name.
    pub name: String,
    /// Version string.
    pub version: String,
}

/// Protocol versions and extensions an instance supports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compatibility {
    /// Supported protocol versions.
    pub versions: Vec<String>,
    /// Supported extension tags.
    pub extensions: Vec<String>,
}

/// Instance description document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceMetadata {
    /// RFC 3339 creation time.
    pub created_at: String,
    /// Display name.
    pub name: String,
    /// Hostname of the instance.
    pub host: String,
    /// Software the instance runs.
    pub software: Software,
    /// Supported versions and extensions.
    pub compatibility: Compatibility,
    /// Key used to verify signed requests.
    pub public_key: InstancePublicKey,
    /// Description text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Shared inbox URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_inbox: Option<String>,
    /// URI of the moderators collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderators: Option<String>,
    /// URI of the admins collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admins: Option<String>,
    /// Logo image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ContentFormat>,
    /// Banner image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<ContentFormat>,
    /// Extension data keyed by extension tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

/// `pub.versia:likes/Like`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    /// Entity identifier, unique per origin instance.
    pub id: String,
    /// Canonical URI of the entity.
    pub uri: String,
    /// RFC 3339 creation time.
    pub created_at: String,
    /// URI of the authoring user.
    pub author: String,
    /// URI of the liked entity.
    pub liked: String,
}

/// `pub.versia:likes/Dislike`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dislike {
    /// Entity identifier, unique per origin instance.
    pub id: String,
    /// Canonical URI of the entity.
    pub uri: String,
    /// RFC 3339 creation time.
    pub created_at: String,
    /// URI of the authoring user.
    pub author: String,
    /// URI of the disliked entity.
    pub disliked: String,
}

/// `pub.versia:groups/Group`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Entity identifier, unique per origin instance.
    pub id: String,
    /// Canonical URI of the entity.
    pub uri: String,
    /// RFC 3339 creation time.
    pub created_at: String,
    /// URI of the members collection.
    pub members: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<ContentFormat>,
    /// Description text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<ContentFormat>,
    /// Whether anyone may join without approval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    /// URI of the notes collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Subscription traffic between a user and a group.
///
/// Shared by the subscribe, unsubscribe and subscribe accept/reject kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSubscription {
    /// Entity identifier, unique per origin instance.
    pub id: String,
    /// RFC 3339 creation time.
    pub created_at: String,
    /// URI of the subscribing user.
    pub subscriber: String,
    /// URI of the group.
    pub group: String,
    /// Canonical URI of the entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// `pub.versia:reactions/Reaction`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// Entity identifier, unique per origin instance.
    pub id: String,
    /// Canonical URI of the entity.
    pub uri: String,
    /// RFC 3339 creation time.
    pub created_at: String,
    /// URI of the authoring user.
    pub author: String,
    /// URI of the entity reacted to.
    pub object: String,
    /// Emoji or shortcode.
    pub content: String,
}

/// `pub.versia:share/Share`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    /// Entity identifier, unique per origin instance.
    pub id: String,
    /// Canonical URI of the entity.
    pub uri: String,
    /// RFC 3339 creation time.
    pub created_at: String,
    /// URI of the authoring user.
    pub author: String,
    /// URI of the shared note.
    pub shared: String,
}

/// `pub.versia:polls/Vote`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    /// Entity identifier, unique per origin instance.
    pub id: String,
    /// Canonical URI of the entity.
    pub uri: String,
    /// RFC 3339 creation time.
    pub created_at: String,
    /// URI of the authoring user.
    pub author: String,
    /// URI of the poll note.
    pub poll: String,
    /// Index of the chosen option.
    pub option: u64,
}

/// A validated entity, discriminated by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    /// `Note`
    Note(Note),
    /// `User`
    User(User),
    /// `Follow`
    Follow(Follow),
    /// `FollowAccept`
    FollowAccept(FollowResponse),
    /// `FollowReject`
    FollowReject(FollowResponse),
    /// `Unfollow`
    Unfollow(Unfollow),
    /// `Delete`
    Delete(Delete),
    /// `InstanceMetadata`
    InstanceMetadata(InstanceMetadata),
    /// `pub.versia:likes/Like`
    Like(Like),
    /// `pub.versia:likes/Dislike`
    Dislike(Dislike),
    /// `pub.versia:groups/Group`
    Group(Group),
    /// `pub.versia:groups/Subscribe`
    GroupSubscribe(GroupSubscription),
    /// `pub.versia:groups/Unsubscribe`
    GroupUnsubscribe(GroupSubscription),
    /// `pub.versia:groups/SubscribeAccept`
    GroupSubscribeAccept(GroupSubscription),
    /// `pub.versia:groups/SubscribeReject`
    GroupSubscribeReject(GroupSubscription),
    /// `pub.versia:reactions/Reaction`
    Reaction(Reaction),
    /// `pub.versia:share/Share`
    Share(Share),
    /// `pub.versia:polls/Vote`
    Vote(Vote),
}

impl Entity {
    /// Kind of this entity.
    pub fn kind(&self) -> EntityKind {
        use ExtensionKind as X;
        match self {
            Entity::Note(_) => EntityKind::Note,
            Entity::User(_) => EntityKind::User,
            Entity::Follow(_) => EntityKind::Follow,
            Entity::FollowAccept(_) => EntityKind::FollowAccept,
            Entity::FollowReject(_) => EntityKind::FollowReject,
            Entity::Unfollow(_) => EntityKind::Unfollow,
            Entity::Delete(_) => EntityKind::Delete,
            Entity::InstanceMetadata(_) => EntityKind::InstanceMetadata,
            Entity::Like(_) => X::Like.into(),
            Entity::Dislike(_) => X::Dislike.into(),
            Entity::Group(_) => X::Group.into(),
            Entity::GroupSubscribe(_) => X::GroupSubscribe.into(),
            Entity::GroupUnsubscribe(_) => X::GroupUnsubscribe.into(),
            Entity::GroupSubscribeAccept(_) => X::GroupSubscribeAccept.into(),
            Entity::GroupSubscribeReject(_) => X::GroupSubscribeReject.into(),
            Entity::Reaction(_) => X::Reaction.into(),
            Entity::Share(_) => X::Share.into(),
            Entity::Vote(_) => X::Vote.into(),
        }
    }

    /// Deserializes `value` into the typed shape of `kind`.
    ///
    /// Does not look at the `type` field.
    pub fn from_value(kind: EntityKind, value: Value) -> Result<Self, serde_json::Error> {
        use ExtensionKind as X;
        let entity = match kind {
            EntityKind::Note => Entity::Note(typed(value)?),
            EntityKind::User => Entity::User(typed(value)?),
            EntityKind::Follow => Entity::Follow(typed(value)?),
            EntityKind::FollowAccept => Entity::FollowAccept(typed(value)?),
            EntityKind::FollowReject => Entity::FollowReject(typed(value)?),
            EntityKind::Unfollow => Entity::Unfollow(typed(value)?),
            EntityKind::Delete => Entity::Delete(typed(value)?),
            EntityKind::InstanceMetadata => Entity::InstanceMetadata(typed(value)?),
            EntityKind::Extension(ext) => match ext {
                X::Like => Entity::Like(typed(value)?),
                X::Dislike => Entity::Dislike(typed(value)?),
                X::Group => Entity::Group(typed(value)?),
                X::GroupSubscribe => Entity::GroupSubscribe(typed(value)?),
                X::GroupUnsubscribe => Entity::GroupUnsubscribe(typed(value)?),
                X::GroupSubscribeAccept => Entity::GroupSubscribeAccept(typed(value)?),
                X::GroupSubscribeReject => Entity::GroupSubscribeReject(typed(value)?),
                X::Reaction => Entity::Reaction(typed(value)?),
                X::Share => Entity::Share(typed(value)?),
                X::Vote => Entity::Vote(typed(value)?),
            },
        };
        Ok(entity)
    }
}

fn typed<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(value)
}

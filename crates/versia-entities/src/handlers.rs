use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;
use std::future::Future;

use crate::entities::{
    Delete, Dislike, Entity, Follow, FollowResponse, Group, GroupSubscription, InstanceMetadata,
    Like, Note, Reaction, Share, Unfollow, User, Vote,
};

type Handler<'a, T, R> = Box<dyn FnOnce(T) -> BoxFuture<'a, R> + Send + 'a>;

macro_rules! handler_table {
    ($($(#[$doc:meta])* $field:ident, $setter:ident: $variant:ident($ty:ty);)*) => {
        /// Per-kind handlers for one dispatch.
        ///
        /// Every slot is optional. At most one handler runs per dispatch, so
        /// handlers are `FnOnce` and the table is consumed by it.
        pub struct Handlers<'a, R> {
            $($field: Option<Handler<'a, $ty, R>>,)*
            unknown: Option<Handler<'a, Value, R>>,
        }

        impl<'a, R> Handlers<'a, R> {
            /// Empty table.
            pub fn new() -> Self {
                Self {
                    $($field: None,)*
                    unknown: None,
                }
            }

            $(
                $(#[$doc])*
                pub fn $setter<F, Fut>(mut self, handler: F) -> Self
                where
                    F: FnOnce($ty) -> Fut + Send + 'a,
                    Fut: Future<Output = R> + Send + 'a,
                {
                    self.$field = Some(Box::new(move |entity| handler(entity).boxed()));
                    self
                }
            )*

            /// Runs on bodies whose `type` is not a known kind, with the raw body.
            pub fn on_unknown<F, Fut>(mut self, handler: F) -> Self
            where
                F: FnOnce(Value) -> Fut + Send + 'a,
                Fut: Future<Output = R> + Send + 'a,
            {
                self.unknown = Some(Box::new(move |body| handler(body).boxed()));
                self
            }

            pub(crate) fn route(self, entity: Entity) -> Option<BoxFuture<'a, R>> {
                match entity {
                    $(Entity::$variant(inner) => self.$field.map(|handler| handler(inner)),)*
                }
            }

            pub(crate) fn route_unknown(self, body: Value) -> Option<BoxFuture<'a, R>> {
                self.unknown.map(|handler| handler(body))
            }
        }
    };
}

handler_table! {
    /// Runs on `Note` bodies.
    note, on_note: Note(Note);
    /// Runs on `User` bodies.
    user, on_user: User(User);
    /// Runs on `Follow` bodies.
    follow, on_follow: Follow(Follow);
    /// Runs on `FollowAccept` bodies.
    follow_accept, on_follow_accept: FollowAccept(FollowResponse);
    /// Runs on `FollowReject` bodies.
    follow_reject, on_follow_reject: FollowReject(FollowResponse);
    /// Runs on `Unfollow` bodies.
    unfollow, on_unfollow: Unfollow(Unfollow);
    /// Runs on `Delete` bodies.
    delete, on_delete: Delete(Delete);
    /// Runs on `InstanceMetadata` bodies.
    instance_metadata, on_instance_metadata: InstanceMetadata(InstanceMetadata);
    /// Runs on `pub.versia:likes/Like` bodies.
    like, on_like: Like(Like);
    /// Runs on `pub.versia:likes/Dislike` bodies.
    dislike, on_dislike: Dislike(Dislike);
    /// Runs on `pub.versia:groups/Group` bodies.
    group, on_group: Group(Group);
    /// Runs on `pub.versia:groups/Subscribe` bodies.
    group_subscribe, on_group_subscribe: GroupSubscribe(GroupSubscription);
    /// Runs on `pub.versia:groups/Unsubscribe` bodies.
    group_unsubscribe, on_group_unsubscribe: GroupUnsubscribe(GroupSubscription);
    /// Runs on `pub.versia:groups/SubscribeAccept` bodies.
    group_subscribe_accept, on_group_subscribe_accept: GroupSubscribeAccept(GroupSubscription);
    /// Runs on `pub.versia:groups/SubscribeReject` bodies.
    group_subscribe_reject, on_group_subscribe_reject: GroupSubscribeReject(GroupSubscription);
    /// Runs on `pub.versia:reactions/Reaction` bodies.
    reaction, on_reaction: Reaction(Reaction);
    /// Runs on `pub.versia:share/Share` bodies.
    share, on_share: Share(Share);
    /// Runs on `pub.versia:polls/Vote` bodies.
    vote, on_vote: Vote(Vote);
}

impl<R> Default for Handlers<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}

//! Per-kind capability descriptors.
//!
//! The six entity kinds share one search algorithm. What differs between them
//! is data, captured in a [`KindSpec`]:
//!
//! | Kind | Compared fields | Mention | `Name#0000` |
//! |---|---|---|---|
//! | user | name | `<@ID>` | yes |
//! | member | account name, effective name | `<@ID>` | yes (account) |
//! | text channel | name | `<#ID>` | no |
//! | category | name | none | no |
//! | role | name | `<@&ID>` | no |
//! | emote | name | `<:NAME:ID>` | no |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::{Category, Emote, Member, Role, TextChannel, User};
use crate::pattern::MentionSyntax;

/// Field accessor handed to the resolver.
pub type FieldFn<E> = for<'e> fn(&'e E) -> &'e str;

/// Entity kinds the resolver knows how to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Member,
    TextChannel,
    Category,
    Role,
    Emote,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Member => "member",
            EntityKind::TextChannel => "text_channel",
            EntityKind::Category => "category",
            EntityKind::Role => "role",
            EntityKind::Emote => "emote",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to search entities of type `E`.
///
/// Build one with [`KindSpec::new`] and the `with_*` methods to search your
/// own entity types, or use [`Resolvable::spec`] for the built-in models.
///
/// ```
/// use resolver::{EntityKind, KindSpec, MentionSyntax, Role};
///
/// fn role_name(role: &Role) -> &str {
///     &role.name
/// }
///
/// let spec = KindSpec::new(EntityKind::Role, role_name).with_mention(MentionSyntax::Role);
/// assert_eq!(spec.mention, Some(MentionSyntax::Role));
/// ```
pub struct KindSpec<E> {
    pub kind: EntityKind,
    /// Primary compared field; also the name matched by `Name#0000` references.
    pub name: FieldFn<E>,
    /// Secondary compared field, OR-ed with `name` at every tier.
    pub alt_name: Option<FieldFn<E>>,
    pub mention: Option<MentionSyntax>,
    /// Enables `Name#0000` references when present.
    pub discriminator: Option<FieldFn<E>>,
}

impl<E> KindSpec<E> {
    pub fn new(kind: EntityKind, name: FieldFn<E>) -> Self {
        Self {
            kind,
            name,
            alt_name: None,
            mention: None,
            discriminator: None,
        }
    }

    pub fn with_alt_name(mut self, alt_name: FieldFn<E>) -> Self {
        self.alt_name = Some(alt_name);
        self
    }

    pub fn with_mention(mut self, syntax: MentionSyntax) -> Self {
        self.mention = Some(syntax);
        self
    }

    pub fn with_discriminator(mut self, discriminator: FieldFn<E>) -> Self {
        self.discriminator = Some(discriminator);
        self
    }
}

impl<E> Clone for KindSpec<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for KindSpec<E> {}

impl<E> fmt::Debug for KindSpec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindSpec")
            .field("kind", &self.kind)
            .field("alt_name", &self.alt_name.is_some())
            .field("mention", &self.mention)
            .field("discriminator", &self.discriminator.is_some())
            .finish()
    }
}

/// Built-in models that carry their own descriptor.
pub trait Resolvable: Sized {
    fn spec() -> KindSpec<Self>;
}

fn user_name(user: &User) -> &str {
    &user.name
}

fn user_discriminator(user: &User) -> &str {
    &user.discriminator
}

fn member_account_name(member: &Member) -> &str {
    &member.user.name
}

fn member_effective_name(member: &Member) -> &str {
    member.effective_name()
}

fn member_discriminator(member: &Member) -> &str {
    &member.user.discriminator
}

fn text_channel_name(channel: &TextChannel) -> &str {
    &channel.name
}

fn category_name(category: &Category) -> &str {
    &category.name
}

fn role_name(role: &Role) -> &str {
    &role.name
}

fn emote_name(emote: &Emote) -> &str {
    &emote.name
}

impl Resolvable for User {
    fn spec() -> KindSpec<Self> {
        KindSpec::new(EntityKind::User, user_name)
            .with_mention(MentionSyntax::User)
            .with_discriminator(user_discriminator)
    }
}

impl Resolvable for Member {
    fn spec() -> KindSpec<Self> {
        KindSpec::new(EntityKind::Member, member_account_name)
            .with_alt_name(member_effective_name)
            .with_mention(MentionSyntax::User)
            .with_discriminator(member_discriminator)
    }
}

impl Resolvable for TextChannel {
    fn spec() -> KindSpec<Self> {
        KindSpec::new(EntityKind::TextChannel, text_channel_name)
            .with_mention(MentionSyntax::Channel)
    }
}

impl Resolvable for Category {
    fn spec() -> KindSpec<Self> {
        KindSpec::new(EntityKind::Category, category_name)
    }
}

impl Resolvable for Role {
    fn spec() -> KindSpec<Self> {
        KindSpec::new(EntityKind::Role, role_name).with_mention(MentionSyntax::Role)
    }
}

impl Resolvable for Emote {
    fn spec() -> KindSpec<Self> {
        KindSpec::new(EntityKind::Emote, emote_name).with_mention(MentionSyntax::Emote)
    }
}

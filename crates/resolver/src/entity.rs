//! Cached platform entities.
//!
//! These are the read-only shapes a client library hands to the resolver.
//! The resolver only ever reads `id`, `name` and, for accounts, the
//! discriminator and the per-guild nickname.

use serde::{Deserialize, Serialize};

use crate::snowflake::Snowflake;

/// Anything stored in an [`EntityCache`](crate::EntityCache).
pub trait Identified {
    fn id(&self) -> Snowflake;
}

/// A platform account, global across guilds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Snowflake,
    pub name: String,
    /// Four-digit suffix separating accounts that share a name.
    pub discriminator: String,
    #[serde(default)]
    pub bot: bool,
}

impl User {
    pub fn new(
        id: impl Into<Snowflake>,
        name: impl Into<String>,
        discriminator: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            discriminator: discriminator.into(),
            bot: false,
        }
    }

    /// `Name#1234` form of the account.
    pub fn tag(&self) -> String {
        format!("{}#{}", self.name, self.discriminator)
    }
}

/// An account's membership in one guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub guild_id: Snowflake,
    pub user: User,
    /// Guild-local nickname overriding the account name.
    #[serde(default)]
    pub nickname: Option<String>,
}

impl Member {
    pub fn new(guild_id: impl Into<Snowflake>, user: User) -> Self {
        Self {
            guild_id: guild_id.into(),
            user,
            nickname: None,
        }
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Nickname when set, account name otherwise.
    pub fn effective_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.user.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChannel {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub name: String,
    /// Category the channel is filed under, if any.
    #[serde(default)]
    pub parent_id: Option<Snowflake>,
}

impl TextChannel {
    pub fn new(
        id: impl Into<Snowflake>,
        guild_id: impl Into<Snowflake>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            guild_id: guild_id.into(),
            name: name.into(),
            parent_id: None,
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<Snowflake>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}

/// A channel category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub name: String,
}

impl Category {
    pub fn new(
        id: impl Into<Snowflake>,
        guild_id: impl Into<Snowflake>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            guild_id: guild_id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub name: String,
}

impl Role {
    pub fn new(
        id: impl Into<Snowflake>,
        guild_id: impl Into<Snowflake>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            guild_id: guild_id.into(),
            name: name.into(),
        }
    }
}

/// A custom guild emote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emote {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub name: String,
    #[serde(default)]
    pub animated: bool,
}

impl Emote {
    pub fn new(
        id: impl Into<Snowflake>,
        guild_id: impl Into<Snowflake>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            guild_id: guild_id.into(),
            name: name.into(),
            animated: false,
        }
    }

    /// The `<:name:id>` mention that renders this emote.
    pub fn mention(&self) -> String {
        format!("<:{}:{}>", self.name, self.id)
    }
}

impl Identified for User {
    fn id(&self) -> Snowflake {
        self.id
    }
}

/// Members are keyed by their account id.
impl Identified for Member {
    fn id(&self) -> Snowflake {
        self.user.id
    }
}

impl Identified for TextChannel {
    fn id(&self) -> Snowflake {
        self.id
    }
}

impl Identified for Category {
    fn id(&self) -> Snowflake {
        self.id
    }
}

impl Identified for Role {
    fn id(&self) -> Snowflake {
        self.id
    }
}

impl Identified for Emote {
    fn id(&self) -> Snowflake {
        self.id
    }
}

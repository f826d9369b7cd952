//! # Entity resolver (`resolver`)
//!
//! ## Purpose
//!
//! `resolver` turns a free-text argument typed by a chat user (a name, a
//! fragment of a name, a raw id, a mention or a `Name#0000` tag) into the
//! cached entities it most plausibly refers to. Bots use it to accept
//! forgiving command arguments and to build "did you mean" prompts when the
//! answer is ambiguous.
//!
//! The resolver reads snapshots owned by the client library and never mutates
//! them. Results are shared borrows in snapshot order.
//!
//! ## Algorithm
//!
//! 1. Special cases, tried in order, each falling through on a miss:
//!    - the whole query is a 17 to 20 digit id: direct lookup,
//!    - the kind's mention syntax (`<@ID>`, `<#ID>`, `<@&ID>`, `<:NAME:ID>`),
//!    - `Name#0000` for users and members: every entity with that name
//!      (any casing) and discriminator.
//! 2. One forward scan placing each entity in the first open
//!    [`MatchBucket`] it qualifies for: exact, case-insensitive, prefix,
//!    substring. The best non-empty bucket is returned.
//!
//! ## Core Types
//!
//! - [`EntityCache`] and [`CacheUnion`]: snapshot storage and union views,
//!   both readable through [`SnowflakeView`].
//! - [`KindSpec`]: what differs per entity kind; [`Resolvable`] provides it
//!   for the built-in models.
//! - [`Resolution`]: the hits plus the [`Strategy`] that produced them.
//! - [`Guild`], [`Shard`], [`ShardManager`], [`Session`]: lookup scopes.
//!
//! ## Example Usage
//!
//! ```
//! use resolver::{find_roles, Guild, MatchBucket, Role};
//!
//! let mut guild = Guild::new(81384788765712384u64, "rust");
//! guild.roles.insert(Role::new(81384788765712385u64, 81384788765712384u64, "Moderator"));
//! guild.roles.insert(Role::new(81384788765712386u64, 81384788765712384u64, "Mod Mail"));
//!
//! let found = find_roles("mod", &guild);
//! assert_eq!(found.bucket(), Some(MatchBucket::PrefixMatch));
//! assert_eq!(found.len(), 2);
//!
//! let found = find_roles("<@&81384788765712385>", &guild);
//! assert_eq!(found.unique().map(|r| r.name.as_str()), Some("Moderator"));
//! ```
//!
//! ## Observability
//!
//! Every resolution runs inside a `resolver.resolve` tracing span and emits a
//! `resolve_complete` debug event. Install a [`ResolveMetrics`]
//! implementation via [`set_resolve_metrics`] to record latency and hit
//! counts.

pub mod bucket;
pub mod cache;
pub mod directory;
pub mod engine;
pub mod entity;
pub mod error;
pub mod finder;
pub mod kind;
pub mod metrics;
pub mod pattern;
pub mod snowflake;
pub mod types;

pub use crate::bucket::MatchBucket;
pub use crate::cache::{CacheUnion, EntityCache, SnowflakeView};
pub use crate::directory::{Directory, Guild, Session, Shard, ShardManager};
pub use crate::engine::{resolve, resolve_with};
pub use crate::entity::{Category, Emote, Identified, Member, Role, TextChannel, User};
pub use crate::error::ResolverError;
pub use crate::finder::{
    find_categories, find_emotes, find_guild_categories, find_guild_emotes,
    find_guild_text_channels, find_members, find_roles, find_shard_categories, find_shard_emotes,
    find_shard_text_channels, find_shard_users, find_text_channels, find_users,
};
pub use crate::kind::{EntityKind, FieldFn, KindSpec, Resolvable};
pub use crate::metrics::{set_resolve_metrics, ResolveMetrics};
pub use crate::pattern::{parse_user_reference, Mention, MentionSyntax, UserReference};
pub use crate::snowflake::{Snowflake, MAX_ID_DIGITS, MIN_ID_DIGITS};
pub use crate::types::{Resolution, ResolverConfig, Strategy};

//! Workspace umbrella crate for the entity finder.
//!
//! Re-exports the resolver and the option categories behind one dependency,
//! and adds what a bot needs around them at startup: a YAML configuration
//! file and `tracing` initialisation.
//!
//! ```
//! use finder::{FinderConfig, Guild, Resolvable, Role, find_roles, resolve_with};
//!
//! let config = FinderConfig::from_yaml("version: \"1.0\"\nresolver:\n  max_results: 1\n")
//!     .expect("valid config");
//!
//! let mut guild = Guild::new(81384788765712384u64, "rust");
//! guild.roles.insert(Role::new(81384788765712385u64, 81384788765712384u64, "Moderator"));
//! guild.roles.insert(Role::new(81384788765712386u64, 81384788765712384u64, "Mod Mail"));
//!
//! assert_eq!(find_roles("mod", &guild).len(), 2);
//!
//! let capped = resolve_with("mod", &guild.roles, &Role::spec(), &config.resolver_config());
//! assert_eq!(capped.len(), 1);
//! ```

pub mod config;
mod logging;

pub use crate::config::{ConfigLoadError, FinderConfig, LoggingConfig, ResolverYamlConfig};
pub use crate::logging::init_tracing;

pub use options::{OptionCategory, ParseCategoryError, capitalize};
pub use resolver::{
    CacheUnion, Category, Directory, Emote, EntityCache, EntityKind, Guild, Identified, KindSpec,
    MatchBucket, Member, MentionSyntax, Resolution, Resolvable, ResolveMetrics, ResolverConfig,
    ResolverError, Role, Session, Shard, ShardManager, Snowflake, SnowflakeView, Strategy,
    TextChannel, User, find_categories, find_emotes, find_guild_categories, find_guild_emotes,
    find_guild_text_channels, find_members, find_roles, find_shard_categories, find_shard_emotes,
    find_shard_text_channels, find_shard_users, find_text_channels, find_users, resolve,
    resolve_with, set_resolve_metrics,
};

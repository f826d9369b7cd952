//! Guild, shard and cluster scopes.
//!
//! A [`Guild`] owns the per-guild caches. A [`Shard`] owns the global user
//! cache of one connection plus the guilds it serves, and a [`ShardManager`]
//! owns every shard of the bot. Shard-wide and cluster-wide views are
//! [`CacheUnion`]s over the caches below them, built per call.

use serde::{Deserialize, Serialize};

use crate::cache::{CacheUnion, EntityCache};
use crate::entity::{Category, Emote, Identified, Member, Role, TextChannel, User};
use crate::error::ResolverError;
use crate::snowflake::Snowflake;
use crate::types::ResolverConfig;

/// One guild and everything cached for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Guild {
    pub id: Snowflake,
    pub name: String,
    #[serde(skip)]
    pub members: EntityCache<Member>,
    #[serde(skip)]
    pub text_channels: EntityCache<TextChannel>,
    #[serde(skip)]
    pub categories: EntityCache<Category>,
    #[serde(skip)]
    pub roles: EntityCache<Role>,
    #[serde(skip)]
    pub emotes: EntityCache<Emote>,
}

impl Guild {
    pub fn new(id: impl Into<Snowflake>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Identified for Guild {
    fn id(&self) -> Snowflake {
        self.id
    }
}

/// Views over the global (non-guild) caches of a scope.
pub trait Directory {
    fn users(&self) -> CacheUnion<'_, User>;
    fn text_channels(&self) -> CacheUnion<'_, TextChannel>;
    fn categories(&self) -> CacheUnion<'_, Category>;
    fn emotes(&self) -> CacheUnion<'_, Emote>;
}

/// One client connection.
#[derive(Debug, Clone, Default)]
pub struct Shard {
    pub id: u32,
    pub users: EntityCache<User>,
    pub guilds: EntityCache<Guild>,
}

impl Shard {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn guild(&self, id: Snowflake) -> Option<&Guild> {
        self.guilds.get(id)
    }
}

impl Directory for Shard {
    fn users(&self) -> CacheUnion<'_, User> {
        CacheUnion::single(&self.users)
    }

    fn text_channels(&self) -> CacheUnion<'_, TextChannel> {
        self.guilds.iter().map(|guild| &guild.text_channels).collect()
    }

    fn categories(&self) -> CacheUnion<'_, Category> {
        self.guilds.iter().map(|guild| &guild.categories).collect()
    }

    fn emotes(&self) -> CacheUnion<'_, Emote> {
        self.guilds.iter().map(|guild| &guild.emotes).collect()
    }
}

/// Every shard of one bot.
#[derive(Debug, Clone, Default)]
pub struct ShardManager {
    pub shards: Vec<Shard>,
}

impl ShardManager {
    pub fn new(shards: Vec<Shard>) -> Self {
        Self { shards }
    }

    pub fn shard(&self, id: u32) -> Option<&Shard> {
        self.shards.iter().find(|shard| shard.id == id)
    }

    /// First cached copy of a guild across all shards.
    pub fn guild(&self, id: Snowflake) -> Option<&Guild> {
        self.shards.iter().find_map(|shard| shard.guild(id))
    }
}

impl Directory for ShardManager {
    fn users(&self) -> CacheUnion<'_, User> {
        self.shards.iter().map(|shard| &shard.users).collect()
    }

    fn text_channels(&self) -> CacheUnion<'_, TextChannel> {
        self.shards
            .iter()
            .flat_map(|shard| shard.guilds.iter())
            .map(|guild| &guild.text_channels)
            .collect()
    }

    fn categories(&self) -> CacheUnion<'_, Category> {
        self.shards
            .iter()
            .flat_map(|shard| shard.guilds.iter())
            .map(|guild| &guild.categories)
            .collect()
    }

    fn emotes(&self) -> CacheUnion<'_, Emote> {
        self.shards
            .iter()
            .flat_map(|shard| shard.guilds.iter())
            .map(|guild| &guild.emotes)
            .collect()
    }
}

/// The client handle a lookup runs against: the current shard and, when the
/// bot is sharded, the manager that owns it.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    shard: &'a Shard,
    manager: Option<&'a ShardManager>,
    config: ResolverConfig,
}

impl<'a> Session<'a> {
    pub fn new(shard: &'a Shard) -> Self {
        Self {
            shard,
            manager: None,
            config: ResolverConfig::default(),
        }
    }

    pub fn with_manager(mut self, manager: &'a ShardManager) -> Self {
        self.manager = Some(manager);
        self
    }

    /// Replace the session's tuning. Fails when `config` does not validate.
    pub fn with_config(mut self, config: ResolverConfig) -> Result<Self, ResolverError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn shard(&self) -> &'a Shard {
        self.shard
    }

    pub fn manager(&self) -> Option<&'a ShardManager> {
        self.manager
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The widest scope this session may search: the cluster when a manager
    /// is attached and `prefer_cluster` is set, the shard otherwise.
    pub fn scope(&self) -> &'a dyn Directory {
        match self.manager {
            Some(manager) if self.config.prefer_cluster => manager,
            _ => self.shard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::SnowflakeView;

    fn shard_with_guild(shard_id: u32, guild_id: u64, channel: (u64, &str)) -> Shard {
        let mut guild = Guild::new(guild_id, format!("guild-{guild_id}"));
        guild
            .text_channels
            .insert(TextChannel::new(channel.0, guild_id, channel.1));
        let mut shard = Shard::new(shard_id);
        shard.guilds.insert(guild);
        shard
    }

    #[test]
    fn shard_views_union_its_guilds() {
        let mut shard = shard_with_guild(0, 10, (1, "general"));
        let mut second = Guild::new(11u64, "second");
        second.text_channels.insert(TextChannel::new(2u64, 11u64, "memes"));
        shard.guilds.insert(second);

        let channels = shard.text_channels();
        assert_eq!(channels.len(), 2);
        assert!(channels.get_by_id(Snowflake::new(2)).is_some());
    }

    #[test]
    fn cluster_views_span_shards() {
        let manager = ShardManager::new(vec![
            shard_with_guild(0, 10, (1, "general")),
            shard_with_guild(1, 20, (2, "memes")),
        ]);
        let channels = manager.text_channels();
        let names: Vec<&str> = channels.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["general", "memes"]);
        assert_eq!(manager.guild(Snowflake::new(20)).map(|g| g.name.as_str()), Some("guild-20"));
        assert!(manager.shard(1).is_some());
        assert!(manager.shard(7).is_none());
    }

    #[test]
    fn session_scope_honours_prefer_cluster() {
        let manager = ShardManager::new(vec![
            shard_with_guild(0, 10, (1, "general")),
            shard_with_guild(1, 20, (2, "memes")),
        ]);
        let shard = &manager.shards[0];

        let clustered = Session::new(shard).with_manager(&manager);
        assert_eq!(clustered.scope().text_channels().len(), 2);

        let pinned = Session::new(shard)
            .with_manager(&manager)
            .with_config(ResolverConfig {
                prefer_cluster: false,
                ..ResolverConfig::default()
            })
            .expect("valid config");
        assert_eq!(pinned.scope().text_channels().len(), 1);

        let standalone = Session::new(shard);
        assert_eq!(standalone.scope().text_channels().len(), 1);
        assert!(standalone.manager().is_none());
    }

    #[test]
    fn zero_cap_is_rejected() {
        let shard = Shard::new(0);
        let result = Session::new(&shard).with_config(ResolverConfig {
            max_results: Some(0),
            ..ResolverConfig::default()
        });
        assert!(matches!(result, Err(ResolverError::InvalidConfig(_))));
    }
}

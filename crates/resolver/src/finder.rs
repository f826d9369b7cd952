//! Ready-made lookups for the built-in models.
//!
//! Global lookups take a [`Session`] and search its widest scope (see
//! [`Session::scope`]); the `find_shard_*` variants stay on the session's own
//! shard. Guild lookups search one guild's caches. Session lookups honour the
//! session's [`ResolverConfig`](crate::ResolverConfig); guild lookups run with
//! the defaults, use [`resolve_with`] directly to cap them.

use crate::cache::CacheUnion;
use crate::directory::{Directory, Guild, Session};
use crate::engine::{resolve, resolve_with};
use crate::entity::{Category, Emote, Identified, Member, Role, TextChannel, User};
use crate::kind::Resolvable;
use crate::types::Resolution;

fn in_session<'a, E: Resolvable + Identified + 'a>(
    query: &str,
    view: CacheUnion<'a, E>,
    session: &Session<'a>,
) -> Resolution<'a, E> {
    resolve_with(query, view, &E::spec(), session.config())
}

pub fn find_users<'a>(query: &str, session: &Session<'a>) -> Resolution<'a, User> {
    in_session(query, session.scope().users(), session)
}

pub fn find_shard_users<'a>(query: &str, session: &Session<'a>) -> Resolution<'a, User> {
    in_session(query, session.shard().users(), session)
}

/// Members of `guild` by account name or effective name.
pub fn find_members<'a>(query: &str, guild: &'a Guild) -> Resolution<'a, Member> {
    resolve(query, &guild.members, &Member::spec())
}

pub fn find_text_channels<'a>(query: &str, session: &Session<'a>) -> Resolution<'a, TextChannel> {
    in_session(query, session.scope().text_channels(), session)
}

pub fn find_shard_text_channels<'a>(
    query: &str,
    session: &Session<'a>,
) -> Resolution<'a, TextChannel> {
    in_session(query, session.shard().text_channels(), session)
}

pub fn find_guild_text_channels<'a>(query: &str, guild: &'a Guild) -> Resolution<'a, TextChannel> {
    resolve(query, &guild.text_channels, &TextChannel::spec())
}

/// Categories have no mention syntax; only a bare id short-circuits.
pub fn find_categories<'a>(query: &str, session: &Session<'a>) -> Resolution<'a, Category> {
    in_session(query, session.scope().categories(), session)
}

pub fn find_shard_categories<'a>(query: &str, session: &Session<'a>) -> Resolution<'a, Category> {
    in_session(query, session.shard().categories(), session)
}

pub fn find_guild_categories<'a>(query: &str, guild: &'a Guild) -> Resolution<'a, Category> {
    resolve(query, &guild.categories, &Category::spec())
}

pub fn find_roles<'a>(query: &str, guild: &'a Guild) -> Resolution<'a, Role> {
    resolve(query, &guild.roles, &Role::spec())
}

pub fn find_emotes<'a>(query: &str, session: &Session<'a>) -> Resolution<'a, Emote> {
    in_session(query, session.scope().emotes(), session)
}

pub fn find_shard_emotes<'a>(query: &str, session: &Session<'a>) -> Resolution<'a, Emote> {
    in_session(query, session.shard().emotes(), session)
}

pub fn find_guild_emotes<'a>(query: &str, guild: &'a Guild) -> Resolution<'a, Emote> {
    resolve(query, &guild.emotes, &Emote::spec())
}

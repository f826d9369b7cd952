//! Query shapes recognised before the name scan.
//!
//! All patterns match the whole query. Character classes are spelled out
//! instead of using `\d`, `\s` and `.` because the regex crate's versions of
//! those are Unicode-aware:
//!
//! - digits are ASCII `0-9` only,
//! - whitespace is ASCII whitespace (space, tab, LF, VT, FF, CR),
//! - "any character" excludes line terminators (LF, CR, NEL, LS, PS).
//!
//! | Shape | Example | Captures |
//! |---|---|---|
//! | user mention | `<@123456789012345678>`, `<@!123456789012345678>` | id |
//! | channel mention | `<#123456789012345678>` | id |
//! | role mention | `<@&123456789012345678>` | id |
//! | emote mention | `<:blob:123456789012345678>` | name (2 to 32, no `:`), id |
//! | user reference | `Some Name#0420` | name (2 to 32), discriminator |

use once_cell::sync::Lazy;
use regex::Regex;

use crate::snowflake::Snowflake;

static USER_MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<@!?([0-9]{17,20})>$").expect("user mention pattern"));

static CHANNEL_MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<#([0-9]{17,20})>$").expect("channel mention pattern"));

static ROLE_MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<@&([0-9]{17,20})>$").expect("role mention pattern"));

static EMOTE_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^<:([^:\n\r\x{85}\x{2028}\x{2029}]{2,32}):([0-9]{17,20})>$")
        .expect("emote mention pattern")
});

// name: non-space, up to 30 of anything but a line break, non-space.
static USER_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([^ \t\n\x0B\x0C\r][^\n\r\x{85}\x{2028}\x{2029}]{0,30}[^ \t\n\x0B\x0C\r])[ \t\n\x0B\x0C\r]*#([0-9]{4})$",
    )
    .expect("user reference pattern")
});

/// Mention grammars a kind can opt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MentionSyntax {
    /// `<@ID>` or `<@!ID>`.
    User,
    /// `<#ID>`.
    Channel,
    /// `<@&ID>`.
    Role,
    /// `<:NAME:ID>`; the looked-up emote must carry exactly `NAME`.
    Emote,
}

/// A mention recognised in a query.
///
/// `id` is `None` when the digits have the right shape but overflow a `u64`;
/// such a mention cannot resolve and falls through like any other miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mention<'q> {
    pub id: Option<Snowflake>,
    /// Name the mention claims; emote mentions only.
    pub name: Option<&'q str>,
}

/// A `Name#0000` reference recognised in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserReference<'q> {
    pub name: &'q str,
    pub discriminator: &'q str,
}

impl MentionSyntax {
    /// Match `query` against this grammar.
    pub fn parse(self, query: &str) -> Option<Mention<'_>> {
        let regex = match self {
            MentionSyntax::User => &*USER_MENTION,
            MentionSyntax::Channel => &*CHANNEL_MENTION,
            MentionSyntax::Role => &*ROLE_MENTION,
            MentionSyntax::Emote => {
                let caps = EMOTE_MENTION.captures(query)?;
                let name = caps.get(1)?.as_str();
                let id = Snowflake::parse_id(caps.get(2)?.as_str());
                return Some(Mention {
                    id,
                    name: Some(name),
                });
            }
        };
        let caps = regex.captures(query)?;
        Some(Mention {
            id: Snowflake::parse_id(caps.get(1)?.as_str()),
            name: None,
        })
    }
}

/// Match `query` against the `Name#0000` reference grammar.
pub fn parse_user_reference(query: &str) -> Option<UserReference<'_>> {
    let caps = USER_REFERENCE.captures(query)?;
    Some(UserReference {
        name: caps.get(1)?.as_str(),
        discriminator: caps.get(2)?.as_str(),
    })
}

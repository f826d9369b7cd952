use std::io::Write;

use finder::{
    ConfigLoadError, FinderConfig, Guild, LoggingConfig, Resolvable, Role, Session, Shard,
    find_text_channels, init_tracing, resolve_with,
};
use tempfile::NamedTempFile;

const PRODUCTION: &str = r#"
version: "1.0"
name: "moderation bot"

resolver:
  prefer_cluster: true
  max_results: 2

logging:
  level: "warn"
  json: true
"#;

fn write_temp(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn loads_file_and_drives_resolution() {
    let file = write_temp(PRODUCTION);
    let config = FinderConfig::from_file(file.path()).unwrap();
    assert_eq!(config.name.as_deref(), Some("moderation bot"));
    assert_eq!(
        config.logging,
        LoggingConfig {
            level: "warn".into(),
            json: true
        }
    );

    let mut guild = Guild::new(81_384_788_765_712_384u64, "rust");
    for (n, name) in ["mod", "mod-mail", "mod-log", "moderator"].iter().enumerate() {
        guild
            .roles
            .insert(Role::new(81_384_788_765_712_400u64 + n as u64, guild.id, *name));
    }

    let capped = resolve_with("mo", &guild.roles, &Role::spec(), &config.resolver_config());
    assert_eq!(capped.len(), 2);

    let mut shard = Shard::new(0);
    shard.guilds.insert(guild);
    let session = Session::new(&shard)
        .with_config(config.resolver_config())
        .expect("valid config");
    assert!(find_text_channels("general", &session).is_empty());
}

#[test]
fn rejects_invalid_files() {
    let file = write_temp("version: \"3\"\n");
    assert!(matches!(
        FinderConfig::from_file(file.path()),
        Err(ConfigLoadError::UnsupportedVersion(_))
    ));

    let file = write_temp("version: \"1.0\"\nresolver:\n  max_results: 0\n");
    assert!(matches!(
        FinderConfig::from_file(file.path()),
        Err(ConfigLoadError::Validation(_))
    ));

    let file = write_temp("resolver: {}\n");
    assert!(matches!(
        FinderConfig::from_file(file.path()),
        Err(ConfigLoadError::YamlParse(_))
    ));
}

#[test]
fn tracing_initialises_once() {
    let config = FinderConfig::from_yaml(PRODUCTION).unwrap();
    init_tracing(&config.logging);
    assert!(!init_tracing(&config.logging));
}

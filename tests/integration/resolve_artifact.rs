//! Integration tests for resolving the guild configuration artifact

use super::test_utils::TestProject;
use guildcfg::guild::{ConfigResolver, ConfigSource, GuildConfig, ResolvedConfig, DEFAULT_LOGO};

fn resolve(project: &TestProject) -> guildcfg::guild::Resolution {
    ConfigResolver::new(project.layout.clone()).resolve().unwrap()
}

fn artifact(project: &TestProject) -> ResolvedConfig {
    serde_json::from_slice(&project.read_artifact()).unwrap()
}

#[test]
fn test_defaults_only_artifact_is_complete() {
    let project = TestProject::new();
    resolve(&project);

    let value: serde_json::Value = serde_json::from_slice(&project.read_artifact()).unwrap();
    for key in ["guildName", "title", "description", "logo", "logoFile"] {
        assert!(value[key].is_string(), "missing {} in {}", key, value);
    }
    assert!(value["theme"]["primaryColor"].is_string());
    assert!(value["theme"]["accentColor"].is_string());
    assert_eq!(value["logoFile"], DEFAULT_LOGO);
}

#[test]
fn test_malformed_input_matches_no_input() {
    let baseline = TestProject::new();
    resolve(&baseline);

    for malformed in ["{ \"guildName\": ", "[]", "42", r#"{"theme": "blue"}"#, ""] {
        let project = TestProject::new();
        project.write_user_config(malformed);

        let resolution = resolve(&project);
        assert_eq!(resolution.source, ConfigSource::MalformedFallback, "{:?}", malformed);
        assert_eq!(
            project.read_artifact(),
            baseline.read_artifact(),
            "artifact differs for {:?}",
            malformed
        );
    }
}

#[test]
fn test_existing_custom_logo_is_copied() {
    let project = TestProject::new();
    let logo_bytes = b"\x89PNG\r\n\x1a\nguild-crest";
    project.write_data_file("foo.png", logo_bytes);
    project.write_user_config(r#"{"guildName": "Bataillon", "logo": "foo.png"}"#);

    resolve(&project);

    let copied = std::fs::read(project.layout.public_dir.join("custom-logo.png")).unwrap();
    assert_eq!(copied, logo_bytes);
    let resolved = artifact(&project);
    assert_eq!(resolved.logo_file, "custom-logo.png");
    assert_eq!(resolved.config.logo, "foo.png");
}

#[test]
fn test_missing_custom_logo_uses_default() {
    let project = TestProject::new();
    project.write_user_config(r#"{"logo": "foo.png"}"#);

    resolve(&project);

    assert_eq!(artifact(&project).logo_file, DEFAULT_LOGO);
    assert!(project.custom_logos().is_empty());
}

#[test]
fn test_user_logo_named_like_default_is_copied() {
    let project = TestProject::new();
    project.write_data_file(DEFAULT_LOGO, b"our-own-art");
    project.write_user_config(r#"{"logo": "bataillon-logo.png"}"#);

    resolve(&project);

    assert_eq!(artifact(&project).logo_file, "custom-logo.png");
    assert_eq!(
        std::fs::read(project.layout.public_dir.join("custom-logo.png")).unwrap(),
        b"our-own-art"
    );
}

#[test]
fn test_logo_in_subdirectory_is_copied() {
    let project = TestProject::new();
    project.write_data_file("art/crest.jpg", b"jpeg");
    project.write_user_config(r#"{"logo": "./art/crest.jpg"}"#);

    resolve(&project);

    assert_eq!(artifact(&project).logo_file, "custom-logo.jpg");
    assert!(project.layout.public_dir.join("custom-logo.jpg").is_file());
}

#[test]
fn test_resolve_is_idempotent() {
    let project = TestProject::new();
    project.write_data_file("crest.svg", b"<svg/>");
    project.write_user_config(
        r##"{"title": "Raid Board", "logo": "crest.svg", "theme": {"primaryColor": "#111111", "glow": true}, "discordUrl": "https://discord.gg/x"}"##,
    );

    resolve(&project);
    let first = project.read_artifact();
    resolve(&project);
    let second = project.read_artifact();

    assert_eq!(first, second);
}

#[test]
fn test_extra_keys_pass_through() {
    let project = TestProject::new();
    project.write_user_config(
        r##"{"discordUrl": "https://discord.gg/x", "theme": {"accentColor": "#abcdef", "glow": true}}"##,
    );

    resolve(&project);

    let value: serde_json::Value = serde_json::from_slice(&project.read_artifact()).unwrap();
    assert_eq!(value["discordUrl"], "https://discord.gg/x");
    assert_eq!(value["theme"]["glow"], true);
    assert_eq!(value["theme"]["accentColor"], "#abcdef");
    assert_eq!(value["theme"]["primaryColor"], GuildConfig::default().theme.primary_color);
}

#[test]
fn test_artifact_is_overwritten_in_full() {
    let project = TestProject::new();
    project.write_user_config(r#"{"guildName": "First", "motto": "old"}"#);
    resolve(&project);

    project.write_user_config(r#"{"guildName": "Second"}"#);
    resolve(&project);

    let value: serde_json::Value = serde_json::from_slice(&project.read_artifact()).unwrap();
    assert_eq!(value["guildName"], "Second");
    assert!(value.get("motto").is_none());
}

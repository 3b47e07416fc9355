//! Integration tests for the runtime view of the guild configuration

use super::test_utils::TestProject;
use guildcfg::guild::{ConfigResolver, ContextSource, GuildContext};

#[test]
fn test_logo_path_tracks_logo_file_presence() {
    let project = TestProject::new();
    project.write_user_config(r#"{"logo": "foo.png"}"#);

    let context = GuildContext::load(project.layout.clone());
    assert_eq!(context.logo_path(), "/bataillon-logo.png");

    project.write_data_file("foo.png", b"png");
    context.reload();
    assert_eq!(context.logo_path(), "/data/foo.png");
}

#[test]
fn test_logo_path_ignores_logo_named_like_default() {
    let project = TestProject::new();
    project.write_data_file("bataillon-logo.png", b"png");
    project.write_user_config(r#"{"logo": "bataillon-logo.png"}"#);

    let context = GuildContext::load(project.layout.clone());
    assert_eq!(context.logo_path(), "/bataillon-logo.png");
}

#[test]
fn test_logo_path_without_user_config() {
    let project = TestProject::new();
    let context = GuildContext::load(project.layout.clone());

    assert_eq!(context.logo_path(), "/bataillon-logo.png");
    assert_eq!(context.config().guild_name, "SWGoH Guild");
}

#[test]
fn test_reload_picks_up_edits() {
    let project = TestProject::new();
    project.write_user_config(r#"{"guildName": "Before"}"#);
    let context = GuildContext::load(project.layout.clone());
    assert_eq!(context.config().guild_name, "Before");

    project.write_user_config(r##"{"guildName": "After", "theme": {"accentColor": "#000000"}}"##);
    context.reload();

    let config = context.config();
    assert_eq!(config.guild_name, "After");
    assert_eq!(config.theme.accent_color, "#000000");
    assert_eq!(config.theme.primary_color, "#00d4ff");
}

#[test]
fn test_runtime_and_resolver_agree_on_merge() {
    let project = TestProject::new();
    project.write_user_config(
        r##"{"title": "Raid Board", "theme": {"primaryColor": "#123456"}, "discordUrl": "x"}"##,
    );

    let resolution = ConfigResolver::new(project.layout.clone()).resolve().unwrap();
    let context = GuildContext::load(project.layout.clone());

    assert_eq!(context.config(), resolution.config.config);
}

#[test]
fn test_artifact_context_serves_copied_logo() {
    let project = TestProject::new();
    project.write_data_file("crest.webp", b"webp");
    project.write_user_config(r#"{"logo": "crest.webp"}"#);
    ConfigResolver::new(project.layout.clone()).resolve().unwrap();

    let context = GuildContext::from_artifact(project.layout.clone());
    assert!(context.is_artifact_backed());
    assert_eq!(context.source(), ContextSource::Artifact);
    assert_eq!(context.logo_path(), "/custom-logo.webp");
    assert_eq!(context.config().logo, "crest.webp");
}

#[test]
fn test_artifact_context_falls_back_without_artifact() {
    let project = TestProject::new();
    project.write_user_config(r#"{"guildName": "Unresolved"}"#);

    let context = GuildContext::from_artifact(project.layout.clone());
    assert!(!context.is_artifact_backed());
    assert_eq!(context.config().guild_name, "Unresolved");
    assert_eq!(context.logo_path(), "/bataillon-logo.png");
}

#[test]
fn test_malformed_user_config_reads_as_defaults() {
    let project = TestProject::new();
    project.write_user_config("{ not json");

    let context = GuildContext::load(project.layout.clone());
    assert_eq!(context.config(), guildcfg::guild::GuildConfig::default());
}

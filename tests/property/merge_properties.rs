//! Property-based tests for merging user configuration over defaults

use guildcfg::guild::{merge_user_config, GuildConfig, UserConfig};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn color() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("#[0-9a-f]{6}")
}

fn user_config_json(
    guild_name: &Option<String>,
    primary: &Option<String>,
    accent: &Option<String>,
) -> Value {
    let mut theme = Map::new();
    if let Some(primary) = primary {
        theme.insert("primaryColor".to_string(), json!(primary));
    }
    if let Some(accent) = accent {
        theme.insert("accentColor".to_string(), json!(accent));
    }

    let mut root = Map::new();
    if let Some(name) = guild_name {
        root.insert("guildName".to_string(), json!(name));
    }
    root.insert("theme".to_string(), Value::Object(theme));
    Value::Object(root)
}

/// Each theme field is the user's value when given, otherwise the default.
#[test]
fn test_theme_merge_is_field_wise() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let defaults = GuildConfig::default();

    runner
        .run(
            &(proptest::option::of("[A-Za-z ]{1,20}"), color(), color()),
            |(guild_name, primary, accent)| {
                let raw = user_config_json(&guild_name, &primary, &accent);
                let user: UserConfig = serde_json::from_value(raw).unwrap();
                let merged = merge_user_config(user);

                prop_assert_eq!(
                    &merged.theme.primary_color,
                    primary.as_ref().unwrap_or(&defaults.theme.primary_color)
                );
                prop_assert_eq!(
                    &merged.theme.accent_color,
                    accent.as_ref().unwrap_or(&defaults.theme.accent_color)
                );
                prop_assert_eq!(
                    &merged.guild_name,
                    guild_name.as_ref().unwrap_or(&defaults.guild_name)
                );
                prop_assert_eq!(&merged.title, &defaults.title);
                Ok(())
            },
        )
        .unwrap();
}

/// Merging never lets the user supply the derived logo file.
#[test]
fn test_logo_file_never_taken_from_input() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&"[a-z\\-]{1,16}\\.png", |logo_file| {
            let raw = json!({ "logoFile": logo_file, "motto": "For the guild" });
            let user: UserConfig = serde_json::from_value(raw).unwrap();
            let merged = merge_user_config(user);

            prop_assert!(!merged.extra.contains_key("logoFile"));
            prop_assert_eq!(merged.extra.get("motto"), Some(&json!("For the guild")));
            Ok(())
        })
        .unwrap();
}

//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use super::validator::ConfigValidator;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn flavor_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["posix", "win32", "native", "Unix", "WINDOWS"]).prop_map(String::from)
}

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop::sample::select(vec![OutputFormat::Plain, OutputFormat::Json, OutputFormat::Yaml])
}

fn env_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[A-Z][A-Z_]{0,8}", "[a-z0-9/]{0,12}", 0..6)
}

// Strategy for generating configs
fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(flavor_strategy()),
        prop::option::of("/[a-z]{1,10}"),
        prop::option::of(env_strategy()),
        prop::option::of(any::<bool>()),
        prop::option::of(output_format_strategy()),
    )
        .prop_map(|(flavor, cwd, env, inherit_env, output_format)| Config {
            flavor,
            cwd,
            env,
            inherit_env,
            output_format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Scalar fields from the higher-precedence config win when present
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.flavor, high.flavor.or(low.flavor));
        prop_assert_eq!(result.cwd, high.cwd.or(low.cwd));
        prop_assert_eq!(result.inherit_env, high.inherit_env.or(low.inherit_env));
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
    }

    // Merged env holds every key of both sides, values from the higher one
    #[test]
    fn config_merge_env_is_union(low in env_strategy(), high in env_strategy()) {
        let mut result = Config { env: Some(low.clone()), ..Default::default() };
        ConfigMerger::merge_into(&mut result, &Config { env: Some(high.clone()), ..Default::default() });

        let merged = result.env.unwrap_or_default();
        for (key, value) in &high {
            prop_assert_eq!(merged.get(key), Some(value));
        }
        for (key, value) in &low {
            if !high.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
        prop_assert!(merged.keys().all(|k| low.contains_key(k) || high.contains_key(k)));
    }

    // Empty config is identity element for merge
    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(&merged, &config);

        let mut from_empty = Config::default();
        ConfigMerger::merge_into(&mut from_empty, &config);
        prop_assert_eq!(from_empty, config);
    }

    // Generated configs always validate and survive a YAML round trip
    #[test]
    fn generated_configs_are_valid(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}

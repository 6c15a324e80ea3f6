//! Tests for JSON seeding configuration

use lxm_random_core_rs::{BootstrapSeeder, L64X256MixRandom, SeedConfig, SeedLengthError};

fn parse(json: &str) -> SeedConfig {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_integer_config() {
    let config = parse(r#"{"kind": "integer", "seed": 42}"#);
    let rng = config.build(&BootstrapSeeder::new(0)).unwrap();
    assert_eq!(rng, L64X256MixRandom::new(42));
}

#[test]
fn test_words_config() {
    let config = parse(r#"{"kind": "words", "a": 4, "s": 9, "x": [1, 2, 3, 4]}"#);
    let state = config.build(&BootstrapSeeder::new(0)).unwrap().state();

    assert_eq!(state.a, 5);
    assert_eq!(state.s, 9);
    assert_eq!(state.x, [1, 2, 3, 4]);
}

#[test]
fn test_bytes_config_strict() {
    let bytes: Vec<u8> = (0u8..48).collect();
    let config = SeedConfig::Bytes {
        bytes: bytes.clone(),
        pad: false,
    };
    let rng = config.build(&BootstrapSeeder::new(0)).unwrap();
    assert_eq!(rng, L64X256MixRandom::from_seed_bytes(&bytes).unwrap());
}

#[test]
fn test_bytes_config_too_short() {
    let config = parse(r#"{"kind": "bytes", "bytes": [1, 2, 3]}"#);
    let err = config.build(&BootstrapSeeder::new(0)).unwrap_err();
    assert_eq!(
        err,
        SeedLengthError {
            actual: 3,
            required: 48
        }
    );
}

#[test]
fn test_bytes_config_padded() {
    let config = parse(r#"{"kind": "bytes", "bytes": [1, 2, 3], "pad": true}"#);
    let rng = config.build(&BootstrapSeeder::new(0)).unwrap();
    assert_eq!(rng, L64X256MixRandom::from_seed_bytes_padded(&[1, 2, 3]));
}

#[test]
fn test_bootstrap_config_uses_seeder() {
    let config = parse(r#"{"kind": "bootstrap"}"#);
    let seeder = BootstrapSeeder::new(500);

    let first = config.build(&seeder).unwrap();
    let second = config.build(&seeder).unwrap();

    assert_eq!(first, L64X256MixRandom::new(500));
    assert_ne!(first, second);
}

#[test]
fn test_unknown_kind_rejected() {
    let result: Result<SeedConfig, _> = serde_json::from_str(r#"{"kind": "entropy"}"#);
    assert!(result.is_err());
}

#[test]
fn test_config_roundtrips_through_json() {
    let config = SeedConfig::Words {
        a: 1,
        s: 2,
        x: [3, 4, 5, 6],
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(parse(&json), config);
}

//! Property-based tests for LinxSettings serialization round-trip.

use linx::types::settings::{LinxSettings, LoggingSettings, StorageSettings};
use proptest::prelude::*;

fn arb_settings() -> impl Strategy<Value = LinxSettings> {
    (
        "[a-z][a-z0-9_]{0,15}\\.db",
        "[a-z][a-z0-9_]{0,20}",
        prop_oneof![Just("trace"), Just("debug"), Just("info"), Just("warn"), Just("error")],
        any::<bool>(),
    )
        .prop_map(|(database_file, categories_key, level, json)| LinxSettings {
            storage: StorageSettings {
                database_file,
                categories_key,
            },
            logging: LoggingSettings {
                level: level.to_string(),
                json,
            },
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn settings_json_roundtrip(settings in arb_settings()) {
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let back: LinxSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, settings);
    }
}

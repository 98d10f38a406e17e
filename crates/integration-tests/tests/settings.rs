use config::{Config, File, FileFormat};
use configs::{env_source, Settings};
use integration_tests::minute_clock;
use ledger_core::{ActivityLedger, LedgerPolicy, MembershipCheck, User};

const TOML: &str = r#"
[ledger]
membership = "id"

[logging]
filter = "ledger_core=debug"
json = true
"#;

#[test]
fn toml_file_layer_is_applied() {
    let settings = Settings::build(Config::builder().add_source(File::from_str(TOML, FileFormat::Toml))).unwrap();

    assert_eq!(settings.ledger.membership, MembershipCheck::Id);
    assert!(!settings.ledger.reject_duplicate_user_ids);
    assert_eq!(settings.logging.filter, "ledger_core=debug");
    assert!(settings.logging.json);
}

#[test]
fn env_layer_wins_over_file() {
    let mut vars = config::Map::new();
    vars.insert("SOCIAL_LEDGER__LEDGER__MEMBERSHIP".to_string(), "record".to_string());
    vars.insert("SOCIAL_LEDGER__LOGGING__JSON".to_string(), "false".to_string());

    let builder = Config::builder()
        .add_source(File::from_str(TOML, FileFormat::Toml))
        .add_source(env_source().source(Some(vars)));
    let settings = Settings::build(builder).unwrap();

    assert_eq!(settings.ledger.membership, MembershipCheck::Record);
    assert!(!settings.logging.json);
    assert_eq!(settings.logging.filter, "ledger_core=debug");
}

#[test]
fn unknown_membership_value_is_an_error() {
    let builder = Config::builder().add_source(File::from_str(
        "[ledger]\nmembership = \"name\"\n",
        FileFormat::Toml,
    ));

    assert!(Settings::build(builder).is_err());
}

#[test]
fn loaded_policy_drives_the_ledger() {
    let settings = Settings::build(Config::builder().add_source(File::from_str(TOML, FileFormat::Toml))).unwrap();
    let policy: LedgerPolicy = settings.ledger_policy();
    let mut ledger = ActivityLedger::with_policy(minute_clock(), policy);
    ledger.register_user(User::new(7, "Ada")).unwrap();

    assert!(ledger.create_post(&User::new(7, "Ada L."), "hi").is_ok());
}

//! Lookup Service Tests
//!
//! Drives the command handler against a mocked search backend to check the
//! request policy around resolution: length check, retry, replies, cooldown.

use crate::config::AppConfig;
use crate::core::srd::category::Category;
use crate::core::srd::error::SrdError;
use crate::core::srd::query::{Invocation, Query};
use crate::core::srd::service::{LookupService, REQUEST_TOO_SHORT};
use crate::core::srd::source::MockSrdSource;
use crate::tests::common::*;

fn config() -> AppConfig {
    let mut config = AppConfig::default();
    config.bot.cooldown_secs = 0;
    config
}

fn service(mock: MockSrdSource) -> LookupService<MockSrdSource> {
    LookupService::new(mock, &config())
}

// ============================================================================
// Request validation
// ============================================================================

#[tokio::test]
async fn test_short_request_never_searches() {
    let mut mock = MockSrdSource::new();
    mock.expect_search().never();

    let replies = service(mock)
        .lookup(Category::Spell, Query::new("  fi "))
        .await
        .unwrap();

    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].as_text(), Some(REQUEST_TOO_SHORT));
}

#[tokio::test]
async fn test_three_chars_is_long_enough() {
    let mut mock = MockSrdSource::new();
    mock.expect_search()
        .times(1)
        .returning(|_, _| Ok(vec![spell("Aid", "Your spell bolsters your allies.")]));

    let replies = service(mock)
        .lookup(Category::Spell, Query::new("aid"))
        .await
        .unwrap();
    assert!(replies[0].as_embed().is_some());
}

// ============================================================================
// Resolution replies
// ============================================================================

#[tokio::test]
async fn test_not_found_message() {
    let mut mock = MockSrdSource::new();
    mock.expect_search()
        .withf(|category, query| *category == Category::DamageType && query.to_string() == "plasma")
        .times(1)
        .returning(|_, _| Ok(Vec::new()));

    let replies = service(mock)
        .lookup(Category::DamageType, Query::new("plasma"))
        .await
        .unwrap();

    assert_eq!(
        replies[0].as_text(),
        Some("Couldn't find any damage types that match 'plasma'.")
    );
}

#[tokio::test]
async fn test_ambiguous_lists_candidates_in_order() {
    let mut mock = MockSrdSource::new();
    mock.expect_search().returning(|_, _| {
        Ok(vec![
            spell("Mass Heal", "Healing energy."),
            spell("Healing Word", "A creature regains hit points."),
        ])
    });

    let replies = service(mock)
        .lookup(Category::Spell, Query::new("heal"))
        .await
        .unwrap();

    assert_eq!(
        replies[0].as_text(),
        Some("Could be: **Mass Heal - Healing Word**.")
    );
}

#[tokio::test]
async fn test_exact_name_resolves_among_many() {
    let mut mock = MockSrdSource::new();
    mock.expect_search().returning(|_, _| {
        Ok(vec![
            spell("Mass Healing Word", "Up to six creatures regain hit points."),
            spell("Mass Heal", "A flood of healing energy."),
        ])
    });

    let replies = service(mock)
        .lookup(Category::Spell, Query::new("MASS HEAL"))
        .await
        .unwrap();

    assert_eq!(replies.len(), 1);
    let embed = replies[0].as_embed().unwrap();
    assert_eq!(embed.title.as_deref(), Some("Mass Heal"));
    assert_eq!(embed.fields.len(), 4);
}

#[tokio::test]
async fn test_monster_long_actions_send_three_messages() {
    let actions = long_text(500, 6);
    let mut mock = MockSrdSource::new();
    mock.expect_search()
        .returning(move |_, _| Ok(vec![monster("Adult Red Dragon", &actions)]));

    let replies = service(mock)
        .lookup(Category::Monster, Query::new("adult red"))
        .await
        .unwrap();

    assert_eq!(replies.len(), 3);
    let titles: Vec<Option<&str>> = replies
        .iter()
        .map(|r| r.as_embed().unwrap().title.as_deref())
        .collect();
    assert_eq!(titles, vec![None, Some("Actions"), Some("Actions *continued*")]);
}

// ============================================================================
// Equipment retry
// ============================================================================

#[tokio::test]
async fn test_equipment_retries_with_commas() {
    let mut mock = MockSrdSource::new();
    mock.expect_search()
        .withf(|_, query| query.to_string() == "armor leather")
        .times(1)
        .returning(|_, _| Ok(Vec::new()));
    mock.expect_search()
        .withf(|_, query| query.to_string() == "armor, leather")
        .times(1)
        .returning(|_, _| Ok(vec![equipment("Armor, Leather")]));

    let replies = service(mock)
        .lookup(Category::Equipment, Query::new("armor leather"))
        .await
        .unwrap();

    let embed = replies[0].as_embed().unwrap();
    assert_eq!(embed.fields[0].name, "Armor, Leather");
}

#[tokio::test]
async fn test_equipment_retry_request_shown_when_still_missing() {
    let mut mock = MockSrdSource::new();
    mock.expect_search().times(2).returning(|_, _| Ok(Vec::new()));

    let replies = service(mock)
        .lookup(Category::Equipment, Query::new("chain shirtz"))
        .await
        .unwrap();

    assert_eq!(
        replies[0].as_text(),
        Some("Couldn't find any equipment pieces that match 'chain, shirtz'.")
    );
}

#[tokio::test]
async fn test_other_categories_search_once() {
    let mut mock = MockSrdSource::new();
    mock.expect_search().times(1).returning(|_, _| Ok(Vec::new()));

    let replies = service(mock)
        .lookup(Category::Condition, Query::new("very tired"))
        .await
        .unwrap();
    assert!(replies[0].as_text().unwrap().starts_with("Couldn't find any conditions"));
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_search_failure_propagates() {
    let mut mock = MockSrdSource::new();
    mock.expect_search()
        .returning(|_, _| Err(SrdError::Search("index offline".to_string())));

    let err = service(mock)
        .lookup(Category::School, Query::new("evocation"))
        .await
        .unwrap_err();
    assert!(matches!(err, SrdError::Search(ref msg) if msg == "index offline"));
}

#[tokio::test]
async fn test_cooldown_blocks_repeat_before_search() {
    let mut config = AppConfig::default();
    config.bot.cooldown_secs = 60;

    let mut mock = MockSrdSource::new();
    mock.expect_search()
        .times(1)
        .returning(|_, _| Ok(vec![condition("Prone")]));
    let service = LookupService::new(mock, &config);

    let invocation = Invocation::new(7, Category::Condition, &["prone"]);
    assert!(service.handle(&invocation).await.is_ok());

    let err = service.handle(&invocation).await.unwrap_err();
    assert!(matches!(err, SrdError::OnCooldown { .. }));

    // another user is unaffected by the first user's cooldown
    let other = Invocation::new(8, Category::Condition, &["prone"]);
    assert!(service.cooldowns().check(other.user_id, other.category).is_ok());
}

#[tokio::test]
async fn test_cooldown_table_forgets_expired_users() {
    let mut config = AppConfig::default();
    config.bot.cooldown_secs = 1;

    let mut mock = MockSrdSource::new();
    mock.expect_search()
        .returning(|_, _| Ok(vec![condition("Prone")]));
    let service = LookupService::new(mock, &config);

    for user_id in 0..500 {
        let invocation = Invocation::new(user_id, Category::Condition, &["prone"]);
        service.handle(&invocation).await.unwrap();
    }
    assert_eq!(service.cooldowns().tracked(), 500);

    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let late = Invocation::new(500, Category::Condition, &["prone"]);
    service.handle(&late).await.unwrap();
    assert_eq!(service.cooldowns().tracked(), 1);
}

#[tokio::test]
async fn test_huge_cooldown_config_does_not_panic() {
    let config = AppConfig::from_toml_str("[bot]\ncooldown_secs = 9223372036854775807\n").unwrap();

    let mut mock = MockSrdSource::new();
    mock.expect_search()
        .times(1)
        .returning(|_, _| Ok(vec![condition("Prone")]));
    let service = LookupService::new(mock, &config);

    let invocation = Invocation::new(1, Category::Condition, &["prone"]);
    assert!(service.handle(&invocation).await.is_ok());
    assert!(matches!(
        service.handle(&invocation).await,
        Err(SrdError::OnCooldown { .. })
    ));
}

#[tokio::test]
async fn test_zero_limit_config_is_invalid_argument() {
    let mut config = config();
    config.pagination.hard_split_threshold = 0;

    let mut mock = MockSrdSource::new();
    mock.expect_search()
        .returning(|_, _| Ok(vec![feature("Wild Shape", "Assume the shape of a beast.")]));

    let err = LookupService::new(mock, &config)
        .lookup(Category::Feature, Query::new("wild shape"))
        .await
        .unwrap_err();
    assert!(matches!(err, SrdError::InvalidArgument(_)));
}

use integration_tests::{emily, john, seeded_ledger};
use ledger_core::{EntityKind, LedgerError, LedgerPolicy, MembershipCheck, User};

fn impostor() -> User {
    User::new(1, "Not John")
}

#[test]
fn record_check_requires_exact_user() {
    let mut ledger = seeded_ledger(LedgerPolicy::default());
    ledger.create_post(&john(), "Hello world!").unwrap();

    let post_err = ledger.create_post(&impostor(), "hi").unwrap_err();
    let comment_err = ledger.add_comment(&impostor(), 1, "hi").unwrap_err();
    let like_err = ledger.like_post(&impostor(), 1).unwrap_err();

    for err in [post_err, comment_err, like_err] {
        assert_eq!(err, LedgerError::NotFound { kind: EntityKind::User, id: 1 });
    }
    assert_eq!(ledger.stats().posts, 1);
    assert_eq!(ledger.stats().comments, 0);
    assert_eq!(ledger.stats().likes, 0);
}

#[test]
fn id_check_accepts_any_record_with_the_id() {
    let policy = LedgerPolicy { membership: MembershipCheck::Id, ..Default::default() };
    let mut ledger = seeded_ledger(policy);

    let post = ledger.create_post(&impostor(), "hi").unwrap();
    ledger.like_post(&emily(), post.id).unwrap();

    // Likes are keyed by id, so John and his impostor share one like slot.
    ledger.like_post(&impostor(), post.id).unwrap();
    let err = ledger.like_post(&john(), post.id).unwrap_err();

    assert_eq!(err, LedgerError::DuplicateLike { user_id: 1, post_id: post.id });
    assert_eq!(ledger.like_count(post.id), 2);
}

#[test]
fn duplicate_ids_are_recorded_by_default() {
    let mut ledger = seeded_ledger(LedgerPolicy::default());

    ledger.register_user(impostor()).unwrap();
    let post = ledger.create_post(&impostor(), "now I'm registered").unwrap();

    assert_eq!(ledger.users().len(), 3);
    assert_eq!(post.user_id, 1);
    // The feed is keyed by id, so both records contribute to it.
    ledger.create_post(&john(), "me too").unwrap();
    assert_eq!(ledger.activity_feed(1).unwrap().len(), 2);
}

#[test]
fn duplicate_ids_can_be_rejected() {
    let policy = LedgerPolicy { reject_duplicate_user_ids: true, ..Default::default() };
    let mut ledger = seeded_ledger(policy);

    let err = ledger.register_user(impostor()).unwrap_err();

    assert_eq!(err, LedgerError::DuplicateUser { id: 1 });
    assert_eq!(err.to_string(), "user with ID 1 is already registered");
    assert_eq!(ledger.users().len(), 2);
}

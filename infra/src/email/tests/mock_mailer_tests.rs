//! Unit tests for the mock mailer

use gk_core::domain::entities::account::Account;
use gk_core::services::auth::Notifier;

use crate::email::MockMailer;

fn pending_account() -> Account {
    Account::new_pending(
        "crusty_crab".to_string(),
        "crab@example.com".to_string(),
        "$2b$04$abcdefghijklmnopqrstuv".to_string(),
        "a1b2c3d4".to_string(),
    )
}

#[tokio::test]
async fn test_send_records_message() {
    let mailer = MockMailer::new();
    let account = pending_account();

    let message_id = mailer
        .send_verification_email(&account, "https://gatekey.example/verify?key=a1b2c3d4")
        .await
        .unwrap();

    assert!(message_id.starts_with("mock_"));
    assert_eq!(mailer.sent_count(), 1);

    let sent = mailer.sent();
    assert_eq!(sent[0].recipient, "crab@example.com");
    assert_eq!(sent[0].username, "crusty_crab");
    assert_eq!(
        mailer.last_link().as_deref(),
        Some("https://gatekey.example/verify?key=a1b2c3d4")
    );
}

#[tokio::test]
async fn test_failure_simulation() {
    let mailer = MockMailer::new();
    let account = pending_account();

    mailer.set_failing(true);
    let result = mailer.send_verification_email(&account, "https://x/verify").await;
    assert!(result.is_err());
    assert_eq!(mailer.sent_count(), 0);

    mailer.set_failing(false);
    mailer
        .send_verification_email(&account, "https://x/verify")
        .await
        .unwrap();
    assert_eq!(mailer.sent_count(), 1);
}

#[tokio::test]
async fn test_messages_kept_in_send_order() {
    let mailer = MockMailer::new();
    let account = pending_account();

    for n in 1..=3 {
        mailer
            .send_verification_email(&account, &format!("https://x/verify?key={}", n))
            .await
            .unwrap();
    }

    let sent = mailer.sent();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[2].link, "https://x/verify?key=3");
    assert_eq!(mailer.last_link().as_deref(), Some("https://x/verify?key=3"));
}

// =====================================================
// 사용자 관리 통합 테스트
// =====================================================

mod common;
use common::*;
use rust_decimal::Decimal;
use wallet_service::domains::wallet::models::{UserDetails, UserField};
use wallet_service::shared::database::LedgerStore;
use wallet_service::shared::errors::WalletError;

/// 테스트: 새 사용자는 잔고 0으로 생성
#[tokio::test]
async fn test_create_user_starts_with_zero_balance() {
    let env = setup_test();

    let user = env
        .wallet
        .create_user("john_doe", "john.doe@example.com")
        .await
        .expect("Failed to create user");

    assert_eq!(user.username, "john_doe");
    assert_eq!(user.email, "john.doe@example.com");
    assert_eq!(user.balance, Decimal::ZERO);
    assert!(user.id > 0);
}

/// 테스트: 사용자 ID는 서로 다름
#[tokio::test]
async fn test_create_users_get_distinct_ids() {
    let env = setup_test();
    let a = create_test_user(&env.wallet, "alice").await;
    let b = create_test_user(&env.wallet, "bob").await;
    assert_ne!(a.id, b.id);
}

/// 테스트: username 중복 시 Conflict, 행 생성 없음
#[tokio::test]
async fn test_duplicate_username_conflicts_without_write() {
    let env = setup_test();
    create_test_user(&env.wallet, "alice").await;

    let err = env
        .wallet
        .create_user("alice", "other@example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, WalletError::Conflict));
    assert_eq!(err.to_string(), "Email or Username already in use");

    let count = env
        .store
        .count_users_matching("alice", "other@example.com")
        .await
        .unwrap();
    assert_eq!(count, 1);
}

/// 테스트: email 중복 시 Conflict
#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let env = setup_test();
    create_test_user(&env.wallet, "alice").await;

    let err = env
        .wallet
        .create_user("alice2", "alice@example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, WalletError::Conflict));

    let count = env.store.count_users_matching("alice2", "nobody@example.com").await.unwrap();
    assert_eq!(count, 0);
}

/// 테스트: 저장소 UNIQUE 제약 위반도 Conflict로 보고
#[tokio::test]
async fn test_store_unique_violation_maps_to_conflict() {
    let env = setup_test();
    env.store.insert_user("carol", "carol@example.com").await.unwrap();

    let err = env.store.insert_user("carol", "carol2@example.com").await.unwrap_err();
    let err: WalletError = err.into();
    assert!(matches!(err, WalletError::Conflict));
}

/// 테스트: 필드 미지정 시 기본 필드 모두 반환
#[tokio::test]
async fn test_get_user_by_id_default_fields() {
    let env = setup_test();
    let user = create_test_user(&env.wallet, "alice").await;

    let details = env.wallet.get_user_by_id(user.id, None).await.unwrap();
    assert_eq!(
        details,
        UserDetails {
            id: Some(user.id),
            username: Some("alice".to_string()),
            email: Some("alice@example.com".to_string()),
            balance: Some(Decimal::ZERO),
        }
    );
}

/// 테스트: 선택한 필드만 반환
#[tokio::test]
async fn test_get_user_by_id_projects_fields() {
    let env = setup_test();
    let user = create_test_user(&env.wallet, "alice").await;
    env.wallet.process_transaction(user.id, dec("12.50")).await.unwrap();

    let fields = UserField::parse_list("id,balance").unwrap();
    let details = env.wallet.get_user_by_id(user.id, Some(fields.as_slice())).await.unwrap();

    assert_eq!(details.id, Some(user.id));
    assert_eq!(details.balance, Some(dec("12.50")));
    assert_eq!(details.username, None);
    assert_eq!(details.email, None);
}

/// 테스트: 없는 사용자 조회 시 NotFound
#[tokio::test]
async fn test_missing_user_is_not_found() {
    let env = setup_test();

    let err = env.wallet.get_user_by_id(404, None).await.unwrap_err();
    assert!(matches!(err, WalletError::UserNotFound { id: 404 }));

    let err = env.wallet.get_balance_by_id(404).await.unwrap_err();
    assert!(matches!(err, WalletError::UserNotFound { id: 404 }));
}

/// 테스트: 잔고 조회
#[tokio::test]
async fn test_get_balance_by_id() {
    let env = setup_test();
    let user = create_test_user(&env.wallet, "alice").await;

    let balance = env.wallet.get_balance_by_id(user.id).await.unwrap();
    assert_eq!(balance.balance, Decimal::ZERO);
}

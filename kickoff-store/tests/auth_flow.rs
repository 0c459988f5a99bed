//! Integration tests for the account and token flows

use chrono::{Datelike, NaiveDate, Utc};
use kickoff_store::db::models::{EmergencyContact, UserCreate};
use kickoff_store::db::repository::user;
use kickoff_store::db::seed;
use kickoff_store::{AppError, AuthService, JwtConfig, Store};

fn service() -> AuthService {
    AuthService::with_config(JwtConfig {
        secret: "integration-test-secret-0123456789abcdef".to_string(),
        expiration_minutes: 1440,
        issuer: "kickoff-league".to_string(),
        audience: "kickoff-app".to_string(),
    })
}

fn signup(email: &str, birth_year: i32) -> UserCreate {
    UserCreate {
        email: email.to_string(),
        password: "kickoff2024!".to_string(),
        full_name: "Sam Carter".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(birth_year, 6, 15).unwrap(),
        emergency_contact: EmergencyContact {
            name: "Alex Carter".to_string(),
            relationship: "sibling".to_string(),
            phone: "07700 900000".to_string(),
            email: None,
        },
    }
}

fn adult_year() -> i32 {
    Utc::now().year() - 30
}

#[test]
fn register_issues_verifiable_claims() {
    let store = Store::open_in_memory().unwrap();
    let auth = service();

    let (created, token) = auth
        .register(&store, signup("sam@example.com", adult_year()))
        .unwrap();

    let claims = auth.verify_token(&token).unwrap();
    assert_eq!(claims.sub, created.id);
    assert_eq!(claims.email, "sam@example.com");
    assert!(!claims.is_admin);
    assert!(claims.is_player);

    // Fresh login produces an equally valid token
    let token = auth.login(&store, "sam@example.com", "kickoff2024!").unwrap();
    let claims = auth.verify_token(&token).unwrap();
    assert_eq!(claims.sub, created.id);
}

#[test]
fn under_16_rejected_before_any_write() {
    let store = Store::open_in_memory().unwrap();
    let auth = service();

    let result = auth.register(&store, signup("kid@example.com", Utc::now().year() - 15));
    assert!(matches!(result, Err(AppError::Validation(_))));

    // Nothing was written
    assert!(user::find_all(&store).unwrap().is_empty());
}

#[test]
fn duplicate_email_conflicts() {
    let store = Store::open_in_memory().unwrap();
    let auth = service();

    auth.register(&store, signup("sam@example.com", adult_year()))
        .unwrap();
    let second = auth.register(&store, signup("sam@example.com", adult_year()));
    assert!(matches!(second, Err(AppError::Conflict(_))));
}

#[test]
fn login_failures_are_indistinguishable() {
    let store = Store::open_in_memory().unwrap();
    let auth = service();
    auth.register(&store, signup("sam@example.com", adult_year()))
        .unwrap();

    let unknown = auth.login(&store, "nobody@example.com", "kickoff2024!");
    let wrong = auth.login(&store, "sam@example.com", "not-the-password");

    let unknown_msg = unknown.unwrap_err().to_string();
    let wrong_msg = wrong.unwrap_err().to_string();
    assert_eq!(unknown_msg, wrong_msg);
}

#[test]
fn reset_password_replaces_credential() {
    let store = Store::open_in_memory().unwrap();
    let auth = service();
    let (created, _) = auth
        .register(&store, signup("sam@example.com", adult_year()))
        .unwrap();

    auth.reset_password(&store, &created.id, "a-new-password-99")
        .unwrap();

    assert!(auth.login(&store, "sam@example.com", "kickoff2024!").is_err());
    assert!(
        auth.login(&store, "sam@example.com", "a-new-password-99")
            .is_ok()
    );

    let missing = auth.reset_password(&store, "ghost", "whatever-password");
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}

#[test]
fn derived_checks_follow_token_state() {
    let store = Store::open_in_memory().unwrap();
    let auth = service();
    let (_, token) = auth
        .register(&store, signup("sam@example.com", adult_year()))
        .unwrap();

    assert!(auth.is_authenticated(Some(&token)));
    assert!(!auth.is_admin(Some(&token)));

    assert!(!auth.is_authenticated(None));
    assert!(!auth.is_admin(None));
    assert!(!auth.is_authenticated(Some("not.a.token")));

    let current = auth.current_user(Some(&token)).unwrap();
    assert_eq!(current.email, "sam@example.com");
    assert!(current.is_player);
}

#[test]
fn seeded_admin_gets_admin_claims() {
    let store = Store::open_in_memory().unwrap();
    let auth = service();
    seed::ensure_defaults(&store, "admin@example.com", "seed-password-1").unwrap();

    let token = auth
        .login(&store, "admin@example.com", "seed-password-1")
        .unwrap();
    assert!(auth.is_admin(Some(&token)));

    let claims = auth.verify_token(&token).unwrap();
    assert!(claims.is_admin);
    assert!(!claims.is_player);
}

//! Integration tests for accounts: signup, login, and password digests.

use chrono::NaiveDate;
use soccer_tournament_web::logic::{hash_password, verify_password};
use soccer_tournament_web::{
    log_in, sign_up, AccountStore, ErrorKind, NewAccount, Role, TournamentError,
};

fn new_account(kfupm_id: i32, username: &str, password: &str) -> NewAccount {
    NewAccount {
        kfupm_id,
        username: username.to_string(),
        password: password.to_string(),
        full_name: "Test User".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1999, 4, 12).unwrap(),
    }
}

#[test]
fn signup_then_login_roundtrip() {
    let mut accounts = AccountStore::new();
    let created = sign_up(&mut accounts, new_account(7, "sami", "s3cret"), Role::Guest).unwrap();
    assert_eq!(created.role, Role::Guest);
    // The digest is salted, never the raw password.
    assert_ne!(created.password_digest, "s3cret");
    assert!(!created.password_digest.contains("s3cret"));

    let logged_in = log_in(&accounts, "sami", "s3cret").unwrap();
    assert_eq!(logged_in.kfupm_id, 7);

    assert!(matches!(
        log_in(&accounts, "sami", "wrong"),
        Err(TournamentError::InvalidCredentials)
    ));
    assert!(matches!(
        log_in(&accounts, "nobody", "s3cret"),
        Err(TournamentError::InvalidCredentials)
    ));
}

#[test]
fn duplicate_username_and_id_conflict() {
    let mut accounts = AccountStore::new();
    sign_up(&mut accounts, new_account(7, "sami", "pw"), Role::Guest).unwrap();

    let dup_name = sign_up(&mut accounts, new_account(8, "sami", "pw"), Role::Guest);
    match dup_name {
        Err(e) => {
            assert_eq!(e, TournamentError::UsernameTaken("sami".to_string()));
            assert_eq!(e.kind(), ErrorKind::Conflict);
        }
        Ok(_) => panic!("duplicate username must be rejected"),
    }

    let dup_id = sign_up(&mut accounts, new_account(7, "other", "pw"), Role::Guest);
    assert!(matches!(dup_id, Err(TournamentError::KfupmIdTaken(7))));
}

#[test]
fn password_digests_verify_and_use_fresh_salts() {
    let a = hash_password("topsecret");
    let b = hash_password("topsecret");
    assert_ne!(a, b);
    assert!(verify_password(&a, "topsecret"));
    assert!(verify_password(&b, "topsecret"));
    assert!(!verify_password(&a, "topsecrett"));
    assert!(!verify_password("garbage-without-salt", "topsecret"));
}

#[test]
fn admin_role_is_preserved() {
    let mut accounts = AccountStore::new();
    let admin = sign_up(&mut accounts, new_account(1, "root", "pw"), Role::Admin).unwrap();
    assert_eq!(admin.role, Role::Admin);
    assert_eq!(log_in(&accounts, "root", "pw").unwrap().role, Role::Admin);
}

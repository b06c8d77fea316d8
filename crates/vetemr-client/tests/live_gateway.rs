//! Integration tests against a live records service.
//!
//! These are ignored by default; they need a records API listening on the
//! default base URL with the standard seed credentials. Run with:
//! `cargo test -p vetemr-client -- --ignored`

use vetemr_client::{
    Credentials, DEFAULT_BASE_URL, GatewayError, HttpGateway, RecordsApi, SessionStore,
};

fn gateway() -> (HttpGateway, SessionStore) {
    let session = SessionStore::new();
    let gateway = HttpGateway::new(DEFAULT_BASE_URL, session.clone())
        .expect("failed to build gateway");
    (gateway, session)
}

fn seed_credentials() -> Credentials {
    Credentials {
        email: std::env::var("VETEMR_TEST_EMAIL").unwrap_or_else(|_| "vet@clinic.test".into()),
        password: std::env::var("VETEMR_TEST_PASSWORD").unwrap_or_else(|_| "password".into()),
    }
}

/// Run with: cargo test live_login_and_roster -- --ignored
#[tokio::test]
#[ignore]
async fn live_login_and_roster() {
    let (gateway, session) = gateway();

    let identity = session
        .login(&gateway, &seed_credentials())
        .await
        .expect("login against live server");
    println!("signed in as {} ({})", identity.name, identity.role);

    let patients = gateway.list_patients().await.expect("fetch roster");
    println!("roster holds {} patients", patients.len());

    if let Some(first) = patients.first() {
        let fetched = gateway.get_patient(&first.id).await.expect("fetch patient");
        assert_eq!(fetched.id, first.id);

        let records = gateway
            .list_records(&first.id)
            .await
            .expect("fetch records");
        println!("{} has {} records", fetched.name, records.len());
    }
}

/// Run with: cargo test live_missing_patient_is_not_found -- --ignored
#[tokio::test]
#[ignore]
async fn live_missing_patient_is_not_found() {
    let (gateway, session) = gateway();
    session
        .login(&gateway, &seed_credentials())
        .await
        .expect("login against live server");

    let err = gateway
        .get_patient("00000000-0000-0000-0000-000000000000")
        .await
        .expect_err("expected a missing patient");
    assert_eq!(err, GatewayError::NotFound);
}

/// Unauthenticated requests should be turned away by the service.
/// Run with: cargo test live_unauthenticated_is_rejected -- --ignored
#[tokio::test]
#[ignore]
async fn live_unauthenticated_is_rejected() {
    let (gateway, _session) = gateway();
    let err = gateway
        .list_patients()
        .await
        .expect_err("expected an auth rejection");
    assert!(matches!(
        err,
        GatewayError::SessionExpired | GatewayError::Api { .. }
    ));
}

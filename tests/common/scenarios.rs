// Sign-up scenarios shared by the stub-backed suite and the live integration suite.

use reqwest::StatusCode;
use signup_api_tests::modules::users::core::register_request::RegisterRequest;
use signup_api_tests::modules::users::core::role::Role;
use signup_api_tests::modules::users::use_cases::generate_user::builder::RegisterRequestBuilder;
use signup_api_tests::modules::users::use_cases::generate_user::generator::random_user;
use signup_api_tests::modules::users::use_cases::sign_up::client::SignUpClient;
use signup_api_tests::modules::users::use_cases::sign_up::response::SignUpResponse;

pub const NONEXISTENT_USER: &str = "nonexistent_user";

pub async fn random_user_signs_up(client: &SignUpClient) -> SignUpResponse {
    let response = client
        .submit(&random_user())
        .await
        .unwrap_or_else(|e| panic!("sign-up of a random user failed: {e}"));

    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "Expected status code 201 for successful signup"
    );
    assert!(
        response.token().is_some(),
        "Token should not be None in the response: {}",
        response.body
    );
    response
}

pub async fn short_username_is_rejected(client: &SignUpClient) {
    let user = RegisterRequestBuilder::new().username("one").build();

    let error = client
        .submit(&user)
        .await
        .expect_err("a three character username should be rejected");

    assert_eq!(
        error.status(),
        Some(StatusCode::BAD_REQUEST),
        "Expected status code 400 for short username"
    );
    let message = error
        .field_error("username")
        .unwrap_or_else(|| panic!("no username error in {:?}", error.body()));
    assert!(
        message.contains("username length"),
        "Username error should mention length: {message}"
    );
}

/// Empty username, malformed email and short password; every other field is valid.
pub fn invalid_user() -> RegisterRequest {
    RegisterRequestBuilder::new()
        .username("")
        .email("invalid_email")
        .password("short")
        .roles([Role::Admin])
        .first_name("John")
        .last_name("Smith")
        .build()
}

pub async fn invalid_data_is_rejected(client: &SignUpClient) {
    let user = invalid_user();

    let error = client
        .submit(&user)
        .await
        .expect_err("empty username, bad email and short password should be rejected");

    assert_eq!(
        error.status(),
        Some(StatusCode::BAD_REQUEST),
        "Expected status code 400 for invalid data"
    );
}

/// The service answers 422 when the username is already held. The first attempt
/// either claims the name or finds it taken, so the asserted attempt is always a
/// repeat.
pub async fn taken_username_is_unprocessable(client: &SignUpClient) {
    let claim = RegisterRequestBuilder::new()
        .username(NONEXISTENT_USER)
        .build();
    match client.submit(&claim).await {
        Ok(response) => assert_eq!(response.status, StatusCode::CREATED),
        Err(e) => assert_eq!(e.status(), Some(StatusCode::UNPROCESSABLE_ENTITY), "{e}"),
    }

    let repeat = RegisterRequestBuilder::new()
        .username(NONEXISTENT_USER)
        .build();
    let error = client
        .submit(&repeat)
        .await
        .expect_err("a username that is already in use should be rejected");

    assert_eq!(
        error.status(),
        Some(StatusCode::UNPROCESSABLE_ENTITY),
        "Expected status code 422 for {NONEXISTENT_USER}"
    );
}

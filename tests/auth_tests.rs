mod common;

use actix_web::{
    http::{StatusCode, header},
    test,
};
use common::{PASSWORD, bearer, create_user, read_json, test_state};
use research_projects_api::{Role, create_app};
use serde_json::json;

#[actix_web::test]
async fn test_signup_creates_plain_user() {
    let state = test_state().await;
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/auth")
        .set_json(json!({ "email": "  Ana@Example.com ", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = read_json(resp).await;
    assert_eq!(json["message"], "Signup successful");
    assert_eq!(json["user"]["email"], "ana@example.com");
    assert_eq!(json["user"]["name"], "ana");
    assert_eq!(json["user"]["role"], "user");
    assert!(json["user"].get("password").is_none(), "Hash must not leak");
}

#[actix_web::test]
async fn test_signup_rejects_duplicates_and_bad_input() {
    let state = test_state().await;
    create_user(&state, "taken@example.com", Role::User, None).await;
    let app = test::init_service(create_app(state.clone())).await;

    let cases = [
        (json!({ "email": "taken@example.com", "password": PASSWORD }), StatusCode::CONFLICT),
        (json!({ "email": "not-an-email", "password": PASSWORD }), StatusCode::BAD_REQUEST),
        (json!({ "email": "short@example.com", "password": "abc" }), StatusCode::BAD_REQUEST),
    ];
    for (body, expected) in cases {
        let req = test::TestRequest::post()
            .uri("/auth")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected, "Unexpected status for {body}");
    }
}

#[actix_web::test]
async fn test_signup_refused_when_logged_in() {
    let state = test_state().await;
    let user = create_user(&state, "ana@example.com", Role::User, None).await;
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/auth")
        .insert_header(bearer(&state, &user))
        .set_json(json!({ "email": "other@example.com", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_signup_refused_with_broken_token() {
    let state = test_state().await;
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/auth")
        .insert_header(("Authorization", "Bearer not.a.valid-token"))
        .set_json(json!({ "email": "other@example.com", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_login_sets_cookie_that_authenticates() {
    let state = test_state().await;
    create_user(&state, "ana@example.com", Role::User, None).await;
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "ANA@example.com", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "token")
        .expect("Login should set the token cookie")
        .into_owned();
    assert!(cookie.http_only().unwrap_or(false));

    let json = read_json(resp).await;
    assert_eq!(json["message"], "Login successful");
    assert_eq!(json["token"], cookie.value());

    let req = test::TestRequest::get()
        .uri("/user/me")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = read_json(resp).await;
    assert_eq!(json["user"]["email"], "ana@example.com");
}

#[actix_web::test]
async fn test_login_failures_look_the_same() {
    let state = test_state().await;
    create_user(&state, "ana@example.com", Role::User, None).await;
    let app = test::init_service(create_app(state.clone())).await;

    let mut messages = Vec::new();
    for body in [
        json!({ "email": "ana@example.com", "password": "wrong-password" }),
        json!({ "email": "ghost@example.com", "password": PASSWORD }),
    ] {
        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        messages.push(read_json(resp).await["message"].clone());
    }

    assert_eq!(messages[0], messages[1]);
    assert_eq!(messages[0], "Invalid email or password.");
}

#[actix_web::test]
async fn test_repeated_login_failures_are_throttled() {
    let state = test_state().await;
    create_user(&state, "ana@example.com", Role::User, None).await;
    let max_failures = state.config.login_guard.max_failures;
    let app = test::init_service(create_app(state.clone())).await;

    for _ in 0..max_failures {
        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "ana@example.com", "password": "wrong-password" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    // Even the right password is refused while the address is flagged
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "ana@example.com", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[actix_web::test]
async fn test_forwarded_headers_do_not_reset_login_throttling() {
    let state = test_state().await;
    create_user(&state, "ana@example.com", Role::User, None).await;
    let max_failures = state.config.login_guard.max_failures;
    let app = test::init_service(create_app(state.clone())).await;
    let peer = "198.51.100.7:40000".parse().unwrap();

    let mut statuses = Vec::new();
    for i in 0..max_failures + 3 {
        let req = test::TestRequest::post()
            .uri("/login")
            .peer_addr(peer)
            .insert_header(("X-Forwarded-For", format!("10.0.0.{i}")))
            .set_json(json!({ "email": "ana@example.com", "password": "wrong-password" }))
            .to_request();
        statuses.push(test::call_service(&app, req).await.status());
    }

    assert!(
        statuses[..max_failures]
            .iter()
            .all(|status| *status == StatusCode::UNAUTHORIZED)
    );
    assert!(
        statuses[max_failures..]
            .iter()
            .all(|status| *status == StatusCode::TOO_MANY_REQUESTS)
    );
}

#[actix_web::test]
async fn test_logout_expires_cookie() {
    let state = test_state().await;
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::delete().uri("/auth").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("Max-Age=0"));
    assert_eq!(read_json(resp).await["message"], "Logged out");
}

#[actix_web::test]
async fn test_change_password_requires_current_one() {
    let state = test_state().await;
    let user = create_user(&state, "ana@example.com", Role::User, None).await;
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::put()
        .uri(&format!("/user/{}/password", user.id))
        .insert_header(bearer(&state, &user))
        .set_json(json!({ "currentPassword": "nope-nope", "newPassword": "brand-new-secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::put()
        .uri(&format!("/user/{}/password", user.id))
        .insert_header(bearer(&state, &user))
        .set_json(json!({ "currentPassword": PASSWORD, "newPassword": "brand-new-secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "ana@example.com", "password": "brand-new-secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

mod common;

use actix_web::{
    http::{StatusCode, header},
    test,
};
use common::{bearer, create_user, read_json, test_state};
use research_projects_api::{Claims, Role, create_app};
use serde_json::json;

#[actix_web::test]
async fn test_probe_get_is_reserved_to_plain_users() {
    let state = test_state().await;
    let user = create_user(&state, "user@example.com", Role::User, None).await;
    let admin = create_user(&state, "admin@example.com", Role::Admin, None).await;
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::get().uri("/test").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/test")
        .insert_header(bearer(&state, &user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["message"], "GET");

    let req = test::TestRequest::get()
        .uri("/test")
        .insert_header(bearer(&state, &admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_probe_writes_are_open() {
    let state = test_state().await;
    let app = test::init_service(create_app(state.clone())).await;

    for (req, method) in [
        (test::TestRequest::post(), "POST"),
        (test::TestRequest::put(), "PUT"),
        (test::TestRequest::patch(), "PATCH"),
        (test::TestRequest::delete(), "DELETE"),
    ] {
        let resp = test::call_service(&app, req.uri("/test").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_json(resp).await["message"], method);
    }
}

#[actix_web::test]
async fn test_invalid_and_expired_tokens_are_rejected() {
    let state = test_state().await;
    let user = create_user(&state, "user@example.com", Role::User, None).await;
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/keywords")
        .insert_header((header::AUTHORIZATION, "Bearer not.a.token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let mut claims = Claims::for_user(&user, 60);
    claims.iat -= 3600;
    claims.exp = claims.iat + 60;
    let expired = state.tokens.sign(&claims).expect("Failed to sign token");
    let req = test::TestRequest::get()
        .uri("/keywords")
        .insert_header((header::AUTHORIZATION, format!("Bearer {expired}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_role_sets_gate_research_writes() {
    let state = test_state().await;
    let user = create_user(&state, "user@example.com", Role::User, None).await;
    let creator = create_user(&state, "creator@example.com", Role::ProjectCreator, None).await;
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/keywords")
        .insert_header(bearer(&state, &user))
        .set_json(json!({ "name": "robotics" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri("/keywords")
        .insert_header(bearer(&state, &creator))
        .set_json(json!({ "name": "robotics" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/keywords")
        .insert_header(bearer(&state, &user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["keywords"][0]["name"], "robotics");
}

#[actix_web::test]
async fn test_user_administration() {
    let state = test_state().await;
    let ana = create_user(&state, "ana@example.com", Role::User, None).await;
    let rui = create_user(&state, "rui@example.com", Role::User, None).await;
    let admin = create_user(&state, "admin@example.com", Role::Admin, None).await;
    let app = test::init_service(create_app(state.clone())).await;

    // Listing users is admin only
    let req = test::TestRequest::get()
        .uri("/user")
        .insert_header(bearer(&state, &ana))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get()
        .uri("/user")
        .insert_header(bearer(&state, &admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["users"].as_array().map(Vec::len), Some(3));

    // Someone else's profile
    let req = test::TestRequest::get()
        .uri(&format!("/user/{}", rui.id))
        .insert_header(bearer(&state, &ana))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    // Self promotion
    let req = test::TestRequest::patch()
        .uri(&format!("/user/{}", ana.id))
        .insert_header(bearer(&state, &ana))
        .set_json(json!({ "role": "admin" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::patch()
        .uri(&format!("/user/{}", ana.id))
        .insert_header(bearer(&state, &ana))
        .set_json(json!({ "orcid": "0000-0002-1825-0097" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["user"]["orcid"], "0000-0002-1825-0097");

    let req = test::TestRequest::patch()
        .uri(&format!("/user/{}", ana.id))
        .insert_header(bearer(&state, &admin))
        .set_json(json!({ "role": "project_creator" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["user"]["role"], "project_creator");

    let req = test::TestRequest::post()
        .uri("/company")
        .insert_header(bearer(&state, &admin))
        .set_json(json!({ "name": "SkyWorks" }))
        .to_request();
    let company_id = read_json(test::call_service(&app, req).await).await["company"]["id"].clone();

    // Joining a company is also reserved to administrators
    let req = test::TestRequest::patch()
        .uri(&format!("/user/{}", rui.id))
        .insert_header(bearer(&state, &rui))
        .set_json(json!({ "companyId": company_id }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::patch()
        .uri(&format!("/user/{}", rui.id))
        .insert_header(bearer(&state, &admin))
        .set_json(json!({ "companyId": company_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let user = read_json(resp).await["user"].clone();
    assert_eq!(user["companyId"], company_id);
    assert_eq!(user["role"], "user");

    let req = test::TestRequest::patch()
        .uri(&format!("/user/{}", rui.id))
        .insert_header(bearer(&state, &admin))
        .set_json(json!({ "companyId": 4242 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/user/{}", rui.id))
        .insert_header(bearer(&state, &admin))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/user/{}", rui.id))
        .insert_header(bearer(&state, &admin))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

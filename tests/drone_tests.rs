mod common;

use actix_web::{http::StatusCode, test};
use common::{bearer, create_user, read_json, test_state};
use research_projects_api::{
    AppState, Role, create_app,
    entities::company,
};
use sea_orm::{ActiveModelTrait, ActiveValue};
use serde_json::json;

async fn create_company(state: &AppState, name: &str) -> company::Model {
    company::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .expect("Failed to insert company")
}

#[actix_web::test]
async fn test_company_administration() {
    let state = test_state().await;
    let admin = create_user(&state, "admin@example.com", Role::Admin, None).await;
    let user = create_user(&state, "user@example.com", Role::User, None).await;
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/company")
        .insert_header(bearer(&state, &user))
        .set_json(json!({ "name": "SkyWorks" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri("/company")
        .insert_header(bearer(&state, &admin))
        .set_json(json!({ "name": "SkyWorks" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let company_id = read_json(resp).await["company"]["id"].clone();

    let req = test::TestRequest::get()
        .uri("/company/all")
        .insert_header(bearer(&state, &user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["companies"][0]["name"], "SkyWorks");

    let req = test::TestRequest::put()
        .uri(&format!("/company/{company_id}"))
        .insert_header(bearer(&state, &admin))
        .set_json(json!({ "name": "SkyWorks Lda" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["message"], "Company updated");

    let req = test::TestRequest::get()
        .uri(&format!("/company/{company_id}"))
        .insert_header(bearer(&state, &user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(read_json(resp).await["company"]["name"], "SkyWorks Lda");

    let req = test::TestRequest::delete()
        .uri(&format!("/company/{company_id}"))
        .insert_header(bearer(&state, &admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["message"], "Company deleted");

    let req = test::TestRequest::delete()
        .uri(&format!("/company/{company_id}"))
        .insert_header(bearer(&state, &admin))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_company_with_members_cannot_be_deleted() {
    let state = test_state().await;
    let company = create_company(&state, "SkyWorks").await;
    create_user(&state, "pilot@example.com", Role::User, Some(company.id)).await;
    let admin = create_user(&state, "admin@example.com", Role::Admin, None).await;
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/company/{}", company.id))
        .insert_header(bearer(&state, &admin))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_drone_parts_are_scoped_to_company() {
    let state = test_state().await;
    let sky = create_company(&state, "SkyWorks").await;
    let aero = create_company(&state, "AeroLab").await;
    let pilot = create_user(&state, "pilot@example.com", Role::User, Some(sky.id)).await;
    let rival = create_user(&state, "rival@example.com", Role::User, Some(aero.id)).await;
    let loner = create_user(&state, "loner@example.com", Role::User, None).await;
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/droneparts")
        .insert_header(bearer(&state, &pilot))
        .set_json(json!({ "name": "Rotor", "quantity": 4 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let part = read_json(resp).await;
    assert_eq!(part["companyId"], sky.id);

    let req = test::TestRequest::get()
        .uri("/droneparts")
        .insert_header(bearer(&state, &pilot))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(read_json(resp).await, json!([part.clone()]));

    let req = test::TestRequest::get()
        .uri("/droneparts/all")
        .insert_header(bearer(&state, &rival))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(read_json(resp).await, json!([]));

    let req = test::TestRequest::get()
        .uri(&format!("/droneparts/{}", part["id"]))
        .insert_header(bearer(&state, &rival))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/droneparts")
        .insert_header(bearer(&state, &loner))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::patch()
        .uri(&format!("/droneparts/{}", part["id"]))
        .insert_header(bearer(&state, &pilot))
        .set_json(json!({ "quantity": -2 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::patch()
        .uri(&format!("/droneparts/{}", part["id"]))
        .insert_header(bearer(&state, &pilot))
        .set_json(json!({ "quantity": 8 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["quantity"], 8);

    let req = test::TestRequest::delete()
        .uri(&format!("/droneparts/{}", part["id"]))
        .insert_header(bearer(&state, &pilot))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["message"], "Drone part deleted");
}

#[actix_web::test]
async fn test_drone_assembly_and_ownership() {
    let state = test_state().await;
    let sky = create_company(&state, "SkyWorks").await;
    let aero = create_company(&state, "AeroLab").await;
    let pilot = create_user(&state, "pilot@example.com", Role::User, Some(sky.id)).await;
    let rival = create_user(&state, "rival@example.com", Role::User, Some(aero.id)).await;
    let admin = create_user(&state, "admin@example.com", Role::Admin, None).await;
    let app = test::init_service(create_app(state.clone())).await;

    let mut part_ids = Vec::new();
    for (user, name) in [(&pilot, "Rotor"), (&pilot, "Frame"), (&rival, "Camera")] {
        let req = test::TestRequest::post()
            .uri("/droneparts")
            .insert_header(bearer(&state, user))
            .set_json(json!({ "name": name, "quantity": 1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        part_ids.push(read_json(resp).await["id"].clone());
    }

    // Parts of another company cannot be mounted
    let req = test::TestRequest::post()
        .uri("/drone")
        .insert_header(bearer(&state, &pilot))
        .set_json(json!({ "partIds": [part_ids[0], part_ids[2]] }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/drone")
        .insert_header(bearer(&state, &pilot))
        .set_json(json!({ "partIds": [part_ids[0]] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;
    let drone_id = created["drone"]["id"].clone();
    assert_eq!(created["drone"]["userId"], pilot.id);
    assert_eq!(created["drone"]["finish"], false);
    assert_eq!(created["parts"][0]["name"], "Rotor");

    let req = test::TestRequest::post()
        .uri("/dronehasparts")
        .insert_header(bearer(&state, &pilot))
        .set_json(json!({ "droneId": drone_id, "partId": part_ids[1] }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri(&format!("/dronehasparts/{drone_id}"))
        .insert_header(bearer(&state, &pilot))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(read_json(resp).await["parts"].as_array().map(Vec::len), Some(2));

    let req = test::TestRequest::get()
        .uri(&format!("/drone/{drone_id}"))
        .insert_header(bearer(&state, &rival))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::patch()
        .uri(&format!("/drone/{drone_id}"))
        .insert_header(bearer(&state, &pilot))
        .set_json(json!({ "finish": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(read_json(resp).await["drone"]["finish"], true);

    let req = test::TestRequest::get()
        .uri("/drone")
        .insert_header(bearer(&state, &rival))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(read_json(resp).await["drones"], json!([]));

    let req = test::TestRequest::get()
        .uri("/drone")
        .insert_header(bearer(&state, &admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(read_json(resp).await["drones"].as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::delete()
        .uri(&format!("/drone/{drone_id}"))
        .insert_header(bearer(&state, &admin))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/dronehasparts/{drone_id}"))
        .insert_header(bearer(&state, &pilot))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

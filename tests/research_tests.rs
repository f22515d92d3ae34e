mod common;

use actix_web::{http::StatusCode, test};
use common::{bearer, create_user, read_json, test_state};
use research_projects_api::{Role, create_app};
use serde_json::{Value, json};

fn project_body() -> Value {
    json!({
        "type": "funded",
        "status": "ongoing",
        "competitiveFinancial": true,
        "isNational": false,
        "isIntern": false,
        "url": "https://example.org/aurora",
        "doi": null,
        "startDate": "2024-01-01",
        "finishDate": "2026-12-31",
        "cost": 125000.0
    })
}

#[actix_web::test]
async fn test_project_lifecycle_with_links() {
    let state = test_state().await;
    let creator = create_user(&state, "creator@example.com", Role::ProjectCreator, None).await;
    let member = create_user(&state, "member@example.com", Role::User, None).await;
    let auth = bearer(&state, &creator);
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/project")
        .insert_header(auth.clone())
        .set_json(project_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let project_id = read_json(resp).await["project"]["id"].as_i64().unwrap_or_default();

    let req = test::TestRequest::post()
        .uri("/keywords")
        .insert_header(auth.clone())
        .set_json(json!({ "name": "  swarm robotics " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let keyword = read_json(resp).await["keyword"].clone();
    assert_eq!(keyword["name"], "swarm robotics");

    let link = json!({ "projectId": project_id, "keywordId": keyword["id"] });
    let req = test::TestRequest::post()
        .uri("/projectkeywords")
        .insert_header(auth.clone())
        .set_json(&link)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(read_json(resp).await, link);

    let req = test::TestRequest::post()
        .uri("/projectkeywords")
        .insert_header(auth.clone())
        .set_json(&link)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::post()
        .uri("/projectinfo")
        .insert_header(auth.clone())
        .set_json(json!({
            "projectId": project_id,
            "language": "en",
            "name": "AURORA",
            "title": "Autonomous aerial robots",
            "description": null
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/userprojects")
        .insert_header(auth.clone())
        .set_json(json!({
            "userId": member.id,
            "projectId": project_id,
            "role": "participant",
            "allocatedTime": 0.5
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    // Members read the aggregated project
    let req = test::TestRequest::get()
        .uri(&format!("/project/{project_id}"))
        .insert_header(bearer(&state, &member))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let details = read_json(resp).await;
    assert_eq!(details["project"]["type"], "funded");
    assert_eq!(details["keywords"][0]["name"], "swarm robotics");
    assert_eq!(details["infos"][0]["language"], "en");

    let req = test::TestRequest::get()
        .uri(&format!("/userprojects/{project_id}"))
        .insert_header(bearer(&state, &member))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["members"][0]["email"], "member@example.com");

    let req = test::TestRequest::delete()
        .uri(&format!("/project/{project_id}"))
        .insert_header(auth.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // The keyword survives, its link does not
    let req = test::TestRequest::get()
        .uri(&format!("/keywords/{}", keyword["id"]))
        .insert_header(auth.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/projectkeywords/{project_id}"))
        .insert_header(auth.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_project_validation() {
    let state = test_state().await;
    let creator = create_user(&state, "creator@example.com", Role::ProjectCreator, None).await;
    let app = test::init_service(create_app(state.clone())).await;

    let mut reversed = project_body();
    reversed["startDate"] = json!("2027-01-01");
    let mut negative = project_body();
    negative["cost"] = json!(-1.0);
    let mut unknown_status = project_body();
    unknown_status["status"] = json!("paused");

    for body in [reversed, negative, unknown_status] {
        let req = test::TestRequest::post()
            .uri("/project")
            .insert_header(bearer(&state, &creator))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "Accepted {body}");
    }
}

#[actix_web::test]
async fn test_link_requires_both_sides_and_unlink_requires_link() {
    let state = test_state().await;
    let creator = create_user(&state, "creator@example.com", Role::ProjectCreator, None).await;
    let auth = bearer(&state, &creator);
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/project")
        .insert_header(auth.clone())
        .set_json(project_body())
        .to_request();
    let project_id = read_json(test::call_service(&app, req).await).await["project"]["id"].clone();

    let req = test::TestRequest::post()
        .uri("/projectfundings")
        .insert_header(auth.clone())
        .set_json(json!({ "projectId": project_id, "fundingId": 999 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/projectkeywords/{project_id}/999"))
        .insert_header(auth.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/funding")
        .insert_header(auth.clone())
        .set_json(json!({ "isIntern": true, "value": 5000.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let funding_id = read_json(resp).await["funding"]["id"].clone();

    let req = test::TestRequest::post()
        .uri("/projectfundings")
        .insert_header(auth.clone())
        .set_json(json!({ "projectId": project_id, "fundingId": funding_id }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri(&format!("/projectfundings/{project_id}"))
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(read_json(resp).await["fundings"][0]["value"], 5000.0);

    let req = test::TestRequest::delete()
        .uri(&format!("/projectfundings/{project_id}/{funding_id}"))
        .insert_header(auth.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_catalog_rules() {
    let state = test_state().await;
    let creator = create_user(&state, "creator@example.com", Role::ProjectCreator, None).await;
    let auth = bearer(&state, &creator);
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/scientificdomain")
        .insert_header(auth.clone())
        .set_json(json!({ "name": "Engineering" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let domain_id = read_json(resp).await["scientificDomain"]["id"].clone();

    let req = test::TestRequest::post()
        .uri("/scientificarea")
        .insert_header(auth.clone())
        .set_json(json!({ "name": "Robotics", "scientificDomainId": 4242 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/scientificarea")
        .insert_header(auth.clone())
        .set_json(json!({ "name": "Robotics", "scientificDomainId": domain_id }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::delete()
        .uri(&format!("/scientificdomain/{domain_id}"))
        .insert_header(auth.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::post()
        .uri("/keywords")
        .insert_header(auth.clone())
        .set_json(json!({ "name": "   " }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/funding")
        .insert_header(auth.clone())
        .set_json(json!({ "isIntern": false, "value": -10.0 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_entities_and_contact_points() {
    let state = test_state().await;
    let creator = create_user(&state, "creator@example.com", Role::ProjectCreator, None).await;
    let auth = bearer(&state, &creator);
    let app = test::init_service(create_app(state.clone())).await;

    let mut entity_ids = Vec::new();
    for name in ["INESC TEC", "FEUP"] {
        let req = test::TestRequest::post()
            .uri("/entity")
            .insert_header(auth.clone())
            .set_json(json!({ "name": name, "country": "PT" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        entity_ids.push(read_json(resp).await["entity"]["id"].clone());
    }

    let req = test::TestRequest::post()
        .uri("/contactpoint")
        .insert_header(auth.clone())
        .set_json(json!({
            "entityId": entity_ids[0],
            "role": "Coordinator",
            "name": "Marta Silva",
            "email": "Marta@Example.com"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let point = read_json(resp).await["contactPoint"].clone();
    assert_eq!(point["email"], "marta@example.com");
    assert_eq!(point["role"], "Coordinator");

    let req = test::TestRequest::patch()
        .uri(&format!("/contactpoint/{}", point["id"]))
        .insert_header(auth.clone())
        .set_json(json!({ "phone": "+351 220 000 000" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["contactPoint"]["phone"], "+351 220 000 000");

    // Share the contact point with the second entity
    let req = test::TestRequest::post()
        .uri("/entitycontactpoints")
        .insert_header(auth.clone())
        .set_json(json!({ "entityId": entity_ids[1], "contactPointId": point["id"] }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri(&format!("/contactpoint/{}", entity_ids[1]))
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["contactPoints"][0]["name"], "Marta Silva");

    let req = test::TestRequest::get()
        .uri(&format!("/contactpointinfo/{}", point["id"]))
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["contactPointInfo"]["name"], "Marta Silva");

    let req = test::TestRequest::delete()
        .uri(&format!("/contactpoint/{}", point["id"]))
        .insert_header(auth.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    for entity_id in &entity_ids {
        let req = test::TestRequest::get()
            .uri(&format!("/entitycontactpoints/{entity_id}"))
            .insert_header(auth.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_json(resp).await["contactPoints"], json!([]));
    }

    let req = test::TestRequest::get()
        .uri("/contactpoint/4242")
        .insert_header(auth.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_project_patch_keeps_absent_fields_and_validates_result() {
    let state = test_state().await;
    let creator = create_user(&state, "creator@example.com", Role::ProjectCreator, None).await;
    let auth = bearer(&state, &creator);
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/project")
        .insert_header(auth.clone())
        .set_json(project_body())
        .to_request();
    let project_id = read_json(test::call_service(&app, req).await).await["project"]["id"].clone();

    let req = test::TestRequest::patch()
        .uri(&format!("/project/{project_id}"))
        .insert_header(auth.clone())
        .set_json(json!({ "cost": 200000.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let project = read_json(resp).await["project"].clone();
    assert_eq!(project["cost"], 200000.0);
    assert_eq!(project["status"], "ongoing");
    assert_eq!(project["url"], "https://example.org/aurora");
    assert_eq!(project["startDate"], "2024-01-01");
    assert_eq!(project["finishDate"], "2026-12-31");

    // A start date after the stored finish date, and a negative cost
    for body in [json!({ "startDate": "2027-06-01" }), json!({ "cost": -5.0 })] {
        let req = test::TestRequest::patch()
            .uri(&format!("/project/{project_id}"))
            .insert_header(auth.clone())
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "Accepted {body}");
    }

    let req = test::TestRequest::get()
        .uri(&format!("/project/{project_id}"))
        .insert_header(auth.clone())
        .to_request();
    let project = read_json(test::call_service(&app, req).await).await["project"].clone();
    assert_eq!(project["startDate"], "2024-01-01");
    assert_eq!(project["cost"], 200000.0);
}

#[actix_web::test]
async fn test_project_information_is_unique_per_language() {
    let state = test_state().await;
    let creator = create_user(&state, "creator@example.com", Role::ProjectCreator, None).await;
    let auth = bearer(&state, &creator);
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/project")
        .insert_header(auth.clone())
        .set_json(project_body())
        .to_request();
    let project_id = read_json(test::call_service(&app, req).await).await["project"]["id"].clone();

    let mut info_ids = Vec::new();
    for (language, title) in [("pt", "Robôs aéreos autónomos"), ("en", "Autonomous aerial robots")] {
        let req = test::TestRequest::post()
            .uri("/projectinfo")
            .insert_header(auth.clone())
            .set_json(json!({
                "projectId": project_id,
                "language": language,
                "name": "AURORA",
                "title": title,
                "description": null
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        info_ids.push(read_json(resp).await["projectInfo"]["id"].clone());
    }
    let en_id = &info_ids[1];

    let req = test::TestRequest::post()
        .uri("/projectinfo")
        .insert_header(auth.clone())
        .set_json(json!({
            "projectId": project_id,
            "language": "pt",
            "name": "AURORA",
            "title": "Outro título",
            "description": null
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

    // Moving the English row onto Portuguese collides with the existing one
    let req = test::TestRequest::patch()
        .uri(&format!("/projectinfo/{en_id}"))
        .insert_header(auth.clone())
        .set_json(json!({ "language": "pt" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::put()
        .uri(&format!("/projectinfo/{en_id}"))
        .insert_header(auth.clone())
        .set_json(json!({
            "language": "pt",
            "name": "AURORA",
            "title": "Autonomous aerial robots",
            "description": null
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

    // Keeping its own language is fine
    let req = test::TestRequest::patch()
        .uri(&format!("/projectinfo/{en_id}"))
        .insert_header(auth.clone())
        .set_json(json!({ "language": "en", "title": "Aerial robot swarms" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["projectInfo"]["title"], "Aerial robot swarms");

    let req = test::TestRequest::get()
        .uri(&format!("/projectinfos/{project_id}?language=pt"))
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let infos = read_json(resp).await["projectInfos"].clone();
    assert_eq!(infos.as_array().map(Vec::len), Some(1));
    assert_eq!(infos[0]["id"], info_ids[0]);

    let req = test::TestRequest::get()
        .uri(&format!("/projectinfos/{project_id}"))
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(read_json(resp).await["projectInfos"].as_array().map(Vec::len), Some(2));
}

#[actix_web::test]
async fn test_project_memberships() {
    let state = test_state().await;
    let creator = create_user(&state, "creator@example.com", Role::ProjectCreator, None).await;
    let member = create_user(&state, "member@example.com", Role::User, None).await;
    let auth = bearer(&state, &creator);
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/project")
        .insert_header(auth.clone())
        .set_json(project_body())
        .to_request();
    let project_id = read_json(test::call_service(&app, req).await).await["project"]["id"].clone();

    let membership = json!({
        "userId": member.id,
        "projectId": project_id,
        "role": "participant",
        "allocatedTime": 0.5
    });
    let req = test::TestRequest::post()
        .uri("/userprojects")
        .insert_header(auth.clone())
        .set_json(&membership)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let membership_id = read_json(resp).await["membership"]["id"].clone();

    let req = test::TestRequest::post()
        .uri("/userprojects")
        .insert_header(auth.clone())
        .set_json(&membership)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::patch()
        .uri(&format!("/userprojects/{membership_id}"))
        .insert_header(auth.clone())
        .set_json(json!({ "role": "leader" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = read_json(resp).await["membership"].clone();
    assert_eq!(updated["role"], "leader");
    assert_eq!(updated["allocatedTime"], 0.5);

    // Plain users cannot manage memberships
    let req = test::TestRequest::delete()
        .uri(&format!("/userprojects/{membership_id}"))
        .insert_header(bearer(&state, &member))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri(&format!("/userprojects/{membership_id}"))
        .insert_header(auth.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/userprojects/{membership_id}"))
        .insert_header(auth.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/userprojects/{project_id}"))
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(read_json(resp).await["members"], json!([]));
}

#[actix_web::test]
async fn test_programs_and_entity_fundings() {
    let state = test_state().await;
    let creator = create_user(&state, "creator@example.com", Role::ProjectCreator, None).await;
    let auth = bearer(&state, &creator);
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/program")
        .insert_header(auth.clone())
        .set_json(json!({ "name": "Horizon Europe" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let program_id = read_json(resp).await["program"]["id"].clone();

    let req = test::TestRequest::patch()
        .uri(&format!("/program/{program_id}"))
        .insert_header(auth.clone())
        .set_json(json!({ "name": "Horizon 2020" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["program"]["name"], "Horizon 2020");

    let req = test::TestRequest::get()
        .uri("/program")
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(read_json(resp).await["programs"][0]["name"], "Horizon 2020");

    let req = test::TestRequest::post()
        .uri("/entity")
        .insert_header(auth.clone())
        .set_json(json!({ "name": "INESC TEC", "country": "PT" }))
        .to_request();
    let entity_id = read_json(test::call_service(&app, req).await).await["entity"]["id"].clone();

    let req = test::TestRequest::post()
        .uri("/funding")
        .insert_header(auth.clone())
        .set_json(json!({ "isIntern": false, "value": 75000.0 }))
        .to_request();
    let funding_id = read_json(test::call_service(&app, req).await).await["funding"]["id"].clone();

    let links = [
        ("/programsfundings", json!({ "programId": program_id, "fundingId": funding_id })),
        ("/entityfundings", json!({ "entityId": entity_id, "fundingId": funding_id })),
    ];
    for (uri, link) in &links {
        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header(auth.clone())
            .set_json(link)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header(auth.clone())
            .set_json(link)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);
    }

    for owner in [
        format!("/programsfundings/{program_id}"),
        format!("/entityfundings/{entity_id}"),
    ] {
        let req = test::TestRequest::get()
            .uri(&owner)
            .insert_header(auth.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_json(resp).await["fundings"][0]["value"], 75000.0);
    }

    let req = test::TestRequest::delete()
        .uri(&format!("/entityfundings/{entity_id}/{funding_id}"))
        .insert_header(auth.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/entityfundings/{entity_id}/{funding_id}"))
        .insert_header(auth.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    // Deleting the funding drops its remaining program link
    let req = test::TestRequest::delete()
        .uri(&format!("/funding/{funding_id}"))
        .insert_header(auth.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/programsfundings/{program_id}"))
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(read_json(resp).await["fundings"], json!([]));

    let req = test::TestRequest::get()
        .uri("/programsfundings/4242")
        .insert_header(auth.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

use axum::{
    body::{self, Body, Bytes},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use typed_api::{create_router, AppState};

struct TestContext {
    router: Router,
}

impl TestContext {
    fn new() -> Self {
        Self {
            router: create_router(AppState::new()),
        }
    }

    async fn send(&self, method: &str, uri: &str, payload: Option<Value>) -> (StatusCode, Bytes) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match payload {
            Some(payload) => builder
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes)
    }

    async fn get_json(&self, uri: &str) -> Value {
        let (status, bytes) = self.send("GET", uri, None).await;
        assert_eq!(status, StatusCode::OK, "GET {uri}");
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create_user(&self, name: &str, user_type: &str, company_id: Option<&str>) -> Value {
        let mut payload = json!({
            "name": name,
            "email": format!("{}@x.com", name.to_lowercase()),
            "userType": user_type,
        });
        if let Some(company_id) = company_id {
            payload["companyId"] = json!(company_id);
        }

        let (status, bytes) = self.send("POST", "/users", Some(payload)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(bytes.is_empty());

        let users = self.get_json("/users").await;
        users.as_array().unwrap().last().unwrap().clone()
    }
}

fn names(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn root_says_hello() {
    let ctx = TestContext::new();
    let (status, bytes) = ctx.send("GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&bytes[..], b"Hello World");
}

#[tokio::test]
async fn create_user_then_list_shows_defaults() {
    let ctx = TestContext::new();
    let (status, _) = ctx
        .send(
            "POST",
            "/users",
            Some(json!({"name": "Ana", "email": "ana@x.com", "userType": "admin"})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let users = ctx.get_json("/users").await;
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["name"], "Ana");
    assert_eq!(users[0]["permissions"], json!([]));
    assert!(users[0].get("companyId").is_none());
    assert!(!users[0]["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn sequential_creates_get_distinct_ids_in_order() {
    let ctx = TestContext::new();
    for n in 0..10 {
        ctx.create_user(&format!("U{n}"), "guest", None).await;
    }

    let users = ctx.get_json("/users").await;
    let ids: std::collections::HashSet<&str> = users
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 10);
    assert_eq!(names(&users)[0], "U0");
    assert_eq!(names(&users)[9], "U9");
}

#[tokio::test]
async fn get_returns_what_was_submitted() {
    let ctx = TestContext::new();
    let created = ctx.create_user("Bia", "admin", Some("acme")).await;
    let id = created["id"].as_str().unwrap();

    let user = ctx.get_json(&format!("/users/{id}")).await;
    assert_eq!(
        user,
        json!({
            "id": id,
            "name": "Bia",
            "email": "bia@x.com",
            "companyId": "acme",
            "userType": "admin",
            "permissions": [],
        })
    );
}

#[tokio::test]
async fn invalid_email_is_rejected_before_anything_is_stored() {
    let ctx = TestContext::new();
    let (status, bytes) = ctx
        .send(
            "POST",
            "/users",
            Some(json!({"name": "Ana", "email": "not-an-email", "userType": "admin"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["details"]["email"].is_array());

    // campo obrigatório faltando: quem responde é o extrator Json do axum
    let (status, _) = ctx
        .send("POST", "/users", Some(json!({"name": "Ana", "email": "ana@x.com"})))
        .await;
    assert!(status.is_client_error());

    assert_eq!(ctx.get_json("/users").await, json!([]));
}

#[tokio::test]
async fn partial_update_changes_only_given_fields() {
    let ctx = TestContext::new();
    let created = ctx.create_user("Ana", "admin", Some("acme")).await;
    let uri = format!("/users/{}", created["id"].as_str().unwrap());

    let (status, _) = ctx.send("PUT", &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ctx.get_json(&uri).await, created);

    let (status, _) = ctx.send("PUT", &uri, Some(json!({"name": "Ana Maria"}))).await;
    assert_eq!(status, StatusCode::OK);

    let mut expected = created.clone();
    expected["name"] = json!("Ana Maria");
    assert_eq!(ctx.get_json(&uri).await, expected);
}

#[tokio::test]
async fn update_with_empty_string_keeps_the_old_value() {
    let ctx = TestContext::new();
    let created = ctx.create_user("Ana", "admin", None).await;
    let uri = format!("/users/{}", created["id"].as_str().unwrap());

    let (status, _) = ctx
        .send("PUT", &uri, Some(json!({"name": "", "userType": ""})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ctx.get_json(&uri).await, created);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let ctx = TestContext::new();
    let created = ctx.create_user("Ana", "admin", None).await;
    let uri = format!("/users/{}", created["id"].as_str().unwrap());

    let (status, _) = ctx.send("DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, bytes) = ctx.send("GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(bytes.is_empty());

    let (status, _) = ctx.send("DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_id_is_not_found_and_store_is_unchanged() {
    let ctx = TestContext::new();
    ctx.create_user("Ana", "admin", None).await;
    let (status, _) = ctx.send("POST", "/userTypes", Some(json!({"type": "admin"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = ctx
        .send("POST", "/companies", Some(json!({"name": "Acme", "cnpj": "111"})))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let update_bodies = [
        ("/users", json!({"name": "X"})),
        ("/userTypes", json!({"type": "X"})),
        ("/companies", json!({"name": "X"})),
        ("/permissions", json!({"name": "X"})),
    ];

    for (resource, update) in update_bodies {
        let before = ctx.get_json(resource).await;
        let uri = format!("{resource}/bad-id");

        let mut cases = vec![
            ("GET", uri.clone(), None),
            ("PUT", uri.clone(), Some(update)),
            ("DELETE", uri.clone(), None),
        ];
        if resource == "/users" || resource == "/userTypes" {
            cases.push(("PUT", format!("{uri}/permissions"), Some(json!({"permissions": ["read"]}))));
        }

        for (method, uri, payload) in cases {
            let (status, bytes) = ctx.send(method, &uri, payload).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
            assert!(bytes.is_empty());
        }

        assert_eq!(ctx.get_json(resource).await, before, "{resource}");
    }
}

#[tokio::test]
async fn update_rejects_explicit_null() {
    let ctx = TestContext::new();
    let created = ctx.create_user("Ana", "admin", Some("acme")).await;
    let uri = format!("/users/{}", created["id"].as_str().unwrap());

    for payload in [
        json!({"name": null}),
        json!({"companyId": null}),
        json!({"permissions": null}),
    ] {
        let (status, _) = ctx.send("PUT", &uri, Some(payload.clone())).await;
        assert!(status.is_client_error(), "{payload} -> {status}");
    }
    assert_eq!(ctx.get_json(&uri).await, created);

    let (status, _) = ctx
        .send(
            "POST",
            "/users",
            Some(json!({"name": "Bia", "email": "bia@x.com", "userType": "admin", "permissions": null})),
        )
        .await;
    assert!(status.is_client_error());
    assert_eq!(ctx.get_json("/users").await.as_array().unwrap().len(), 1);

    let companies_before = ctx.get_json("/companies").await;
    let (status, _) = ctx
        .send("POST", "/companies", Some(json!({"name": "Acme", "cnpj": "111"})))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let companies = ctx.get_json("/companies").await;
    assert_ne!(companies, companies_before);
    let company_uri = format!("/companies/{}", companies[0]["id"].as_str().unwrap());
    let (status, _) = ctx.send("PUT", &company_uri, Some(json!({"cnpj": null}))).await;
    assert!(status.is_client_error());
    assert_eq!(ctx.get_json(&company_uri).await["cnpj"], "111");
}

#[tokio::test]
async fn filters_return_matching_subset_in_order() {
    let ctx = TestContext::new();
    ctx.create_user("Ana", "admin", Some("acme")).await;
    ctx.create_user("Bia", "guest", Some("acme")).await;
    ctx.create_user("Caio", "admin", Some("globex")).await;
    ctx.create_user("Duda", "admin", None).await;

    assert_eq!(names(&ctx.get_json("/users/type/admin").await), vec!["Ana", "Caio", "Duda"]);
    assert_eq!(names(&ctx.get_json("/users/company/acme").await), vec!["Ana", "Bia"]);
    assert_eq!(
        names(&ctx.get_json("/users/company/acme/type/admin").await),
        vec!["Ana"]
    );
    assert_eq!(ctx.get_json("/users/type/owner").await, json!([]));
    assert_eq!(ctx.get_json("/users/company/nobody").await, json!([]));
    assert_eq!(ctx.get_json("/users/company/globex/type/guest").await, json!([]));
}

#[tokio::test]
async fn assign_permissions_replaces_the_list() {
    let ctx = TestContext::new();
    let (status, _) = ctx
        .send(
            "POST",
            "/users",
            Some(json!({
                "name": "Ana",
                "email": "ana@x.com",
                "userType": "admin",
                "permissions": ["read", "write", "delete"],
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let users = ctx.get_json("/users").await;
    let uri = format!("/users/{}", users[0]["id"].as_str().unwrap());

    let (status, _) = ctx
        .send("PUT", &format!("{uri}/permissions"), Some(json!({"permissions": ["write"]})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ctx.get_json(&uri).await["permissions"], json!(["write"]));
}

#[tokio::test]
async fn user_types_crud_and_permission_assignment() {
    let ctx = TestContext::new();
    let (status, _) = ctx
        .send("POST", "/userTypes", Some(json!({"type": "admin"})))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let list = ctx.get_json("/userTypes").await;
    assert_eq!(list[0]["type"], "admin");
    assert_eq!(list[0]["permissions"], json!([]));
    let uri = format!("/userTypes/{}", list[0]["id"].as_str().unwrap());

    let (status, _) = ctx
        .send("PUT", &format!("{uri}/permissions"), Some(json!({"permissions": ["read", "write"]})))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = ctx.send("PUT", &uri, Some(json!({"type": ""}))).await;
    assert_eq!(status, StatusCode::OK);

    let user_type = ctx.get_json(&uri).await;
    assert_eq!(user_type["type"], "admin");
    assert_eq!(user_type["permissions"], json!(["read", "write"]));

    let (status, _) = ctx.send("DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ctx.get_json("/userTypes").await, json!([]));

    let (status, _) = ctx
        .send("PUT", &format!("{uri}/permissions"), Some(json!({"permissions": []})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn companies_keep_embedded_lists_empty() {
    let ctx = TestContext::new();
    let (status, _) = ctx
        .send("POST", "/companies", Some(json!({"name": "Acme", "cnpj": "12.345.678/0001-99"})))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let companies = ctx.get_json("/companies").await;
    let id = companies[0]["id"].as_str().unwrap().to_string();
    ctx.create_user("Ana", "admin", Some(id.as_str())).await;

    let uri = format!("/companies/{id}");
    let (status, _) = ctx.send("PUT", &uri, Some(json!({"name": "Acme SA"}))).await;
    assert_eq!(status, StatusCode::OK);

    let company = ctx.get_json(&uri).await;
    assert_eq!(company["name"], "Acme SA");
    assert_eq!(company["cnpj"], "12.345.678/0001-99");
    assert_eq!(company["users"], json!([]));
    assert_eq!(company["userGroups"], json!([]));

    // sem cascata: o usuário continua apontando para a empresa removida
    let (status, _) = ctx.send("DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&ctx.get_json(&format!("/users/company/{id}")).await), vec!["Ana"]);
}

#[tokio::test]
async fn permissions_start_seeded() {
    let ctx = TestContext::new();
    let permissions = ctx.get_json("/permissions").await;
    assert_eq!(names(&permissions), vec!["read", "write", "delete"]);

    let (status, _) = ctx
        .send("POST", "/permissions", Some(json!({"name": "export", "description": "Export permission"})))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let permissions = ctx.get_json("/permissions").await;
    assert_eq!(names(&permissions), vec!["read", "write", "delete", "export"]);

    let uri = format!("/permissions/{}", permissions[0]["id"].as_str().unwrap());
    let (status, _) = ctx
        .send("PUT", &uri, Some(json!({"description": "Can read"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ctx.get_json(&uri).await["description"], "Can read");
    assert_eq!(ctx.get_json(&uri).await["name"], "read");
}

#[tokio::test]
async fn separate_states_do_not_share_data() {
    let first = TestContext::new();
    let second = TestContext::new();
    first.create_user("Ana", "admin", None).await;

    assert_eq!(second.get_json("/users").await, json!([]));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let ctx = TestContext::new();
    let doc = ctx.get_json("/api-docs/openapi.json").await;
    assert_eq!(doc["info"]["title"], "Typed API");
    assert!(doc["paths"]["/users/{id}/permissions"]["put"].is_object());
    assert!(doc["paths"]["/companies/{id}"]["delete"].is_object());
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let ctx = TestContext::new();
    let request = Request::builder()
        .method("GET")
        .uri("/permissions")
        .header("origin", "https://example.com")
        .body(Body::empty())
        .unwrap();

    let response = ctx.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("access-control-allow-origin"));
}

//! End-to-end flow against the in-memory collaborators the binary wires up.

use std::collections::HashMap;

use reqwest::StatusCode;
use serde_json::{Value, json};

use accounts_api::{app, config::ApiConfig};

struct TestServer {
    addr: String,
    prefix: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(env: &[(&str, &str)]) -> Self {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let config = ApiConfig::from_lookup(|key| env.get(key).cloned()).unwrap();

        let state = app::services::build_services(&config).unwrap();
        let router = app::build_app(state, &config.mount_prefix);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            addr,
            prefix: config.mount_prefix,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.addr, self.prefix, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn login(client: &reqwest::Client, srv: &TestServer, email: &str, password: &str) -> String {
    let res = client
        .post(srv.url("/login"))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn register_login_list_delete() {
    let srv = TestServer::spawn(&[
        ("JWT_SECRET", "flow-secret"),
        ("ADMIN_EMAIL", "root@example.com"),
        ("ADMIN_PASSWORD", "rootpass"),
    ])
    .await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/register"))
        .json(&json!({ "email": "a@b.com", "firstName": "A", "lastName": "B", "password": "secret" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // Same email again is a service-level conflict.
    let res = client
        .post(srv.url("/register"))
        .json(&json!({ "email": "a@b.com", "firstName": "A", "lastName": "B", "password": "secret" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "User already exists" }));

    let res = client
        .post(srv.url("/login"))
        .json(&json!({ "email": "a@b.com", "password": "wrong" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // A regular user's token authenticates but is not an admin.
    let user_token = login(&client, &srv, "a@b.com", "secret").await;
    let res = client.get(srv.url("")).bearer_auth(&user_token).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let admin_token = login(&client, &srv, "root@example.com", "rootpass").await;
    let res = client.get(srv.url("")).bearer_auth(&admin_token).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let users: Value = res.json().await.unwrap();
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("password").is_none()));

    let id = users
        .iter()
        .find(|u| u["email"] == "a@b.com")
        .and_then(|u| u["id"].as_str())
        .unwrap()
        .to_string();

    let res = client
        .delete(srv.url(&format!("?id={id}")))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .delete(srv.url(&format!("?id={id}")))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "User not found");
}

#[tokio::test]
async fn routes_can_mount_at_the_root() {
    let srv = TestServer::spawn(&[("MOUNT_PREFIX", "/")]).await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.get(srv.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(srv.url("/login"))
        .json(&json!({ "email": "nobody@example.com", "password": "x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_is_outside_the_prefix_and_gates() {
    let srv = TestServer::spawn(&[]).await;

    let res = reqwest::get(format!("{}/health", srv.addr)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

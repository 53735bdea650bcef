use std::time::Duration;

use reqwest::StatusCode;
use serde_json::json;

use bookshop_api::config::AppConfig;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod: ephemeral port, no cosmetic lookup delay.
        let config = AppConfig {
            port: 0,
            jwt_secret: "test-secret".to_string(),
            lookup_delay: Duration::ZERO,
        };
        let app = bookshop_api::app::build_app(config).await;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Client with a cookie jar, so the `sid` session cookie set at login is
/// replayed on gated requests.
fn session_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap()
}

async fn register(client: &reqwest::Client, base_url: &str, username: &str) -> reqwest::Response {
    client
        .post(format!("{}/register", base_url))
        .json(&json!({ "username": username, "password": "pw" }))
        .send()
        .await
        .unwrap()
}

async fn login(client: &reqwest::Client, base_url: &str, username: &str) -> reqwest::Response {
    client
        .post(format!("{}/customer/auth/login", base_url))
        .json(&json!({ "username": username, "password": "pw" }))
        .send()
        .await
        .unwrap()
}

async fn message_of(res: reqwest::Response) -> String {
    let body: serde_json::Value = res.json().await.unwrap();
    body["message"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_open() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn catalog_reads_cover_list_isbn_author_title_reviews() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(&srv.base_url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let books: serde_json::Value = res.json().await.unwrap();
    assert_eq!(books.as_object().unwrap().len(), 10);
    assert_eq!(books["1"]["title"], "Things Fall Apart");

    let res = client
        .get(format!("{}/isbn/8", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let book: serde_json::Value = res.json().await.unwrap();
    assert_eq!(book["author"], "Jane Austen");

    let res = client
        .get(format!("{}/isbn/999", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(format!("{}/author/Unknown", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["booksbyauthor"].as_array().unwrap().len(), 4);

    let res = client
        .get(format!("{}/author/Nobody", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(format!("{}/title/Pride%20and%20Prejudice", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let matches = body["booksbytitle"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["isbn"], "8");

    let res = client
        .get(format!("{}/review/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let reviews: serde_json::Value = res.json().await.unwrap();
    assert!(reviews.as_object().unwrap().is_empty());

    let res = client
        .get(format!("{}/review/999", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = register(&client, &srv.base_url, "alice").await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = register(&client, &srv.base_url, "alice").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert_eq!(message_of(res).await, "User already exists!");
}

#[tokio::test]
async fn registration_requires_username_and_password() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/register", srv.base_url))
        .json(&json!({ "username": "alice" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Still no user on record: login with those credentials stays invalid.
    let res = login(&client, &srv.base_url, "alice").await;
    assert_eq!(res.status(), StatusCode::ALREADY_REPORTED);
}

#[tokio::test]
async fn wrong_password_yields_the_distinguished_login_status() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    register(&client, &srv.base_url, "alice").await;

    let res = client
        .post(format!("{}/customer/auth/login", srv.base_url))
        .json(&json!({ "username": "alice", "password": "wrong" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::ALREADY_REPORTED);
    assert_eq!(message_of(res).await, "Invalid Login. Check username and password");
}

#[tokio::test]
async fn login_requires_username_and_password() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/customer/auth/login", srv.base_url))
        .json(&json!({ "password": "pw" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn review_mutation_requires_a_session() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/customer/auth/review/1", srv.base_url))
        .query(&[("review", "Great")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(message_of(res).await, "User not logged in");
}

#[tokio::test]
async fn review_lifecycle_add_modify_delete() {
    let srv = TestServer::spawn().await;
    let client = session_client();

    register(&client, &srv.base_url, "alice").await;
    let res = login(&client, &srv.base_url, "alice").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["token"].as_str().is_some());

    // First review: added.
    let res = client
        .put(format!("{}/customer/auth/review/1", srv.base_url))
        .query(&[("review", "Great")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(message_of(res).await.contains("successfully added"));

    // Same user, same book: modified, still a single entry.
    let res = client
        .put(format!("{}/customer/auth/review/1", srv.base_url))
        .query(&[("review", "Changed")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(message_of(res).await.contains("successfully modified"));

    let reviews: serde_json::Value = client
        .get(format!("{}/review/1", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reviews.as_object().unwrap().len(), 1);
    assert_eq!(reviews["alice"], "Changed");

    // Delete, then the follow-up delete has nothing to remove.
    let res = client
        .delete(format!("{}/customer/auth/review/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(message_of(res).await.contains("successfully deleted"));

    let res = client
        .delete(format!("{}/customer/auth/review/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_review_text_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = session_client();

    register(&client, &srv.base_url, "alice").await;
    login(&client, &srv.base_url, "alice").await;

    let res = client
        .put(format!("{}/customer/auth/review/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(message_of(res).await, "Review content is required.");

    // Unknown book outranks the missing review text.
    let res = client
        .put(format!("{}/customer/auth/review/999", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_review_leaves_other_users_entries_intact() {
    let srv = TestServer::spawn().await;

    let alice = session_client();
    register(&alice, &srv.base_url, "alice").await;
    login(&alice, &srv.base_url, "alice").await;

    let bob = session_client();
    register(&bob, &srv.base_url, "bob").await;
    login(&bob, &srv.base_url, "bob").await;

    for client in [&alice, &bob] {
        let res = client
            .put(format!("{}/customer/auth/review/2", srv.base_url))
            .query(&[("review", "Nice")])
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = alice
        .delete(format!("{}/customer/auth/review/2", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let reviews: serde_json::Value = reqwest::get(format!("{}/review/2", srv.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reviews.as_object().unwrap().len(), 1);
    assert_eq!(reviews["bob"], "Nice");
}

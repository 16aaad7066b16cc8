use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::sync::Once;

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("TICKET_TRACKER_BIND_ADDRESS").unwrap()
}

pub fn tickets_url() -> String {
    format!("http://{}/api/v1/tickets", address())
}

pub fn ticket_url(id: i64) -> String {
    format!("{}/{}", tickets_url(), id)
}

pub async fn create_ticket(client: &Client, user: &str, status: &str) -> Value {
    let response = client
        .post(tickets_url())
        .json(&json!({
            "user": user,
            "status": status,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    response.json::<Value>().await.unwrap()
}

pub fn id_of(ticket: &Value) -> i64 {
    ticket.get("id").unwrap().as_i64().unwrap()
}

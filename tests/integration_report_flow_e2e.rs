use once_cell::sync::Lazy;
use serde_json::{Value, json};
use std::time::{SystemTime, UNIX_EPOCH};

// These tests exercise the full HTTP surface against a running server and a
// database seeded from sql/schema.sql with:
//   - a user "e2e_reporter" whose password is "SecurePass123!@#"
//   - a post with id 42
//   - report types named "Spam", "Abuse", "Other" (type id 2 existing)
// Run with: cargo test -- --ignored

static CLIENT: Lazy<reqwest::Client> = Lazy::new(|| reqwest::Client::new());

const BASE_URL: &str = "http://127.0.0.1:3000";

fn unique_description() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    format!("e2e report {}", timestamp)
}

async fn login(username: &str, password: &str) -> Value {
    CLIENT
        .get(format!("{}/session/login", BASE_URL))
        .query(&[("username", username), ("password", password)])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires a running server and seeded database"]
    async fn login_report_logout_round_trip() {
        let login_body = login("e2e_reporter", "SecurePass123!@#").await;
        assert_eq!(login_body["success"], 1, "login failed: {}", login_body);
        let session_id = login_body["session_id"].as_i64().unwrap();
        let token = login_body["token"].as_str().unwrap().to_string();

        let report_response = CLIENT
            .post(format!("{}/reportcontent/", BASE_URL))
            .json(&json!({
                "session_id": session_id,
                "session_token": token,
                "post_id": 42,
                "report_type": 2,
                "report_description": unique_description()
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(report_response.status().as_u16(), 200);
        let report_body: Value = report_response.json().await.unwrap();
        assert_eq!(report_body["success"], true);

        let logout_body: Value = CLIENT
            .get(format!("{}/session/logout", BASE_URL))
            .query(&[("session_id", session_id.to_string()), ("token", token)])
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(logout_body["success"], 1);
    }

    #[tokio::test]
    #[ignore = "requires a running server and seeded database"]
    async fn wrong_password_creates_no_session() {
        let body = login("e2e_reporter", "not-the-password").await;
        assert_eq!(body["success"], 0);
        assert!(body.get("session_id").is_none());
        assert!(body.get("token").is_none());
    }

    #[tokio::test]
    #[ignore = "requires a running server and seeded database"]
    async fn logout_succeeds_at_most_once() {
        let login_body = login("e2e_reporter", "SecurePass123!@#").await;
        let session_id = login_body["session_id"].as_i64().unwrap().to_string();
        let token = login_body["token"].as_str().unwrap().to_string();

        let first: Value = CLIENT
            .get(format!("{}/session/logout", BASE_URL))
            .query(&[("session_id", session_id.clone()), ("token", token.clone())])
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let second: Value = CLIENT
            .get(format!("{}/session/logout", BASE_URL))
            .query(&[("session_id", session_id), ("token", token)])
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(first["success"], 1);
        assert_eq!(second["success"], 0);
    }

    #[tokio::test]
    #[ignore = "requires a running server and seeded database"]
    async fn report_without_session_is_unauthorized() {
        let response = CLIENT
            .post(format!("{}/reportcontent/", BASE_URL))
            .json(&json!({
                "post_id": 42,
                "report_type": 2,
                "report_description": "no session"
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 401);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "You are not logged in.");
    }

    #[tokio::test]
    #[ignore = "requires a running server and seeded database"]
    async fn missing_post_id_is_named_in_the_error() {
        let login_body = login("e2e_reporter", "SecurePass123!@#").await;
        let session_id = login_body["session_id"].as_i64().unwrap();
        let token = login_body["token"].as_str().unwrap();

        let response = CLIENT
            .post(format!("{}/reportcontent/", BASE_URL))
            .json(&json!({
                "session_id": session_id,
                "session_token": token,
                "report_type": 2,
                "report_description": "missing post id"
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 400);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("post_id"));
    }

    #[tokio::test]
    #[ignore = "requires a running server and seeded database"]
    async fn missing_references_fail_in_documented_order() {
        let login_body = login("e2e_reporter", "SecurePass123!@#").await;
        let session_id = login_body["session_id"].as_i64().unwrap();
        let token = login_body["token"].as_str().unwrap();

        // nonexistent post: the post check fires first
        let response = CLIENT
            .post(format!("{}/reportcontent/", BASE_URL))
            .json(&json!({
                "session_id": session_id,
                "session_token": token,
                "post_id": 99999999,
                "report_type": 99999999,
                "report_description": "both invalid"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 404);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Post does not exist.");

        // valid post, nonexistent type: the type check reports
        let response = CLIENT
            .post(format!("{}/reportcontent/", BASE_URL))
            .json(&json!({
                "session_id": session_id,
                "session_token": token,
                "post_id": 42,
                "report_type": 99999999,
                "report_description": "bad type"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 404);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Report type does not exist.");
    }

    #[tokio::test]
    #[ignore = "requires a running server and seeded database"]
    async fn report_types_are_ordered_by_name() {
        let body: Value = CLIENT
            .get(format!("{}/reportcontent/types", BASE_URL))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["success"], true);
        let names: Vec<&str> = body["report_types"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["type"].as_str().unwrap())
            .collect();

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}

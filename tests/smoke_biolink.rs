use reqwest::{header, redirect::Policy, StatusCode};
use serde::Deserialize;
use std::{env, time::Duration};
use tokio::time::sleep;

#[derive(Deserialize)]
struct HealthResponse {
    status: String,
}

#[tokio::test]
async fn smoke_biolink_flow() {
    dotenvy::dotenv().ok();

    // Needs a running server with ADMIN_USERNAME/ADMIN_PASSWORD set; off by default.
    let run_smoke = env::var("RUN_SMOKE_BIOLINK")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if !run_smoke {
        eprintln!("skipping smoke_biolink_flow (set RUN_SMOKE_BIOLINK=1 to enable)");
        return;
    }

    let base_url = env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let username = env::var("ADMIN_USERNAME").expect("ADMIN_USERNAME must be set");
    let password = env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set");
    let retries: usize = env::var("SMOKE_BIOLINK_RETRIES")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(30);
    let retry_delay_ms: u64 = env::var("SMOKE_BIOLINK_RETRY_DELAY_MS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(300);

    let client = reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("client");
    wait_for_health(&client, &base_url, retries, retry_delay_ms).await;

    let health = client
        .get(format!("{}/api/v1/health", base_url))
        .send()
        .await
        .expect("health request")
        .json::<HealthResponse>()
        .await
        .expect("health json");
    assert_eq!(health.status, "ok");

    let landing = client.get(&base_url).send().await.expect("landing request");
    assert_eq!(landing.status(), StatusCode::OK);
    assert!(landing.text().await.expect("landing body").contains("Send Me a Message"));

    let guarded = client
        .get(format!("{}/admin", base_url))
        .send()
        .await
        .expect("admin request");
    assert_eq!(guarded.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&guarded), Some("/login"));

    let bad_login = client
        .post(format!("{}/login", base_url))
        .form(&[("username", username.as_str()), ("password", "definitely-wrong")])
        .send()
        .await
        .expect("bad login request");
    assert_eq!(bad_login.status(), StatusCode::UNAUTHORIZED);

    let login = client
        .post(format!("{}/login", base_url))
        .form(&[("username", username.as_str()), ("password", password.as_str())])
        .send()
        .await
        .expect("login request");
    assert_eq!(login.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&login), Some("/admin"));
    let cookie = login
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .expect("session cookie")
        .to_string();

    let dashboard = client
        .get(format!("{}/admin", base_url))
        .header(header::COOKIE, &cookie)
        .send()
        .await
        .expect("dashboard request");
    assert_eq!(dashboard.status(), StatusCode::OK);

    let logout = client
        .post(format!("{}/admin", base_url))
        .header(header::COOKIE, &cookie)
        .send()
        .await
        .expect("logout request");
    assert_eq!(logout.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&logout), Some("/"));
}

fn location(response: &reqwest::Response) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

async fn wait_for_health(client: &reqwest::Client, base_url: &str, retries: usize, delay_ms: u64) {
    let url = format!("{}/api/v1/health", base_url);
    for attempt in 0..retries {
        match client.get(&url).send().await {
            Ok(response) if response.status() == StatusCode::OK => return,
            _ => {
                if attempt + 1 >= retries {
                    panic!("service not ready after {} attempts (base_url={})", retries, base_url);
                }
                sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}

use std::net::SocketAddr;
use std::time::Duration;

use axum::{extract::Path, http::StatusCode, response::IntoResponse, routing::get, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tracing_test::traced_test;

use car_rating_api::service::VehicleLookupClient;

// Stub catalog serving the vPIC getmodelsformake response shape. The
// behavior is keyed on the make segment so one server covers every case.
async fn stub_catalog(Path(make): Path<String>) -> impl IntoResponse {
    match make.as_str() {
        "NISSAN" => axum::Json(json!({
            "Count": 2,
            "Results": [
                { "Make_Name": "NISSAN", "Model_Name": "350Z" },
                { "Make_Name": "NISSAN", "Model_Name": "Juke" }
            ]
        }))
        .into_response(),
        "BROKEN" => "this is not json".into_response(),
        "ERROR" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "SLOW" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            axum::Json(json!({ "Results": [] })).into_response()
        }
        _ => axum::Json(json!({ "Count": 0, "Results": [] })).into_response(),
    }
}

async fn spawn_stub_server() -> SocketAddr {
    let app = Router::new().route("/getmodelsformake/:make", get(stub_catalog));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr, timeout: Duration) -> VehicleLookupClient {
    VehicleLookupClient::new(format!("http://{}", addr), timeout).unwrap()
}

#[tokio::test]
async fn known_make_and_model_exists() {
    let addr = spawn_stub_server().await;
    let client = client_for(addr, Duration::from_secs(5));

    assert!(client.exists("Nissan", "350z").await);
}

#[tokio::test]
async fn model_match_is_case_insensitive() {
    let addr = spawn_stub_server().await;
    let client = client_for(addr, Duration::from_secs(5));

    assert!(client.exists("nissan", "JUKE").await);
    assert!(client.exists("NISSAN", "juke").await);
}

#[tokio::test]
async fn unknown_model_does_not_exist() {
    let addr = spawn_stub_server().await;
    let client = client_for(addr, Duration::from_secs(5));

    assert!(!client.exists("Nissan", "Mustang").await);
}

#[tokio::test]
async fn unknown_make_does_not_exist() {
    let addr = spawn_stub_server().await;
    let client = client_for(addr, Duration::from_secs(5));

    assert!(!client.exists("NotARealMake", "350z").await);
}

#[tokio::test]
#[traced_test]
async fn malformed_response_fails_closed() {
    let addr = spawn_stub_server().await;
    let client = client_for(addr, Duration::from_secs(5));

    assert!(!client.exists("Broken", "350z").await);
    assert!(logs_contain("Vehicle lookup failed"));
}

#[tokio::test]
async fn server_error_fails_closed() {
    let addr = spawn_stub_server().await;
    let client = client_for(addr, Duration::from_secs(5));

    assert!(!client.exists("Error", "350z").await);
}

#[tokio::test]
async fn unreachable_catalog_fails_closed() {
    // Bind then drop, so the port is known-dead.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr, Duration::from_secs(1));
    assert!(!client.exists("Nissan", "350z").await);
}

#[tokio::test]
async fn slow_catalog_times_out_and_fails_closed() {
    let addr = spawn_stub_server().await;
    let client = client_for(addr, Duration::from_millis(200));

    assert!(!client.exists("Slow", "350z").await);
}

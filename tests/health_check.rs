use chatbridge::configuration::get_configuration;

mod common;

#[tokio::test]
async fn gateway_health_check_works() {
    let configuration = get_configuration().expect("Failed to get configuration");
    let app = match common::spawn_gateway_with_configuration(configuration).await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/health_check", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn file_service_health_check_works() {
    let configuration = get_configuration().expect("Failed to get configuration");
    let app = match common::spawn_file_service_with_configuration(configuration).await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/health_check", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn file_service_root_lists_supported_formats() {
    let configuration = get_configuration().expect("Failed to get configuration");
    let app = match common::spawn_file_service_with_configuration(configuration).await {
        Some(app) => app,
        None => return,
    };

    let body: serde_json::Value = reqwest::Client::new()
        .get(&format!("{}/", &app.address))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Invalid json body");

    let formats = body["supported_formats"]
        .as_array()
        .expect("supported_formats missing");
    assert!(formats.iter().any(|f| f == ".pdf"));
    assert!(formats.iter().any(|f| f == ".txt"));
}

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;
use variant_viz::{ApiError, MutationDataManager, VisualizerClient};

const VARIANTS_JSON: &str = r#"[
    {"id": "V1", "mutation": "A1C+V3L", "position": 1, "wild_type": "A", "mutant": "C",
     "properties": {"stability": 0.5, "activity": 2.0}},
    {"id": "V2", "mutation": "V2W", "position": 2, "wild_type": "V", "mutant": "W",
     "properties": {"stability": -1.0, "activity": null}}
]"#;

struct Route {
    path: &'static str,
    status: u16,
    body: &'static str,
}

/// Serves canned responses on an ephemeral port, one request per connection.
fn spawn_backend(routes: Vec<Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { break };
            respond(stream, &routes);
        }
    });

    format!("http://{}", addr)
}

fn respond(mut stream: TcpStream, routes: &[Route]) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let request = String::from_utf8_lossy(&request);
    let path = request.split_whitespace().nth(1).unwrap_or("");
    let (status, body) = routes
        .iter()
        .find(|route| route.path == path)
        .map(|route| (route.status, route.body))
        .unwrap_or((404, r#"{"detail": "Not Found"}"#));

    let response = format!(
        "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

/// Base URL of a port nothing listens on.
fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{}", addr)
}

fn client(base_url: &str) -> VisualizerClient {
    VisualizerClient::new(base_url, Duration::from_secs(5)).expect("build client")
}

#[tokio::test]
async fn fetches_variants_in_order() {
    let base_url = spawn_backend(vec![Route {
        path: "/visualizer/variants",
        status: 200,
        body: VARIANTS_JSON,
    }]);

    let variants = client(&base_url).fetch_mutation_data().await.unwrap();
    assert_eq!(variants.len(), 2);
    assert_eq!(variants[0].mutation, "A1C+V3L");
    assert_eq!(variants[1].id.as_deref(), Some("V2"));
    assert_eq!(
        variants[0].properties.names().collect::<Vec<_>>(),
        vec!["stability", "activity"]
    );
}

#[tokio::test]
async fn null_variant_body_is_an_empty_list() {
    let base_url = spawn_backend(vec![Route {
        path: "/visualizer/variants",
        status: 200,
        body: "null",
    }]);

    let variants = client(&base_url).fetch_mutation_data().await.unwrap();
    assert!(variants.is_empty());
}

#[tokio::test]
async fn empty_variant_body_is_an_empty_list() {
    let base_url = spawn_backend(vec![Route {
        path: "/visualizer/variants",
        status: 200,
        body: "",
    }]);

    let variants = client(&base_url).fetch_mutation_data().await.unwrap();
    assert!(variants.is_empty());
}

#[tokio::test]
async fn empty_parent_body_is_an_empty_sequence() {
    let base_url = spawn_backend(vec![Route {
        path: "/visualizer/parent-sequence",
        status: 200,
        body: "",
    }]);

    let parent = client(&base_url).fetch_parent_sequence_data().await.unwrap();
    assert_eq!(parent.sequence, "");
}

#[tokio::test]
async fn server_error_on_variants_is_a_fetch_error() {
    let base_url = spawn_backend(vec![Route {
        path: "/visualizer/variants",
        status: 500,
        body: r#"{"detail": "Variants data not loaded."}"#,
    }]);

    let err = client(&base_url).fetch_mutation_data().await.unwrap_err();
    match err {
        ApiError::Fetch { endpoint, .. } => {
            assert_eq!(endpoint, format!("{}/visualizer/variants", base_url))
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn malformed_variant_json_is_a_fetch_error() {
    let base_url = spawn_backend(vec![Route {
        path: "/visualizer/variants",
        status: 200,
        body: r#"[{"properties": {}}]"#,
    }]);

    let err = client(&base_url).fetch_mutation_data().await.unwrap_err();
    assert!(matches!(err, ApiError::Fetch { .. }));
}

#[tokio::test]
async fn refused_connection_on_variants_propagates() {
    let err = client(&closed_port_url())
        .fetch_mutation_data()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Fetch { .. }));
}

#[tokio::test]
async fn fetches_parent_sequence() {
    let base_url = spawn_backend(vec![Route {
        path: "/visualizer/parent-sequence",
        status: 200,
        body: r#"{"sequence": "MKVLA"}"#,
    }]);

    let parent = client(&base_url).fetch_parent_sequence_data().await.unwrap();
    assert_eq!(parent.sequence, "MKVLA");
}

#[tokio::test]
async fn parent_sequence_failure_raises_or_falls_back_to_empty() {
    let client = client(&closed_port_url());

    let err = client.fetch_parent_sequence_data().await.unwrap_err();
    assert!(matches!(err, ApiError::Fetch { .. }));

    let parent = client.fetch_parent_sequence_data_or_empty().await;
    assert_eq!(parent.sequence, "");
}

#[tokio::test]
async fn manager_loads_from_backend() {
    let base_url = spawn_backend(vec![
        Route {
            path: "/visualizer/parent-sequence",
            status: 200,
            body: r#"{"sequence": "AVV"}"#,
        },
        Route {
            path: "/visualizer/variants",
            status: 200,
            body: VARIANTS_JSON,
        },
    ]);

    let mut manager = MutationDataManager::new(client(&format!("{}/", base_url)));
    manager.initialize().await.unwrap();

    let state = manager.state();
    assert_eq!(state.parent_sequence, "AVV");
    assert_eq!(state.mutated_sequence, "CWL");
    assert_eq!(state.selected_property.as_deref(), Some("stability"));

    let rows = manager.data_for_selected_property().unwrap();
    assert_eq!(rows[0].mutation_position, 1);
    assert_eq!(rows[0].mutated_amino_acid, vec!['C', 'L']);
    assert_eq!(rows[0].original_amino_acid, Some('A'));
    assert_eq!(rows[1].value, Some(-1.0));
}

#[tokio::test]
async fn manager_surfaces_missing_variants_endpoint() {
    let base_url = spawn_backend(vec![Route {
        path: "/visualizer/parent-sequence",
        status: 200,
        body: r#"{"sequence": "AVV"}"#,
    }]);

    let mut manager = MutationDataManager::new(client(&base_url));
    assert!(manager.initialize().await.is_err());
    assert!(!manager.is_ready());
    assert!(manager.state().parent_sequence.is_empty());
}

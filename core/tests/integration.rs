//! Photo lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every photo
//! descriptor over real HTTP using ureq. Validates that the request building
//! and response parsing work end-to-end with the actual server.

use media_core::{Album, ApiError, HttpMethod, HttpRequest, HttpResponse, PhotosClient};
use uuid::Uuid;

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the client
/// handle status interpretation.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let url = if req.query.is_empty() {
        req.path
    } else {
        let pairs: Vec<String> = req.query.iter().map(|(k, v)| format!("{k}={v}")).collect();
        format!("{}?{}", req.path, pairs.join("&"))
    };

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&url).call(),
        (HttpMethod::Delete, _) => agent.delete(&url).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&url).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&url).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

#[test]
fn photo_lifecycle() {
    // Step 1: start mock server on a random port.
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    let client = PhotosClient::new(&format!("http://{addr}"));
    let album = Album { id: Uuid::new_v4() };
    let other_album = Album { id: Uuid::new_v4() };

    // Step 2: fetch — album has no photos yet.
    let req = client.build_fetch_photos(&album);
    let photos = client.parse_fetch_photos(execute(req)).unwrap();
    assert!(photos.is_empty(), "expected empty album");

    // Step 3: add a photo to the album.
    let req = client.build_add_photo(&album).unwrap();
    let created = client.parse_add_photo(execute(req)).unwrap();
    assert_eq!(created.album_id, album.id);
    assert!(created.url.starts_with("https://picsum.photos/seed/"));
    assert!(created.url.ends_with("/150/150"));

    // Step 4: fetch — the album now has one photo.
    let req = client.build_fetch_photos(&album);
    let photos = client.parse_fetch_photos(execute(req)).unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0], created);

    // Step 5: fetch another album — the filter excludes the new photo.
    let req = client.build_fetch_photos(&other_album);
    let photos = client.parse_fetch_photos(execute(req)).unwrap();
    assert!(photos.is_empty(), "albumId filter leaked across albums");

    // Step 6: remove the photo; the server reports the deleted resource.
    let req = client.build_remove_photo(&created);
    let body = client.parse_remove_photo(execute(req)).unwrap();
    assert_eq!(body["id"], created.id.to_string());

    // Step 7: remove again — surfaced as a plain HTTP failure.
    let req = client.build_remove_photo(&created);
    let err = client.parse_remove_photo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 404, .. }));

    // Step 8: fetch — the album is empty again.
    let req = client.build_fetch_photos(&album);
    let photos = client.parse_fetch_photos(execute(req)).unwrap();
    assert!(photos.is_empty(), "expected empty album after delete");
}

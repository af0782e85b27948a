use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use files_api::{handle_request, ServedRoot};
use platform_host::FileListing;

fn temp_public_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("{prefix}_{}_{}", process::id(), nanos));
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

fn seed_portfolio(public_dir: &PathBuf) {
    let root = public_dir.join("files/portfolio");
    fs::create_dir_all(root.join("projects")).expect("create projects");
    fs::create_dir_all(root.join("docs")).expect("create docs");
    fs::write(root.join("readme.md"), "# portfolio\n").expect("write readme");
    fs::write(root.join("Avatar.png"), [0u8; 4]).expect("write avatar");
    fs::write(root.join("projects/flicksy.txt"), "movie recommendations").expect("write project");
}

fn parse_listing(body: &[u8]) -> FileListing {
    serde_json::from_slice(body).expect("listing json")
}

#[test]
fn listing_sorts_directories_first_then_case_insensitive_names() {
    let public_dir = temp_public_dir("files_api_listing");
    seed_portfolio(&public_dir);
    let root = ServedRoot::new(&public_dir);

    let listing = root.list_dir("files/portfolio").expect("list");
    let names: Vec<&str> = listing.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["docs", "projects", "Avatar.png", "readme.md"]);
    assert!(listing.files[0].is_dir());
    assert!(listing.files[1].is_dir());
    assert!(!listing.files[2].is_dir());

    let readme = listing
        .files
        .iter()
        .find(|f| f.name == "readme.md")
        .expect("readme entry");
    assert_eq!(readme.extension.as_deref(), Some("md"));
    assert_eq!(readme.path, "files/portfolio/readme.md");
    assert!(readme.size.is_some());

    let _ = fs::remove_dir_all(public_dir);
}

#[test]
fn files_endpoint_maps_statuses_per_contract() {
    let public_dir = temp_public_dir("files_api_statuses");
    seed_portfolio(&public_dir);
    let root = ServedRoot::new(&public_dir);

    let traversal = handle_request(&root, "GET", "/api/files?path=../etc");
    assert_eq!(traversal.status, 403);
    let body: serde_json::Value = serde_json::from_slice(&traversal.body).expect("json");
    assert_eq!(body["error"], "Access denied");

    let encoded_traversal = handle_request(&root, "GET", "/api/files?path=files%2F%2e%2e%2Fsecret");
    assert_eq!(encoded_traversal.status, 403);

    let missing = handle_request(&root, "GET", "/api/files?path=files/doesnotexist");
    assert_eq!(missing.status, 404);
    let body: serde_json::Value = serde_json::from_slice(&missing.body).expect("json");
    assert_eq!(body["error"], "Directory not found");

    let ok = handle_request(&root, "GET", "/api/files?path=files%2Fportfolio");
    assert_eq!(ok.status, 200);
    assert_eq!(ok.content_type, "application/json");
    let listing = parse_listing(&ok.body);
    let first_file_index = listing
        .files
        .iter()
        .position(|f| !f.is_dir())
        .expect("some file");
    assert!(listing.files[..first_file_index].iter().all(|f| f.is_dir()));

    let _ = fs::remove_dir_all(public_dir);
}

#[test]
fn files_endpoint_defaults_to_the_portfolio_root() {
    let public_dir = temp_public_dir("files_api_default");
    seed_portfolio(&public_dir);
    let root = ServedRoot::new(&public_dir);

    let response = handle_request(&root, "GET", "/api/files");
    assert_eq!(response.status, 200);
    let listing = parse_listing(&response.body);
    assert!(listing.files.iter().any(|f| f.name == "readme.md"));

    let empty_param = handle_request(&root, "GET", "/api/files?path=");
    assert_eq!(empty_param.status, 200);

    let _ = fs::remove_dir_all(public_dir);
}

#[test]
fn file_content_endpoint_requires_a_path_and_reads_text() {
    let public_dir = temp_public_dir("files_api_content");
    seed_portfolio(&public_dir);
    let root = ServedRoot::new(&public_dir);

    let missing = handle_request(&root, "GET", "/api/file-content");
    assert_eq!(missing.status, 400);
    let body: serde_json::Value = serde_json::from_slice(&missing.body).expect("json");
    assert_eq!(body["error"], "File path is required");

    let traversal = handle_request(&root, "GET", "/api/file-content?path=files/..%2Fetc%2Fpasswd");
    assert_eq!(traversal.status, 403);

    let unreadable = handle_request(&root, "GET", "/api/file-content?path=files/portfolio/nope.txt");
    assert_eq!(unreadable.status, 404);
    let body: serde_json::Value = serde_json::from_slice(&unreadable.body).expect("json");
    assert_eq!(body["error"], "File not found or cannot be read");

    let ok = handle_request(
        &root,
        "GET",
        "/api/file-content?path=files%2Fportfolio%2Freadme.md",
    );
    assert_eq!(ok.status, 200);
    let body: serde_json::Value = serde_json::from_slice(&ok.body).expect("json");
    assert_eq!(body["content"], "# portfolio\n");

    let _ = fs::remove_dir_all(public_dir);
}

#[test]
fn static_assets_resolve_under_the_served_prefix_only() {
    let public_dir = temp_public_dir("files_api_assets");
    seed_portfolio(&public_dir);
    fs::write(public_dir.join("outside.txt"), "secret").expect("write outside");
    let root = ServedRoot::new(&public_dir);

    let image = handle_request(&root, "GET", "/files/portfolio/Avatar.png");
    assert_eq!(image.status, 200);
    assert_eq!(image.content_type, "image/png");
    assert_eq!(image.body.len(), 4);

    let outside = handle_request(&root, "GET", "/outside.txt");
    assert_eq!(outside.status, 404);

    let directory = handle_request(&root, "GET", "/files/portfolio/projects");
    assert_eq!(directory.status, 404);

    let post = handle_request(&root, "POST", "/api/files?path=files/portfolio");
    assert_eq!(post.status, 404);

    let _ = fs::remove_dir_all(public_dir);
}

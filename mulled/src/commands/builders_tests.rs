use super::*;
use crate::commands::test_context;
use libmulled::MulledError;

fn builder(name: &str, homepage: &str, explicit: bool) -> Builder {
    Builder {
        name: name.to_string(),
        homepage: homepage.to_string(),
        explicit_versioning: explicit,
    }
}

#[test]
fn test_render_builders_empty_is_header_only() {
    let out = render_builders(&[]);
    assert_eq!(out, "NAME           HOMEPAGE       EXPLICIT VERSIONING");
}

#[test]
fn test_render_builders_explicit_versioning_yes() {
    let out = render_builders(&[builder("conda", "https://conda.io", true)]);
    let row = out.lines().nth(1).unwrap();

    assert!(row.starts_with("conda"));
    assert!(row.ends_with("YES"));
}

#[test]
fn test_render_builders_without_explicit_versioning_is_blank() {
    let out = render_builders(&[builder("linuxbrew", "https://linuxbrew.sh", false)]);
    let row = out.lines().nth(1).unwrap();

    assert!(row.ends_with("https://linuxbrew.sh"));
    assert!(!row.contains("NO"));
    assert!(!row.contains("false"));
}

#[test]
fn test_render_builders_keeps_api_order() {
    let out = render_builders(&[
        builder("zeta", "", false),
        builder("alpha", "", true),
    ]);
    let rows: Vec<&str> = out.lines().collect();

    assert!(rows[1].starts_with("zeta"));
    assert!(rows[2].starts_with("alpha"));
}

#[test]
fn test_load_builders_empty_array() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/builders.json")
        .with_status(200)
        .with_body("[]")
        .create();

    let ctx = test_context(&server.url());
    let client = connect(&ctx).unwrap();
    let builders = load_builders(&ctx, &client).unwrap();

    mock.assert();
    assert_eq!(render_builders(&builders).lines().count(), 1);
}

#[test]
fn test_load_builders_missing_flag_renders_blank() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/builders.json")
        .with_status(200)
        .with_body(
            r#"[{"name":"conda","homepage":"https://conda.io","explicitVersioning":true},
                {"name":"linuxbrew","homepage":"https://linuxbrew.sh"}]"#,
        )
        .create();

    let ctx = test_context(&server.url());
    let client = connect(&ctx).unwrap();
    let builders = load_builders(&ctx, &client).unwrap();
    let out = render_builders(&builders);
    let rows: Vec<&str> = out.lines().collect();

    mock.assert();
    assert!(rows[1].ends_with("YES"));
    assert!(rows[2].ends_with("https://linuxbrew.sh"));
}

#[test]
fn test_load_builders_malformed_json() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/builders.json")
        .with_status(200)
        .with_body("[{\"name\":")
        .create();

    let ctx = test_context(&server.url());
    let client = connect(&ctx).unwrap();
    let result = load_builders(&ctx, &client);

    mock.assert();
    assert!(matches!(result.unwrap_err(), MulledError::Decode { .. }));
}

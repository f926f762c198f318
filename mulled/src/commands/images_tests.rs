use super::*;
use crate::commands::test_context;
use libmulled::{ImageSummary, MulledError, VersionEntry};

fn version(version: &str, revision: &str) -> VersionEntry {
    VersionEntry {
        version: version.to_string(),
        revision: revision.to_string(),
        ..Default::default()
    }
}

fn image(packager: &str, name: &str, versions: Vec<VersionEntry>) -> ImageSummary {
    ImageSummary {
        packager: packager.to_string(),
        image: name.to_string(),
        versions,
        ..Default::default()
    }
}

#[test]
fn test_image_rows_one_per_version() {
    let images = ImageCollection::new(vec![
        image("bioconda", "bwa", vec![version("0.7.17", "1"), version("0.7.15", "0")]),
        image("bioconda", "samtools", vec![version("1.9", "0")]),
    ]);

    let rows = image_rows(&images);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], Line::cells(["bioconda", "bwa", "1", "0.7.17"]));
    assert_eq!(rows[1], Line::cells(["bioconda", "bwa", "0", "0.7.15"]));
    assert_eq!(rows[2], Line::cells(["bioconda", "samtools", "0", "1.9"]));
}

#[test]
fn test_image_without_versions_has_no_rows() {
    let images = ImageCollection::new(vec![image("bioconda", "empty", vec![])]);
    assert!(image_rows(&images).is_empty());

    let out = render_images(&images);
    assert_eq!(out, "PACKAGER       NAME           REVISION       VERSION");
}

#[test]
fn test_render_images_header_first() {
    let images = ImageCollection::new(vec![image("bioconda", "bwa", vec![version("0.7.17", "1")])]);
    let out = render_images(&images);
    let rows: Vec<&str> = out.lines().collect();

    assert!(rows[0].starts_with("PACKAGER"));
    assert_eq!(rows[0].find("NAME"), rows[1].find("bwa"));
    assert_eq!(rows[0].find("REVISION"), rows[1].find('1'));
}

#[test]
fn test_load_images_sorts_same_packager_by_name() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/images.json")
        .with_status(200)
        .with_body(
            r#"[{"image":"samtools","packager":"bioconda","versions":[{"version":"1.9","revision":"0"}]},
                {"image":"bwa","packager":"bioconda","versions":[{"version":"0.7.17","revision":"1"}]}]"#,
        )
        .create();

    let ctx = test_context(&server.url());
    let client = connect(&ctx).unwrap();
    let images = load_images(&ctx, &client).unwrap();
    let out = render_images(&images);

    mock.assert();
    let bwa = out.find("bwa").unwrap();
    let samtools = out.find("samtools").unwrap();
    assert!(bwa < samtools);
}

#[test]
fn test_load_images_sorts_by_packager_first() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/images.json")
        .with_status(200)
        .with_body(
            r#"[{"image":"aaa","packager":"linuxbrew","versions":[{"version":"1","revision":"0"}]},
                {"image":"zzz","packager":"bioconda","versions":[{"version":"2","revision":"0"}]}]"#,
        )
        .create();

    let ctx = test_context(&server.url());
    let client = connect(&ctx).unwrap();
    let images = load_images(&ctx, &client).unwrap();

    mock.assert();
    let names: Vec<&str> = images.iter().map(|i| i.image.as_str()).collect();
    assert_eq!(names, vec!["zzz", "aaa"]);
}

#[test]
fn test_load_images_server_error() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/images.json")
        .with_status(503)
        .with_body("maintenance")
        .create();

    let ctx = test_context(&server.url());
    let client = connect(&ctx).unwrap();
    let result = load_images(&ctx, &client);

    mock.assert();
    assert!(matches!(result.unwrap_err(), MulledError::Server { .. }));
}

use site_harvest::config::{AssetNaming, Config, CrawlMode};
use site_harvest::crawler::PageOutcome;
use site_harvest::facets::{Heuristics, LabelHeuristic, LinkRef, NavGroup, NavigationHeuristic};
use site_harvest::output::{Summary, SUMMARY_FILE};
use site_harvest::Harvester;
use scraper::{ElementRef, Html, Selector};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration writing below `root`
fn create_test_config(root: &Path) -> Config {
    let mut config = Config::default();
    config.output.root = root.to_string_lossy().into_owned();
    config.fetch.timeout_secs = 5;
    config
}

async fn mount_html(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn mount_bytes(server: &MockServer, route: &str, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .mount(server)
        .await;
}

/// Regular files in a directory, ignoring leftovers of interrupted downloads
fn files_in(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| entry.expect("Failed to read entry").path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    files
}

#[tokio::test]
async fn test_single_page_with_image() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let temp_dir = TempDir::new().unwrap();

    mount_html(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body>
        <h1>Welcome</h1>
        <p>First paragraph</p>
        <img src="/a.jpg" alt="logo">
        </body></html>"#,
    )
    .await;
    mount_bytes(&mock_server, "/a.jpg", b"jpeg-bytes").await;

    let mut config = create_test_config(temp_dir.path());
    config.assets.naming = AssetNaming::Basename;

    let mut harvester = Harvester::new(config).expect("Failed to create harvester");
    let outcome = harvester.extract_page(&format!("{}/", base_url)).await;
    assert!(outcome.is_extracted());

    let aggregate = harvester.aggregate();
    assert_eq!(aggregate.images().len(), 1);

    let image = &aggregate.images()[0];
    assert_eq!(image.remote_url, format!("{}/a.jpg", base_url));
    assert_eq!(image.alt_text, "logo");
    assert_eq!(image.original_src, "/a.jpg");
    assert!(image.local_path.ends_with(Path::new("images").join("a.jpg")));
    assert_eq!(std::fs::read(&image.local_path).unwrap(), b"jpeg-bytes");

    let page_key = format!("{}/", base_url);
    let content = &aggregate.text_content()[&page_key];
    assert_eq!(content.title, "Home");
    assert_eq!(content.headings["h1"], vec!["Welcome"]);
    assert_eq!(content.paragraphs, vec!["First paragraph"]);

    let root = temp_dir.path();
    assert!(root.join("html").join("index.html").is_file());
    assert!(root.join("content").join("index_content.json").is_file());
    assert!(root.join("content").join("index_structure.json").is_file());
    for category in ["js", "fonts", "screenshots"] {
        assert!(root.join(category).is_dir());
    }
}

#[tokio::test]
async fn test_failed_image_does_not_stop_page() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    mount_html(
        &mock_server,
        "/",
        r#"<html><body>
        <img src="/one.png" alt="one">
        <img src="/missing.png" alt="missing">
        <img src="/three.png" alt="three">
        </body></html>"#,
    )
    .await;
    mount_bytes(&mock_server, "/one.png", b"one").await;
    mount_bytes(&mock_server, "/three.png", b"three").await;
    Mock::given(method("GET"))
        .and(path("/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let config = create_test_config(temp_dir.path());
    let mut harvester = Harvester::new(config).expect("Failed to create harvester");
    let summary = harvester
        .run(&format!("{}/", mock_server.uri()))
        .await
        .expect("Harvest failed");

    assert_eq!(summary.total_images, 2);
    assert_eq!(summary.pages_with_content, 1);

    let alts: Vec<&str> = harvester
        .aggregate()
        .images()
        .iter()
        .map(|image| image.alt_text.as_str())
        .collect();
    assert_eq!(alts, vec!["one", "three"]);

    // No partial file is left for the failed download
    assert_eq!(files_in(&temp_dir.path().join("images")).len(), 2);
    assert!(temp_dir.path().join(SUMMARY_FILE).is_file());
}

#[tokio::test]
async fn test_failed_fetch_still_writes_summary() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let start = format!("{}/", mock_server.uri());
    let config = create_test_config(temp_dir.path());
    let mut harvester = Harvester::new(config).expect("Failed to create harvester");
    let summary = harvester.run(&start).await.expect("Harvest failed");

    assert!(harvester.aggregate().text_content().is_empty());
    assert!(harvester.aggregate().structure().is_empty());
    assert!(harvester.aggregate().is_visited(&start));

    assert_eq!(summary.pages_extracted, 1);
    assert_eq!(summary.pages_with_content, 0);
    assert_eq!(summary.failed_pages, vec![start.clone()]);

    let json = std::fs::read_to_string(temp_dir.path().join(SUMMARY_FILE)).unwrap();
    let written: Summary = serde_json::from_str(&json).unwrap();
    assert_eq!(written.pages_extracted, 1);
    assert_eq!(written.pages_with_content, 0);
    assert_eq!(written.base_url, start);
}

#[tokio::test]
async fn test_extract_page_is_idempotent() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<html><body><img src="/a.jpg" alt=""></body></html>"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/a.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"a".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let config = create_test_config(temp_dir.path());
    let mut harvester = Harvester::new(config).expect("Failed to create harvester");

    assert!(harvester.extract_page(&url).await.is_extracted());
    assert_eq!(
        harvester.extract_page(&url).await,
        PageOutcome::AlreadyVisited
    );
    // A fragment never selects a different page
    assert_eq!(
        harvester.extract_page(&format!("{}#top", url)).await,
        PageOutcome::AlreadyVisited
    );

    assert_eq!(harvester.aggregate().images().len(), 1);
    assert_eq!(harvester.aggregate().visited_urls().len(), 1);
}

#[tokio::test]
async fn test_invalid_page_url_is_recorded_as_failed() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(temp_dir.path());
    let mut harvester = Harvester::new(config).expect("Failed to create harvester");

    assert_eq!(
        harvester.extract_page("not a url").await,
        PageOutcome::Failed
    );
    assert_eq!(
        harvester.extract_page("not a url").await,
        PageOutcome::AlreadyVisited
    );
    assert!(harvester.aggregate().text_content().is_empty());
}

#[tokio::test]
async fn test_breadth_first_crawl_respects_page_limit() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let temp_dir = TempDir::new().unwrap();

    mount_html(
        &mock_server,
        "/",
        &format!(
            r#"<html><body>
            <a href="/page1">Page 1</a>
            <a href="{}/page2#section">Page 2</a>
            <a href="/page3">Page 3</a>
            <a href="https://external.example/">External</a>
            <a href="mailto:someone@example.com">Mail</a>
            </body></html>"#,
            base_url
        ),
    )
    .await;
    mount_html(
        &mock_server,
        "/page1",
        r#"<html><body><a href="/">Home</a><a href="/page2">Page 2</a></body></html>"#,
    )
    .await;
    mount_html(&mock_server, "/page2", "<html><body><p>Two</p></body></html>").await;
    Mock::given(method("GET"))
        .and(path("/page3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>Three</p>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(temp_dir.path());
    config.crawl.mode = CrawlMode::BreadthFirst;
    config.crawl.max_pages = 3;

    let mut harvester = Harvester::new(config).expect("Failed to create harvester");
    let summary = harvester
        .run(&format!("{}/", base_url))
        .await
        .expect("Harvest failed");

    assert_eq!(
        summary.pages,
        vec![
            format!("{}/", base_url),
            format!("{}/page1", base_url),
            format!("{}/page2", base_url),
        ]
    );
    assert_eq!(summary.pages_extracted, 3);
    assert_eq!(summary.pages_with_content, 3);

    let content_dir = temp_dir.path().join("content");
    assert!(content_dir.join("page1_content.json").is_file());
    assert!(content_dir.join("page2_structure.json").is_file());
}

#[tokio::test]
async fn test_list_mode_harvests_given_pages_only() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let temp_dir = TempDir::new().unwrap();

    mount_html(
        &mock_server,
        "/",
        r#"<html><body><a href="/linked">Linked</a></body></html>"#,
    )
    .await;
    mount_html(&mock_server, "/about", "<html><body><p>About</p></body></html>").await;
    Mock::given(method("GET"))
        .and(path("/linked"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(temp_dir.path());
    config.crawl.mode = CrawlMode::List;
    config.crawl.max_pages = 10;
    config.crawl.urls = vec![format!("{}/about", base_url)];

    let mut harvester = Harvester::new(config).expect("Failed to create harvester");
    let summary = harvester
        .run(&format!("{}/", base_url))
        .await
        .expect("Harvest failed");

    assert_eq!(
        summary.pages,
        vec![format!("{}/", base_url), format!("{}/about", base_url)]
    );
}

#[tokio::test]
async fn test_stylesheets_and_design_tokens() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let temp_dir = TempDir::new().unwrap();

    mount_html(
        &mock_server,
        "/",
        r#"<html><head>
        <link rel="stylesheet" href="/css/main.css">
        <link rel="icon" href="/favicon.ico">
        <style>body { color: #ff0000; font-family: Georgia, serif; }</style>
        <style>h1 { color: rgb(0, 0, 0); }</style>
        </head><body>
        <div style="background: #fff">Box</div>
        </body></html>"#,
    )
    .await;
    mount_bytes(&mock_server, "/css/main.css", b"p { margin: 0 }").await;

    let config = create_test_config(temp_dir.path());
    let mut harvester = Harvester::new(config).expect("Failed to create harvester");
    let summary = harvester
        .run(&format!("{}/", base_url))
        .await
        .expect("Harvest failed");

    assert_eq!(summary.total_css_files, 1);
    let css = &harvester.aggregate().css()[0];
    assert_eq!(css.remote_url, format!("{}/css/main.css", base_url));
    assert_eq!(
        std::fs::read_to_string(&css.local_path).unwrap(),
        "p { margin: 0 }"
    );

    let css_dir = temp_dir.path().join("css");
    assert!(css_dir.join("index_inline_0.css").is_file());
    assert!(css_dir.join("index_inline_1.css").is_file());
    assert!(!css_dir.join("index_inline_2.css").exists());

    assert_eq!(
        summary.unique_colors,
        vec!["#fff", "#ff0000", "rgb(0, 0, 0)"]
    );
    assert_eq!(summary.unique_fonts, vec!["Georgia, serif"]);
}

#[tokio::test]
async fn test_content_hash_naming_keeps_same_basenames_apart() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    mount_html(
        &mock_server,
        "/",
        r#"<html><body>
        <img src="/a/logo.png" alt="first">
        <img src="/b/logo.png" alt="second">
        </body></html>"#,
    )
    .await;
    mount_bytes(&mock_server, "/a/logo.png", b"first logo").await;
    mount_bytes(&mock_server, "/b/logo.png", b"second logo").await;

    let mut config = create_test_config(temp_dir.path());
    config.assets.naming = AssetNaming::ContentHash;

    let mut harvester = Harvester::new(config).expect("Failed to create harvester");
    harvester.extract_page(&format!("{}/", mock_server.uri())).await;

    let images = harvester.aggregate().images();
    assert_eq!(images.len(), 2);
    assert_ne!(images[0].local_path, images[1].local_path);
    assert_eq!(files_in(&temp_dir.path().join("images")).len(), 2);
    assert_eq!(std::fs::read(&images[0].local_path).unwrap(), b"first logo");
    assert_eq!(std::fs::read(&images[1].local_path).unwrap(), b"second logo");
}

#[tokio::test]
async fn test_basename_naming_overwrites_same_basenames() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    mount_html(
        &mock_server,
        "/",
        r#"<html><body>
        <img src="/a/logo.png" alt="first">
        <img src="/b/logo.png" alt="second">
        </body></html>"#,
    )
    .await;
    mount_bytes(&mock_server, "/a/logo.png", b"first logo").await;
    mount_bytes(&mock_server, "/b/logo.png", b"second logo").await;

    let mut config = create_test_config(temp_dir.path());
    config.assets.naming = AssetNaming::Basename;

    let mut harvester = Harvester::new(config).expect("Failed to create harvester");
    harvester.extract_page(&format!("{}/", mock_server.uri())).await;

    // Both records remain even though one file replaced the other
    assert_eq!(harvester.aggregate().images().len(), 2);
    let files = files_in(&temp_dir.path().join("images"));
    assert_eq!(files.len(), 1);
    assert_eq!(std::fs::read(&files[0]).unwrap(), b"second logo");
}

#[tokio::test]
async fn test_forms_and_structure_are_persisted() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    mount_html(
        &mock_server,
        "/contact",
        r#"<html><body>
        <section class="hero main" id="top">Hello there</section>
        <form action="/send" method="post">
            <label>Email</label>
            <input type="email" name="email" placeholder="you@example.com" id="email">
            <textarea name="message"></textarea>
            <input type="submit" value="Send">
        </form>
        </body></html>"#,
    )
    .await;

    let url = format!("{}/contact", mock_server.uri());
    let config = create_test_config(temp_dir.path());
    let mut harvester = Harvester::new(config).expect("Failed to create harvester");
    assert!(harvester.extract_page(&url).await.is_extracted());

    let structure = &harvester.aggregate().structure()[&url];
    assert_eq!(structure.sections.len(), 1);
    assert_eq!(structure.sections[0].tag, "section");
    assert_eq!(structure.sections[0].classes, vec!["hero", "main"]);
    assert_eq!(structure.forms.len(), 1);
    assert_eq!(structure.forms[0].method, "post");
    assert_eq!(structure.forms[0].fields[0].name, "email");
    assert_eq!(structure.forms[0].fields[0].label.as_deref(), Some("Email"));

    let content = &harvester.aggregate().text_content()[&url];
    assert_eq!(content.buttons, vec!["Send"]);

    let json = std::fs::read_to_string(
        temp_dir
            .path()
            .join("content")
            .join("contact_structure.json"),
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["forms"][0]["fields"][0]["type"], "email");
}

#[tokio::test]
async fn test_invalid_start_url_still_writes_summary() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(temp_dir.path());
    let mut harvester = Harvester::new(config).expect("Failed to create harvester");
    let before_run = chrono::Utc::now();

    let summary = harvester
        .run("not a url")
        .await
        .expect("Harvest should complete");

    assert!(summary.started_at >= before_run);
    assert!(summary.finished_at >= summary.started_at);

    assert_eq!(summary.pages_extracted, 1);
    assert_eq!(summary.pages_with_content, 0);
    assert_eq!(summary.failed_pages, vec!["not a url"]);
    assert!(temp_dir.path().join(SUMMARY_FILE).is_file());
}

#[tokio::test]
async fn test_non_http_start_url_still_writes_summary() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(temp_dir.path());
    let mut harvester = Harvester::new(config).expect("Failed to create harvester");

    let summary = harvester
        .run("ftp://example.com/")
        .await
        .expect("Harvest should complete");

    assert_eq!(summary.pages_extracted, 1);
    assert_eq!(summary.pages_with_content, 0);
    assert!(temp_dir.path().join(SUMMARY_FILE).is_file());
}

#[tokio::test]
async fn test_pages_with_same_file_name_keep_separate_artifacts() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let temp_dir = TempDir::new().unwrap();

    mount_html(
        &mock_server,
        "/about",
        "<html><head><style>p{}</style></head><body><p>Plain</p></body></html>",
    )
    .await;
    mount_html(
        &mock_server,
        "/about/",
        "<html><head><style>h1{}</style></head><body><p>Slashed</p></body></html>",
    )
    .await;

    let mut config = create_test_config(temp_dir.path());
    config.crawl.mode = CrawlMode::List;
    config.crawl.max_pages = 2;
    config.crawl.urls = vec![format!("{}/about/", base_url)];

    let mut harvester = Harvester::new(config).expect("Failed to create harvester");
    let summary = harvester
        .run(&format!("{}/about", base_url))
        .await
        .expect("Harvest failed");
    assert_eq!(summary.pages_with_content, 2);

    let content_dir = harvester.layout().dir("content");
    let plain = std::fs::read_to_string(content_dir.join("about_content.json")).unwrap();
    let slashed = std::fs::read_to_string(content_dir.join("about_2_content.json")).unwrap();
    assert!(plain.contains("Plain"));
    assert!(slashed.contains("Slashed"));
    assert!(content_dir.join("about_structure.json").is_file());
    assert!(content_dir.join("about_2_structure.json").is_file());

    let html_dir = harvester.layout().dir("html");
    assert!(html_dir.join("about.html").is_file());
    assert!(html_dir.join("about_2.html").is_file());

    let css_dir = harvester.layout().dir("css");
    assert_eq!(
        std::fs::read_to_string(css_dir.join("about_inline_0.css")).unwrap(),
        "p{}"
    );
    assert_eq!(
        std::fs::read_to_string(css_dir.join("about_2_inline_0.css")).unwrap(),
        "h1{}"
    );
}

#[tokio::test]
async fn test_failed_stylesheet_is_skipped() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let temp_dir = TempDir::new().unwrap();

    mount_html(
        &mock_server,
        "/",
        r#"<html><head>
        <link rel="stylesheet" href="/missing.css">
        <link rel="stylesheet" href="/ok.css">
        <style>body { margin: 0 }</style>
        </head><body></body></html>"#,
    )
    .await;
    mount_bytes(&mock_server, "/ok.css", b"a { color: red }").await;
    Mock::given(method("GET"))
        .and(path("/missing.css"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let config = create_test_config(temp_dir.path());
    let mut harvester = Harvester::new(config).expect("Failed to create harvester");
    let summary = harvester
        .run(&format!("{}/", base_url))
        .await
        .expect("Harvest failed");

    assert_eq!(summary.total_css_files, 1);
    assert_eq!(summary.pages_with_content, 1);
    assert_eq!(
        harvester.aggregate().css()[0].remote_url,
        format!("{}/ok.css", base_url)
    );

    // One downloaded stylesheet plus one inline block, nothing else
    let css_dir = temp_dir.path().join("css");
    let files = files_in(&css_dir);
    assert_eq!(files.len(), 2);
    assert!(css_dir.join("index_inline_0.css").is_file());
    assert!(files
        .iter()
        .any(|file| file.to_string_lossy().ends_with("_ok.css")));
}

#[tokio::test]
async fn test_counter_naming_continues_across_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let temp_dir = TempDir::new().unwrap();

    mount_html(
        &mock_server,
        "/",
        r#"<html><body><img src="/a.png" alt="a"></body></html>"#,
    )
    .await;
    mount_html(
        &mock_server,
        "/two",
        r#"<html><body><img src="/b.png" alt="b"></body></html>"#,
    )
    .await;
    mount_bytes(&mock_server, "/a.png", b"a").await;
    mount_bytes(&mock_server, "/b.png", b"b").await;

    let mut config = create_test_config(temp_dir.path());
    config.assets.naming = AssetNaming::Counter;
    config.crawl.mode = CrawlMode::List;
    config.crawl.max_pages = 2;
    config.crawl.urls = vec![format!("{}/two", base_url)];

    let mut harvester = Harvester::new(config).expect("Failed to create harvester");
    harvester
        .run(&format!("{}/", base_url))
        .await
        .expect("Harvest failed");

    let images_dir = temp_dir.path().join("images");
    let images = harvester.aggregate().images();
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].local_path, images_dir.join("0000_a.png"));
    assert_eq!(images[1].local_path, images_dir.join("0001_b.png"));
    assert_eq!(files_in(&images_dir).len(), 2);
}

#[tokio::test]
async fn test_redirected_page_keeps_requested_url() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let temp_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/old/page"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", format!("{}/new/page", base_url).as_str()),
        )
        .mount(&mock_server)
        .await;
    mount_html(
        &mock_server,
        "/new/page",
        r#"<html><body><img src="logo.png" alt="logo"><form></form></body></html>"#,
    )
    .await;
    mount_bytes(&mock_server, "/new/logo.png", b"logo").await;

    let requested = format!("{}/old/page", base_url);
    let config = create_test_config(temp_dir.path());
    let mut harvester = Harvester::new(config).expect("Failed to create harvester");
    assert!(harvester.extract_page(&requested).await.is_extracted());

    let aggregate = harvester.aggregate();
    assert_eq!(aggregate.text_content()[&requested].url, requested);
    assert_eq!(aggregate.structure()[&requested].url, requested);
    // Relative references follow the page that was actually served
    assert_eq!(
        aggregate.images()[0].remote_url,
        format!("{}/new/logo.png", base_url)
    );
    assert!(temp_dir
        .path()
        .join("content")
        .join("old_page_content.json")
        .is_file());
}

/// Treats every link inside `<header>` as one navigation group
struct HeaderNavigation;

impl NavigationHeuristic for HeaderNavigation {
    fn navigation_groups(&self, document: &Html) -> Vec<NavGroup> {
        let selector = Selector::parse("header a[href]").unwrap();
        let group: NavGroup = document
            .select(&selector)
            .map(|anchor| LinkRef {
                text: anchor.text().collect::<String>().trim().to_string(),
                href: anchor.value().attr("href").unwrap_or_default().to_string(),
            })
            .collect();
        vec![group]
    }
}

/// Labels a field by its upper-cased `name` attribute
struct NameLabel;

impl LabelHeuristic for NameLabel {
    fn label_for(&self, _document: &Html, field: ElementRef<'_>) -> Option<String> {
        field.value().attr("name").map(str::to_uppercase)
    }
}

#[tokio::test]
async fn test_custom_heuristics_replace_defaults() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    mount_html(
        &mock_server,
        "/",
        r#"<html><body>
        <header><a href="/home">Home</a></header>
        <nav class="menu"><a href="/menu">Menu</a></nav>
        <div class="intro">A rather long introduction</div>
        <form><label>Ignored</label><input name="email"></form>
        </body></html>"#,
    )
    .await;

    let url = format!("{}/", mock_server.uri());
    let heuristics = Heuristics {
        navigation: Box::new(HeaderNavigation),
        labels: Box::new(NameLabel),
        preview_length: 7,
    };

    let config = create_test_config(temp_dir.path());
    let mut harvester = Harvester::new(config)
        .expect("Failed to create harvester")
        .with_heuristics(heuristics);
    assert!(harvester.extract_page(&url).await.is_extracted());

    let content = &harvester.aggregate().text_content()[&url];
    assert_eq!(
        content.navigation,
        vec![vec![LinkRef {
            text: "Home".to_string(),
            href: "/home".to_string(),
        }]]
    );

    let structure = &harvester.aggregate().structure()[&url];
    assert_eq!(structure.sections[0].text_preview, "A rathe");
    assert_eq!(structure.forms[0].fields[0].label.as_deref(), Some("EMAIL"));
}

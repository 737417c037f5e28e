mod support;

use std::net::Ipv4Addr;

use flashbuzzer_portal::{
    ContentType, Portal, Request, RequestHead, Response, TargetWriter as _,
};
use support::{MemoryStore, device_registry};

const AP: Ipv4Addr = Ipv4Addr::new(8, 8, 8, 8);

fn handle(
    head: &str,
    body: &str,
    registry: &mut flashbuzzer_core::ParameterRegistry<MemoryStore>,
) -> Response {
    let request = Request {
        head: RequestHead::parse(head).expect("valid head"),
        body: body.as_bytes(),
    };
    Portal::new(AP).handle(&request, registry)
}

#[test]
fn test_root_renders_page() {
    let mut registry = device_registry();

    let response = handle("GET / HTTP/1.1\r\nHost: 8.8.8.8\r\n\r\n", "", &mut registry);

    assert_eq!(response.status, 200);
    assert_eq!(response.content_type, ContentType::TextHtml);
    assert!(response.no_cache);
    assert!(response.body.contains("<h1>ESP32 Device Configuration</h1>"));
    assert!(response.body.contains("openTab('tab-Color')"));
    assert!(response.body.contains("openTab('tab-Dot')"));
    assert!(response.body.contains(
        "<label for='Color_Red'>Red:</label><input type='number' step='any' id='Color_Red' name='Color_Red' value='255'>"
    ));
    assert!(response.body.contains(
        "<input type='text' id='Title' name='Title' value='ESP32 Device Configuration'>"
    ));

    let mut head = String::new();
    response.headers().write_to(&mut head).unwrap();
    assert!(head.contains("Cache-Control: no-cache, no-store, must-revalidate\r\n"));
    assert!(head.contains(&format!("Content-Length: {}\r\n", response.body.len())));
}

#[test]
fn test_groups_are_sorted_tabs() {
    let mut registry = device_registry();

    let response = handle("GET / HTTP/1.1\r\n\r\n", "", &mut registry);

    let color = response.body.find("id='tab-Color'").unwrap();
    let dot = response.body.find("id='tab-Dot'").unwrap();
    let home = response.body.find("id='home'").unwrap();
    assert!(home < color && color < dot);

    let blue = response.body.find("name='Color_Blue'").unwrap();
    let red = response.body.find("name='Color_Red'").unwrap();
    assert!(blue < red);
}

#[test]
fn test_foreign_host_is_redirected() {
    let mut registry = device_registry();

    let response = handle(
        "GET /generate_204 HTTP/1.1\r\nHost: connectivitycheck.gstatic.com\r\n\r\n",
        "",
        &mut registry,
    );

    assert_eq!(response.status, 302);
    assert_eq!(response.location.as_deref(), Some("http://8.8.8.8"));
    assert!(response.body.is_empty());

    let response = handle(
        "GET /hotspot-detect.html HTTP/1.1\r\nHost: captive.apple.com\r\n\r\n",
        "",
        &mut registry,
    );
    assert_eq!(response.status, 302);
}

#[test]
fn test_generate_204_on_literal_host_renders_page() {
    let mut registry = device_registry();

    let response = handle(
        "GET /generate_204 HTTP/1.1\r\nHost: 8.8.8.8:80\r\n\r\n",
        "",
        &mut registry,
    );

    assert_eq!(response.status, 200);
}

#[test]
fn test_submit_updates_and_redirects_home() {
    let mut registry = device_registry();

    let response = handle(
        "POST /submit HTTP/1.1\r\nHost: 8.8.8.8\r\nContent-Type: application/x-www-form-urlencoded\r\nContent-Length: 33\r\n\r\n",
        "Color_Red=10&Title=Hall%27s+%3Cb%3E",
        &mut registry,
    );

    assert_eq!(response.status, 303);
    assert_eq!(response.location.as_deref(), Some("/"));
    assert_eq!(registry.get_number("Color_Red"), Ok(10.0));
    assert_eq!(registry.get_text("Title"), Ok("Hall's <b>"));

    let page = handle("GET / HTTP/1.1\r\n\r\n", "", &mut registry);
    assert!(page.body.contains("<h1>Hall&#39;s &lt;b&gt;</h1>"));
    assert!(page.body.contains("name='Color_Red' value='10'"));
}

#[test]
fn test_submit_merges_query_arguments() {
    let mut registry = device_registry();

    handle(
        "POST /submit?Dot_Speed=0.1 HTTP/1.1\r\n\r\n",
        "Color_Green=1e-7",
        &mut registry,
    );

    assert_eq!(registry.get_number("Dot_Speed"), Ok(0.1));
    assert_eq!(registry.get_number("Color_Green"), Ok(1e-7));

    let page = handle("GET / HTTP/1.1\r\n\r\n", "", &mut registry);
    assert!(page.body.contains("name='Dot_Speed' value='0.1'"));
    assert!(page.body.contains("name='Color_Green' value='0.0000001'"));
}

#[test]
fn test_unknown_route_lists_request() {
    let mut registry = device_registry();

    let response = handle(
        "GET /missing?a=1&b=two+words HTTP/1.1\r\nHost: 8.8.8.8\r\n\r\n",
        "",
        &mut registry,
    );

    assert_eq!(response.status, 404);
    assert_eq!(response.content_type, ContentType::TextPlain);
    assert_eq!(
        response.body,
        "404 Not Found\n\nURI: /missing\nMethod: GET\nArguments: 2\n a: 1\n b: two words\n"
    );
}

#[test]
fn test_page_without_title_uses_fallback() {
    let mut registry = flashbuzzer_core::ParameterRegistry::new(MemoryStore::default());
    registry.register_number("Gain", 1.5).unwrap();

    let response = handle("GET / HTTP/1.1\r\n\r\n", "", &mut registry);

    assert!(response.body.contains("<h1>Device Configuration</h1>"));
    assert!(response.body.contains("name='Gain' value='1.5'"));
    assert!(!response.body.contains("tab-"));
}

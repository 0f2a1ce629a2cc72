use tokio::io::{AsyncReadExt, DuplexStream, duplex};
use webby::http::response::{Response, reason_phrase};

fn response_pair() -> (Response, DuplexStream) {
    let (server, client) = duplex(64 * 1024);
    (Response::new(server), client)
}

async fn read_all(mut client: DuplexStream) -> String {
    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_reason_phrase_table() {
    assert_eq!(reason_phrase(200), "OK");
    assert_eq!(reason_phrase(301), "Moved Permanently");
    assert_eq!(reason_phrase(404), "Not Found");
    assert_eq!(reason_phrase(500), "Internal Server Error");
    assert_eq!(reason_phrase(299), "");
}

#[tokio::test]
async fn test_response_defaults() {
    let (res, _client) = response_pair();

    assert_eq!(res.status_code(), 200);
    assert_eq!(res.version(), "HTTP/1.1");
    assert!(res.headers().is_empty());
    assert!(!res.is_finished());
    assert_eq!(res.status_line(), "HTTP/1.1 200 OK\r\n");
}

#[tokio::test]
async fn test_status_returns_same_response() {
    let (mut res, _client) = response_pair();
    let before: *const Response = &res;

    let chained: *const Response = res.status(200);

    assert!(std::ptr::eq(before, chained));
}

#[tokio::test]
async fn test_status_chaining_sets_code() {
    let (mut res, _client) = response_pair();

    res.status(500).status(404);

    assert_eq!(res.status_code(), 404);
    assert_eq!(res.status_line(), "HTTP/1.1 404 Not Found\r\n");
}

#[tokio::test]
async fn test_unknown_status_has_empty_reason() {
    let (mut res, _client) = response_pair();
    res.status(299);

    assert_eq!(res.status_line(), "HTTP/1.1 299 \r\n");
}

#[tokio::test]
async fn test_set_overwrites_header() {
    let (mut res, _client) = response_pair();

    res.set("X-Custom", "one");
    res.set("X-Custom", "two");

    assert_eq!(res.header("X-Custom"), Some("two"));
    assert_eq!(res.header("x-custom"), None);
}

#[tokio::test]
async fn test_send_defaults_content_type_to_html() {
    let (mut res, client) = response_pair();

    res.send("<p>hi</p>").await.unwrap();
    let wire = read_all(client).await;

    assert_eq!(res.header("Content-Type"), Some("text/html"));
    assert_eq!(wire, "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n<p>hi</p>");
}

#[tokio::test]
async fn test_send_keeps_explicit_content_type() {
    let (mut res, client) = response_pair();

    res.set("Content-Type", "text/plain");
    res.status(404).send("Page not found.").await.unwrap();
    let wire = read_all(client).await;

    assert!(wire.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(wire.contains("Content-Type: text/plain\r\n"));
    assert!(!wire.contains("text/html"));
    assert!(wire.ends_with("\r\n\r\nPage not found."));
}

#[tokio::test]
async fn test_send_writes_binary_body_verbatim() {
    let (mut res, mut client) = response_pair();
    let body = vec![0u8, 159, 146, 150, 255, b'\r', b'\n'];

    res.set("Content-Type", "image/png");
    res.send(body.clone()).await.unwrap();

    let mut wire = Vec::new();
    client.read_to_end(&mut wire).await.unwrap();

    assert!(wire.ends_with(&body));
    assert_eq!(res.body(), body.as_slice());
}

#[tokio::test]
async fn test_send_does_not_add_content_length() {
    let (mut res, client) = response_pair();

    res.send("abc").await.unwrap();
    let wire = read_all(client).await;

    assert!(!wire.contains("Content-Length"));
}

#[tokio::test]
async fn test_send_writes_every_header() {
    let (mut res, client) = response_pair();

    res.set("Content-Type", "text/css");
    res.set("Cache-Control", "no-cache");
    res.send("").await.unwrap();
    let wire = read_all(client).await;

    assert!(wire.contains("Content-Type: text/css\r\n"));
    assert!(wire.contains("Cache-Control: no-cache\r\n"));
    assert!(wire.ends_with("\r\n\r\n"));
}

#[tokio::test]
async fn test_second_send_is_rejected() {
    let (mut res, client) = response_pair();

    res.send("first").await.unwrap();
    let err = res.send("second").await.unwrap_err();
    let wire = read_all(client).await;

    assert!(res.is_finished());
    assert!(err.to_string().contains("already sent"));
    assert!(wire.ends_with("first"));
    assert!(!wire.contains("second"));
}

#[tokio::test]
async fn test_redirect() {
    let (mut res, client) = response_pair();

    res.redirect(301, "/gallery").await.unwrap();
    let wire = read_all(client).await;

    assert!(wire.starts_with("HTTP/1.1 301 Moved Permanently\r\n"));
    assert!(wire.contains("Location: /gallery\r\n"));
}

#[tokio::test]
async fn test_close_without_send_writes_nothing() {
    let (mut res, client) = response_pair();

    res.close().await.unwrap();
    res.close().await.unwrap();
    let wire = read_all(client).await;

    assert!(res.is_finished());
    assert!(wire.is_empty());
}

use crate::http::request::Request;

/// Parses the request line out of a raw inbound buffer.
///
/// Only the first two whitespace-separated tokens are consumed: the method
/// and the request target. Headers and any body that arrived in the same
/// buffer are not parsed. Missing tokens default to an empty method and a
/// `/` target, so garbage input routes to the root instead of failing.
pub fn parse_http_request(buf: &[u8]) -> Request {
    let text = String::from_utf8_lossy(buf);
    let mut parts = text.split_whitespace();

    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("/");

    Request::new(method, target)
}

/// Normalizes a request target into the form used in route keys.
///
/// The query string and fragment are dropped, the rest is lowercased, and
/// only the first run of ASCII letters is kept: `/Gallery/extra?x=1` becomes
/// `/gallery`. Targets without any letter normalize to `/`.
///
/// This is intentionally narrow. Multi-segment, numeric and hyphenated
/// paths all collapse onto their first alphabetic run; static files are
/// looked up from the raw target and never go through here.
pub fn normalize_path(raw: &str) -> String {
    let without_query = raw.split(['?', '#']).next().unwrap_or("");
    let lowered = without_query.to_lowercase();

    let segment: String = lowered
        .chars()
        .skip_while(|c| !c.is_ascii_lowercase())
        .take_while(|c| c.is_ascii_lowercase())
        .collect();

    if segment.is_empty() {
        "/".to_string()
    } else {
        format!("/{segment}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = parse_http_request(b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n");

        assert_eq!(req.method, "GET");
        assert_eq!(req.path, "/");
        assert_eq!(req.target, "/");
    }

    #[test]
    fn normalize_keeps_first_alphabetic_run() {
        assert_eq!(normalize_path("/img/animal1.jpg"), "/img");
        assert_eq!(normalize_path("/123abc"), "/abc");
    }
}

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::MockServer;

pub const ISSUES_PATH: &str = "/repos/acme/widgets/issues";

pub fn issue_json(number: u64, title: &str) -> Value {
    json!({
        "number": number,
        "title": title,
        "state": "open",
        "html_url": format!("https://github.com/acme/widgets/issues/{number}"),
        "created_at": "2024-01-02T03:04:05Z",
        "user": { "login": "octocat" }
    })
}

pub fn issues_json(numbers: std::ops::RangeInclusive<u64>) -> Value {
    Value::Array(numbers.map(|n| issue_json(n, &format!("T{n}"))).collect())
}

/// `Link` header pointing at `next` (and a made-up last page).
pub fn link_to(server: &MockServer, next: u32) -> String {
    format!(
        r#"<{uri}{ISSUES_PATH}?per_page=100&page={next}>; rel="next", <{uri}{ISSUES_PATH}?per_page=100&page=99>; rel="last""#,
        uri = server.uri()
    )
}

//! Shared fixtures: an in-memory transport and listing builders.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use ghdb_scraper::{FetchError, Response, Transport};
use url::Url;

pub const BASE: &str = "https://www.exploit-db.com";

/// Transport answering from a fixed URL table. Unknown URLs fail like a
/// refused connection.
#[derive(Default)]
pub struct MockTransport {
    routes: HashMap<String, Response>,
    requested: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, path: &str, response: Response) -> Self {
        let url = format!("{BASE}{path}");
        self.routes.insert(url.clone(), Response { url, ..response });
        self
    }

    pub fn json(self, path: &str, body: &str) -> Self {
        self.route(path, Response::ok("", "application/json; charset=utf-8", body))
    }

    pub fn page(self, path: &str, description: &str) -> Self {
        self.route(path, Response::ok("", "text/html; charset=UTF-8", detail_page(description)))
    }

    pub fn status(self, path: &str, status: u16) -> Self {
        self.route(
            path,
            Response {
                status,
                content_type: Some("text/html".to_string()),
                body: b"<html><body>error</body></html>".to_vec(),
                ..Response::default()
            },
        )
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &Url) -> Result<Response, FetchError> {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(url.to_string());
        }
        self.routes
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| FetchError::Connection(format!("connection refused: {url}")))
    }
}

pub fn detail_page(description: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head>
        <meta charset="utf-8">
        <meta name="keywords" content="ghdb">
        <meta name="description" content="{description}">
        </head><body><h1>GHDB</h1></body></html>"#
    )
}

/// One listing record as JSON.
pub fn record(cat_id: &str, cat_title: &str, href: &str, dork: &str) -> String {
    let fragment = format!(r#"<a href="{href}">{dork}</a>"#);
    serde_json::json!({
        "id": "1",
        "url_title": fragment,
        "category": { "cat_id": cat_id, "cat_title": cat_title },
        "date": "2024-01-01",
    })
    .to_string()
}

/// Same as [`record`] with a numeric `cat_id`.
pub fn record_numeric(cat_id: u32, cat_title: &str, href: &str, dork: &str) -> String {
    let fragment = format!(r#"<a href="{href}">{dork}</a>"#);
    serde_json::json!({
        "url_title": fragment,
        "category": { "cat_id": cat_id, "cat_title": cat_title },
    })
    .to_string()
}

pub fn listing(records_total: u64, records: &[String]) -> String {
    format!(
        r#"{{"draw":1,"recordsTotal":{records_total},"recordsFiltered":{records_total},"data":[{}]}}"#,
        records.join(",")
    )
}

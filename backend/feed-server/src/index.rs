use crate::{AppState, Image};

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use chrono::SecondsFormat;

const SSE_SCRIPT: &str = include_str!("../static/js/sse.js");

/// GET / - stored images plus a live list fed by the event stream
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let images = state.images.list().await;
    Html(render_index(&images))
}

/// GET /static/js/sse.js
pub async fn sse_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SSE_SCRIPT,
    )
}

pub fn render_index(images: &[Image]) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Image feed</title>\n</head>\n<body>\n<p>\n",
    );

    for image in images {
        let date = image.date.to_rfc3339_opts(SecondsFormat::Secs, true);
        page.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            escape_html(&image.url),
            escape_html(image.message.as_deref().unwrap_or(&date)),
        ));
    }

    page.push_str("</p>\n<ul id=\"events\"></ul>\n<script src=\"/static/js/sse.js\"></script>\n</body>\n</html>\n");
    page
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

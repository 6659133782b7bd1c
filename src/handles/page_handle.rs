use axum::response::Html;

/// The dashboard page; polls `/sensors` and `/history` from the browser.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../web/index.html"))
}

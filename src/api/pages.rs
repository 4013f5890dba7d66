use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub async fn imagine() -> Html<&'static str> {
    Html(include_str!("../../static/imagine.html"))
}

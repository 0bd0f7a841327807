use axum::response::Html;

const INDEX_PAGE: &str = r#"<html>
<head><title>SSLLabs Exporter</title></head>
<body>
<h1>SSLLabs Exporter</h1>
<p><a href="probe?target=prometheus.io">Probe prometheus.io</a></p>
<p><a href="metrics">Metrics</a></p>
</body>
</html>
"#;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

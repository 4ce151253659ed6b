//! # HTTP End-to-End
//!
//! The production container (reqwest gateway, HTTP snapshot source, file
//! hint) against an in-process stub of the portal backend.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::extract::Multipart;
    use axum::http::{header, HeaderMap, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use portal_runtime::{PortalConfig, PortalContainer};
    use shared_types::{CreateInquiryParams, FileUpload, InquiryQuery};
    use sp_01_session::SessionApi;
    use sp_02_reference_cache::ReferenceCacheApi;
    use sp_03_inquiries::{InquiryApi, LIST_FAILED_MSG};

    const NS: &str = "/api/method/siud.api.supplier_portal";

    #[derive(Default)]
    struct Counters {
        stats: AtomicUsize,
        reference_rpc: AtomicUsize,
        uploads: AtomicUsize,
    }

    fn logged_in(headers: &HeaderMap) -> bool {
        headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("sid=portal"))
            .unwrap_or(false)
    }

    fn reference_json() -> Value {
        json!({
            "activity_domains": [{"name": "AD-001", "category_name": "ציוד רפואי"}],
            "inquiry_statuses": [
                {"value": "פתוח", "label": "פתוחה", "type": "open"},
                {"value": "סגור", "label": "סגורה", "type": "closed"}
            ],
            "inquiry_contexts": [{"value": "ספק עצמו", "label": "ספק עצמו"}]
        })
    }

    fn portal_router(counters: Arc<Counters>, serve_snapshot: bool) -> Router {
        let stats_counter = counters.clone();
        let reference_counter = counters.clone();
        let upload_counter = counters;

        let mut router = Router::new()
            .route(
                "/api/method/login",
                post(|Json(body): Json<Value>| async move {
                    if body["pwd"] == "pw" {
                        (
                            StatusCode::OK,
                            [(header::SET_COOKIE, "sid=portal; Path=/")],
                            Json(json!({"message": "Logged In", "full_name": "Dana Levi"})),
                        )
                            .into_response()
                    } else {
                        StatusCode::UNAUTHORIZED.into_response()
                    }
                }),
            )
            .route(
                "/api/method/logout",
                post(|| async { Json(json!({"message": null})) }),
            )
            .route(
                &format!("{NS}.get_current_user"),
                post(|headers: HeaderMap| async move {
                    if !logged_in(&headers) {
                        return StatusCode::UNAUTHORIZED.into_response();
                    }
                    Json(json!({"message": {
                        "user": {"name": "dana@example.org", "email": "dana@example.org", "full_name": "Dana Levi"},
                        "supplier": {"name": "SUP-0001", "supplier_id": "514000001", "supplier_name": "Acme Medical"}
                    }}))
                    .into_response()
                }),
            )
            .route(
                &format!("{NS}.get_reference_data"),
                post(move || {
                    let counters = reference_counter.clone();
                    async move {
                        counters.reference_rpc.fetch_add(1, Ordering::SeqCst);
                        Json(json!({"message": reference_json()}))
                    }
                }),
            )
            .route(
                &format!("{NS}.get_inquiries"),
                post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                    if !logged_in(&headers) {
                        return StatusCode::UNAUTHORIZED.into_response();
                    }
                    let page = body["page"].as_u64().unwrap_or(1);
                    let status = body["status"].as_str().unwrap_or("פתוח").to_string();
                    Json(json!({"message": {
                        "data": [
                            {"name": "INQ-0001", "topic_category": "T1", "inquiry_context": "ספק עצמו", "inquiry_status": status},
                            {"name": "INQ-0002", "topic_category": "T2", "inquiry_context": "ספק עצמו", "inquiry_status": status}
                        ],
                        "total": 12,
                        "page": page,
                        "page_size": 10,
                        "total_pages": 2
                    }}))
                    .into_response()
                }),
            )
            .route(
                &format!("{NS}.get_inquiry_stats"),
                post(move || {
                    let counters = stats_counter.clone();
                    async move {
                        counters.stats.fetch_add(1, Ordering::SeqCst);
                        Json(json!({"message": {"total": 12, "open": 7, "closed": 5, "by_status": {"פתוח": 7, "סגור": 5}}}))
                    }
                }),
            )
            .route(
                &format!("{NS}.create_inquiry"),
                post(|Json(body): Json<Value>| async move {
                    if body["topic_category"] == "T1" && body["inquiry_context"] == "ספק עצמו" {
                        Json(json!({"message": {"success": true, "name": "INQ-0001", "message": "Created"}}))
                    } else {
                        Json(json!({"message": {"success": false, "message": "נושא לא תקין"}}))
                    }
                }),
            )
            .route(
                "/api/method/upload_file",
                post(move |mut multipart: Multipart| {
                    let counters = upload_counter.clone();
                    async move {
                        let mut docname = String::new();
                        while let Some(field) = multipart.next_field().await.unwrap() {
                            let name = field.name().unwrap_or_default().to_string();
                            let bytes = field.bytes().await.unwrap();
                            if name == "docname" {
                                docname = String::from_utf8(bytes.to_vec()).unwrap();
                            }
                        }
                        counters.uploads.fetch_add(1, Ordering::SeqCst);
                        Json(json!({"message": {
                            "file_url": format!("/private/files/{docname}-scan.pdf"),
                            "name": "FILE-0001"
                        }}))
                    }
                }),
            )
            .route(
                &format!("{NS}.attach_file_to_inquiry"),
                post(|Json(body): Json<Value>| async move {
                    let open = body["inquiry_name"] == "INQ-0001";
                    let message = if open { "Attached" } else { "Inquiry is closed" };
                    Json(json!({"message": {"success": open, "message": message}}))
                }),
            );

        if serve_snapshot {
            router = router.route(
                "/data/reference-data.json",
                get(|| async { Json(reference_json()) }),
            );
        }
        router
    }

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn start(serve_snapshot: bool) -> (PortalContainer, Arc<Counters>, tempfile::TempDir) {
        let counters = Arc::new(Counters::default());
        let base = spawn_server(portal_router(counters.clone(), serve_snapshot)).await;

        let dir = tempfile::tempdir().unwrap();
        let mut config = PortalConfig::for_testing(base);
        config.session.hint_path = Some(dir.path().join("session.json"));

        let container = PortalContainer::new(config).unwrap();
        (container, counters, dir)
    }

    #[tokio::test]
    async fn test_supplier_journey() {
        let (portal, counters, _dir) = start(true).await;

        assert!(portal.session.login("dana@example.org", "pw").await);
        assert_eq!(portal.session.supplier_name(), "Acme Medical");

        portal.reference.initialize().await;
        assert!(portal.reference.is_loaded());
        assert_eq!(counters.reference_rpc.load(Ordering::SeqCst), 0);

        portal
            .inquiries
            .fetch_inquiries(InquiryQuery::with_status("פתוח"))
            .await;
        assert_eq!(portal.inquiries.inquiries().len(), 2);
        assert_eq!(portal.inquiries.pagination().total_pages, 2);
        assert_eq!(portal.reference.get_status_label("פתוח"), "פתוחה");

        portal.inquiries.load_next_page().await;
        assert_eq!(portal.inquiries.pagination().page, 2);
        assert_eq!(
            portal.inquiries.inquiries()[0].inquiry_status.as_deref(),
            Some("פתוח")
        );

        let created = portal
            .inquiries
            .submit_inquiry(CreateInquiryParams {
                topic_category: "T1".into(),
                description: "x".into(),
                inquiry_context: "ספק עצמו".into(),
                ..Default::default()
            })
            .await;
        assert_eq!(created.as_deref(), Some("INQ-0001"));
        assert_eq!(counters.stats.load(Ordering::SeqCst), 1);
        assert_eq!(portal.inquiries.stats().map(|s| s.open), Some(7));

        let url = portal
            .inquiries
            .attach_file("INQ-0001", FileUpload::new("scan.pdf", b"%PDF-1.4".to_vec()))
            .await;
        assert_eq!(url.as_deref(), Some("/private/files/INQ-0001-scan.pdf"));

        portal.session.logout().await;
        assert!(!portal.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_rejected_link_after_upload() {
        let (portal, counters, _dir) = start(true).await;
        assert!(portal.session.login("dana@example.org", "pw").await);

        let url = portal
            .inquiries
            .attach_file("INQ-0099", FileUpload::new("scan.pdf", b"%PDF-1.4".to_vec()))
            .await;

        assert!(url.is_none());
        assert_eq!(counters.uploads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_snapshot_uses_rpc() {
        let (portal, counters, _dir) = start(false).await;

        portal.reference.initialize().await;

        assert!(portal.reference.is_loaded());
        assert_eq!(counters.reference_rpc.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_list_without_session_fails() {
        let (portal, _counters, _dir) = start(true).await;

        portal.inquiries.fetch_inquiries(InquiryQuery::default()).await;

        assert!(portal.inquiries.inquiries().is_empty());
        assert_eq!(portal.inquiries.list_error().as_deref(), Some(LIST_FAILED_MSG));
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let (portal, _counters, dir) = start(true).await;

        assert!(!portal.session.login("dana@example.org", "nope").await);
        assert!(portal.session.error().is_some());
        assert!(!dir.path().join("session.json").exists());
    }
}

//! # Inquiry Flows
//!
//! Listing, paging, creation and attachment through the container, plus the
//! interplay with the reference cache for status labels.

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use portal_gateway::{GatewayError, GatewayOp};
    use shared_bus::{EventFilter, EventTopic, PortalEvent};
    use shared_types::{
        AttachFileResult, CreateInquiryParams, CreateInquiryResult, FileUpload, InquiryQuery,
        UploadedFile,
    };
    use sp_02_reference_cache::ReferenceCacheApi;
    use sp_03_inquiries::{InquiryApi, CREATE_FAILED_MSG, LIST_FAILED_MSG};

    use crate::integration::fixtures::{inquiry, listing_page, reference_data, stats, Harness};

    fn create_params() -> CreateInquiryParams {
        CreateInquiryParams {
            topic_category: "T1".into(),
            description: "x".into(),
            inquiry_context: "ספק עצמו".into(),
            ..Default::default()
        }
    }

    fn uploaded() -> UploadedFile {
        UploadedFile {
            file_url: "/private/files/scan.pdf".into(),
            name: "FILE-0001".into(),
        }
    }

    #[tokio::test]
    async fn test_submit_refreshes_stats_once() {
        let harness = Harness::new();
        harness.gateway().set_create(Ok(CreateInquiryResult {
            success: true,
            name: "INQ-0001".into(),
            message: String::new(),
        }));
        harness.gateway().set_stats(Ok(stats()));

        let created = harness.container.inquiries.submit_inquiry(create_params()).await;

        assert_eq!(created.as_deref(), Some("INQ-0001"));
        assert_eq!(harness.gateway().calls(GatewayOp::InquiryStats), 1);
        assert_eq!(harness.gateway().calls(GatewayOp::InquiryList), 0);
        assert_eq!(harness.container.inquiries.stats(), Some(stats()));
        assert_eq!(harness.gateway().last_create(), Some(create_params()));
    }

    #[tokio::test]
    async fn test_submit_forces_stats_even_when_fresh() {
        let harness = Harness::new();
        harness.gateway().set_stats(Ok(stats()));
        harness.container.inquiries.fetch_stats(false).await;
        assert_eq!(harness.gateway().calls(GatewayOp::InquiryStats), 1);

        harness.gateway().set_create(Ok(CreateInquiryResult {
            success: true,
            name: "INQ-0002".into(),
            message: String::new(),
        }));
        harness.container.inquiries.submit_inquiry(create_params()).await;

        assert_eq!(harness.gateway().calls(GatewayOp::InquiryStats), 2);
    }

    #[tokio::test]
    async fn test_submit_rejection_uses_server_message() {
        let harness = Harness::new();
        harness.gateway().set_create(Ok(CreateInquiryResult {
            success: false,
            name: String::new(),
            message: "חסר נושא".into(),
        }));

        assert!(harness
            .container
            .inquiries
            .submit_inquiry(create_params())
            .await
            .is_none());
        assert_eq!(
            harness.container.inquiries.form_error().as_deref(),
            Some("חסר נושא")
        );
        assert_eq!(harness.gateway().calls(GatewayOp::InquiryStats), 0);

        harness.container.inquiries.clear_form_state().await;
        assert!(harness.container.inquiries.form_error().is_none());
    }

    #[tokio::test]
    async fn test_submit_exception_uses_generic_message() {
        let harness = Harness::new();
        harness
            .gateway()
            .set_create(Err(GatewayError::Connection("refused".into())));

        assert!(harness
            .container
            .inquiries
            .submit_inquiry(create_params())
            .await
            .is_none());
        assert_eq!(
            harness.container.inquiries.form_error().as_deref(),
            Some(CREATE_FAILED_MSG)
        );
    }

    #[tokio::test]
    async fn test_attach_link_failure_leaves_no_state() {
        let harness = Harness::new();
        harness.gateway().set_inquiry(Ok(inquiry("INQ-0001")));
        harness.container.inquiries.fetch_inquiry("INQ-0001").await;
        let before = harness.container.inquiries.current_inquiry();

        harness.gateway().set_upload(Ok(uploaded()));
        harness
            .gateway()
            .set_link(Err(GatewayError::Connection("refused".into())));

        let result = harness
            .container
            .inquiries
            .attach_file("INQ-0001", FileUpload::new("scan.pdf", b"%PDF".to_vec()))
            .await;

        assert!(result.is_none());
        assert_eq!(harness.container.inquiries.current_inquiry(), before);
        assert!(harness.container.inquiries.form_error().is_none());
        assert_eq!(harness.gateway().calls(GatewayOp::Upload), 1);
    }

    #[tokio::test]
    async fn test_attach_rejected_link_is_failure() {
        let harness = Harness::new();
        harness.gateway().set_upload(Ok(uploaded()));
        harness.gateway().set_link(Ok(AttachFileResult {
            success: false,
            message: "Inquiry is closed".into(),
        }));

        let result = harness
            .container
            .inquiries
            .attach_file("INQ-0001", FileUpload::new("scan.pdf", b"%PDF".to_vec()))
            .await;

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_attach_success_returns_file_url() {
        let harness = Harness::new();
        harness.gateway().set_upload(Ok(uploaded()));
        harness.gateway().set_link(Ok(AttachFileResult {
            success: true,
            message: String::new(),
        }));

        let result = harness
            .container
            .inquiries
            .attach_file("INQ-0001", FileUpload::new("scan.pdf", b"%PDF".to_vec()))
            .await;

        assert_eq!(result.as_deref(), Some("/private/files/scan.pdf"));
        assert_eq!(
            harness.gateway().links(),
            vec![("INQ-0001".to_string(), "/private/files/scan.pdf".to_string())]
        );
    }

    #[tokio::test]
    async fn test_paging_keeps_status_filter() {
        let harness = Harness::new();
        harness.gateway().set_inquiry_list(Ok(listing_page(1)));
        harness
            .container
            .inquiries
            .fetch_inquiries(InquiryQuery::with_status("פתוח"))
            .await;

        harness.gateway().set_inquiry_list(Ok(listing_page(3)));
        harness.container.inquiries.go_to_page(3).await;

        let query = harness.gateway().last_inquiry_query().unwrap();
        assert_eq!(query.page, Some(3));
        assert_eq!(query.page_size, Some(20));
        assert_eq!(query.status.as_deref(), Some("פתוח"));
        assert_eq!(harness.container.inquiries.pagination().page, 3);
        assert!(!harness.container.inquiries.pagination().has_next());
    }

    #[tokio::test]
    async fn test_out_of_range_pages_do_not_fetch() {
        let harness = Harness::new();
        harness.gateway().set_inquiry_list(Ok(listing_page(1)));
        harness
            .container
            .inquiries
            .fetch_inquiries(InquiryQuery::default())
            .await;
        let calls = harness.gateway().calls(GatewayOp::InquiryList);

        harness.container.inquiries.go_to_page(0).await;
        harness.container.inquiries.go_to_page(4).await;

        assert_eq!(harness.gateway().calls(GatewayOp::InquiryList), calls);
        assert_eq!(harness.container.inquiries.pagination().page, 1);
    }

    #[tokio::test]
    async fn test_list_failure_keeps_pagination() {
        let harness = Harness::new();
        harness.gateway().set_inquiry_list(Ok(listing_page(2)));
        harness
            .container
            .inquiries
            .fetch_inquiries(InquiryQuery::default())
            .await;
        let pagination = harness.container.inquiries.pagination();

        harness
            .gateway()
            .set_inquiry_list(Err(GatewayError::Unauthorized));
        harness
            .container
            .inquiries
            .fetch_inquiries(InquiryQuery::default())
            .await;

        assert!(harness.container.inquiries.inquiries().is_empty());
        assert_eq!(
            harness.container.inquiries.list_error().as_deref(),
            Some(LIST_FAILED_MSG)
        );
        assert_eq!(harness.container.inquiries.pagination(), pagination);
    }

    #[tokio::test]
    async fn test_list_rows_resolve_status_labels() {
        let harness = Harness::with_snapshot(&reference_data());
        harness.gateway().set_inquiry_list(Ok(listing_page(1)));

        harness.container.reference.initialize().await;
        harness
            .container
            .inquiries
            .fetch_inquiries(InquiryQuery::default())
            .await;

        let labels: Vec<String> = harness
            .container
            .inquiries
            .recent_inquiries()
            .iter()
            .filter_map(|i| i.inquiry_status.as_deref())
            .map(|status| harness.container.reference.get_status_label(status))
            .collect();
        assert_eq!(labels, vec!["פתוחה"; 3]);
    }

    #[tokio::test]
    async fn test_list_events_stream() {
        let harness = Harness::new();
        let mut stream = harness
            .container
            .events
            .event_stream(EventFilter::topics(vec![EventTopic::Inquiries]));
        harness.gateway().set_inquiry_list(Ok(listing_page(1)));

        harness
            .container
            .inquiries
            .fetch_inquiries(InquiryQuery::default())
            .await;
        harness.container.inquiries.reset_list().await;

        assert_eq!(
            stream.next().await,
            Some(PortalEvent::InquiryListChanged {
                page: 1,
                total: 45,
                failed: false,
            })
        );
        assert_eq!(
            stream.next().await,
            Some(PortalEvent::InquiryListChanged {
                page: 1,
                total: 45,
                failed: false,
            })
        );
        assert!(!harness.container.inquiries.has_inquiries());
    }
}

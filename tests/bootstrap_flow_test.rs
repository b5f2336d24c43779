//! Config file to runtime: submit, review and browse against the sqlite store
//! and a mocked image host.

use std::io::Write;

use bytes::Bytes;
use cf_core::listing::{ListingQuery, StatusFilter, Window};
use cf_core::request::{CampaignRequestForm, ImageUpload};
use cf_core::{DerivedStatus, RequestStatus, StatusView, WalletAddress};
use crowdfund::{create_runtime, load_config, AppRuntime};
use mockito::Server;
use tempfile::{NamedTempFile, TempDir};

const ADMIN: &str = "0xb9Cc84c1291aD9441357df5a111145Bf9459107d";
const CREATOR: &str = "0xC0ffee254729296a45a3885639AC7E10F9d54979";

fn write_config(dir: &TempDir, upload_url: &str) -> NamedTempFile {
    let content = format!(
        r#"
        [network]
        chain = "sepolia"

        [admin]
        addresses = ["{ADMIN}"]

        [storage]
        database_path = "{db}"
        settings_path = "{settings}"

        [image_host]
        upload_url = "{upload_url}"
        upload_preset = "campaigns"

        [listing]
        pending_page_size = 2
        "#,
        db = dir.path().join("requests.db").display(),
        settings = dir.path().join("settings.json").display(),
    );
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn form(name: &str) -> CampaignRequestForm {
    CampaignRequestForm {
        creator: Some(CREATOR.into()),
        full_name: "Jane Doe".to_string(),
        name: name.to_string(),
        description: "Community clinic".to_string(),
        age: "41".to_string(),
        goal: "5000".to_string(),
        deadline_days: "30".to_string(),
        is_emergency: false,
        cover_image: Some(ImageUpload {
            file_name: "cover.png".to_string(),
            bytes: Bytes::from_static(b"cover"),
        }),
        id_image: Some(ImageUpload {
            file_name: "id.png".to_string(),
            bytes: Bytes::from_static(b"id"),
        }),
    }
}

async fn runtime_with_image_host(dir: &TempDir, server: &mut Server) -> AppRuntime {
    server
        .mock("POST", "/image/upload")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"secure_url":"https://img.example/uploaded.png"}"#)
        .expect_at_least(2)
        .create_async()
        .await;

    let config_file = write_config(dir, &format!("{}/image/upload", server.url()));
    let config = load_config(config_file.path().to_path_buf()).unwrap();
    create_runtime(&config).unwrap()
}

#[tokio::test]
async fn submitted_request_is_approved_and_listed() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new_async().await;
    let runtime = runtime_with_image_host(&dir, &mut server).await;
    let admin = WalletAddress::from(ADMIN);

    let request = runtime
        .usecases()
        .submit_campaign_request()
        .execute(form("Clinic"))
        .await
        .unwrap();
    assert_eq!(request.cover_image_url, "https://img.example/uploaded.png");
    assert_eq!(request.status, RequestStatus::Pending);

    let pending = runtime
        .usecases()
        .list_pending_requests()
        .execute(&admin, 1)
        .await
        .unwrap();
    assert_eq!(pending.total_matching, 1);

    let outcome = runtime
        .usecases()
        .approve_campaign_request()
        .execute(&admin, &request.id)
        .await
        .unwrap();
    assert_eq!(outcome.warning, None);
    let address = outcome.request.campaign_address.clone().unwrap();
    assert!(!address.is_empty());

    let page = runtime
        .usecases()
        .list_campaigns()
        .execute(
            &ListingQuery {
                status_filter: StatusFilter::Active,
                prioritize_flagged: false,
            },
            Window::Page { number: 1, size: 9 },
        )
        .await
        .unwrap()
        .into_fresh()
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(
        page.items[0].status,
        StatusView::Resolved(DerivedStatus::Active)
    );

    let detail = runtime
        .usecases()
        .get_campaign_detail()
        .execute(&address, None)
        .await;
    assert_eq!(detail.metadata.unwrap().creator_full_name, "Jane Doe");
}

#[tokio::test]
async fn requests_survive_a_runtime_restart() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new_async().await;
    let admin = WalletAddress::from(ADMIN);

    {
        let runtime = runtime_with_image_host(&dir, &mut server).await;
        for name in ["Clinic", "School", "Well"] {
            runtime
                .usecases()
                .submit_campaign_request()
                .execute(form(name))
                .await
                .unwrap();
        }
    }

    let runtime = runtime_with_image_host(&dir, &mut server).await;
    let first = runtime
        .usecases()
        .list_pending_requests()
        .execute(&admin, 1)
        .await
        .unwrap();
    assert_eq!(first.total_matching, 3);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.items.len(), 2);

    let second = runtime
        .usecases()
        .list_pending_requests()
        .execute(&admin, 2)
        .await
        .unwrap();
    assert_eq!(second.items.len(), 1);
}

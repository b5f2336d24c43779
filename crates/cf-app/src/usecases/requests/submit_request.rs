use std::sync::Arc;

use cf_core::ports::{ClockPort, ImageHostPort, RequestStorePort};
use cf_core::request::{CampaignRequestForm, UploadedImages};
use cf_core::{CampaignRequest, CrowdfundError};
use tracing::{info, info_span, Instrument};

/// Use case for submitting a campaign request for review.
///
/// ## Behavior
/// - Validates the whole form before any external call
/// - Uploads the cover and ID images to the image host
/// - Stores a pending request stamped with the submission time
pub struct SubmitCampaignRequest {
    image_host: Arc<dyn ImageHostPort>,
    request_store: Arc<dyn RequestStorePort>,
    clock: Arc<dyn ClockPort>,
}

impl SubmitCampaignRequest {
    pub fn new(
        image_host: Arc<dyn ImageHostPort>,
        request_store: Arc<dyn RequestStorePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            image_host,
            request_store,
            clock,
        }
    }

    pub async fn execute(&self, form: CampaignRequestForm) -> Result<CampaignRequest, CrowdfundError> {
        let span = info_span!("usecase.submit_campaign_request.execute");

        async {
            let validated = form.validate()?;

            let cover_image_url = self
                .image_host
                .upload(&validated.cover_image)
                .await
                .map_err(CrowdfundError::network)?;
            let id_image_url = self
                .image_host
                .upload(&validated.id_image)
                .await
                .map_err(CrowdfundError::network)?;

            let draft = validated.into_draft(
                UploadedImages {
                    cover_image_url,
                    id_image_url,
                },
                self.clock.now_ms(),
            );
            let request = self.request_store.create(draft).await?;

            info!(
                request_id = %request.id,
                creator = %request.creator,
                is_emergency = request.is_emergency,
                "Campaign request submitted"
            );
            Ok(request)
        }
        .instrument(span)
        .await
    }
}

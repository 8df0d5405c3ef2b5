//! Headline and image generation.
//!
//! Headlines: one provider call, all-or-nothing batch insert, at most
//! `count` rows, never zero on success.
//!
//! Images: `count` provider calls issued strictly one after another (the
//! provider does not accept parallel submissions for this mode). Each image
//! is persisted as soon as it arrives, so a later failure leaves the earlier
//! images in place.

use adsmith_core::dto::{GenerateHeadlines, GenerateImages};
use adsmith_core::error::CoreError;
use adsmith_core::prompt;
use adsmith_db::models::headline::Headline;
use adsmith_db::models::image::Image;
use adsmith_db::CampaignStore;
use adsmith_genai::GenerationProvider;

use crate::require_campaign;

/// Failure message when every headline candidate was unusable.
pub const NO_HEADLINES_GENERATED: &str = "No headlines generated";

/// Failure message when an image call succeeds without a URL.
pub const IMAGE_WITHOUT_URL: &str = "Image generation returned no URL";

/// Generate and persist up to `request.count` headlines for a campaign.
///
/// The prompt is built from `request.context`, not from the stored
/// campaign. Fewer than `count` rows are written when the provider returns
/// fewer usable candidates; zero usable candidates is
/// [`CoreError::EmptyResult`] and nothing is written.
pub async fn generate_headlines(
    store: &dyn CampaignStore,
    provider: &dyn GenerationProvider,
    request: &GenerateHeadlines,
) -> Result<Vec<Headline>, CoreError> {
    require_campaign(store, &request.campaign_id).await?;

    let count = usize::try_from(request.count)
        .map_err(|_| CoreError::Validation("count: must be between 3 and 5".to_string()))?;

    tracing::info!(
        campaign_id = %request.campaign_id,
        count,
        provider = provider.name(),
        "Generating headlines"
    );

    let system = prompt::headline_system_prompt(count);
    let user = prompt::headline_user_prompt(&request.context);
    let content = provider.complete_json(&system, &user).await?;

    let texts = prompt::parse_headlines(&content, count);
    if texts.is_empty() {
        tracing::warn!(campaign_id = %request.campaign_id, "Provider returned no usable headlines");
        return Err(CoreError::EmptyResult(NO_HEADLINES_GENERATED.to_string()));
    }

    let created = store.create_headlines(&request.campaign_id, &texts).await?;
    tracing::info!(
        campaign_id = %request.campaign_id,
        requested = count,
        created = created.len(),
        "Headlines persisted"
    );
    Ok(created)
}

/// Generate and persist `request.count` images for a campaign, one at a time.
///
/// Every image row stores the shared prompt; each provider call receives the
/// shared prompt plus the aspect-ratio suffix. The first failure (provider
/// error, missing URL, or storage error) aborts the loop and is returned;
/// images persisted before it remain.
pub async fn generate_images(
    store: &dyn CampaignStore,
    provider: &dyn GenerationProvider,
    request: &GenerateImages,
) -> Result<Vec<Image>, CoreError> {
    require_campaign(store, &request.campaign_id).await?;

    let shared_prompt = prompt::image_prompt(request.context.as_ref());
    let call_prompt = prompt::image_call_prompt(&shared_prompt);

    tracing::info!(
        campaign_id = %request.campaign_id,
        count = request.count,
        provider = provider.name(),
        "Generating images"
    );

    let mut created = Vec::new();
    for index in 0..request.count {
        let outcome = generate_one_image(
            store,
            provider,
            &request.campaign_id,
            &call_prompt,
            &shared_prompt,
        )
        .await;

        match outcome {
            Ok(image) => created.push(image),
            Err(err) => {
                tracing::warn!(
                    campaign_id = %request.campaign_id,
                    iteration = index,
                    persisted = created.len(),
                    error = %err,
                    "Image generation aborted; earlier images remain persisted"
                );
                return Err(err);
            }
        }
    }

    tracing::info!(
        campaign_id = %request.campaign_id,
        created = created.len(),
        "Images persisted"
    );
    Ok(created)
}

async fn generate_one_image(
    store: &dyn CampaignStore,
    provider: &dyn GenerationProvider,
    campaign_id: &str,
    call_prompt: &str,
    shared_prompt: &str,
) -> Result<Image, CoreError> {
    let url = provider
        .generate_image(call_prompt)
        .await?
        .ok_or_else(|| CoreError::Provider(IMAGE_WITHOUT_URL.to_string()))?;
    Ok(store.create_image(campaign_id, &url, shared_prompt).await?)
}

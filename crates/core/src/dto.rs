//! Request DTOs and their validation rules.
//!
//! Bodies are deserialized with camelCase keys and then checked with
//! [`validator::Validate`]. A body that fails either step is rejected before
//! any storage or provider call.

use serde::Deserialize;
use validator::Validate;

use crate::tone::Tone;

/// Body of `POST /campaigns`, also used as the headline generation context.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaign {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub industry: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub audience: String,
    pub tone: Tone,
    pub description: Option<String>,
}

/// Body of `POST /ai/headlines/generate`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateHeadlines {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub campaign_id: String,
    #[validate(range(min = 3, max = 5, message = "must be between 3 and 5"))]
    pub count: i64,
    #[validate(nested)]
    pub context: CreateCampaign,
}

/// Optional targeting hints for image generation. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContext {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub audience: Option<String>,
    pub tone: Option<Tone>,
    pub description: Option<String>,
}

/// Body of `POST /ai/images/generate`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImages {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub campaign_id: String,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub count: i64,
    pub context: Option<ImageContext>,
}

/// Body of `POST /creatives`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCreative {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub campaign_id: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub headline_id: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub image_id: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::describe_validation_errors;

    fn campaign_json() -> serde_json::Value {
        json!({
            "name": "Summer Sale",
            "industry": "Retail",
            "audience": "Young adults",
            "tone": "exciting"
        })
    }

    #[test]
    fn campaign_without_description_is_valid() {
        let dto: CreateCampaign = serde_json::from_value(campaign_json()).unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.tone, Tone::Exciting);
        assert_eq!(dto.description, None);
    }

    #[test]
    fn campaign_with_empty_name_is_rejected() {
        let mut body = campaign_json();
        body["name"] = json!("");
        let dto: CreateCampaign = serde_json::from_value(body).unwrap();

        let errors = dto.validate().unwrap_err();
        assert_eq!(describe_validation_errors(&errors), "name: must not be empty");
    }

    #[test]
    fn campaign_with_unknown_tone_fails_to_deserialize() {
        let mut body = campaign_json();
        body["tone"] = json!("sarcastic");
        assert!(serde_json::from_value::<CreateCampaign>(body).is_err());
    }

    #[test]
    fn campaign_missing_audience_fails_to_deserialize() {
        let mut body = campaign_json();
        body.as_object_mut().unwrap().remove("audience");
        assert!(serde_json::from_value::<CreateCampaign>(body).is_err());
    }

    #[test]
    fn headline_count_bounds_are_inclusive() {
        for (count, ok) in [(2, false), (3, true), (5, true), (6, false)] {
            let dto: GenerateHeadlines = serde_json::from_value(json!({
                "campaignId": "c1",
                "count": count,
                "context": campaign_json(),
            }))
            .unwrap();
            assert_eq!(dto.validate().is_ok(), ok, "count = {count}");
        }
    }

    #[test]
    fn headline_context_errors_carry_a_dotted_path() {
        let mut context = campaign_json();
        context["industry"] = json!("");
        let dto: GenerateHeadlines = serde_json::from_value(json!({
            "campaignId": "",
            "count": 4,
            "context": context,
        }))
        .unwrap();

        let message = describe_validation_errors(&dto.validate().unwrap_err());
        assert_eq!(
            message,
            "campaign_id: must not be empty; context.industry: must not be empty"
        );
    }

    #[test]
    fn fractional_count_is_rejected() {
        let result = serde_json::from_value::<GenerateHeadlines>(json!({
            "campaignId": "c1",
            "count": 3.5,
            "context": campaign_json(),
        }));
        assert!(result.is_err());
    }

    #[test]
    fn image_context_is_optional_and_fields_are_optional() {
        let bare: GenerateImages =
            serde_json::from_value(json!({"campaignId": "c1", "count": 1})).unwrap();
        assert!(bare.validate().is_ok());
        assert_eq!(bare.context, None);

        let partial: GenerateImages = serde_json::from_value(json!({
            "campaignId": "c1",
            "count": 5,
            "context": {"industry": "Retail"},
        }))
        .unwrap();
        assert!(partial.validate().is_ok());
        assert_eq!(
            partial.context.unwrap().industry.as_deref(),
            Some("Retail")
        );
    }

    #[test]
    fn null_description_reads_as_absent() {
        let mut body = campaign_json();
        body["description"] = serde_json::Value::Null;
        let dto: CreateCampaign = serde_json::from_value(body).unwrap();
        assert_eq!(dto.description, None);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn image_count_out_of_range_is_rejected() {
        for count in [0, 6] {
            let dto: GenerateImages =
                serde_json::from_value(json!({"campaignId": "c1", "count": count})).unwrap();
            assert!(dto.validate().is_err(), "count = {count}");
        }
    }

    #[test]
    fn creative_requires_all_three_ids() {
        let dto: CreateCreative = serde_json::from_value(json!({
            "campaignId": "c1",
            "headlineId": "",
            "imageId": "i1",
        }))
        .unwrap();
        let message = describe_validation_errors(&dto.validate().unwrap_err());
        assert_eq!(message, "headline_id: must not be empty");
    }
}

//! Submission form validation.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::model::CampaignRequestDraft;
use crate::errors::ValidationError;
use crate::ids::WalletAddress;

pub const MIN_GOAL: u128 = 1;
pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 150;
pub const MIN_DURATION_DAYS: u32 = 1;
pub const DEFAULT_DURATION_DAYS: u32 = 30;
pub const EMERGENCY_NAME_PREFIX: &str = "(EMERGENCY) ";

/// Image selected by the user, not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Raw form input. Numeric fields arrive as text.
#[derive(Debug, Clone, Default)]
pub struct CampaignRequestForm {
    pub creator: Option<WalletAddress>,
    pub full_name: String,
    pub name: String,
    pub description: String,
    pub age: String,
    pub goal: String,
    pub deadline_days: String,
    pub is_emergency: bool,
    pub cover_image: Option<ImageUpload>,
    pub id_image: Option<ImageUpload>,
}

/// Form content after validation. Images still need uploading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequestForm {
    pub creator: WalletAddress,
    pub full_name: String,
    pub name: String,
    pub description: String,
    pub age: u32,
    pub goal: u128,
    pub deadline_days: u32,
    pub is_emergency: bool,
    pub cover_image: ImageUpload,
    pub id_image: ImageUpload,
}

/// Uploaded image locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImages {
    pub cover_image_url: String,
    pub id_image_url: String,
}

impl CampaignRequestForm {
    /// Check every field; numeric checks run before the presence checks.
    pub fn validate(self) -> Result<ValidatedRequestForm, ValidationError> {
        let creator = self.creator.ok_or(ValidationError::WalletRequired)?;

        let goal = parse_integer::<u128>(&self.goal)
            .filter(|g| *g >= MIN_GOAL)
            .ok_or(ValidationError::GoalTooLow { min: MIN_GOAL })?;
        let age = parse_integer::<u32>(&self.age)
            .filter(|a| (MIN_AGE..=MAX_AGE).contains(a))
            .ok_or(ValidationError::AgeOutOfRange {
                min: MIN_AGE,
                max: MAX_AGE,
            })?;
        let deadline_days = parse_integer::<u32>(&self.deadline_days)
            .filter(|d| *d >= MIN_DURATION_DAYS)
            .ok_or(ValidationError::DurationTooShort {
                min: MIN_DURATION_DAYS,
            })?;

        let full_name = required(self.full_name, "full_name")?;
        let name = required(self.name, "name")?;
        let description = required(self.description, "description")?;
        let cover_image = self
            .cover_image
            .ok_or(ValidationError::MissingField("cover_image"))?;
        let id_image = self.id_image.ok_or(ValidationError::MissingField("id_image"))?;

        Ok(ValidatedRequestForm {
            creator,
            full_name,
            name,
            description,
            age,
            goal,
            deadline_days,
            is_emergency: self.is_emergency,
            cover_image,
            id_image,
        })
    }
}

impl ValidatedRequestForm {
    /// Name stored on the request; flagged requests carry the emergency prefix.
    pub fn final_name(&self) -> String {
        if self.is_emergency {
            format!("{EMERGENCY_NAME_PREFIX}{}", self.name)
        } else {
            self.name.clone()
        }
    }

    pub fn into_draft(self, images: UploadedImages, created_at: i64) -> CampaignRequestDraft {
        let name = self.final_name();
        CampaignRequestDraft {
            creator: self.creator,
            name,
            description: self.description,
            goal: self.goal,
            deadline_days: self.deadline_days,
            id_image_url: images.id_image_url,
            cover_image_url: images.cover_image_url,
            full_name: self.full_name,
            age: self.age,
            is_emergency: self.is_emergency,
            created_at,
        }
    }
}

fn parse_integer<T: std::str::FromStr>(input: &str) -> Option<T> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

fn required(value: String, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> ImageUpload {
        ImageUpload {
            file_name: name.to_string(),
            bytes: Bytes::from_static(b"\x89PNG"),
        }
    }

    fn valid_form() -> CampaignRequestForm {
        CampaignRequestForm {
            creator: Some("0xAA".into()),
            full_name: "Jane Doe".to_string(),
            name: "Medical Fund".to_string(),
            description: "Surgery costs".to_string(),
            age: "30".to_string(),
            goal: "1000".to_string(),
            deadline_days: "30".to_string(),
            is_emergency: false,
            cover_image: Some(image("cover.png")),
            id_image: Some(image("id.png")),
        }
    }

    #[test]
    fn valid_form_passes() {
        let validated = valid_form().validate().expect("valid form");
        assert_eq!(validated.goal, 1000);
        assert_eq!(validated.age, 30);
        assert_eq!(validated.deadline_days, 30);
        assert_eq!(validated.final_name(), "Medical Fund");
    }

    #[test]
    fn wallet_is_required() {
        let form = CampaignRequestForm {
            creator: None,
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(ValidationError::WalletRequired));
    }

    #[test]
    fn goal_below_one_is_rejected() {
        for goal in ["0", "", "1.5", "-2"] {
            let form = CampaignRequestForm {
                goal: goal.to_string(),
                ..valid_form()
            };
            assert_eq!(
                form.validate(),
                Err(ValidationError::GoalTooLow { min: 1 }),
                "goal {goal:?}"
            );
        }
    }

    #[test]
    fn minors_are_rejected() {
        let form = CampaignRequestForm {
            age: "17".to_string(),
            ..valid_form()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::AgeOutOfRange { min: 18, max: 150 })
        );
    }

    #[test]
    fn zero_day_duration_is_rejected() {
        let form = CampaignRequestForm {
            deadline_days: "0".to_string(),
            ..valid_form()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::DurationTooShort { min: 1 })
        );
    }

    #[test]
    fn both_images_are_required() {
        let form = CampaignRequestForm {
            id_image: None,
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingField("id_image")));
    }

    #[test]
    fn blank_name_is_missing() {
        let form = CampaignRequestForm {
            name: "   ".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingField("name")));
    }

    #[test]
    fn emergency_requests_get_name_prefix() {
        let form = CampaignRequestForm {
            is_emergency: true,
            ..valid_form()
        };
        let draft = form.validate().unwrap().into_draft(
            UploadedImages {
                cover_image_url: "c".to_string(),
                id_image_url: "i".to_string(),
            },
            42,
        );
        assert_eq!(draft.name, "(EMERGENCY) Medical Fund");
        assert!(draft.is_emergency);
        assert_eq!(draft.created_at, 42);
    }
}

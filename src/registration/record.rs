//! The validated registration record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender of the maker, a closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    He,
    She,
    They,
    None,
}

impl Gender {
    pub const ALL: [Gender; 4] = [Gender::He, Gender::She, Gender::They, Gender::None];

    /// Wire values, in selector order
    pub const OPTIONS: &'static [&'static str] = &["he", "she", "they", "none"];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::He => "he",
            Gender::She => "she",
            Gender::They => "they",
            Gender::None => "none",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| format!("unknown gender: {s}"))
    }
}

/// A fully validated maker registration
///
/// Required text fields are non-empty and trimmed. Optional fields are `None`
/// when left blank and are omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakerRecord {
    // Basic Information
    pub brand_name: String,
    pub maker_name: String,
    pub maker_story: String,
    pub maker_profile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maker_card_number: Option<String>,
    pub gender: Gender,
    pub years_experience: String,
    pub contact_number: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msme_number: Option<String>,
    pub registration_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_email: Option<String>,

    // Location
    pub city: String,
    pub district_pincode: String,
    pub state: String,

    // Craft Details
    pub craft_type: String,
    pub craft_story: String,
    pub process_technique: String,
    pub craft_tools: String,
    pub usp_innovation: String,

    // Scale & Capacity
    pub active_makers: String,
    pub gender_ratio: String,
    pub languages_known: String,

    // Production Details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<String>,
    pub raw_materials: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalogue: Option<String>,
    pub products_range: String,
    pub production_capacity: String,

    // Business Information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media_links: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_link: Option<String>,
    pub offline_presence: String,

    // Services & Collaboration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exhibit_spaces: Option<String>,
    pub conduct_workshops: String,
    pub collaboration_designers: String,
    pub insurance: String,
    pub certifications: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificates_received: Option<String>,

    // Additional Information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainability_practices: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peers_reviews: Option<String>,

    // Subscription
    #[serde(default = "default_subscribe")]
    pub subscribe_to_updates: bool,
}

fn default_subscribe() -> bool {
    true
}

impl MakerRecord {
    /// Number of fields carrying a value (absent optionals are not counted)
    pub fn filled_field_count(&self) -> usize {
        let optionals = [
            &self.maker_card_number,
            &self.msme_number,
            &self.org_contact_number,
            &self.org_email,
            &self.videos,
            &self.catalogue,
            &self.gst_number,
            &self.photos,
            &self.social_media_links,
            &self.website_link,
            &self.exhibit_spaces,
            &self.certificates_received,
            &self.sustainability_practices,
            &self.ratings_system,
            &self.peers_reviews,
        ];
        let present = optionals.iter().filter(|v| v.is_some()).count();
        // 28 required fields plus the subscription flag
        29 + present
    }
}

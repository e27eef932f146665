//! Wholesale validation of raw form values against the schema

use super::record::{Gender, MakerRecord};
use super::schema::{ControlKind, FieldId, FieldSpec, SCHEMA};
use crate::error::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern")
});

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw, unvalidated value of a single control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawValue<'a> {
    Text(&'a str),
    Choice(Option<&'a str>),
    Toggle(bool),
}

/// Anything that can hand out the current raw value of every field
pub trait FieldSource {
    fn raw(&self, id: FieldId) -> RawValue<'_>;
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate a `YYYY-MM-DD` calendar date
pub fn is_valid_date(date: &str) -> bool {
    NaiveDate::parse_from_str(date, DATE_FORMAT).is_ok()
}

/// A value that passed its field's constraints
#[derive(Debug, Clone, PartialEq, Eq)]
enum Checked {
    Text(String),
    Absent,
    Gender(Gender),
    Flag(bool),
}

fn check_field(spec: &FieldSpec, raw: RawValue<'_>) -> Result<Checked, ValidationError> {
    let missing = || ValidationError::MissingRequiredField { field: spec.id };

    match (spec.kind, raw) {
        (ControlKind::Toggle { .. }, RawValue::Toggle(on)) => Ok(Checked::Flag(on)),
        (ControlKind::Choice(allowed), RawValue::Choice(selected)) => {
            let value = selected.map(str::trim).unwrap_or_default();
            if value.is_empty() {
                return if spec.is_required() {
                    Err(missing())
                } else {
                    Ok(Checked::Absent)
                };
            }
            match value.parse::<Gender>() {
                Ok(gender) if allowed.iter().any(|a| *a == value) => Ok(Checked::Gender(gender)),
                _ => Err(ValidationError::InvalidEnumValue {
                    field: spec.id,
                    value: value.to_string(),
                    allowed,
                }),
            }
        }
        (kind, RawValue::Text(text)) => {
            let value = text.trim();
            if value.is_empty() {
                return if spec.is_required() {
                    Err(missing())
                } else {
                    Ok(Checked::Absent)
                };
            }
            match kind {
                ControlKind::Email if !is_valid_email(value) => {
                    Err(ValidationError::InvalidFormat {
                        field: spec.id,
                        message: "Invalid email address",
                    })
                }
                ControlKind::Date if !is_valid_date(value) => Err(ValidationError::InvalidFormat {
                    field: spec.id,
                    message: "Registration Date must be a date (YYYY-MM-DD)",
                }),
                _ => Ok(Checked::Text(value.to_string())),
            }
        }
        // Control and value disagree: treat as nothing entered
        _ if spec.is_required() => Err(missing()),
        _ => Ok(Checked::Absent),
    }
}

/// Checked values keyed by field, drained while building the record
struct CheckedValues(BTreeMap<FieldId, Checked>);

impl CheckedValues {
    fn text(&mut self, id: FieldId) -> String {
        match self.0.remove(&id) {
            Some(Checked::Text(value)) => value,
            _ => String::new(),
        }
    }

    fn optional(&mut self, id: FieldId) -> Option<String> {
        match self.0.remove(&id) {
            Some(Checked::Text(value)) => Some(value),
            _ => None,
        }
    }

    fn flag(&mut self, id: FieldId) -> bool {
        match self.0.remove(&id) {
            Some(Checked::Flag(on)) => on,
            _ => matches!(id.spec().kind, ControlKind::Toggle { default: true }),
        }
    }

    fn gender(&mut self) -> Result<Gender, ValidationError> {
        match self.0.remove(&FieldId::Gender) {
            Some(Checked::Gender(gender)) => Ok(gender),
            _ => Err(ValidationError::MissingRequiredField {
                field: FieldId::Gender,
            }),
        }
    }
}

/// Validate every field of `source` and build the typed record.
///
/// All fields are checked; on failure every violation is returned, in schema
/// order, with at most one error per field.
pub fn validate<S: FieldSource + ?Sized>(source: &S) -> Result<MakerRecord, Vec<ValidationError>> {
    let mut checked = BTreeMap::new();
    let mut errors = Vec::new();

    for spec in SCHEMA {
        match check_field(spec, source.raw(spec.id)) {
            Ok(value) => {
                checked.insert(spec.id, value);
            }
            Err(err) => errors.push(err),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let mut v = CheckedValues(checked);
    let gender = v.gender().map_err(|err| vec![err])?;

    Ok(MakerRecord {
        brand_name: v.text(FieldId::BrandName),
        maker_name: v.text(FieldId::MakerName),
        maker_story: v.text(FieldId::MakerStory),
        maker_profile: v.text(FieldId::MakerProfile),
        maker_card_number: v.optional(FieldId::MakerCardNumber),
        gender,
        years_experience: v.text(FieldId::YearsExperience),
        contact_number: v.text(FieldId::ContactNumber),
        email: v.text(FieldId::Email),
        msme_number: v.optional(FieldId::MsmeNumber),
        registration_date: v.text(FieldId::RegistrationDate),
        org_contact_number: v.optional(FieldId::OrgContactNumber),
        org_email: v.optional(FieldId::OrgEmail),
        city: v.text(FieldId::City),
        district_pincode: v.text(FieldId::DistrictPincode),
        state: v.text(FieldId::State),
        craft_type: v.text(FieldId::CraftType),
        craft_story: v.text(FieldId::CraftStory),
        process_technique: v.text(FieldId::ProcessTechnique),
        craft_tools: v.text(FieldId::CraftTools),
        usp_innovation: v.text(FieldId::UspInnovation),
        active_makers: v.text(FieldId::ActiveMakers),
        gender_ratio: v.text(FieldId::GenderRatio),
        languages_known: v.text(FieldId::LanguagesKnown),
        videos: v.optional(FieldId::Videos),
        raw_materials: v.text(FieldId::RawMaterials),
        catalogue: v.optional(FieldId::Catalogue),
        products_range: v.text(FieldId::ProductsRange),
        production_capacity: v.text(FieldId::ProductionCapacity),
        gst_number: v.optional(FieldId::GstNumber),
        photos: v.optional(FieldId::Photos),
        social_media_links: v.optional(FieldId::SocialMediaLinks),
        website_link: v.optional(FieldId::WebsiteLink),
        offline_presence: v.text(FieldId::OfflinePresence),
        exhibit_spaces: v.optional(FieldId::ExhibitSpaces),
        conduct_workshops: v.text(FieldId::ConductWorkshops),
        collaboration_designers: v.text(FieldId::CollaborationDesigners),
        insurance: v.text(FieldId::Insurance),
        certifications: v.text(FieldId::Certifications),
        certificates_received: v.optional(FieldId::CertificatesReceived),
        sustainability_practices: v.optional(FieldId::SustainabilityPractices),
        ratings_system: v.optional(FieldId::RatingsSystem),
        peers_reviews: v.optional(FieldId::PeersReviews),
        subscribe_to_updates: v.flag(FieldId::SubscribeToUpdates),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Field values held in a plain map
    struct MapSource {
        values: BTreeMap<FieldId, String>,
        subscribe: bool,
    }

    impl MapSource {
        fn valid() -> Self {
            let mut values = BTreeMap::new();
            for spec in SCHEMA.iter().filter(|s| s.is_required()) {
                let value = match spec.kind {
                    ControlKind::Email => "maker@example.com".to_string(),
                    ControlKind::Date => "2024-03-15".to_string(),
                    ControlKind::Choice(_) => "she".to_string(),
                    _ => format!("{} value", spec.key),
                };
                values.insert(spec.id, value);
            }
            Self {
                values,
                subscribe: true,
            }
        }

        fn with(mut self, id: FieldId, value: &str) -> Self {
            self.values.insert(id, value.to_string());
            self
        }
    }

    impl FieldSource for MapSource {
        fn raw(&self, id: FieldId) -> RawValue<'_> {
            match id.spec().kind {
                ControlKind::Toggle { .. } => RawValue::Toggle(self.subscribe),
                ControlKind::Choice(_) => RawValue::Choice(self.values.get(&id).map(String::as_str)),
                _ => RawValue::Text(self.values.get(&id).map_or("", String::as_str)),
            }
        }
    }

    #[test]
    fn test_valid_source_builds_record() {
        let record = validate(&MapSource::valid()).unwrap();
        assert_eq!(record.brand_name, "brandName value");
        assert_eq!(record.email, "maker@example.com");
        assert_eq!(record.registration_date, "2024-03-15");
        assert_eq!(record.gender, Gender::She);
        assert!(record.subscribe_to_updates);
    }

    #[test]
    fn test_optional_fields_left_empty_are_absent() {
        let record = validate(&MapSource::valid()).unwrap();
        assert_eq!(record.maker_card_number, None);
        assert_eq!(record.videos, None);
        assert_eq!(record.peers_reviews, None);

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("videos").is_none());
        assert!(json.get("gstNumber").is_none());
        assert_eq!(json["subscribeToUpdates"], serde_json::Value::Bool(true));
    }

    #[test]
    fn test_optional_fields_are_trimmed_and_kept() {
        let source = MapSource::valid()
            .with(FieldId::WebsiteLink, "  https://example.com ")
            .with(FieldId::GstNumber, "22AAAAA0000A1Z5");
        let record = validate(&source).unwrap();
        assert_eq!(record.website_link.as_deref(), Some("https://example.com"));
        assert_eq!(record.gst_number.as_deref(), Some("22AAAAA0000A1Z5"));
    }

    #[test]
    fn test_each_required_field_reports_exactly_one_error() {
        for spec in SCHEMA.iter().filter(|s| s.is_required()) {
            let mut source = MapSource::valid();
            source.values.remove(&spec.id);

            let errors = validate(&source).unwrap_err();
            assert_eq!(
                errors,
                vec![ValidationError::MissingRequiredField { field: spec.id }],
                "field {}",
                spec.key
            );
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let source = MapSource::valid().with(FieldId::City, "   ");
        let errors = validate(&source).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::MissingRequiredField {
                field: FieldId::City
            }]
        );
    }

    #[test]
    fn test_invalid_email_blocks_submission() {
        let source = MapSource::valid().with(FieldId::Email, "not-an-email");
        let errors = validate(&source).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), FieldId::Email);
        assert_eq!(errors[0].to_string(), "Invalid email address");
    }

    #[test]
    fn test_invalid_date_blocks_submission() {
        let source = MapSource::valid().with(FieldId::RegistrationDate, "2024-13-40");
        let errors = validate(&source).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidFormat {
                field: FieldId::RegistrationDate,
                message: "Registration Date must be a date (YYYY-MM-DD)",
            }]
        );
    }

    #[test]
    fn test_gender_outside_closed_set() {
        let source = MapSource::valid().with(FieldId::Gender, "it");
        let errors = validate(&source).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidEnumValue {
                field: FieldId::Gender,
                value: "it".to_string(),
                allowed: Gender::OPTIONS,
            }]
        );
    }

    #[test]
    fn test_errors_come_back_in_schema_order() {
        let mut source = MapSource::valid().with(FieldId::Email, "nope");
        source.values.remove(&FieldId::Insurance);
        source.values.remove(&FieldId::BrandName);

        let fields: Vec<_> = validate(&source)
            .unwrap_err()
            .iter()
            .map(ValidationError::field)
            .collect();
        assert_eq!(
            fields,
            vec![FieldId::BrandName, FieldId::Email, FieldId::Insurance]
        );
    }

    #[test]
    fn test_unsubscribed_flag_is_kept() {
        let mut source = MapSource::valid();
        source.subscribe = false;
        assert!(!validate(&source).unwrap().subscribe_to_updates);
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name+tag@example.co.uk"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@@example.com"));
    }

    #[test]
    fn test_date_validation() {
        assert!(is_valid_date("2024-02-29"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("15/03/2024"));
        assert!(!is_valid_date("yesterday"));
    }
}

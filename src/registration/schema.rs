//! Declarative field table for the maker registration form
//!
//! Every control the form renders, and every constraint it checks, comes from
//! [`SCHEMA`]. Entries are listed in display order and `FieldId as usize`
//! indexes straight into the table.

use super::record::Gender;

/// Identifies one field of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    BrandName,
    MakerName,
    MakerStory,
    MakerProfile,
    MakerCardNumber,
    Gender,
    YearsExperience,
    ContactNumber,
    Email,
    MsmeNumber,
    RegistrationDate,
    OrgContactNumber,
    OrgEmail,
    City,
    DistrictPincode,
    State,
    CraftType,
    CraftStory,
    ProcessTechnique,
    CraftTools,
    UspInnovation,
    ActiveMakers,
    GenderRatio,
    LanguagesKnown,
    Videos,
    RawMaterials,
    Catalogue,
    ProductsRange,
    ProductionCapacity,
    GstNumber,
    Photos,
    SocialMediaLinks,
    WebsiteLink,
    OfflinePresence,
    ExhibitSpaces,
    ConductWorkshops,
    CollaborationDesigners,
    Insurance,
    Certifications,
    CertificatesReceived,
    SustainabilityPractices,
    RatingsSystem,
    PeersReviews,
    SubscribeToUpdates,
}

impl FieldId {
    /// Schema entry for this field
    pub fn spec(self) -> &'static FieldSpec {
        &SCHEMA[self as usize]
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        self.spec().label
    }

    /// JSON key used in the submitted record
    pub fn key(self) -> &'static str {
        self.spec().key
    }
}

/// Visual grouping of fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Basic,
    Location,
    Craft,
    Scale,
    Production,
    Business,
    Services,
    Additional,
    Subscription,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::Basic => "Basic Information",
            Section::Location => "Location",
            Section::Craft => "Craft Details",
            Section::Scale => "Scale & Capacity",
            Section::Production => "Production Details",
            Section::Business => "Business Information",
            Section::Services => "Services & Collaboration",
            Section::Additional => "Additional Information",
            Section::Subscription => "Subscription",
        }
    }
}

/// What kind of control edits the field, and what shape its value must take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Single-line free text
    Text,
    /// Multi-line free text (Enter inserts a newline)
    Multiline,
    /// Free text that must be a syntactically valid email address
    Email,
    /// Free text that must be a `YYYY-MM-DD` calendar date
    Date,
    /// Selector over a closed set of values
    Choice(&'static [&'static str]),
    /// On/off flag with its initial value
    Toggle { default: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
}

/// One row of the declarative schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub key: &'static str,
    pub label: &'static str,
    pub section: Section,
    pub kind: ControlKind,
    pub requirement: Requirement,
}

impl FieldSpec {
    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == ControlKind::Multiline
    }
}

const fn required(
    id: FieldId,
    key: &'static str,
    label: &'static str,
    section: Section,
    kind: ControlKind,
) -> FieldSpec {
    FieldSpec {
        id,
        key,
        label,
        section,
        kind,
        requirement: Requirement::Required,
    }
}

const fn optional(
    id: FieldId,
    key: &'static str,
    label: &'static str,
    section: Section,
    kind: ControlKind,
) -> FieldSpec {
    FieldSpec {
        id,
        key,
        label,
        section,
        kind,
        requirement: Requirement::Optional,
    }
}

use ControlKind::{Date, Email, Multiline, Text};
use Section::*;

pub const SCHEMA: &[FieldSpec] = &[
    // Basic Information
    required(FieldId::BrandName, "brandName", "Brand/Logo Name", Basic, Text),
    required(FieldId::MakerName, "makerName", "Maker/Organization Name", Basic, Text),
    required(FieldId::MakerStory, "makerStory", "Maker Story", Basic, Multiline),
    required(FieldId::MakerProfile, "makerProfile", "Maker Profile", Basic, Multiline),
    optional(FieldId::MakerCardNumber, "makerCardNumber", "Maker Card Number", Basic, Text),
    required(
        FieldId::Gender,
        "gender",
        "Gender",
        Basic,
        ControlKind::Choice(Gender::OPTIONS),
    ),
    required(FieldId::YearsExperience, "yearsExperience", "Years of Experience", Basic, Text),
    required(FieldId::ContactNumber, "contactNumber", "Contact Number", Basic, Text),
    required(FieldId::Email, "email", "Email", Basic, Email),
    optional(FieldId::MsmeNumber, "msmeNumber", "MSME Number", Basic, Text),
    required(FieldId::RegistrationDate, "registrationDate", "Registration Date", Basic, Date),
    optional(
        FieldId::OrgContactNumber,
        "orgContactNumber",
        "Organization Contact Number",
        Basic,
        Text,
    ),
    optional(FieldId::OrgEmail, "orgEmail", "Organization Email", Basic, Text),
    // Location
    required(FieldId::City, "city", "City/Town/Village", Location, Text),
    required(FieldId::DistrictPincode, "districtPincode", "District/Pincode", Location, Text),
    required(FieldId::State, "state", "State", Location, Text),
    // Craft Details
    required(FieldId::CraftType, "craftType", "Craft Type", Craft, Text),
    required(FieldId::CraftStory, "craftStory", "Craft Story", Craft, Multiline),
    required(FieldId::ProcessTechnique, "processTechnique", "Process/Technique", Craft, Multiline),
    required(FieldId::CraftTools, "craftTools", "Craft Associated Tools", Craft, Text),
    required(FieldId::UspInnovation, "uspInnovation", "USP/Innovation", Craft, Text),
    // Scale & Capacity
    required(
        FieldId::ActiveMakers,
        "activeMakers",
        "Total Number of Active Makers",
        Scale,
        Text,
    ),
    required(FieldId::GenderRatio, "genderRatio", "Ratio of Female:Male Makers", Scale, Text),
    required(FieldId::LanguagesKnown, "languagesKnown", "Languages Known", Scale, Text),
    // Production Details
    optional(FieldId::Videos, "videos", "Videos", Production, Text),
    required(FieldId::RawMaterials, "rawMaterials", "Raw Materials Used", Production, Text),
    optional(FieldId::Catalogue, "catalogue", "Catalogue", Production, Text),
    required(FieldId::ProductsRange, "productsRange", "Products Range", Production, Text),
    required(
        FieldId::ProductionCapacity,
        "productionCapacity",
        "Production Capacity per Month",
        Production,
        Text,
    ),
    // Business Information
    optional(FieldId::GstNumber, "gstNumber", "GST Number", Business, Text),
    optional(FieldId::Photos, "photos", "Photos", Business, Text),
    optional(FieldId::SocialMediaLinks, "socialMediaLinks", "Social Media Links", Business, Text),
    optional(FieldId::WebsiteLink, "websiteLink", "Website Link", Business, Text),
    required(
        FieldId::OfflinePresence,
        "offlinePresence",
        "Artisan's Offline Presence",
        Business,
        Text,
    ),
    // Services & Collaboration
    optional(FieldId::ExhibitSpaces, "exhibitSpaces", "Exhibit Spaces", Services, Text),
    required(
        FieldId::ConductWorkshops,
        "conductWorkshops",
        "Do you conduct workshops",
        Services,
        Text,
    ),
    required(
        FieldId::CollaborationDesigners,
        "collaborationDesigners",
        "Collaboration with Designers",
        Services,
        Text,
    ),
    required(FieldId::Insurance, "insurance", "Insurance", Services, Text),
    required(FieldId::Certifications, "certifications", "Certifications/Awards", Services, Text),
    optional(
        FieldId::CertificatesReceived,
        "certificatesReceived",
        "Certificates Received",
        Services,
        Text,
    ),
    // Additional Information
    optional(
        FieldId::SustainabilityPractices,
        "sustainabilityPractices",
        "Sustainability Practices",
        Additional,
        Multiline,
    ),
    optional(FieldId::RatingsSystem, "ratingsSystem", "Ratings System", Additional, Text),
    optional(FieldId::PeersReviews, "peersReviews", "Peer Reviews", Additional, Multiline),
    // Subscription
    optional(
        FieldId::SubscribeToUpdates,
        "subscribeToUpdates",
        "Subscribe to Updates",
        Subscription,
        ControlKind::Toggle { default: true },
    ),
];

/// Look up a schema entry by its JSON key
pub fn find_by_key(key: &str) -> Option<&'static FieldSpec> {
    SCHEMA.iter().find(|spec| spec.key == key)
}

//! Maker registration domain
//!
//! - `schema`: the declarative field table
//! - `record`: the validated record and the gender closed set
//! - `validation`: raw values to record, or a list of violations

mod record;
mod schema;
mod validation;

pub use record::MakerRecord;
#[cfg(test)]
pub use record::Gender;
pub use schema::{find_by_key, ControlKind, FieldId, FieldSpec, Section, SCHEMA};
pub use validation::{validate, FieldSource, RawValue};

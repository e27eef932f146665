//! Trait abstraction for form collaborators to enable mocking in tests

use crate::registration::MakerRecord;
use anyhow::Result;

/// Receives each record that passes validation
#[cfg_attr(test, mockall::automock)]
pub trait SubmitHandler {
    /// Called exactly once per accepted submission
    fn on_submit(&mut self, record: MakerRecord) -> Result<()>;
}

/// Navigation away from the form, without validation
#[cfg_attr(test, mockall::automock)]
pub trait BackHandler {
    fn on_back(&mut self);
}

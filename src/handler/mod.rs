//! Collaborators injected into the form: submit and back

mod session;
mod traits;

pub use session::{ExitOnBack, SubmissionLog};
pub use traits::{BackHandler, SubmitHandler};

#[cfg(test)]
pub use traits::{MockBackHandler, MockSubmitHandler};

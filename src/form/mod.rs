mod controller;
mod state;
mod validation;

pub use controller::{FormController, FormPhase, SubmissionResult};
pub use state::{FormState, ValidationErrors};
pub use validation::ValidationPolicy;

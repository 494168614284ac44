pub mod error;
pub mod flow;
pub mod model;
pub mod store;
pub mod timer;

pub use error::StoreError;
pub use flow::{ContactSubmissionFlow, FlowSnapshot, SubmitOutcome};
pub use model::{ContactSubmission, Draft, DraftProblem, Field, SubmissionStatus};
pub use store::{RecordStore, SupabaseStore};
pub use timer::{BrowserTimer, Timer};

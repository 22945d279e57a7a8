pub mod fatigue;
pub mod sample;
pub mod session;
pub mod trial;

pub use fatigue::FatigueRating;
pub use sample::{Drawing, SamplePoint, Stroke};
pub use session::{Session, SessionError, WARMUP_TRIALS};
pub use trial::{Trial, TrialMetadata};

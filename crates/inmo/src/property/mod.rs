//! Property editor: form state, validation, payload shaping, the save
//! workflow and the wizard that drives them.

pub mod fields;
pub mod form;
pub mod payload;
pub mod pending;
pub mod save;
pub mod steps;
pub mod validation;
pub mod wizard;

pub use fields::{FieldChange, FieldKey};
pub use form::{PropertyForm, PropertyFormData};
pub use payload::build_property_payload;
pub use pending::PendingUploads;
pub use save::{PropertySaver, SaveError, SaveOutcome, SaveStep, SaveWarning};
pub use steps::{steps_for, Step, StepError};
pub use wizard::{EditorError, PropertyEditor, Wizard};

//! Document Upload Tracker UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: upload API call
//! - view_model.rs: UploadTrackerVm (tracker state + in-flight requests)
//! - view.rs: Main component UploadTracker

mod model;
mod view;
mod view_model;

pub use view::UploadTracker;
pub use view_model::UploadTrackerVm;

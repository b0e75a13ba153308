//! Document Chat Session UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: question API call
//! - view_model.rs: ChatSessionVm (session state + draft + in-flight request)
//! - view.rs: Main component ChatSession
//! - citation_list.rs: Component listing the sources of an answer

mod citation_list;
mod model;
mod view;
mod view_model;

pub use citation_list::CitationList;
pub use view::ChatSession;
pub use view_model::ChatSessionVm;

//! Email classification use case (MVVM Standard)
//!
//! Structure:
//! - api.rs: HTTP call to the classification endpoint
//! - view_model.rs: ClassifyEmailVm, drives the lifecycle state machine
//! - view.rs: Main component ClassifyEmailPage
//! - mode_tabs.rs, file_drop.rs, result_panel.rs, error_panel.rs: page parts

mod api;
mod error_panel;
mod file_drop;
mod mode_tabs;
mod result_panel;
mod view;
mod view_model;

pub use view::ClassifyEmailPage;
pub use view_model::ClassifyEmailVm;

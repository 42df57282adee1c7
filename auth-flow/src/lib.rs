#![warn(clippy::cloned_instead_of_copied)]
#![warn(clippy::expect_used)]
#![warn(clippy::manual_let_else)]
#![warn(clippy::match_same_arms)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::panic)]
#![warn(clippy::print_stdout)]
#![warn(clippy::str_to_string)]
#![warn(clippy::uninlined_format_args)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::use_self)]

//! Client side authentication flow of the Aivia front end. Everything here is independent of the
//! browser so the rules that decide what a user may submit, what state a form is in and which view
//! a session unlocks can be exercised without rendering anything.

pub mod collaborator;
pub mod config;
pub mod navigation;
pub mod routes;
pub mod session;
pub mod submission;
pub mod validation;

#![warn(clippy::cloned_instead_of_copied)]
#![warn(clippy::cognitive_complexity)]
#![warn(clippy::empty_structs_with_brackets)]
#![warn(clippy::equatable_if_let)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::expect_used)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::manual_let_else)]
#![warn(clippy::manual_string_new)]
#![warn(clippy::match_same_arms)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::option_if_let_else)]
#![warn(clippy::panic)]
#![warn(clippy::print_stdout)]
#![warn(clippy::str_to_string)]
#![warn(clippy::uninlined_format_args)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::use_self)]
#![warn(clippy::wildcard_imports)]

//! Common components of the Aivia web front end. Holds the error type shared by every crate in the
//! workspace and the wire types exchanged with the external authentication service.

pub mod api;
pub mod error;

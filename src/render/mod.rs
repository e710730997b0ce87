//! Turns page state into something to look at.
//!
//! Both renderers work from the same [view::PageView], so they always agree on
//! what is shown.

pub mod html;
pub mod terminal;
pub mod view;

pub const LOADING: &str = "Loading...";
pub const NO_IMAGE: &str = "No Image Available";
pub const NO_EDITIONS: &str = "No editions available";
pub const NO_REVIEWS: &str = "No reviews yet";
pub const EDIT_REVIEW: &str = "Edit Review";
pub const WRITE_REVIEW: &str = "Write a Review";

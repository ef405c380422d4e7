//! # booknet
//!
//! Typed client for the Book Social Network REST API, plus the session guard
//! and login flow a front end wraps around it.
//!
//! ## Layout
//!
//! - [`services`]: one façade per resource. Every operation is exposed twice:
//!   `op_response` yields the full [`Response`](rest::Response) envelope
//!   (status, headers, decoded body), `op` yields only the body.
//! - [`auth`]: the authentication collaborator interface, a JWT session token,
//!   and an in-process collaborator backed by a session store.
//! - [`guard`]: the navigation-time check that redirects to the login path
//!   when the session token is expired, missing or unreadable.
//! - [`login`]: drives the collaborator through `init` then `login`.
//!
//! ## Example
//!
//! List the feedback left on a book.
//!
//! ```no_run
//! use booknet::api::feedback::find_all_feedbacks_by_book::FindAllFeedbacksByBookParams;
//! use booknet::client::ApiConfiguration;
//! use booknet::services::FeedbackService;
//!
//! #[tokio::main]
//! async fn main() -> miette::Result<()> {
//!     let feedback = FeedbackService::new(ApiConfiguration::default(), reqwest::Client::new());
//!
//!     let page = feedback
//!         .find_all_feedbacks_by_book(
//!             &FindAllFeedbacksByBookParams::new()
//!                 .book_id(42)
//!                 .page(0)
//!                 .size(10)
//!                 .build(),
//!             None,
//!         )
//!         .await?;
//!
//!     for entry in &page.content {
//!         println!("{:?}: {:?}", entry.note, entry.review);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod auth;
/// API configuration and transport wrappers
pub mod client;
pub mod guard;
pub mod login;
pub mod services;

/// Generated API bindings
pub use booknet_api as api;
pub use booknet_common::*;

//! Client core for the zipplans console.
//!
//! Headless state and control flow for the three CRUD resources (plans, zip
//! codes, prices) and the anonymous price lookup. Each resource page owns its
//! collection, its current record, and its modal flags; mutations go out
//! through the [`zipplans_api_client::Gateway`] seam and reconcile by a full
//! refetch. Rendering layers sit on top of the pure state these controllers
//! expose and are not part of this crate.

pub mod currency;
pub mod modal;
pub mod notify;
pub mod page;
pub mod plan;
pub mod price;
pub mod resource;
pub mod search;
pub mod session;
pub mod zip_code;

pub use zipplans_api_client as api;

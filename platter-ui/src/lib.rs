//! platter-ui - Pure view components for the platter web player
//!
//! Components take display data as props and report user intent through
//! `EventHandler` callbacks. No data fetching and no audio access happens
//! here; the app crate owns both.

pub mod components;

pub use components::*;

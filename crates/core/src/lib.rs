//! Core library for pokedex
//!
//! This crate implements the **Functional Core** of the pokedex application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`pokedex_core`** (this crate): Pure transformation functions with zero I/O
//! - **`pokedex`**: HTTP, shared state handles, fetch orchestration and rendering
//!   (the Imperative Shell)
//!
//! Everything here is deterministic and tested with fixture data: parsing the
//! PokéAPI bodies, the catalog reducer, page arithmetic, filtering, type
//! display names and the view model handed to renderers.
//!
//! # Module Organization
//!
//! - [`pokemon`]: API response types, [`pokemon::Record`] and body parsing
//! - [`store`]: [`store::CatalogState`], [`store::Action`] and the reducer
//! - [`pagination`]: [`pagination::PageState`] and the paging constants
//! - [`filter`]: filtering records by type or ability
//! - [`taxonomy`]: type display names
//! - [`icon`]: single sprite lookup state
//! - [`sequence`]: request tickets for last-writer-wins protection
//! - [`view`]: view model consumed by the renderers
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use pokedex_core::filter::{filter_records, FilterSelection};
//! use pokedex_core::store::{reduce, Action, CatalogState};
//!
//! let state = reduce(CatalogState::default(), Action::FetchStart);
//! let state = reduce(state, Action::FetchSuccess(records));
//!
//! let fire = filter_records(&state.records, &FilterSelection::new("fire"));
//! ```

pub mod filter;
pub mod icon;
pub mod pagination;
pub mod pokemon;
pub mod sequence;
pub mod store;
pub mod taxonomy;
pub mod view;

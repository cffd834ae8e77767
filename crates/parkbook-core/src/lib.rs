//! Parkbook Core - Visitor, park and trip model
//!
//! This crate provides the entity types, handles and the [`World`]
//! registry that links visitors to national parks through trips.

pub mod error;
pub mod limits;
pub mod park;
pub mod trip;
pub mod visitor;
pub mod world;

pub use error::{Error, Result};
pub use limits::ValidationError;
pub use park::{NationalPark, ParkId};
pub use trip::{Trip, TripId};
pub use visitor::{Visitor, VisitorId};
pub use world::{ParkReport, World};

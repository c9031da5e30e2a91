//! Calendar domain logic: grid layout, selection containers and the date model.

pub mod calendar;
pub mod date_model;
pub mod selection;

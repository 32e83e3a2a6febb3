//! fieldarea - Measure and report areas of geographic field polygons

pub mod api;
pub mod config;
pub mod domain;
pub mod geojson;
pub mod geometry;
pub mod report;

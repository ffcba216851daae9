//! revtrend - Review Paper Trend Analysis
//!
//! Loads a bibliographic CSV export, deduplicates it, classifies each
//! title against keyword lists, aggregates counts per publication year,
//! then renders a trend chart and exports the topic-relevant papers.

pub mod analysis;
pub mod charts;
pub mod config;
pub mod data;
pub mod pipeline;
pub mod report;

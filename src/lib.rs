// PCOS risk: rule-based risk scoring service
//
// This is the library root. Scoring is pure and lives in `scoring`; the
// HTTP surface in `web` wraps it with validation and request journaling.

pub mod config;
pub mod output;
pub mod scoring;
pub mod web;

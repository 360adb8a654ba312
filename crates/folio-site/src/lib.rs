//! Folio, a single-page animated portfolio.
//!
//! This crate provides the Dioxus desktop application: static content,
//! section components, the contact form controller and the decorative
//! particle field.

pub mod components;
pub mod config;
pub mod content;
pub mod state;

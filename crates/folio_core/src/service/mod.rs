//! Display-assembly services.
//!
//! # Responsibility
//! - Project validated content into the row shapes the rendering layer
//!   binds directly to markup.
//! - Keep rendering decoupled from model, timeline math and index details.

pub mod article_service;
pub mod search_service;
pub mod timeline_service;

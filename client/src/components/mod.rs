//! Reusable UI components shared by pages.

pub mod brand_panel;

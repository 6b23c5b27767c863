//! Configuration management for fsnek.
//!
//! User preferences ([`settings::Config`]), key bindings ([`keymap::Keymap`])
//! and colors ([`theme::Theme`]) are stored as TOML files and loaded at
//! startup, falling back to defaults when a file is absent.

pub mod keymap;
pub mod settings;
pub mod theme;

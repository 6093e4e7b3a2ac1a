//! Trivialist - A Terminal User Interface (TUI) for a trivia question bank
//!
//! This library browses the questions served by a trivia backend: a paginated
//! listing, per-category listings and free-text search, plus deleting and
//! adding questions. It includes a typed HTTP client, a terminal-independent
//! view controller and a rich interactive UI built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`api`] - HTTP client and wire contract types
//! * [`view`] - Question view state, pagination and request sequencing
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components

/// Trivia backend client and response contracts
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Question view controller, independent of the terminal
pub mod view;

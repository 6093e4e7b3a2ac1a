//! Core UI functionality for the Trivialist application.
//!
//! This module contains the fundamental building blocks for the user interface:
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background API requests
//!
//! Components turn input into [`Action`]s, the app component applies them to
//! the question view, and network work runs on the [`TaskManager`], which
//! reports back through the same action channel.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};

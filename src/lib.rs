//! Single-page developer portfolio rendered with Dioxus.
//!
//! UI state lives in [`state::AppState`]; everything that touches the
//! browser is confined to [`dom`], [`hooks`] and the wasm halves of
//! [`theme`] and [`scroll_spy`].

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod focus_trap;
pub mod hooks;
pub mod links;
pub mod scroll_spy;
pub mod sections;
pub mod state;
pub mod theme;

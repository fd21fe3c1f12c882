//! Client-side enhancements for the repair shop's static marketing page.
//!
//! This crate is compiled to WebAssembly and loaded by the page. It wires
//! the mobile menu, the persisted light/dark theme switch, the contact and
//! newsletter forms with their timed feedback messages, clickable service
//! cards, and scroll-triggered reveal animations. Every hook is optional: a
//! page that omits a section simply loses that feature.
//!
//! Each controller splits into a browser-free core (decisions and state,
//! unit-tested natively) and a `web-sys` shell compiled only with the
//! `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`bootstrap`] | WASM entry point and page-ready sequencing |
//! | [`config`] | DOM hooks and durations, overridable from inline JSON |
//! | [`preference`] | Persisted theme preference and its storage backends |
//! | [`theme`] | Light/dark theme switch |
//! | [`menu`] | Mobile navigation toggle |
//! | [`feedback`] | Timed status messages under the forms |
//! | [`verification`] | Optional bot-check widget capability |
//! | [`contact`] | Repair request form |
//! | [`newsletter`] | Newsletter sign-up form |
//! | `cards` | Click-to-contact service cards (`hydrate` only) |
//! | [`reveal`] | Scroll-triggered fade-in |
//! | [`styles`] | Injected stylesheet |
//! | [`consts`] | Shared selectors, glyphs, and timings |

pub mod bootstrap;
#[cfg(feature = "hydrate")]
pub mod cards;
pub mod config;
pub mod consts;
pub mod contact;
#[cfg(feature = "hydrate")]
mod dom;
pub mod error;
pub mod feedback;
pub mod menu;
pub mod newsletter;
pub mod preference;
pub mod reveal;
pub mod styles;
pub mod theme;
pub mod verification;

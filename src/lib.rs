//! # Folio
//!
//! A static generator for an animated single-page developer portfolio.
//! The content directory is the data source: JSON collections become the
//! page's sections, `config.toml` carries the profile, palette and motion
//! settings, and `assets/` is copied alongside the generated page.
//!
//! # Architecture
//!
//! ```text
//! 1. Load      content/   →  Portfolio     (JSON + TOML → immutable records)
//! 2. Render    Portfolio  →  index.html    (sections + compiled motion CSS)
//! 3. Copy      assets/    →  dist/assets/  (skipping unchanged files)
//! ```
//!
//! Motion is modelled in Rust and compiled, not interpreted at runtime.
//! Each section declares a choreography (a tree of staggered entrance
//! variants), pointer interactions and ambient loops. The [`motion`] module
//! resolves those into per-element delays and a stylesheet; the tiny
//! runtime in `static/motion.js` only flips classes: it arms the page,
//! marks sections visible when they enter the viewport, drives the mobile
//! menu and the scroll flag.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Loads the content directory into a [`content::Portfolio`], collecting warnings |
//! | [`types`] | Content records: skills, history, projects, about cards |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`motion`] | Reveal latch, viewport observer, stagger scheduling, hover, ambient loops, CSS compiler |
//! | [`sections`] | The fixed section set and each section's choreography and markup |
//! | [`nav`] | Navigation bar: menu state machine, scroll flag, markup |
//! | [`generate`] | Renders the page with Maud and writes the output directory |
//! | [`assets`] | Image URL resolution and hash-checked asset copying |
//! | [`naming`] | Slugs, anchors and CSS identifiers |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Progressive Enhancement
//!
//! Nothing is hidden unless JavaScript runs. Pre-entrance styles are
//! scoped under a `js` class that the runtime adds to the root element, so
//! a page without scripts (or opened by a crawler) shows every section at
//! rest. Without `IntersectionObserver` the runtime reveals everything
//! immediately.
//!
//! ## Reveal Once
//!
//! A section animates in the first time it crosses its visibility
//! threshold and never animates out. The observer is disconnected as soon
//! as it fires.
//!
//! ## Separate Animation Channels
//!
//! Entrance animations use the individual `translate`/`scale`/`rotate`
//! properties, hover feedback and ambient loops use `transform`. Browsers
//! compose the two, so hovering a card mid-entrance never fights the
//! entrance transition.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system, rather than Handlebars or Tera. Advantages:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions, no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or get out of sync.

pub mod assets;
pub mod config;
pub mod content;
pub mod generate;
pub mod motion;
pub mod naming;
pub mod nav;
pub mod output;
pub mod sections;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

//! html-creator-core - tag tree model and HTML rendering
//!
//! This crate provides the data structures for a tree of HTML tags and the
//! recursive renderer that turns it into indented HTML text. It performs no
//! I/O; `html-creator` builds documents and output handling on top of it.
//!
//! # Output shape
//!
//! ```text
//! Section  ──▶  "    <body>" children "\n    </body>\n"
//! Tag      ──▶  "\n        <p class='..' id='..' k='v'>" text children "</p>"
//! single   ──▶  "\n        <img k='v'>"
//! ```
//!
//! Values are emitted verbatim; nothing is escaped or validated.
//!
//! # Example
//!
//! ```rust
//! use html_creator_core::{Section, Tag};
//!
//! let mut div = Tag::new("div").classes(["container", "container-fluid"]).id("lead");
//! div.append(Tag::new("p").text("another test"))
//!     .append(Tag::with_attrs("img", [("src", "/icon.png")]).single());
//!
//! let mut body = Section::new("body");
//! body.append(div);
//!
//! let html = body.render(1);
//! assert!(html.starts_with("    <body>\n        <div class='container container-fluid' id='lead'>"));
//! assert!(!html.contains("</img>"));
//! ```

mod node;
mod options;
mod render;

pub use node::{Node, Section, Tag};
pub use options::{AttributeNames, RenderOptions};
pub use render::render_children;

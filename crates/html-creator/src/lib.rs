//! # html-creator
//!
//! Build HTML documents as a tree of tags and write them out as indented HTML.
//!
//! ## Design
//!
//! A tree is assembled bottom-up: each [`Tag`] or [`Section`] is filled in,
//! then appended to its parent, and the top-level sections are appended to a
//! [`Document`]. Finishing the document renders the whole tree once and hands
//! the string to its [`Output`] (a file, or standard output).
//!
//! - **No escaping**: text and attribute values are emitted verbatim
//! - **No validation**: any tag or attribute name is accepted
//! - **Deterministic**: attributes render in insertion order
//!
//! ## Example
//!
//! ```rust
//! use html_creator::{Document, Section, Tag};
//!
//! let mut head = Section::new("head");
//! head.append(Tag::new("title").text("hello"));
//!
//! let mut body = Section::new("body");
//! body.append(Tag::new("h1").class("main-text").text("Test"));
//!
//! let mut doc = Document::new();
//! doc.append(head).append(body);
//!
//! let html = doc.render();
//! assert!(html.starts_with("<html>\n    <head>\n        <title>hello</title>"));
//! assert!(html.ends_with("    </body>\n</html>"));
//! ```
//!
//! ## Example (scoped file output)
//!
//! ```rust,no_run
//! use html_creator::{Document, Section, Tag};
//!
//! Document::to_file("test.html").scope(|doc| {
//!     let mut body = Section::new("body");
//!     body.append(Tag::new("p").text("another test"));
//!     doc.append(body);
//!     Ok::<(), html_creator::HtmlCreatorError>(())
//! })?;
//! # Ok::<(), html_creator::HtmlCreatorError>(())
//! ```

mod document;
mod output;

pub use document::{Document, OpenDocument};
pub use html_creator_core::{
    render_children, AttributeNames, Node, RenderOptions, Section, Tag,
};
pub use output::Output;

/// Error type for html-creator operations
#[derive(Debug, thiserror::Error)]
pub enum HtmlCreatorError {
    #[error("Sink write error: could not write document to {target}")]
    SinkWrite {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HtmlCreatorError>;

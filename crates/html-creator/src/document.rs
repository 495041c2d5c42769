//! Document root and scoped assembly.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;

use html_creator_core::{render_children, Node, RenderOptions};
use tracing::{debug, trace, warn};

use crate::output::Output;
use crate::Result;

/// The `<html>` root of a tag tree.
///
/// A document owns its top-level children (usually `head` and `body`
/// sections) and knows where it will be written once finished.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Top-level children, rendered at depth 1
    pub children: Vec<Node>,
    output: Output,
    options: RenderOptions,
}

impl Document {
    /// Create a document written to standard output
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document written to the file at `path`
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self::with_output(Output::file(path))
    }

    /// Create a document written to `output`
    pub fn with_output(output: Output) -> Self {
        Self {
            output,
            ..Default::default()
        }
    }

    /// Use custom render options for the whole tree
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Append a top-level child, returning `self` for chaining
    pub fn append(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Render the full document.
    ///
    /// The result is `<html>\n`, the children rendered at depth 1, then
    /// `</html>` with no trailing newline.
    pub fn render(&self) -> String {
        trace!(children = self.children.len(), "rendering document");
        let mut out = String::from("<html>\n");
        render_children(&self.children, 1, &self.options, &mut out);
        out.push_str("</html>");
        out
    }

    /// Render the document and hand it to its output.
    ///
    /// Consumes the document, so a document is written at most once.
    pub fn finish(self) -> Result<()> {
        let html = self.render();
        debug!(output = %self.output, bytes = html.len(), "writing document");
        self.output.write(&html)
    }

    /// Open the document for assembly.
    ///
    /// The returned guard finishes the document when it is closed, or when it
    /// is dropped without being closed.
    pub fn enter(self) -> OpenDocument {
        OpenDocument {
            document: self,
            closed: false,
        }
    }

    /// Assemble the document inside `body`, then finish it.
    ///
    /// The document is written even when `body` fails. In that case the
    /// body's error is returned and a write failure is only logged.
    pub fn scope<F, E>(self, body: F) -> std::result::Result<(), E>
    where
        F: FnOnce(&mut Document) -> std::result::Result<(), E>,
        E: From<crate::HtmlCreatorError>,
    {
        let mut open = self.enter();
        let outcome = body(&mut *open);
        let finished = open.close();

        match (outcome, finished) {
            (Ok(()), finished) => finished.map_err(E::from),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(sink_err)) => {
                warn!(error = %sink_err, "document write failed after assembly error");
                Err(err)
            }
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// A document being assembled.
///
/// Dereferences to [`Document`]. Call [`OpenDocument::close`] to finish it and
/// see the write result; dropping the guard finishes it too, logging failures.
#[derive(Debug)]
pub struct OpenDocument {
    document: Document,
    closed: bool,
}

impl OpenDocument {
    /// Finish the document and report the write result
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        std::mem::take(&mut self.document).finish()
    }
}

impl Deref for OpenDocument {
    type Target = Document;

    fn deref(&self) -> &Document {
        &self.document
    }
}

impl DerefMut for OpenDocument {
    fn deref_mut(&mut self) -> &mut Document {
        &mut self.document
    }
}

impl Drop for OpenDocument {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        let document = std::mem::take(&mut self.document);
        if let Err(err) = document.finish() {
            warn!(error = %err, "failed to write document on drop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HtmlCreatorError;
    use html_creator_core::{AttributeNames, Section, Tag};

    #[derive(Debug, PartialEq)]
    enum AssemblyError {
        Failed(&'static str),
        Sink,
    }

    impl From<HtmlCreatorError> for AssemblyError {
        fn from(_: HtmlCreatorError) -> Self {
            AssemblyError::Sink
        }
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(Document::new().render(), "<html>\n</html>");
        assert_eq!(Document::new().to_string(), "<html>\n</html>");
    }

    #[test]
    fn test_head_only() {
        let mut head = Section::new("head");
        head.append(Tag::new("title").text("hello"));

        let mut doc = Document::new();
        doc.append(head);

        assert_eq!(
            doc.render(),
            "<html>\n    <head>\n        <title>hello</title>\n    </head>\n</html>"
        );
    }

    #[test]
    fn test_append_chains() {
        let mut doc = Document::new();
        doc.append(Section::new("head"))
            .append(Section::new("body"));

        let names: Vec<&str> = doc.children.iter().map(Node::name).collect();
        assert_eq!(names, vec!["head", "body"]);
    }

    #[test]
    fn test_options_apply_to_whole_tree() {
        let mut body = Section::new("body");
        body.append(Tag::with_attrs("img", [("data_image", "responsive")]).single());

        let mut doc = Document::new().with_options(RenderOptions {
            indent_width: 2,
            attribute_names: AttributeNames::Hyphenate,
        });
        doc.append(body);

        assert_eq!(
            doc.render(),
            "<html>\n  <body>\n    <img data-image='responsive'>\n  </body>\n</html>"
        );
    }

    #[test]
    fn test_empty_path_goes_to_stdout() {
        let doc = Document::to_file("");
        assert_eq!(doc.output(), &Output::Stdout);

        let result: Result<()> = doc.scope(|doc| {
            doc.append(Section::new("body"));
            Ok(())
        });
        result.unwrap();
    }

    #[test]
    fn test_finish_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");

        let mut doc = Document::to_file(&path);
        doc.append(Section::new("body"));
        let expected = doc.render();
        doc.finish().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn test_close_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");

        let mut open = Document::to_file(&path).enter();
        open.append(Section::new("head"));
        open.close().unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "<html>\n    <head>\n    </head>\n</html>"
        );
    }

    #[test]
    fn test_drop_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");

        {
            let mut open = Document::to_file(&path).enter();
            open.append(Section::new("body"));
        }

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "<html>\n    <body>\n    </body>\n</html>"
        );
    }

    #[test]
    fn test_drop_swallows_sink_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("index.html");

        let open = Document::to_file(&path).enter();
        drop(open);

        assert!(!path.exists());
    }

    #[test]
    fn test_scope_writes_after_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");

        let result: Result<()> = Document::to_file(&path).scope(|doc| {
            doc.append(Section::new("body"));
            Ok(())
        });
        result.unwrap();

        assert!(std::fs::read_to_string(&path).unwrap().contains("<body>"));
    }

    #[test]
    fn test_scope_writes_even_when_body_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");

        let result = Document::to_file(&path).scope(|doc| {
            doc.append(Section::new("head"));
            Err(AssemblyError::Failed("assembly failed"))
        });

        assert_eq!(result, Err(AssemblyError::Failed("assembly failed")));
        assert!(std::fs::read_to_string(&path).unwrap().contains("<head>"));
    }

    #[test]
    fn test_scope_reports_sink_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("index.html");

        let result: Result<()> = Document::to_file(&path).scope(|_| Ok(()));
        assert!(matches!(result, Err(HtmlCreatorError::SinkWrite { .. })));
    }

    #[test]
    fn test_scope_prefers_body_error_over_sink_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("index.html");

        let result = Document::to_file(&path).scope(|_| Err(AssemblyError::Failed("body")));
        assert_eq!(result, Err(AssemblyError::Failed("body")));
    }

    #[test]
    fn test_scope_converts_sink_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("index.html");

        let result: std::result::Result<(), AssemblyError> =
            Document::to_file(&path).scope(|_| Ok(()));
        assert_eq!(result, Err(AssemblyError::Sink));
    }
}

//! Writes a small landing page.
//!
//! ```text
//! cargo run -p html-creator --example landing_page -- test.html
//! RUST_LOG=debug cargo run -p html-creator --example landing_page
//! ```

use html_creator::{Document, Output, Result, Section, Tag};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let output = std::env::args()
        .nth(1)
        .map(Output::file)
        .unwrap_or_default();

    Document::with_output(output).scope(|doc| {
        let mut head = Section::new("head");
        head.append(Tag::new("title").text("hello"));
        doc.append(head);

        let mut body = Section::new("body");
        body.append(Tag::new("h1").class("main-text").text("Test"));

        let mut div = Tag::new("div")
            .classes(["container", "container-fluid"])
            .id("lead");
        div.append(Tag::new("p").text("another test"));
        div.append(
            Tag::with_attrs("img", [("src", "/icon.png"), ("data_image", "responsive")])
                .single(),
        );
        body.append(div);

        doc.append(body);
        Ok(())
    })
}

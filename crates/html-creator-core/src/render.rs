//! Tag tree rendering
//!
//! Converts tag tree nodes into indented HTML text. Rendering is a pure
//! function of the node and its depth: nothing outside the arguments is read.

use crate::node::{Node, Section, Tag};
use crate::options::RenderOptions;

/// Render a sequence of sibling nodes at `depth`, appending to `out`
pub fn render_children(
    children: &[Node],
    depth: usize,
    options: &RenderOptions,
    out: &mut String,
) {
    for child in children {
        render_node(child, depth, options, out);
    }
}

pub(crate) fn render_node(node: &Node, depth: usize, options: &RenderOptions, out: &mut String) {
    match node {
        Node::Tag(tag) => render_tag(tag, depth, options, out),
        Node::Section(section) => render_section(section, depth, options, out),
    }
}

pub(crate) fn render_tag(tag: &Tag, depth: usize, options: &RenderOptions, out: &mut String) {
    out.push('\n');
    out.push_str(&options.indent(depth));
    out.push('<');
    out.push_str(&tag.name);
    write_css_info(tag, out);
    write_attributes(tag, options, out);
    out.push('>');

    if tag.is_single {
        return;
    }

    out.push_str(&tag.text);
    render_children(&tag.children, depth + 1, options, out);
    out.push_str("</");
    out.push_str(&tag.name);
    out.push('>');
}

pub(crate) fn render_section(
    section: &Section,
    depth: usize,
    options: &RenderOptions,
    out: &mut String,
) {
    let indent = options.indent(depth);

    out.push_str(&indent);
    out.push('<');
    out.push_str(&section.name);
    out.push('>');

    render_children(&section.children, depth + 1, options, out);

    out.push('\n');
    out.push_str(&indent);
    out.push_str("</");
    out.push_str(&section.name);
    out.push_str(">\n");
}

/// ` class='...'` then ` id='...'`
fn write_css_info(tag: &Tag, out: &mut String) {
    if !tag.classes.is_empty() {
        out.push_str(" class='");
        out.push_str(&tag.classes.join(" "));
        out.push('\'');
    }

    if let Some(id) = tag.id.as_deref().filter(|id| !id.is_empty()) {
        out.push_str(" id='");
        out.push_str(id);
        out.push('\'');
    }
}

fn write_attributes(tag: &Tag, options: &RenderOptions, out: &mut String) {
    for (name, value) in &tag.attributes {
        out.push(' ');
        options.attribute_names.write_name(name, out);
        out.push_str("='");
        out.push_str(value);
        out.push('\'');
    }
}

//! Configuration options for HTML rendering

/// How attribute names are written into the opening tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributeNames {
    /// Emit the name exactly as it was given (`data_image` stays `data_image`)
    #[default]
    Verbatim,
    /// Replace every `_` in the name with `-` (`data_image` becomes `data-image`)
    Hyphenate,
}

impl AttributeNames {
    /// Apply this policy to an attribute name, appending the result to `out`
    pub fn write_name(self, name: &str, out: &mut String) {
        match self {
            AttributeNames::Verbatim => out.push_str(name),
            AttributeNames::Hyphenate => {
                out.extend(name.chars().map(|c| if c == '_' { '-' } else { c }));
            }
        }
    }
}

/// Options for HTML rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Number of spaces per nesting level
    pub indent_width: usize,

    /// Attribute name policy
    pub attribute_names: AttributeNames,
}

impl RenderOptions {
    /// Indentation string for a node at `depth`
    pub fn indent(&self, depth: usize) -> String {
        " ".repeat(self.indent_width * depth)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            attribute_names: AttributeNames::Verbatim,
        }
    }
}

use std::borrow::Cow;

use crate::{error::StructuralError, options::ParseOptions};

use super::{attributes::Attributes, node::DocumentNode};

/// Tags from the root down to the node being visited, for error messages.
#[derive(Debug, Default)]
struct Breadcrumb(Vec<String>);

impl Breadcrumb {
    fn push(&mut self, node: &DocumentNode, index: Option<usize>) {
        let name = match node.tag() {
            Some(tag) if !tag.is_empty() => tag,
            Some(_) => "<empty>",
            None => "#text",
        };
        self.0.push(match index {
            Some(i) => format!("{name}[{i}]"),
            None => name.to_string(),
        });
    }

    fn pop(&mut self) {
        self.0.pop();
    }

    fn render(&self) -> String {
        self.0.join(" > ")
    }
}

/// Checks one node without descending into its children.
fn check_node(node: &DocumentNode, path: &Breadcrumb) -> Result<(), StructuralError> {
    let error: fn(String) -> StructuralError = match node {
        DocumentNode::Leaf { value: None, .. } => |path| StructuralError::MissingValue { path },
        DocumentNode::Container { tag, .. } if tag.is_empty() => {
            |path| StructuralError::MissingTag { path }
        }
        DocumentNode::Container { children, .. } if children.is_empty() => {
            |path| StructuralError::EmptyChildren { path }
        }
        _ => return Ok(()),
    };
    Err(error(path.render()))
}

fn validate_node(
    node: &DocumentNode,
    index: Option<usize>,
    path: &mut Breadcrumb,
) -> Result<(), StructuralError> {
    path.push(node, index);
    check_node(node, path)?;
    for (i, child) in node.children().iter().enumerate() {
        validate_node(child, Some(i), path)?;
    }
    path.pop();
    Ok(())
}

struct Writer<'o> {
    options: &'o ParseOptions,
    out: String,
    path: Breadcrumb,
}

impl Writer<'_> {
    fn text<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.options.escape_html {
            html_escape::encode_text(value)
        } else {
            Cow::Borrowed(value)
        }
    }

    fn attr_value<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.options.escape_html {
            html_escape::encode_double_quoted_attribute(value)
        } else {
            Cow::Borrowed(value)
        }
    }

    fn write_attrs(&mut self, attrs: &Attributes) {
        for (key, value) in attrs.iter() {
            let value = self.attr_value(value);
            self.out.push(' ');
            self.out.push_str(key);
            self.out.push_str("=\"");
            self.out.push_str(&value);
            self.out.push('"');
        }
    }

    fn write_open(&mut self, tag: &str, attrs: &Attributes) {
        self.out.push('<');
        self.out.push_str(tag);
        self.write_attrs(attrs);
        self.out.push('>');
    }

    fn write_close(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    fn write_node(
        &mut self,
        node: &DocumentNode,
        index: Option<usize>,
    ) -> Result<(), StructuralError> {
        self.path.push(node, index);
        check_node(node, &self.path)?;

        match node {
            DocumentNode::Leaf { tag, value, attrs } => {
                let value = self.text(value.as_deref().unwrap_or_default());
                match tag {
                    None => self.out.push_str(&value),
                    Some(tag) => {
                        self.write_open(tag, attrs);
                        self.out.push_str(&value);
                        self.write_close(tag);
                    }
                }
            }
            DocumentNode::Container {
                tag,
                children,
                attrs,
            } => {
                self.write_open(tag, attrs);
                for (i, child) in children.iter().enumerate() {
                    self.write_node(child, Some(i))?;
                }
                self.write_close(tag);
            }
        }

        self.path.pop();
        Ok(())
    }
}

impl DocumentNode {
    /// Checks the whole tree for nodes that cannot be rendered.
    pub fn validate(&self) -> Result<(), StructuralError> {
        validate_node(self, None, &mut Breadcrumb::default())
    }

    /// Renders the tree as HTML with default options.
    pub fn to_markup(&self) -> Result<String, StructuralError> {
        render(self)
    }
}

/// Renders `node` as HTML, values verbatim.
pub fn render(node: &DocumentNode) -> Result<String, StructuralError> {
    render_with(node, &ParseOptions::default())
}

/// Renders `node` as HTML. The first invalid node aborts the whole render.
pub fn render_with(node: &DocumentNode, options: &ParseOptions) -> Result<String, StructuralError> {
    let mut writer = Writer {
        options,
        out: String::new(),
        path: Breadcrumb::default(),
    };
    writer.write_node(node, None)?;
    Ok(writer.out)
}

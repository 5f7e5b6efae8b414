// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Document tree for XML output.
//!
//! Serializers build a [`Document`] declaratively instead of writing to a
//! string buffer with manual indentation tracking; the tree is rendered in
//! a final pass.
//!
//! # Example
//!
//! ```
//! use sol25_core::xml::document::{line, nest};
//! use sol25_core::docvec;
//!
//! let doc = docvec!["<class>", nest(2, docvec![line(), "<method/>"]), line(), "</class>"];
//! assert_eq!(doc.to_pretty_string(), "<class>\n  <method/>\n</class>");
//! ```

/// Indentation width of nested elements.
pub const INDENT: isize = 2;

/// A pretty-printable document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document<'a> {
    /// A borrowed string literal.
    Str(&'a str),
    /// An owned string.
    String(String),
    /// A newline followed by current indentation.
    Line,
    /// Increase indentation for nested content.
    Nest(isize, Box<Document<'a>>),
    /// A sequence of documents.
    Vec(Vec<Document<'a>>),
}

/// Coerce a value into a `Document`.
pub trait Documentable<'a> {
    fn to_doc(self) -> Document<'a>;
}

impl<'a> Documentable<'a> for &'a str {
    fn to_doc(self) -> Document<'a> {
        Document::Str(self)
    }
}

impl<'a> Documentable<'a> for String {
    fn to_doc(self) -> Document<'a> {
        Document::String(self)
    }
}

impl<'a> Documentable<'a> for Document<'a> {
    fn to_doc(self) -> Document<'a> {
        self
    }
}

impl<'a> Documentable<'a> for Vec<Document<'a>> {
    fn to_doc(self) -> Document<'a> {
        Document::Vec(self)
    }
}

/// Join multiple documents together in a vector.
///
/// Each element is converted to a `Document` via the `Documentable` trait
/// and concatenated with no separator.
///
/// ```
/// use sol25_core::docvec;
///
/// let doc = docvec!["<var", " ", "name=\"x\"/>"];
/// assert_eq!(doc.to_pretty_string(), "<var name=\"x\"/>");
/// ```
#[macro_export]
macro_rules! docvec {
    () => {
        $crate::xml::document::Document::Vec(Vec::new())
    };

    ($first:expr $(,)?) => {
        $crate::xml::document::Document::Vec(
            vec![$crate::xml::document::Documentable::to_doc($first)]
        )
    };

    ($first:expr, $($rest:expr),+ $(,)?) => {
        match $crate::xml::document::Documentable::to_doc($first) {
            $crate::xml::document::Document::Vec(mut vec) => {
                $(
                    vec.push($crate::xml::document::Documentable::to_doc($rest));
                )*
                $crate::xml::document::Document::Vec(vec)
            },
            first => {
                $crate::xml::document::Document::Vec(
                    vec![first, $($crate::xml::document::Documentable::to_doc($rest)),+]
                )
            }
        }
    };
}

/// Creates a `Line` document: a mandatory newline followed by indentation.
#[must_use]
pub fn line() -> Document<'static> {
    Document::Line
}

/// Creates a `Nest` document that indents the inner document.
#[must_use]
pub fn nest(indent: isize, doc: Document<'_>) -> Document<'_> {
    Document::Nest(indent, Box::new(doc))
}

/// Concatenates documents without any separator.
#[must_use]
pub fn concat<'a>(docs: impl IntoIterator<Item = Document<'a>>) -> Document<'a> {
    Document::Vec(docs.into_iter().collect())
}

impl Document<'_> {
    /// Renders the document to a string.
    #[must_use]
    pub fn to_pretty_string(&self) -> String {
        let mut output = String::new();
        self.render_to(&mut output, 0);
        output
    }

    fn render_to(&self, output: &mut String, indent: isize) {
        stacker::maybe_grow(32 * 1024, 256 * 1024, || self.render_node(output, indent));
    }

    fn render_node(&self, output: &mut String, indent: isize) {
        match self {
            Document::Str(s) => output.push_str(s),
            Document::String(s) => output.push_str(s),
            Document::Line => {
                output.push('\n');
                write_indent(output, indent);
            }
            Document::Nest(extra, doc) => {
                doc.render_to(output, indent + extra);
            }
            Document::Vec(docs) => {
                for doc in docs {
                    doc.render_to(output, indent);
                }
            }
        }
    }
}

fn write_indent(output: &mut String, indent: isize) {
    for _ in 0..indent {
        output.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_and_string_documents() {
        assert_eq!(Document::Str("hello").to_pretty_string(), "hello");
        assert_eq!(Document::String("world".to_string()).to_pretty_string(), "world");
        assert_eq!(docvec![].to_pretty_string(), "");
    }

    #[test]
    fn nested_nest() {
        let doc = nest(
            INDENT,
            docvec![
                line(),
                "<outer>",
                nest(INDENT, docvec![line(), "<inner/>"]),
                line(),
                "</outer>",
            ],
        );
        assert_eq!(
            doc.to_pretty_string(),
            "\n  <outer>\n    <inner/>\n  </outer>"
        );
    }

    #[test]
    fn docvec_macro_empty_and_single() {
        assert_eq!(docvec![].to_pretty_string(), "");
        assert_eq!(docvec!["only"].to_pretty_string(), "only");
    }

    #[test]
    fn docvec_flattens_leading_vec() {
        let inner = docvec!["a", "b"];
        let doc = docvec![inner, "c"];
        assert_eq!(doc.to_pretty_string(), "abc");
        let Document::Vec(items) = doc else {
            panic!("Expected Vec");
        };
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn concat_and_usize() {
        let doc = concat([Document::Str("order=\""), Document::String("3".to_string()), Document::Str("\"")]);
        assert_eq!(doc.to_pretty_string(), "order=\"3\"");
    }
}

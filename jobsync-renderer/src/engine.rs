//! Structural XML editing: locate element text spans, then splice new values in.
//!
//! The document is never re-serialized. [`locate`] walks the event stream once,
//! recording the byte range of each target element's content; [`splice`] copies
//! every byte outside those ranges verbatim. Formatting, comments, attribute
//! quoting and the XML declaration therefore survive untouched.

use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::TemplateError;
use crate::field::TemplateField;

/// Byte range of one target element inside the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: usize,
    pub end: usize,
    /// `true` when the element was written as `<name/>`; the span then covers
    /// the whole tag rather than its (empty) content.
    pub self_closing: bool,
    /// Unescaped text currently held by the element.
    pub text: String,
}

struct OpenTarget {
    field: TemplateField,
    content_start: usize,
    text: String,
}

/// Find every field in `fields` within `xml`.
///
/// Returns one `(field, span)` per requested field, ordered by position in the
/// document. Each field must occur exactly once and hold only text.
pub(crate) fn locate(
    xml: &str,
    fields: &[TemplateField],
) -> Result<Vec<(TemplateField, Span)>, TemplateError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<String> = Vec::new();
    let mut open: Option<OpenTarget> = None;
    let mut found: Vec<(TemplateField, Span)> = Vec::with_capacity(fields.len());
    let mut saw_root = false;

    loop {
        let before = reader.buffer_position();
        let event = reader
            .read_event()
            .map_err(|source| TemplateError::Malformed { position: before, source })?;
        match event {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if let Some(target) = &open {
                    return Err(not_a_leaf(target.field, name));
                }
                saw_root = true;
                stack.push(name);
                if let Some(field) = match_field(&stack, fields) {
                    ensure_unseen(&found, field)?;
                    open = Some(OpenTarget {
                        field,
                        content_start: reader.buffer_position(),
                        text: String::new(),
                    });
                }
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if let Some(target) = &open {
                    return Err(not_a_leaf(target.field, name));
                }
                saw_root = true;
                stack.push(name);
                if let Some(field) = match_field(&stack, fields) {
                    ensure_unseen(&found, field)?;
                    let end = reader.buffer_position();
                    found.push((
                        field,
                        Span {
                            start: tag_start(xml, end),
                            end,
                            self_closing: true,
                            text: String::new(),
                        },
                    ));
                }
                stack.pop();
            }
            Event::Text(e) => {
                if let Some(target) = open.as_mut() {
                    let text = e
                        .unescape()
                        .map_err(|source| TemplateError::Malformed { position: before, source })?;
                    target.text.push_str(&text);
                }
            }
            Event::CData(e) => {
                if let Some(target) = open.as_mut() {
                    target.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::End(_) => {
                if let Some(target) = open.take() {
                    found.push((
                        target.field,
                        Span {
                            start: target.content_start,
                            end: tag_start(xml, reader.buffer_position()),
                            self_closing: false,
                            text: target.text,
                        },
                    ));
                }
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() || !saw_root {
        return Err(TemplateError::Truncated { open: stack.len() });
    }

    for field in fields {
        if !found.iter().any(|(f, _)| f == field) {
            return Err(TemplateError::MissingField {
                field: *field,
                path: field.display_path(),
            });
        }
    }

    found.sort_by_key(|(_, span)| span.start);
    Ok(found)
}

/// Replace each span's content with its (escaped) value.
///
/// `edits` must be sorted by `span.start` and non-overlapping, as returned by
/// [`locate`].
pub(crate) fn splice<'a>(xml: &str, edits: impl IntoIterator<Item = (&'a Span, &'a str)>) -> String {
    let mut out = String::with_capacity(xml.len() + 256);
    let mut cursor = 0;
    for (span, value) in edits {
        out.push_str(&xml[cursor..span.start]);
        if span.self_closing {
            // `<name attr="x"/>` becomes `<name attr="x">value</name>`.
            let tag = &xml[span.start..span.end];
            let open_tag = tag.trim_end_matches('>').trim_end_matches('/').trim_end();
            let name = open_tag
                .trim_start_matches('<')
                .split(|c: char| c.is_whitespace())
                .next()
                .unwrap_or_default();
            out.push_str(open_tag);
            out.push('>');
            out.push_str(&escape(value));
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        } else {
            out.push_str(&escape(value));
        }
        cursor = span.end;
    }
    out.push_str(&xml[cursor..]);
    out
}

/// Offset of the `<` opening the tag that ends just before `tag_end`.
///
/// The reader may already have consumed that `<` together with preceding
/// text, so positions taken before an event are not reliable tag starts.
fn tag_start(xml: &str, tag_end: usize) -> usize {
    xml[..tag_end].rfind('<').unwrap_or(tag_end)
}

fn match_field(stack: &[String], fields: &[TemplateField]) -> Option<TemplateField> {
    fields.iter().copied().find(|field| {
        let path = field.path();
        path.len() == stack.len() && path.iter().zip(stack).all(|(want, got)| *want == got)
    })
}

fn ensure_unseen(found: &[(TemplateField, Span)], field: TemplateField) -> Result<(), TemplateError> {
    if found.iter().any(|(f, _)| *f == field) {
        return Err(TemplateError::DuplicateField {
            field,
            path: field.display_path(),
        });
    }
    Ok(())
}

fn not_a_leaf(field: TemplateField, child: String) -> TemplateError {
    TemplateError::NotALeaf {
        field,
        path: field.display_path(),
        child,
    }
}

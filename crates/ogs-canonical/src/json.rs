//! Canonical JSON text rendered from the event stream.

use ogs_core::{json_quote, Event, Node};

use crate::stream::stream;

/// Rendering configuration for [`JsonCollector`].
#[derive(Debug, Clone)]
pub struct JsonProps {
    /// Spaces per indentation level; 0 renders compact.
    pub indent: usize,
    /// Line separator, used only when `indent > 0`.
    pub newline: String,
}

impl JsonProps {
    pub fn indented(indent: usize) -> Self {
        Self {
            indent,
            ..Self::default()
        }
    }
}

impl Default for JsonProps {
    fn default() -> Self {
        Self {
            indent: 0,
            newline: "\n".to_string(),
        }
    }
}

/// Folds traversal events into canonical, optionally pretty-printed JSON
/// text, pushed incrementally to the output sink.
///
/// State is one pending separator and one element count per open container
/// plus a single pending attribute label; there is no full-document buffer.
/// The separator and count stacks return to a single empty frame once a
/// balanced event sequence has been consumed. A collector that has seen a
/// sink panic is in an inconsistent state and must not be reused.
pub struct JsonCollector<F> {
    output: F,
    indent: String,
    commas: Vec<&'static str>,
    elements: Vec<usize>,
    next_line: String,
    attribute: Option<String>,
}

impl<F: FnMut(&str)> JsonCollector<F> {
    /// Compact collector writing to `output`.
    pub fn new(output: F) -> Self {
        Self::with_props(output, JsonProps::default())
    }

    pub fn with_props(output: F, props: JsonProps) -> Self {
        let next_line = if props.indent > 0 {
            props.newline.clone()
        } else {
            String::new()
        };
        Self {
            output,
            indent: " ".repeat(props.indent),
            commas: vec![""],
            elements: vec![0],
            next_line,
            attribute: None,
        }
    }

    /// Fold one event into the output.
    pub fn append(&mut self, event: &Event) {
        match event {
            Event::SequenceStart { .. } => self.open('['),
            Event::SequenceEnd { .. } => self.close(']'),
            Event::MapStart { .. } => self.open('{'),
            Event::MapEnd { .. } => self.close('}'),
            Event::Attribute { key, .. } => {
                self.count_element();
                let space = if self.indent.is_empty() { "" } else { " " };
                self.attribute = Some(format!("{}:{}", json_quote(key), space));
            }
            Event::Value { value, .. } => {
                self.count_element();
                let text = format!(
                    "{}{}{}{}",
                    self.comma(),
                    self.suffix(),
                    self.attribute.take().unwrap_or_default(),
                    value
                );
                (self.output)(&text);
                self.arm_comma();
            }
        }
    }

    fn open(&mut self, bracket: char) {
        let text = format!(
            "{}{}{}{}",
            self.comma(),
            self.suffix(),
            self.attribute.take().unwrap_or_default(),
            bracket
        );
        (self.output)(&text);
        self.arm_comma();
        self.commas.push("");
        self.elements.push(0);
    }

    fn close(&mut self, bracket: char) {
        self.commas.pop();
        let text = format!("{}{}", self.suffix(), bracket);
        (self.output)(&text);
        self.elements.pop();
    }

    fn comma(&self) -> &'static str {
        self.commas.last().copied().unwrap_or("")
    }

    /// After the first child at a depth, siblings are comma-separated.
    fn arm_comma(&mut self) {
        if let Some(last) = self.commas.last_mut() {
            *last = ",";
        }
    }

    fn count_element(&mut self) {
        if let Some(count) = self.elements.last_mut() {
            *count += 1;
        }
    }

    /// Newline and indentation owed before the next token, empty for the
    /// first element at the current depth or when rendering compact.
    fn suffix(&self) -> String {
        if self.elements.last().copied().unwrap_or(0) == 0 {
            return String::new();
        }
        let depth = self.commas.len().saturating_sub(1);
        format!("{}{}", self.next_line, self.indent.repeat(depth))
    }
}

/// Render a graph as compact canonical JSON text.
pub fn to_canonical_string(node: &Node) -> String {
    to_canonical_string_with(node, &JsonProps::default())
}

/// Render a graph as canonical JSON text with explicit rendering props.
pub fn to_canonical_string_with(node: &Node, props: &JsonProps) -> String {
    let mut out = String::new();
    let mut collector = JsonCollector::with_props(|chunk: &str| out.push_str(chunk), props.clone());
    stream(node, &mut |event| collector.append(&event));
    drop(collector);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ogs_core::{EncodedScalar, Scalar};

    #[test]
    fn test_balanced_stream_returns_to_single_frame() {
        let mut out = String::new();
        let mut collector = JsonCollector::new(|chunk: &str| out.push_str(chunk));
        collector.append(&Event::MapStart { path: vec![] });
        collector.append(&Event::Attribute {
            key: "a".to_string(),
            path: vec![],
        });
        collector.append(&Event::Value {
            value: EncodedScalar::json(Scalar::from(1i64)),
            path: vec![],
        });
        collector.append(&Event::MapEnd { path: vec![] });
        assert_eq!(collector.commas.len(), 1);
        assert_eq!(collector.elements.len(), 1);
        drop(collector);
        assert_eq!(out, "{\"a\":1}");
    }

    #[test]
    fn test_attribute_label_attaches_to_next_container() {
        let mut out = String::new();
        let mut collector = JsonCollector::new(|chunk: &str| out.push_str(chunk));
        collector.append(&Event::MapStart { path: vec![] });
        collector.append(&Event::Attribute {
            key: "list".to_string(),
            path: vec![],
        });
        collector.append(&Event::SequenceStart { path: vec![] });
        collector.append(&Event::SequenceEnd { path: vec![] });
        collector.append(&Event::MapEnd { path: vec![] });
        drop(collector);
        assert_eq!(out, "{\"list\":[]}");
    }
}

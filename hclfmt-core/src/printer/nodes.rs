//! Node rendering

use super::Diagnostic;
use super::config::PrintConfig;
use crate::ast::{ListType, Node, ObjectItem, ObjectList, ObjectType};

const BLANK: char = ' ';
const NEWLINE: char = '\n';
const TAB: char = '\t';

pub(super) struct Printer {
    indent_prefix: String,
    diagnostics: Vec<Diagnostic>,
}

impl Printer {
    pub(super) fn new(config: &PrintConfig) -> Self {
        Self {
            indent_prefix: config.indent_string(),
            diagnostics: Vec::new(),
        }
    }

    pub(super) fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub(super) fn print_node(&mut self, node: &Node) -> String {
        match node {
            Node::ObjectList(list) => self.print_object_list(list),
            Node::ObjectKey(key) => key.token.text.clone(),
            Node::ObjectItem(item) => self.print_object_item(item),
            Node::Literal(lit) => lit.token.text.clone(),
            Node::List(list) => self.print_list(list),
            Node::Object(obj) => self.print_object(obj),
            other => {
                self.report(other);
                String::new()
            }
        }
    }

    fn print_object_list(&mut self, list: &ObjectList) -> String {
        let mut buf = String::new();
        for (i, item) in list.items.iter().enumerate() {
            if i > 0 {
                buf.push(NEWLINE);
                buf.push(NEWLINE);
            }
            buf.push_str(&self.print_object_item(item));
        }
        buf
    }

    fn print_object_item(&mut self, item: &ObjectItem) -> String {
        let mut buf = String::new();
        for key in &item.keys {
            buf.push_str(&key.token.text);
            buf.push(BLANK);
        }
        buf.push('=');
        buf.push(BLANK);

        buf.push_str(&self.print_node(&item.val));
        buf
    }

    fn print_object(&mut self, obj: &ObjectType) -> String {
        let mut buf = String::from("{");
        buf.push(NEWLINE);

        for item in &obj.list.items {
            let rendered = self.print_object_item(item);
            buf.push_str(&self.indent(&rendered));
            buf.push(NEWLINE);
        }

        buf.push('}');
        buf
    }

    fn print_list(&mut self, list: &ListType) -> String {
        let mut buf = String::from("[");
        let last = list.list.len().saturating_sub(1);

        for (i, elem) in list.list.iter().enumerate() {
            // Elements the author put on their own line stay there
            let own_line = elem.pos().line != list.lbrack.line;
            if own_line {
                buf.push(NEWLINE);
                buf.push(TAB);
            }

            buf.push_str(&self.print_node(elem));

            if i != last {
                buf.push(',');
                buf.push(BLANK);
            } else if own_line {
                buf.push(',');
                buf.push(NEWLINE);
            }
        }

        buf.push(']');
        buf
    }

    /// Prefix every line of `text` with one indentation level.
    /// Nothing is inserted before a newline, so blank lines and the
    /// position after a final newline stay empty.
    fn indent(&self, text: &str) -> String {
        let mut res = String::with_capacity(text.len() + self.indent_prefix.len());
        let mut bol = true;
        for c in text.chars() {
            if bol && c != NEWLINE {
                res.push_str(&self.indent_prefix);
            }
            res.push(c);
            bol = c == NEWLINE;
        }
        res
    }

    fn report(&mut self, node: &Node) {
        let diagnostic = Diagnostic::unsupported(node);
        log::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

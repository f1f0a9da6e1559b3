//! Syntax tree for HCL source
//! Keeps the raw token text and the position of every node

use std::fmt;

/// Source location of a token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pos {
    /// Byte offset from the start of the source
    pub offset: usize,
    /// 1-based line number
    pub line: usize,
    /// 1-based column number
    pub column: usize,
}

impl Pos {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Token kinds that can appear as keys or literal values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    String,
    Number,
    Float,
    Bool,
}

/// A token with its exact source text and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: Pos,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: Pos) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }
}

/// Ordered list of items; the root of a file and the body of every object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectList {
    pub items: Vec<ObjectItem>,
}

impl ObjectList {
    pub fn new(items: Vec<ObjectItem>) -> Self {
        Self { items }
    }

    pub fn pos(&self) -> Pos {
        self.items.first().map(ObjectItem::pos).unwrap_or_default()
    }
}

/// One key of an item, e.g. `resource` or `"aws_instance"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectKey {
    pub token: Token,
}

impl ObjectKey {
    pub fn new(token: Token) -> Self {
        Self { token }
    }
}

/// `key [key ...] = value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectItem {
    pub keys: Vec<ObjectKey>,
    /// Position of `=`, absent for `name { ... }`
    pub assign: Option<Pos>,
    pub val: Box<Node>,
}

impl ObjectItem {
    pub fn new(keys: Vec<ObjectKey>, assign: Option<Pos>, val: Node) -> Self {
        Self {
            keys,
            assign,
            val: Box::new(val),
        }
    }

    pub fn pos(&self) -> Pos {
        self.keys
            .first()
            .map(|k| k.token.pos)
            .unwrap_or_else(|| self.val.pos())
    }
}

/// String, number, float or bool literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralType {
    pub token: Token,
}

impl LiteralType {
    pub fn new(token: Token) -> Self {
        Self { token }
    }
}

/// `[a, b, c]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListType {
    pub lbrack: Pos,
    pub rbrack: Pos,
    pub list: Vec<Node>,
}

/// `{ ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    pub lbrace: Pos,
    pub rbrace: Pos,
    pub list: ObjectList,
}

/// A `#`, `//` or `/* */` comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub start: Pos,
    pub text: String,
}

/// A parsed file: the top-level list plus every comment found in the source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct File {
    pub node: ObjectList,
    /// Comments in source order
    pub comments: Vec<Comment>,
}

/// Node kinds, used for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    ObjectList,
    ObjectKey,
    ObjectItem,
    Literal,
    List,
    Object,
    Comment,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::ObjectList => "object list",
            NodeKind::ObjectKey => "object key",
            NodeKind::ObjectItem => "object item",
            NodeKind::Literal => "literal",
            NodeKind::List => "list",
            NodeKind::Object => "object",
            NodeKind::Comment => "comment",
        };
        f.write_str(name)
    }
}

/// Any node of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Node {
    ObjectList(ObjectList),
    ObjectKey(ObjectKey),
    ObjectItem(ObjectItem),
    Literal(LiteralType),
    List(ListType),
    Object(ObjectType),
    Comment(Comment),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::ObjectList(_) => NodeKind::ObjectList,
            Node::ObjectKey(_) => NodeKind::ObjectKey,
            Node::ObjectItem(_) => NodeKind::ObjectItem,
            Node::Literal(_) => NodeKind::Literal,
            Node::List(_) => NodeKind::List,
            Node::Object(_) => NodeKind::Object,
            Node::Comment(_) => NodeKind::Comment,
        }
    }

    /// Position of the token the node starts with
    pub fn pos(&self) -> Pos {
        match self {
            Node::ObjectList(list) => list.pos(),
            Node::ObjectKey(key) => key.token.pos,
            Node::ObjectItem(item) => item.pos(),
            Node::Literal(lit) => lit.token.pos,
            Node::List(list) => list.lbrack,
            Node::Object(obj) => obj.lbrace,
            Node::Comment(comment) => comment.start,
        }
    }
}

impl From<ObjectList> for Node {
    fn from(list: ObjectList) -> Self {
        Node::ObjectList(list)
    }
}

impl From<ObjectItem> for Node {
    fn from(item: ObjectItem) -> Self {
        Node::ObjectItem(item)
    }
}

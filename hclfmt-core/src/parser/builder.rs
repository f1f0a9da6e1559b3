//! Build the syntax tree from the pest parse tree

use pest::iterators::{Pair, Pairs};

use super::{ParseError, Rule};
use crate::ast::{
    Comment, ListType, LiteralType, Node, ObjectItem, ObjectKey, ObjectList, ObjectType, Pos,
    Token, TokenKind,
};

/// Every comment of the parse tree, in source order
pub(super) fn collect_comments(pairs: Pairs<'_, Rule>) -> Vec<Comment> {
    pairs
        .flatten()
        .filter(|pair| pair.as_rule() == Rule::COMMENT)
        .map(|pair| Comment {
            start: pair_pos(&pair),
            text: pair.as_str().to_string(),
        })
        .collect()
}

/// Inner pairs without the comments pest interleaves between tokens
fn tokens(pair: Pair<'_, Rule>) -> impl Iterator<Item = Pair<'_, Rule>> {
    pair.into_inner().filter(|inner| inner.as_rule() != Rule::COMMENT)
}

/// Build the top-level object list from the `file` rule
pub(super) fn build_file(pairs: Pairs<'_, Rule>) -> Result<ObjectList, ParseError> {
    for pair in pairs {
        if pair.as_rule() == Rule::file {
            for inner in pair.into_inner() {
                if inner.as_rule() == Rule::object_list {
                    return build_object_list(inner);
                }
            }
        }
    }
    Ok(ObjectList::default())
}

fn build_object_list(pair: Pair<'_, Rule>) -> Result<ObjectList, ParseError> {
    let items = tokens(pair)
        .map(build_object_item)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ObjectList::new(items))
}

fn build_object_item(pair: Pair<'_, Rule>) -> Result<ObjectItem, ParseError> {
    let item_pos = pair_pos(&pair);
    let mut keys = Vec::new();
    let mut assign = None;
    let mut val = None;

    for inner in tokens(pair) {
        match inner.as_rule() {
            Rule::object_key => keys.push(build_object_key(inner)?),
            Rule::assign => assign = Some(pair_pos(&inner)),
            _ => val = Some(build_value(inner)?),
        }
    }

    let val = val.ok_or_else(|| malformed(item_pos, "object item without a value"))?;
    Ok(ObjectItem::new(keys, assign, val))
}

fn build_object_key(pair: Pair<'_, Rule>) -> Result<ObjectKey, ParseError> {
    let pos = pair_pos(&pair);
    let inner = tokens(pair)
        .next()
        .ok_or_else(|| malformed(pos, "empty object key"))?;

    let kind = match inner.as_rule() {
        Rule::identifier => TokenKind::Ident,
        Rule::string => TokenKind::String,
        _ => return Err(malformed(pos, "unexpected object key")),
    };
    Ok(ObjectKey::new(token(kind, &inner)))
}

fn build_value(pair: Pair<'_, Rule>) -> Result<Node, ParseError> {
    let pos = pair_pos(&pair);
    match pair.as_rule() {
        Rule::object => build_object(pair).map(Node::Object),
        Rule::list => build_list(pair).map(Node::List),
        Rule::literal => build_literal(pair).map(Node::Literal),
        _ => Err(malformed(pos, "unexpected value")),
    }
}

fn build_object(pair: Pair<'_, Rule>) -> Result<ObjectType, ParseError> {
    let lbrace = pair_pos(&pair);
    let mut rbrace = lbrace;
    let mut list = ObjectList::default();

    for inner in tokens(pair) {
        match inner.as_rule() {
            Rule::object_list => list = build_object_list(inner)?,
            Rule::rbrace => rbrace = pair_pos(&inner),
            _ => return Err(malformed(pair_pos(&inner), "unexpected token in object")),
        }
    }

    Ok(ObjectType {
        lbrace,
        rbrace,
        list,
    })
}

fn build_list(pair: Pair<'_, Rule>) -> Result<ListType, ParseError> {
    let lbrack = pair_pos(&pair);
    let mut rbrack = lbrack;
    let mut list = Vec::new();

    for inner in tokens(pair) {
        match inner.as_rule() {
            Rule::rbrack => rbrack = pair_pos(&inner),
            _ => list.push(build_value(inner)?),
        }
    }

    Ok(ListType {
        lbrack,
        rbrack,
        list,
    })
}

fn build_literal(pair: Pair<'_, Rule>) -> Result<LiteralType, ParseError> {
    let pos = pair_pos(&pair);
    let inner = tokens(pair)
        .next()
        .ok_or_else(|| malformed(pos, "empty literal"))?;

    let kind = match inner.as_rule() {
        Rule::string => TokenKind::String,
        Rule::float => TokenKind::Float,
        Rule::number => TokenKind::Number,
        Rule::boolean => TokenKind::Bool,
        _ => return Err(malformed(pos, "unexpected literal")),
    };
    Ok(LiteralType::new(token(kind, &inner)))
}

fn token(kind: TokenKind, pair: &Pair<'_, Rule>) -> Token {
    Token::new(kind, pair.as_str(), pair_pos(pair))
}

fn pair_pos(pair: &Pair<'_, Rule>) -> Pos {
    let start = pair.as_span().start_pos();
    let (line, column) = start.line_col();
    Pos::new(start.pos(), line, column)
}

fn malformed(pos: Pos, message: &str) -> ParseError {
    ParseError {
        message: message.to_string(),
        line: pos.line,
        column: pos.column,
    }
}

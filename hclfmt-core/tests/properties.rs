use hclfmt_core::ast::{
    Comment, ListType, LiteralType, Node, ObjectItem, ObjectKey, ObjectList, Pos, Token, TokenKind,
};
use hclfmt_core::printer::{self, PrintConfig};
use hclfmt_core::{format, parser};

const SAMPLE: &str = r#"
variable "region" {
  default = "us-east-1"
}

resource "aws_instance" "web" {
  ami           = "ami-123456"
  count         = 2
  tags = {
      Name = "${var.name}-web"
      Env  = "prod"
  }
  security_groups = ["default", "web"]
  ports = [
    80,
    443,
  ]
}

enabled = true
"#;

fn print_source(source: &str, config: &PrintConfig) -> String {
    let tree = parser::parse(source).unwrap();
    printer::print(&Node::ObjectList(tree), config).text
}

#[test]
fn test_example_from_readme() {
    let source = "foo = \"bar\"\nbaz = [1, 2]\n";
    assert_eq!(
        print_source(source, &PrintConfig::default()),
        "foo = \"bar\"\n\nbaz = [1, 2]"
    );
}

#[test]
fn test_sample_layout() {
    let expected = "variable \"region\" = {\n\
                    \tdefault = \"us-east-1\"\n\
                    }\n\
                    \n\
                    resource \"aws_instance\" \"web\" = {\n\
                    \tami = \"ami-123456\"\n\
                    \tcount = 2\n\
                    \ttags = {\n\
                    \t\tName = \"${var.name}-web\"\n\
                    \t\tEnv = \"prod\"\n\
                    \t}\n\
                    \tsecurity_groups = [\"default\", \"web\"]\n\
                    \tports = [\n\
                    \t\t80, \n\
                    \t\t443,\n\
                    \t]\n\
                    }\n\
                    \n\
                    enabled = true\n";
    assert_eq!(format(SAMPLE, &PrintConfig::default()).unwrap(), expected);
}

#[test]
fn test_idempotence() {
    for config in [PrintConfig::default(), PrintConfig::new(3)] {
        let first = format(SAMPLE, &config).unwrap();
        let second = format(&first, &config).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_objects_sharing_the_bracket_line_settle_after_two_passes() {
    // The first pass moves the second object's brace to a new line, which
    // the line rule then reads as an own-line element
    let config = PrintConfig::default();
    let first = format("a = [{ b = 1 }, { b = 2 }]", &config).unwrap();
    assert_eq!(first, "a = [{\n\tb = 1\n}, {\n\tb = 2\n}]\n");

    let second = format(&first, &config).unwrap();
    assert_eq!(second, "a = [{\n\tb = 1\n}, \n\t{\n\tb = 2\n},\n]\n");

    let third = format(&second, &config).unwrap();
    assert_eq!(second, third);
}

#[test]
fn test_commented_source_is_rejected() {
    let source = "# owner: platform\nregion = \"eu-west-1\"\n";
    assert!(format(source, &PrintConfig::default()).is_err());

    let file = parser::parse_file(source).unwrap();
    assert_eq!(file.comments.len(), 1);
    assert_eq!(file.comments[0].text, "# owner: platform");
}

#[test]
fn test_key_preservation() {
    let output = print_source("a \"b\" c { d = 1 }", &PrintConfig::default());
    assert!(output.starts_with("a \"b\" c = {"));
}

#[test]
fn test_block_indentation_depth() {
    let config = PrintConfig::new(1);
    let output = print_source("a { b { c { d = 1 } } }", &config);
    let unit = config.indent_string();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "a = {");
    assert_eq!(lines[1], format!("{unit}b = {{"));
    assert_eq!(lines[2], format!("{unit}{unit}c = {{"));
    assert_eq!(lines[3], format!("{unit}{unit}{unit}d = 1"));
    assert_eq!(lines[4], format!("{unit}{unit}}}"));
    assert_eq!(lines[5], format!("{unit}}}"));
    assert_eq!(lines[6], "}");
}

#[test]
fn test_top_level_separation() {
    let output = print_source("a = 1\nb = 2\nc = 3\nd = 4", &PrintConfig::default());
    assert_eq!(output.matches("\n\n").count(), 3);
    assert!(!output.ends_with('\n'));
    assert!(!output.contains("\n\n\n"));
}

#[test]
fn test_unknown_variant_resilience() {
    let pos = |line| Pos::new(0, line, 1);
    let lit = |text: &str, line| {
        Node::Literal(LiteralType::new(Token::new(TokenKind::Number, text, pos(line))))
    };
    let key = |text: &str, line| ObjectKey::new(Token::new(TokenKind::Ident, text, pos(line)));

    let list = Node::List(ListType {
        lbrack: pos(2),
        rbrack: pos(2),
        list: vec![
            lit("1", 2),
            Node::Comment(Comment {
                start: pos(2),
                text: "/* skipped */".to_string(),
            }),
            lit("3", 2),
        ],
    });
    let root = Node::ObjectList(ObjectList::new(vec![
        ObjectItem::new(vec![key("a", 1)], Some(pos(1)), lit("1", 1)),
        ObjectItem::new(vec![key("b", 2)], Some(pos(2)), list),
    ]));

    let printed = printer::print(&root, &PrintConfig::default());
    assert_eq!(printed.text, "a = 1\n\nb = [1, , 3]");
    assert_eq!(printed.diagnostics.len(), 1);
}

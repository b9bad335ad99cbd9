use crate::config::Config;
use crate::error::{Result, RouteError};
use crate::syntax::{NodeKind, SyntaxNode};
use tree_sitter::{Node, Parser};

/// Parses Go source with tree-sitter and lowers the concrete tree into a
/// [`SyntaxNode`].
pub struct GoParser {
    parser: Parser,
    max_nesting: usize,
}

impl GoParser {
    pub fn new() -> Result<Self> {
        Self::with_max_nesting(Config::get().max_nesting)
    }

    /// Files nesting deeper than `max_nesting` syntax levels are rejected
    /// with [`RouteError::TooDeep`].
    pub fn with_max_nesting(max_nesting: usize) -> Result<Self> {
        let mut parser = Parser::new();
        let language = tree_sitter_go::LANGUAGE;
        parser.set_language(&language.into())?;
        Ok(Self {
            parser,
            max_nesting,
        })
    }

    /// Parses one file. Any ERROR or MISSING node rejects the whole file; no
    /// partial tree is returned.
    pub fn parse(&mut self, source: &str) -> Result<SyntaxNode> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or(RouteError::Parse { line: 1 })?;
        let root = tree.root_node();
        if root.has_error() {
            let line = first_error_line(root).unwrap_or_else(|| line_of(root));
            return Err(RouteError::Parse { line });
        }
        Lowerer {
            source,
            limit: self.max_nesting,
            depth: 0,
        }
        .lower(root)
    }
}

/// Recursive lowering with a depth budget, so the lowered tree (and every
/// later recursive pass over it) stays within `limit` levels.
struct Lowerer<'s> {
    source: &'s str,
    limit: usize,
    depth: usize,
}

impl Lowerer<'_> {
    fn lower(&mut self, node: Node<'_>) -> Result<SyntaxNode> {
        let line = line_of(node);
        if self.depth >= self.limit {
            return Err(RouteError::TooDeep {
                line,
                limit: self.limit,
            });
        }
        self.depth += 1;
        let kind = self.lower_kind(node);
        self.depth -= 1;
        Ok(SyntaxNode::new(line, kind?))
    }

    fn lower_kind(&mut self, node: Node<'_>) -> Result<NodeKind> {
        let kind = match node.kind() {
            "source_file" => NodeKind::File {
                decls: self.lower_all(named_children(node))?,
            },
            "function_declaration" | "method_declaration" => NodeKind::FunctionDeclaration {
                name: node
                    .child_by_field_name("name")
                    .map(|name| self.text(name))
                    .unwrap_or_default(),
                body: self.lower_field(node, "body")?,
            },
            // Go case clauses are implicit blocks.
            "block" | "expression_case" | "type_case" | "default_case" | "communication_case" => {
                NodeKind::Block {
                    stmts: self.statements(node)?,
                }
            }
            "if_statement" => match node.child_by_field_name("consequence") {
                Some(body) => NodeKind::If {
                    init: self.lower_field(node, "initializer")?,
                    cond: self.lower_field(node, "condition")?,
                    body: Box::new(self.lower(body)?),
                    alternative: self.lower_field(node, "alternative")?,
                },
                None => self.other(node)?,
            },
            "for_statement" => self.lower_for(node)?,
            "short_var_declaration" | "assignment_statement" => NodeKind::Assignment {
                lhs: self.expression_list(node.child_by_field_name("left"))?,
                rhs: self.expression_list(node.child_by_field_name("right"))?,
            },
            "expression_statement" => match named_children(node).into_iter().next() {
                Some(expr) => NodeKind::ExpressionStatement {
                    expr: Box::new(self.lower(expr)?),
                },
                None => self.other(node)?,
            },
            "call_expression" => match node.child_by_field_name("function") {
                Some(function) => NodeKind::Call {
                    function: Box::new(self.lower(function)?),
                    args: self.call_arguments(node)?,
                },
                None => self.other(node)?,
            },
            "selector_expression" => {
                match (
                    node.child_by_field_name("operand"),
                    node.child_by_field_name("field"),
                ) {
                    (Some(operand), Some(field)) => NodeKind::Selector {
                        operand: Box::new(self.lower(operand)?),
                        field: self.text(field),
                    },
                    _ => self.other(node)?,
                }
            }
            "identifier" => NodeKind::Identifier(self.text(node)),
            "interpreted_string_literal" | "raw_string_literal" => {
                NodeKind::StringLiteral(self.text(node))
            }
            _ => self.other(node)?,
        };
        Ok(kind)
    }

    fn lower_for(&mut self, node: Node<'_>) -> Result<NodeKind> {
        let Some(body_node) = node.child_by_field_name("body") else {
            return self.other(node);
        };
        let body = Box::new(self.lower(body_node)?);
        let clause = named_children(node)
            .into_iter()
            .find(|child| child.id() != body_node.id());

        let kind = match clause {
            Some(clause) if clause.kind() == "for_clause" => NodeKind::For {
                init: self.lower_field(clause, "initializer")?,
                cond: self.lower_field(clause, "condition")?,
                post: self.lower_field(clause, "update")?,
                body,
            },
            Some(clause) if clause.kind() == "range_clause" => {
                let mut left = self
                    .expression_list(clause.child_by_field_name("left"))?
                    .into_iter();
                NodeKind::RangeLoop {
                    key: left.next().map(Box::new),
                    value: left.next().map(Box::new),
                    source: self.lower_field(clause, "right")?,
                    body,
                }
            }
            // `for cond { ... }`
            Some(cond) => NodeKind::For {
                init: None,
                cond: Some(Box::new(self.lower(cond)?)),
                post: None,
                body,
            },
            None => NodeKind::For {
                init: None,
                cond: None,
                post: None,
                body,
            },
        };
        Ok(kind)
    }

    fn other(&mut self, node: Node<'_>) -> Result<NodeKind> {
        Ok(NodeKind::Other {
            children: self.lower_all(named_children(node))?,
        })
    }

    fn lower_field(&mut self, node: Node<'_>, field: &str) -> Result<Option<Box<SyntaxNode>>> {
        node.child_by_field_name(field)
            .map(|child| self.lower(child).map(Box::new))
            .transpose()
    }

    fn lower_all(&mut self, nodes: Vec<Node<'_>>) -> Result<Vec<SyntaxNode>> {
        nodes.into_iter().map(|node| self.lower(node)).collect()
    }

    /// Statements of a block, flattening the grammar's `statement_list` wrapper.
    fn statements(&mut self, node: Node<'_>) -> Result<Vec<SyntaxNode>> {
        let mut out = Vec::new();
        for child in named_children(node) {
            if child.kind() == "statement_list" {
                out.extend(self.lower_all(named_children(child))?);
            } else {
                out.push(self.lower(child)?);
            }
        }
        Ok(out)
    }

    fn expression_list(&mut self, node: Option<Node<'_>>) -> Result<Vec<SyntaxNode>> {
        match node {
            Some(list) if list.kind() == "expression_list" => {
                self.lower_all(named_children(list))
            }
            Some(single) => Ok(vec![self.lower(single)?]),
            None => Ok(Vec::new()),
        }
    }

    fn call_arguments(&mut self, node: Node<'_>) -> Result<Vec<SyntaxNode>> {
        let Some(arg_list) = node.child_by_field_name("arguments") else {
            return Ok(Vec::new());
        };
        self.lower_all(named_children(arg_list))
    }

    fn text(&self, node: Node<'_>) -> String {
        let start = node.start_byte();
        let end = node.end_byte();
        self.source.get(start..end).unwrap_or("").trim().to_string()
    }
}

fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

/// Pre-order search for the first ERROR or MISSING node, descending only into
/// subtrees that contain one.
fn first_error_line(root: Node<'_>) -> Option<usize> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(line_of(node));
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

fn line_of(node: Node<'_>) -> usize {
    node.start_position().row + 1
}

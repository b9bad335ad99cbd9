use crate::model::Route;
use crate::resolver::matchers::{self, SelectorCall};
use crate::resolver::path::join;
use crate::resolver::scope::{GroupMeta, ScopeArena, ScopeId};
use crate::resolver::sink::RouteSink;
use crate::syntax::{NodeKind, SyntaxNode};
use tracing::debug;

/// Depth-first walk over one file, owning its scopes and its route sink.
#[derive(Debug, Default)]
pub struct Walker {
    scopes: ScopeArena,
    sink: RouteSink,
}

impl Walker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(mut self, root: &SyntaxNode) -> Vec<Route> {
        let scope = self.scopes.open(None);
        self.walk(root, scope);
        self.scopes.close(scope);
        self.sink.into_routes()
    }

    fn walk(&mut self, node: &SyntaxNode, scope: ScopeId) {
        match &node.kind {
            NodeKind::File { decls } => {
                for decl in decls {
                    self.walk(decl, scope);
                }
            }
            NodeKind::FunctionDeclaration { body, .. } => {
                self.walk_opt(body.as_deref(), scope);
            }
            NodeKind::Block { stmts } => {
                let inner = self.scopes.open(Some(scope));
                for stmt in stmts {
                    self.walk(stmt, inner);
                }
                self.scopes.close(inner);
            }
            NodeKind::If {
                init,
                cond,
                body,
                alternative,
            } => {
                self.walk_opt(init.as_deref(), scope);
                self.walk_opt(cond.as_deref(), scope);
                self.walk(body, scope);
                self.walk_opt(alternative.as_deref(), scope);
            }
            NodeKind::For {
                init,
                cond,
                post,
                body,
            } => {
                self.walk_opt(init.as_deref(), scope);
                self.walk_opt(cond.as_deref(), scope);
                self.walk_opt(post.as_deref(), scope);
                self.walk(body, scope);
            }
            NodeKind::RangeLoop {
                key,
                value,
                source,
                body,
            } => {
                self.walk_opt(key.as_deref(), scope);
                self.walk_opt(value.as_deref(), scope);
                self.walk_opt(source.as_deref(), scope);
                self.walk(body, scope);
            }
            NodeKind::Assignment { lhs, rhs } => {
                self.bind_groups(lhs, rhs, scope);
                // Function literals on the right may hold further blocks.
                for expr in rhs {
                    self.walk(expr, scope);
                }
            }
            NodeKind::ExpressionStatement { expr } => {
                if let Some(call) = matchers::route_registration_call(expr) {
                    self.record_route(call, expr.line, scope);
                }
                self.walk(expr, scope);
            }
            NodeKind::Call { function, args } => {
                self.walk(function, scope);
                for arg in args {
                    self.walk(arg, scope);
                }
            }
            NodeKind::Selector { operand, .. } => self.walk(operand, scope),
            NodeKind::Identifier(_) | NodeKind::StringLiteral(_) => {}
            NodeKind::Other { children } => {
                for child in children {
                    self.walk(child, scope);
                }
            }
        }
    }

    fn walk_opt(&mut self, node: Option<&SyntaxNode>, scope: ScopeId) {
        if let Some(node) = node {
            self.walk(node, scope);
        }
    }

    /// Every right-hand side of the statement resolves against the scope as it
    /// was before the statement, so `a, b := r.Group("/a"), a.Group("/b")`
    /// sees the outer `a`.
    fn bind_groups(&mut self, lhs: &[SyntaxNode], rhs: &[SyntaxNode], scope: ScopeId) {
        let mut pending = Vec::new();
        for (target, value) in lhs.iter().zip(rhs) {
            let Some(name) = target.identifier() else {
                continue;
            };
            let Some(call) = matchers::group_creation_call(value) else {
                continue;
            };
            let parent = self.receiver_meta(&call, scope);
            let segment = call.literal_path();
            let mut segments = parent.segments;
            segments.push(segment.trim_matches('/').to_string());
            let meta = GroupMeta {
                full_prefix: join(&parent.full_prefix, &segment),
                segments,
            };
            debug!(
                group = name,
                prefix = %meta.full_prefix,
                line = value.line,
                "bound router group"
            );
            pending.push((name, meta));
        }
        for (name, meta) in pending {
            self.scopes.bind(scope, name, meta);
        }
    }

    fn record_route(&mut self, call: SelectorCall<'_>, line: usize, scope: ScopeId) {
        let meta = self.receiver_meta(&call, scope);
        let path = join(&meta.full_prefix, &call.literal_path());
        let groups = meta
            .segments
            .iter()
            .map(|segment| segment.trim_matches('/'))
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        debug!(method = call.method, path = %path, line, "found route");
        self.sink.push(Route {
            method: call.method.to_string(),
            path,
            groups,
            line,
        });
    }

    fn receiver_meta(&self, call: &SelectorCall<'_>, scope: ScopeId) -> GroupMeta {
        call.receiver_name()
            .map(|name| self.scopes.lookup(scope, name))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::Walker;
    use crate::syntax::{NodeKind, SyntaxNode};

    fn node(line: usize, kind: NodeKind) -> SyntaxNode {
        SyntaxNode::new(line, kind)
    }

    fn ident(line: usize, name: &str) -> SyntaxNode {
        node(line, NodeKind::Identifier(name.to_string()))
    }

    fn method_call(line: usize, receiver: &str, method: &str, path: &str) -> SyntaxNode {
        node(
            line,
            NodeKind::Call {
                function: Box::new(node(
                    line,
                    NodeKind::Selector {
                        operand: Box::new(ident(line, receiver)),
                        field: method.to_string(),
                    },
                )),
                args: vec![node(line, NodeKind::StringLiteral(format!("\"{path}\"")))],
            },
        )
    }

    fn block(line: usize, stmts: Vec<SyntaxNode>) -> SyntaxNode {
        node(line, NodeKind::Block { stmts })
    }

    #[test]
    fn walks_hand_built_tree() {
        let body = block(
            1,
            vec![
                node(
                    2,
                    NodeKind::Assignment {
                        lhs: vec![ident(2, "api")],
                        rhs: vec![method_call(2, "r", "Group", "/api")],
                    },
                ),
                block(
                    3,
                    vec![
                        node(
                            4,
                            NodeKind::Assignment {
                                lhs: vec![ident(4, "api")],
                                rhs: vec![method_call(4, "api", "Group", "/v2")],
                            },
                        ),
                        node(
                            5,
                            NodeKind::ExpressionStatement {
                                expr: Box::new(method_call(5, "api", "GET", "/in")),
                            },
                        ),
                    ],
                ),
                node(
                    7,
                    NodeKind::ExpressionStatement {
                        expr: Box::new(method_call(7, "api", "POST", "/out")),
                    },
                ),
            ],
        );
        let file = node(
            1,
            NodeKind::File {
                decls: vec![node(
                    1,
                    NodeKind::FunctionDeclaration {
                        name: "main".to_string(),
                        body: Some(Box::new(body)),
                    },
                )],
            },
        );

        let routes = Walker::new().run(&file);
        let found: Vec<_> = routes
            .iter()
            .map(|r| (r.method.as_str(), r.path.as_str(), r.groups.clone(), r.line))
            .collect();
        assert_eq!(
            found,
            vec![
                ("GET", "/api/v2/in", vec!["api".to_string(), "v2".to_string()], 5),
                ("POST", "/api/out", vec!["api".to_string()], 7),
            ]
        );
    }
}

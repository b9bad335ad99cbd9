use crate::syntax::{NodeKind, SyntaxNode};

pub const GROUP_METHOD: &str = "Group";

const HTTP_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS", "HEAD"];

/// Borrowed view of a `receiver.method(args...)` call.
#[derive(Debug, Clone, Copy)]
pub struct SelectorCall<'a> {
    pub receiver: &'a SyntaxNode,
    pub method: &'a str,
    pub args: &'a [SyntaxNode],
}

impl<'a> SelectorCall<'a> {
    /// Receiver name, when the receiver is a plain identifier.
    pub fn receiver_name(&self) -> Option<&'a str> {
        self.receiver.identifier()
    }

    /// Normalized first argument, or `""` when it is missing or not a
    /// string literal.
    pub fn literal_path(&self) -> String {
        self.args
            .first()
            .and_then(SyntaxNode::string_literal)
            .map(normalize_literal)
            .unwrap_or_default()
    }
}

pub fn selector_call(node: &SyntaxNode) -> Option<SelectorCall<'_>> {
    let NodeKind::Call { function, args } = &node.kind else {
        return None;
    };
    let NodeKind::Selector { operand, field } = &function.kind else {
        return None;
    };
    Some(SelectorCall {
        receiver: operand,
        method: field,
        args,
    })
}

/// `x.Group(...)` with at least one string-literal argument.
pub fn group_creation_call(node: &SyntaxNode) -> Option<SelectorCall<'_>> {
    let call = selector_call(node)?;
    if call.method != GROUP_METHOD {
        return None;
    }
    if !call.args.iter().any(|arg| arg.string_literal().is_some()) {
        return None;
    }
    Some(call)
}

/// `x.VERB(...)` where VERB exactly matches one of the supported methods.
pub fn route_registration_call(node: &SyntaxNode) -> Option<SelectorCall<'_>> {
    let call = selector_call(node)?;
    if !is_http_method(call.method) {
        return None;
    }
    Some(call)
}

pub fn is_group_creation_call(node: &SyntaxNode) -> bool {
    group_creation_call(node).is_some()
}

pub fn is_route_registration_call(node: &SyntaxNode) -> bool {
    route_registration_call(node).is_some()
}

pub fn is_http_method(name: &str) -> bool {
    HTTP_METHODS.iter().any(|method| *method == name)
}

/// Strips double quotes, backticks and single quotes from both ends.
pub fn normalize_literal(raw: &str) -> String {
    raw.trim_matches(|ch: char| matches!(ch, '"' | '`' | '\''))
        .to_string()
}

//! # Control Flow Parsing
//!
//! Parses `if`, loops, `try` and `switch`.
//!
//! ## Grammar
//!
//! ```text
//! if     = "if" paren statement ("else" statement)?
//! while  = "while" paren statement
//! do     = "do" statement "while" paren ";"?
//! for    = "for" (for_spec | for_in_spec | for_of_spec) statement
//! try    = "try" block catch? finally?
//! switch = "switch" paren "{" (case | default | statement)* "}"
//! ```

use super::Parser;
use crate::cst::{CstNode, NodeKind};
use crate::error::ParseError;
use crate::lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parse an if statement.
    pub(super) fn parse_if(&mut self) -> Result<CstNode, ParseError> {
        let mut children = vec![self.expect_keyword("if")?];
        children.push(self.parse_parenthesized()?);
        children.push(self.parse_statement()?);
        if self.check_keyword("else")? {
            children.push(self.leaf(NodeKind::Literal("else"))?);
            children.push(self.parse_statement()?);
        }
        Ok(CstNode::node(NodeKind::IfStatement, children))
    }

    /// Parse a while loop.
    pub(super) fn parse_while(&mut self) -> Result<CstNode, ParseError> {
        let keyword = self.expect_keyword("while")?;
        let test = self.parse_parenthesized()?;
        let body = self.parse_statement()?;
        Ok(CstNode::node(NodeKind::WhileStatement, vec![keyword, test, body]))
    }

    /// Parse a do-while loop. The trailing `;` is always optional.
    pub(super) fn parse_do(&mut self) -> Result<CstNode, ParseError> {
        let mut children = vec![self.expect_keyword("do")?];
        children.push(self.parse_statement()?);
        children.push(self.expect_keyword("while")?);
        children.push(self.parse_parenthesized()?);
        if let Some(semi) = self.eat_punct(";")? {
            children.push(semi);
        }
        Ok(CstNode::node(NodeKind::DoStatement, children))
    }

    // =========================================================================
    // FOR
    // =========================================================================

    /// Parse a for loop of any of the three forms.
    pub(super) fn parse_for(&mut self) -> Result<CstNode, ParseError> {
        let keyword = self.expect_keyword("for")?;
        let spec = self.parse_for_spec()?;
        let body = self.parse_statement()?;
        Ok(CstNode::node(NodeKind::ForStatement, vec![keyword, spec, body]))
    }

    /// Parse the parenthesized head of a for loop.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// for_spec    = "(" init? ";" expression? ";" expression? ")"
    /// for_in_spec = "(" (declarator | lhs) "in" expression ")"
    /// for_of_spec = "(" (declarator | lhs) "of" assignment ")"
    /// ```
    fn parse_for_spec(&mut self) -> Result<CstNode, ParseError> {
        let open = self.expect_punct("(")?;
        let mut children = vec![open];

        if self.check_punct(";")? {
            return self.parse_classic_rest(children);
        }

        let token = self.peek()?;
        if let TokenKind::Keyword(keyword @ ("var" | "let" | "const")) = token.kind {
            let keyword = self.leaf(NodeKind::Literal(keyword))?;
            let binding = self.identifier(NodeKind::VariableDefinition)?;
            if self.check_keyword("in")? || self.check_word("of")? {
                children.push(keyword);
                children.push(binding);
                return self.parse_iteration_rest(children);
            }
            let mut declaration = vec![keyword, binding];
            self.parse_declaration_rest(&mut declaration, true)?;
            children.push(CstNode::node(NodeKind::VariableDeclaration, declaration));
            return self.parse_classic_rest(children);
        }

        let saved = self.no_in;
        self.no_in = true;
        let init = self.parse_expression();
        self.no_in = saved;
        let init = init?;

        if self.check_keyword("in")? || self.check_word("of")? {
            if !self.is_assignable(&init) {
                let token = self.peek()?;
                return Err(self.unexpected(&token, "';'"));
            }
            children.push(init);
            return self.parse_iteration_rest(children);
        }
        children.push(init);
        self.parse_classic_rest(children)
    }

    /// Parse `in expression )` or `of assignment )`.
    fn parse_iteration_rest(&mut self, mut children: Vec<CstNode>) -> Result<CstNode, ParseError> {
        let kind = if self.check_keyword("in")? {
            children.push(self.leaf(NodeKind::Literal("in"))?);
            children.push(self.with_in(|p| p.parse_expression())?);
            NodeKind::ForInSpec
        } else {
            children.push(self.contextual("of")?);
            children.push(self.with_in(|p| p.parse_assignment())?);
            NodeKind::ForOfSpec
        };
        children.push(self.expect_punct(")")?);
        Ok(CstNode::node(kind, children))
    }

    /// Parse `; test? ; update? )` after the init clause.
    fn parse_classic_rest(&mut self, mut children: Vec<CstNode>) -> Result<CstNode, ParseError> {
        self.with_in(|p| {
            children.push(p.expect_punct(";")?);
            if !p.check_punct(";")? {
                children.push(p.parse_expression()?);
            }
            children.push(p.expect_punct(";")?);
            if !p.check_punct(")")? {
                children.push(p.parse_expression()?);
            }
            children.push(p.expect_punct(")")?);
            Ok(CstNode::node(NodeKind::ForSpec, children))
        })
    }

    // =========================================================================
    // TRY
    // =========================================================================

    /// Parse a try statement; at least one of `catch` and `finally` is required.
    pub(super) fn parse_try(&mut self) -> Result<CstNode, ParseError> {
        let mut children = vec![self.expect_keyword("try")?];
        children.push(self.parse_block()?);

        if self.check_keyword("catch")? {
            let mut clause = vec![self.leaf(NodeKind::Literal("catch"))?];
            if let Some(open) = self.eat_punct("(")? {
                clause.push(open);
                clause.push(self.identifier(NodeKind::VariableDefinition)?);
                clause.push(self.expect_punct(")")?);
            }
            clause.push(self.parse_block()?);
            children.push(CstNode::node(NodeKind::CatchClause, clause));
        }

        if self.check_keyword("finally")? {
            let keyword = self.leaf(NodeKind::Literal("finally"))?;
            let block = self.parse_block()?;
            children.push(CstNode::node(NodeKind::FinallyClause, vec![keyword, block]));
        }

        if children.len() == 2 {
            let token = self.peek()?;
            return Err(self.unexpected(&token, "'catch' or 'finally'"));
        }
        Ok(CstNode::node(NodeKind::TryStatement, children))
    }

    // =========================================================================
    // SWITCH
    // =========================================================================

    /// Parse a switch statement.
    ///
    /// Case labels and statements are siblings inside the `SwitchBody`; each
    /// statement belongs to the closest label before it.
    pub(super) fn parse_switch(&mut self) -> Result<CstNode, ParseError> {
        let keyword = self.expect_keyword("switch")?;
        let discriminant = self.parse_parenthesized()?;

        let mut body = vec![self.expect_punct("{")?];
        let mut labeled = false;
        while !self.check_punct("}")? {
            let token = self.peek()?;
            if token.is_keyword("case") {
                let case = self.leaf(NodeKind::Literal("case"))?;
                let test = self.with_in(|p| p.parse_expression())?;
                let colon = self.expect_punct(":")?;
                body.push(CstNode::node(NodeKind::CaseLabel, vec![case, test, colon]));
                labeled = true;
            } else if token.is_keyword("default") {
                let default = self.leaf(NodeKind::Literal("default"))?;
                let colon = self.expect_punct(":")?;
                body.push(CstNode::node(NodeKind::DefaultLabel, vec![default, colon]));
                labeled = true;
            } else if labeled && !token.is_eof() {
                body.push(self.parse_statement()?);
            } else {
                return Err(self.unexpected(&token, "'case' or 'default'"));
            }
        }
        body.push(self.expect_punct("}")?);

        Ok(CstNode::node(
            NodeKind::SwitchStatement,
            vec![keyword, discriminant, CstNode::node(NodeKind::SwitchBody, body)],
        ))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::cst::{CstNode, NodeKind};
    use crate::error::ParseErrorKind;
    use crate::parse;

    fn first(source: &str) -> CstNode {
        parse(source).unwrap().root.children[0].clone()
    }

    fn names(node: &CstNode) -> Vec<&'static str> {
        node.children.iter().map(|c| c.kind.name()).collect()
    }

    #[test]
    fn test_if_else() {
        let node = first("if (a) b; else c;");
        assert_eq!(
            names(&node),
            ["if", "ParenthesizedExpression", "ExpressionStatement", "else", "ExpressionStatement"]
        );
    }

    #[test]
    fn test_if_with_inferred_semicolon_before_else() {
        let node = first("if (a) b\nelse c");
        assert_eq!(node.children.len(), 5);
    }

    #[test]
    fn test_do_while() {
        let node = first("do x++; while (x < 3)");
        assert_eq!(
            names(&node),
            ["do", "ExpressionStatement", "while", "ParenthesizedExpression"]
        );
    }

    #[test]
    fn test_classic_for() {
        let node = first("for (var i = 0; i < n; i++) {}");
        let spec = &node.children[1];
        assert_eq!(spec.kind, NodeKind::ForSpec);
        assert_eq!(
            names(spec),
            ["(", "VariableDeclaration", ";", "BinaryExpression", ";", "PostfixExpression", ")"]
        );
    }

    #[test]
    fn test_empty_for() {
        let node = first("for (;;) {}");
        assert_eq!(names(&node.children[1]), ["(", ";", ";", ")"]);
    }

    #[test]
    fn test_for_in_and_of() {
        let node = first("for (const k in o) {}");
        assert_eq!(
            names(&node.children[1]),
            ["(", "const", "VariableDefinition", "in", "VariableName", ")"]
        );
        let node = first("for (x.y of list) {}");
        assert_eq!(
            names(&node.children[1]),
            ["(", "MemberExpression", "of", "VariableName", ")"]
        );
    }

    #[test]
    fn test_in_inside_parens_of_for_init() {
        let node = first("for (var x = (a in b); x; ) {}");
        assert_eq!(node.children[1].kind, NodeKind::ForSpec);
    }

    #[test]
    fn test_try_forms() {
        let node = first("try {} catch (e) {} finally {}");
        assert_eq!(names(&node), ["try", "Block", "CatchClause", "FinallyClause"]);
        let node = first("try {} catch {}");
        assert_eq!(names(&node.children[2]), ["catch", "Block"]);
        let err = parse("try {}").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedEof { .. }));
    }

    #[test]
    fn test_switch() {
        let node = first("switch (x) { case 1: a; b; default: c }");
        let body = &node.children[2];
        assert_eq!(
            names(body),
            ["{", "CaseLabel", "ExpressionStatement", "ExpressionStatement", "DefaultLabel", "ExpressionStatement", "}"]
        );
    }

    #[test]
    fn test_switch_statement_before_label() {
        assert!(parse("switch (x) { a; }").is_err());
    }
}

//! Parsing (tokens to AST)
//!
//! Recursive descent with one function per precedence level. All nodes are
//! allocated through the arena factories on [`Ast`]; the parser holds only
//! `NodeId` handles. The tree shape mirrors the evaluator's expectations:
//! every `if`/`while` body is a `Block`, every `else` arm is wrapped in an
//! `Else` node, and every expression statement in an `Expr` node.

use crate::ast::{Ast, BinaryOp, LogicalOp, NodeId, UnaryOp};
use crate::error::ParseError;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parser state for building an AST from tokens
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    ast: Ast,
}

impl Parser {
    /// Create a new parser for the given tokens. The stream must end with
    /// an `Eof` token, as produced by the lexer.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            ast: Ast::new(),
        }
    }

    /// Parse the whole token stream into an arena with a root block
    pub fn parse(mut self) -> Result<Ast, ParseError> {
        let start = self.peek().span;
        let mut statements = Vec::new();
        while !self.check(TokenKind::Eof) {
            statements.push(self.parse_statement()?);
        }
        let span = start.merge(self.peek().span);
        let root = self.ast.new_block(statements, span);
        self.ast.set_root(root);
        Ok(self.ast)
    }

    // === Statements ===

    fn parse_statement(&mut self) -> Result<NodeId, ParseError> {
        match self.peek().kind {
            TokenKind::Print => self.parse_print(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::LeftBrace => self.parse_block(),
            _ => self.parse_expr_statement(),
        }
    }

    fn parse_print(&mut self) -> Result<NodeId, ParseError> {
        let keyword = self.consume(TokenKind::Print, "'print'")?.span;
        let value = self.parse_expr()?;
        let end = self.consume(TokenKind::Semicolon, "';'")?.span;
        Ok(self.ast.new_print(value, keyword.merge(end)))
    }

    fn parse_if(&mut self) -> Result<NodeId, ParseError> {
        let keyword = self.consume(TokenKind::If, "'if'")?.span;
        self.consume(TokenKind::LeftParen, "'('")?;
        let cond = self.parse_expr()?;
        self.consume(TokenKind::RightParen, "')'")?;

        let body = self.parse_body()?;
        let mut span = keyword.merge(self.ast.span(body));

        let else_branch = if self.match_token(TokenKind::Else) {
            let else_body = self.parse_body()?;
            let else_span = self.ast.span(else_body);
            span = span.merge(else_span);
            Some(self.ast.new_else(else_body, else_span))
        } else {
            None
        };

        Ok(self.ast.new_if(cond, body, else_branch, span))
    }

    fn parse_while(&mut self) -> Result<NodeId, ParseError> {
        let keyword = self.consume(TokenKind::While, "'while'")?.span;
        self.consume(TokenKind::LeftParen, "'('")?;
        let cond = self.parse_expr()?;
        self.consume(TokenKind::RightParen, "')'")?;
        let body = self.parse_body()?;
        let span = keyword.merge(self.ast.span(body));
        Ok(self.ast.new_while(cond, body, span))
    }

    /// Body of an `if`, `else`, or `while`. Always a `Block`, even for a
    /// single unbraced statement, so the evaluator's framing stays uniform.
    fn parse_body(&mut self) -> Result<NodeId, ParseError> {
        if self.check(TokenKind::LeftBrace) {
            self.parse_block()
        } else {
            let stmt = self.parse_statement()?;
            let span = self.ast.span(stmt);
            Ok(self.ast.new_block(vec![stmt], span))
        }
    }

    fn parse_block(&mut self) -> Result<NodeId, ParseError> {
        let open = self.consume(TokenKind::LeftBrace, "'{'")?.span;
        let mut statements = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.check(TokenKind::Eof) {
            statements.push(self.parse_statement()?);
        }
        let close = self.consume(TokenKind::RightBrace, "'}'")?.span;
        Ok(self.ast.new_block(statements, open.merge(close)))
    }

    fn parse_expr_statement(&mut self) -> Result<NodeId, ParseError> {
        let expr = self.parse_expr()?;
        let end = self.consume(TokenKind::Semicolon, "';'")?.span;
        let span = self.ast.span(expr).merge(end);
        Ok(self.ast.new_expr(expr, span))
    }

    // === Expressions, lowest precedence first ===

    fn parse_expr(&mut self) -> Result<NodeId, ParseError> {
        self.parse_assignment()
    }

    /// Right-associative: `a = b = 5` parses as `a = (b = 5)`
    fn parse_assignment(&mut self) -> Result<NodeId, ParseError> {
        if self.check(TokenKind::Identifier) && self.peek_next().kind == TokenKind::Assign {
            let name_token = self.advance().clone();
            let target = self.ast.new_decl(name_token.lexeme, name_token.span);
            self.consume(TokenKind::Assign, "'='")?;
            let value = self.parse_assignment()?;
            let span = name_token.span.merge(self.ast.span(value));
            return Ok(self.ast.new_assign(target, value, span));
        }
        self.parse_logic_or()
    }

    fn parse_logic_or(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.parse_logic_xor()?;
        while self.match_token(TokenKind::OrOr) {
            let right = self.parse_logic_xor()?;
            left = self.log_op(LogicalOp::Or, left, right);
        }
        Ok(left)
    }

    fn parse_logic_xor(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.parse_logic_and()?;
        while self.match_token(TokenKind::Caret) {
            let right = self.parse_logic_and()?;
            left = self.log_op(LogicalOp::Xor, left, right);
        }
        Ok(left)
    }

    fn parse_logic_and(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.parse_equality()?;
        while self.match_token(TokenKind::AndAnd) {
            let right = self.parse_equality()?;
            left = self.log_op(LogicalOp::And, left, right);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.parse_relational()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::EqualEqual => LogicalOp::Eq,
                TokenKind::NotEqual => LogicalOp::Ne,
                _ => break,
            };
            self.advance();
            let right = self.parse_relational()?;
            left = self.log_op(op, left, right);
        }
        Ok(left)
    }

    fn parse_relational(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Less => LogicalOp::Lt,
                TokenKind::LessEqual => LogicalOp::Le,
                TokenKind::Greater => LogicalOp::Gt,
                TokenKind::GreaterEqual => LogicalOp::Ge,
                _ => break,
            };
            self.advance();
            let right = self.parse_additive()?;
            left = self.log_op(op, left, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.parse_term()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;
            left = self.bin_op(op, left, right);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Mod,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = self.bin_op(op, left, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<NodeId, ParseError> {
        let op = match self.peek().kind {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Plus => UnaryOp::Plus,
            _ => return self.parse_primary(),
        };
        let op_span = self.advance().span;
        let operand = self.parse_unary()?;
        let span = op_span.merge(self.ast.span(operand));
        Ok(self.ast.new_un_op(op, operand, span))
    }

    fn parse_primary(&mut self) -> Result<NodeId, ParseError> {
        let token = self.advance().clone();
        match token.kind {
            TokenKind::Number => {
                // The lexer has already range-checked the literal.
                let value: i64 = token
                    .lexeme
                    .parse()
                    .expect("lexer admitted an unparseable number literal");
                Ok(self.ast.new_int_literal(value, token.span))
            }
            TokenKind::Identifier => Ok(self.ast.new_var_ref(token.lexeme, token.span)),
            TokenKind::Question => Ok(self.ast.new_read(token.span)),
            TokenKind::LeftParen => {
                let expr = self.parse_expr()?;
                self.consume(TokenKind::RightParen, "')'")?;
                Ok(expr)
            }
            _ => Err(ParseError::UnexpectedToken {
                expected: "an expression".to_string(),
                found: token.kind.to_string(),
                span: token.span,
            }),
        }
    }

    // === Node helpers ===

    fn bin_op(&mut self, op: BinaryOp, left: NodeId, right: NodeId) -> NodeId {
        let span = self.ast.span(left).merge(self.ast.span(right));
        self.ast.new_bin_op(op, left, right, span)
    }

    fn log_op(&mut self, op: LogicalOp, left: NodeId, right: NodeId) -> NodeId {
        let span = self.ast.span(left).merge(self.ast.span(right));
        self.ast.new_log_op(op, left, right, span)
    }

    // === Token helpers ===

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn peek_next(&self) -> &Token {
        // The Eof token is never consumed, so current + 1 only runs past the
        // end if the stream is malformed.
        self.tokens
            .get(self.current + 1)
            .unwrap_or_else(|| &self.tokens[self.tokens.len() - 1])
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn advance(&mut self) -> &Token {
        let index = self.current;
        if self.tokens[index].kind != TokenKind::Eof {
            self.current += 1;
        }
        &self.tokens[index]
    }

    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn consume(&mut self, kind: TokenKind, expected: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance().clone())
        } else {
            let found = self.peek();
            Err(ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: found.kind.to_string(),
                span: found.span,
            })
        }
    }
}

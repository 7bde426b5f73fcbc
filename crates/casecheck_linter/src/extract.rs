//! Declaration extraction by token matching.
//!
//! The scanner walks the token stream once, keeping a stack of frames that
//! records what kind of region it is in: a type body (members are declared
//! here), a code block (local variables), or the declarator list of a
//! field/variable declaration (further names after `,`). Declarations are
//! recognized by the shape of the tokens around a name: `Type name (` is a
//! method, `Type name =` / `;` / `,` / `[]` is a field or variable, and the
//! word after `class`/`interface`/`enum`/`record`/`@interface` is a type.
//!
//! Parameters, enum constants, type parameters and record components are not
//! reported.

use casecheck_java_lexer::{LexError, Token, TokenKind, tokenize};

use crate::CheckContext;
use crate::occurrence::{Occurrence, Role};

/// Extracts declared identifiers from Java source, in order of appearance.
pub fn extract_occurrences(source: &str) -> Result<Vec<Occurrence>, LexError> {
    let tokens = tokenize(source)?;
    let ctx = CheckContext::new(source);
    Ok(Scanner::new(&ctx, &tokens).run())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeKind {
    Class,
    Interface,
    Enum,
    Annotation,
    Record,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    /// Between the braces of a class-like body.
    TypeBody {
        kind: TypeKind,
        /// Still inside the leading constant list of an enum.
        enum_constants: bool,
    },
    /// Method, initializer, lambda or statement block; also array initializers.
    Block,
    /// After the first declarator of a field or local variable declaration.
    Declarators {
        role: Role,
        /// `(` / `[` nesting inside initializers.
        depth: usize,
    },
}

#[derive(Debug, Default, Clone, Copy)]
struct Modifiers {
    is_static: bool,
    is_final: bool,
}

struct Scanner<'a, 'src> {
    ctx: &'a CheckContext<'src>,
    tokens: &'a [Token<'src>],
    /// `anonymous_bodies[i]` is true when token `i` opens an anonymous class body.
    anonymous_bodies: Vec<bool>,
    frames: Vec<Frame>,
    occurrences: Vec<Occurrence>,
}

impl<'a, 'src> Scanner<'a, 'src> {
    fn new(ctx: &'a CheckContext<'src>, tokens: &'a [Token<'src>]) -> Self {
        let mut scanner = Self {
            ctx,
            tokens,
            anonymous_bodies: vec![false; tokens.len()],
            frames: Vec::new(),
            occurrences: Vec::new(),
        };
        scanner.mark_anonymous_bodies();
        scanner
    }

    fn run(mut self) -> Vec<Occurrence> {
        let mut i = 0;
        while i < self.tokens.len() {
            i = match self.frames.last().copied() {
                None => self.compilation_unit_item(i),
                Some(Frame::TypeBody {
                    enum_constants: true,
                    ..
                }) => self.enum_constant(i),
                Some(Frame::TypeBody { kind, .. }) => self.member(i, kind),
                Some(Frame::Block) => self.block_token(i),
                Some(Frame::Declarators { role, depth }) => self.declarator_token(i, role, depth),
            };
        }
        self.occurrences
    }

    // Token helpers

    fn token(&self, i: usize) -> Option<&Token<'src>> {
        self.tokens.get(i)
    }

    fn is_op(&self, i: usize, op: &str) -> bool {
        self.token(i).is_some_and(|t| t.is_operator(op))
    }

    fn is_keyword(&self, i: usize, keyword: &str) -> bool {
        self.token(i).is_some_and(|t| t.is_keyword(keyword))
    }

    fn is_identifier(&self, i: usize) -> bool {
        self.token(i).is_some_and(Token::is_identifier)
    }

    fn is_word(&self, i: usize, word: &str) -> bool {
        self.token(i).is_some_and(|t| t.is_word(word))
    }

    /// Index of the token closing the bracket opened at `open`.
    fn matching_close(&self, open: usize) -> Option<usize> {
        let (open_op, close_op) = match self.token(open)?.text {
            "(" => ("(", ")"),
            "[" => ("[", "]"),
            _ => return None,
        };
        let mut depth = 0usize;
        for (offset, token) in self.tokens[open..].iter().enumerate() {
            if token.is_operator(open_op) {
                depth += 1;
            } else if token.is_operator(close_op) {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
        }
        None
    }

    fn record(&mut self, index: usize, role: Role) {
        let token = self.tokens[index];
        let name = token.unescaped();
        // `_` is the unnamed variable, not a name.
        if name == "_" {
            return;
        }
        let location = self.ctx.location(token.range.start());
        self.occurrences.push(Occurrence {
            name: name.into_owned(),
            role,
            line: location.line.get(),
            column: location.column.get(),
            range: token.range,
        });
    }

    // Structural helpers

    /// Marks each `{` that follows `new Type(...)`.
    fn mark_anonymous_bodies(&mut self) {
        for i in 0..self.tokens.len() {
            if !self.is_keyword(i, "new") {
                continue;
            }
            let mut j = i + 1;
            while self.is_op(j, "@") {
                j = self.skip_annotation(j);
            }
            let Some(after_type) = self.parse_type(j) else {
                continue;
            };
            if !self.is_op(after_type, "(") {
                continue;
            }
            if let Some(close) = self.matching_close(after_type)
                && self.is_op(close + 1, "{")
            {
                self.anonymous_bodies[close + 1] = true;
            }
        }
    }

    /// Skips `@Name`, `@a.b.Name` and `@Name(...)`.
    fn skip_annotation(&self, at: usize) -> usize {
        let mut j = at + 1;
        while self.is_identifier(j) {
            j += 1;
            if self.is_op(j, ".") && self.is_identifier(j + 1) {
                j += 1;
            } else {
                break;
            }
        }
        if self.is_op(j, "(") {
            return self.matching_close(j).map_or(self.tokens.len(), |close| close + 1);
        }
        j
    }

    /// Skips annotations and modifier keywords.
    fn skip_modifiers(&self, at: usize) -> (usize, Modifiers) {
        let mut modifiers = Modifiers::default();
        let mut j = at;
        loop {
            let Some(token) = self.token(j) else {
                break;
            };
            if token.is_operator("@") && !self.is_keyword(j + 1, "interface") {
                j = self.skip_annotation(j);
                continue;
            }
            match token.kind {
                TokenKind::Keyword => match token.text {
                    "static" => modifiers.is_static = true,
                    "final" => modifiers.is_final = true,
                    "public" | "protected" | "private" | "abstract" | "native" | "transient"
                    | "volatile" | "strictfp" | "default" => {}
                    // `synchronized (lock) { ... }` is a statement, not a modifier.
                    "synchronized" if !self.is_op(j + 1, "(") => {}
                    _ => break,
                },
                TokenKind::Identifier
                    if token.text == "non"
                        && self.is_op(j + 1, "-")
                        && self.is_word(j + 2, "sealed") =>
                {
                    j += 2;
                }
                TokenKind::Identifier
                    if token.text == "sealed"
                        && self.token(j + 1).is_some_and(|next| {
                            matches!(next.kind, TokenKind::Keyword | TokenKind::Identifier)
                        }) => {}
                _ => break,
            }
            j += 1;
        }
        (j, modifiers)
    }

    /// Parses a type reference starting at `at` and returns the index after it.
    ///
    /// Accepts primitives, qualified names, type arguments and array
    /// dimensions. Returns `None` when the tokens cannot be a type.
    fn parse_type(&self, at: usize) -> Option<usize> {
        let token = self.token(at)?;
        let mut j = at;
        if token.is_primitive_type() {
            j += 1;
        } else if token.is_identifier() {
            loop {
                j += 1;
                if self.is_op(j, "<") {
                    j = self.skip_type_arguments(j)?;
                }
                if self.is_op(j, ".") && self.is_identifier(j + 1) {
                    j += 1;
                } else {
                    break;
                }
            }
        } else {
            return None;
        }
        while self.is_op(j, "[") && self.is_op(j + 1, "]") {
            j += 2;
        }
        Some(j)
    }

    /// Skips a balanced `<...>` made only of tokens that may appear in types.
    fn skip_type_arguments(&self, at: usize) -> Option<usize> {
        let mut depth = 0usize;
        let mut j = at;
        loop {
            let token = self.token(j)?;
            match token.kind {
                TokenKind::Operator => match token.text {
                    "<" => depth += 1,
                    ">" => {
                        depth -= 1;
                        if depth == 0 {
                            return Some(j + 1);
                        }
                    }
                    "," | "." | "?" | "&" | "[" | "]" => {}
                    "@" => {
                        j = self.skip_annotation(j);
                        continue;
                    }
                    _ => return None,
                },
                TokenKind::Identifier => {}
                TokenKind::Keyword
                    if token.is_primitive_type() || matches!(token.text, "extends" | "super") => {}
                _ => return None,
            }
            j += 1;
        }
    }

    fn is_type_declaration(&self, at: usize) -> bool {
        self.is_keyword(at, "class")
            || self.is_keyword(at, "interface")
            || self.is_keyword(at, "enum")
            || (self.is_op(at, "@") && self.is_keyword(at + 1, "interface"))
            || (self.is_word(at, "record")
                && self.is_identifier(at + 1)
                && (self.is_op(at + 2, "(") || self.is_op(at + 2, "<")))
    }

    /// Records the type name and enters its body.
    fn type_declaration(&mut self, at: usize) -> usize {
        let (kind, name) = match self.tokens[at].text {
            "@" => (TypeKind::Annotation, at + 2),
            "interface" => (TypeKind::Interface, at + 1),
            "enum" => (TypeKind::Enum, at + 1),
            "record" => (TypeKind::Record, at + 1),
            _ => (TypeKind::Class, at + 1),
        };
        if self.is_identifier(name) {
            self.record(name, Role::Class);
        }

        let mut j = name + 1;
        while let Some(token) = self.token(j) {
            if token.is_operator("(") {
                j = self.matching_close(j).map_or(self.tokens.len(), |close| close + 1);
                continue;
            }
            if token.is_operator("{") {
                self.frames.push(Frame::TypeBody {
                    kind,
                    enum_constants: kind == TypeKind::Enum,
                });
                return j + 1;
            }
            if token.is_operator(";") {
                return j + 1;
            }
            j += 1;
        }
        j
    }

    /// Skips a parameter list and header tail; enters the body if there is one.
    fn method_header(&mut self, open_paren: usize) -> usize {
        let Some(close) = self.matching_close(open_paren) else {
            return self.tokens.len();
        };
        let mut j = close + 1;
        while let Some(token) = self.token(j) {
            if token.is_operator("{") {
                self.frames.push(Frame::Block);
                return j + 1;
            }
            if token.is_operator(";") {
                return j + 1;
            }
            j += 1;
        }
        j
    }

    fn open_brace(&mut self, at: usize) -> usize {
        let frame = if self.anonymous_bodies[at] {
            Frame::TypeBody {
                kind: TypeKind::Class,
                enum_constants: false,
            }
        } else {
            Frame::Block
        };
        self.frames.push(frame);
        at + 1
    }

    /// `instanceof` and `case` may be followed by a pattern that binds
    /// variables; skips past it when there is one.
    fn after_pattern(&mut self, at: usize) -> usize {
        self.pattern(at + 1).unwrap_or(at + 1)
    }

    /// Reads a type pattern (`Type name`) or a record pattern
    /// (`Type(Pattern, ...)`, nested to any depth) and records every bound
    /// name. Returns the index after the pattern.
    fn pattern(&mut self, at: usize) -> Option<usize> {
        let mut j = at;
        if self.is_keyword(j, "final") {
            j += 1;
        }
        let after_type = self.parse_type(j)?;
        if self.is_identifier(after_type) {
            self.record(after_type, Role::LocalVariable);
            return Some(after_type + 1);
        }
        if !self.is_op(after_type, "(") {
            return None;
        }

        let close = self.matching_close(after_type)?;
        let mut k = after_type + 1;
        while k < close {
            k = self.pattern(k).unwrap_or(k + 1);
        }
        Some(close + 1)
    }

    // Per-frame handlers

    fn compilation_unit_item(&mut self, at: usize) -> usize {
        if self.is_keyword(at, "package") || self.is_keyword(at, "import") {
            let mut j = at;
            while self.token(j).is_some_and(|t| !t.is_operator(";")) {
                j += 1;
            }
            return j + 1;
        }
        let (j, _) = self.skip_modifiers(at);
        if self.is_type_declaration(j) {
            return self.type_declaration(j);
        }
        j.max(at + 1)
    }

    fn enum_constant(&mut self, at: usize) -> usize {
        let token = self.tokens[at];
        if token.is_operator(";") {
            if let Some(Frame::TypeBody { enum_constants, .. }) = self.frames.last_mut() {
                *enum_constants = false;
            }
            return at + 1;
        }
        if token.is_operator("}") {
            self.frames.pop();
            return at + 1;
        }
        if token.is_operator("@") {
            return self.skip_annotation(at);
        }
        if token.is_identifier() {
            let mut j = at + 1;
            if self.is_op(j, "(") {
                j = self.matching_close(j).map_or(self.tokens.len(), |close| close + 1);
            }
            if self.is_op(j, "{") {
                self.frames.push(Frame::TypeBody {
                    kind: TypeKind::Class,
                    enum_constants: false,
                });
                j += 1;
            }
            return j;
        }
        at + 1
    }

    fn member(&mut self, at: usize, kind: TypeKind) -> usize {
        let token = self.tokens[at];
        if token.is_operator("}") {
            self.frames.pop();
            return at + 1;
        }
        if token.is_operator(";") {
            return at + 1;
        }

        let (mut j, modifiers) = self.skip_modifiers(at);
        if self.is_op(j, "{") {
            // Instance or static initializer.
            self.frames.push(Frame::Block);
            return j + 1;
        }
        if self.is_type_declaration(j) {
            return self.type_declaration(j);
        }
        if self.is_op(j, "<") {
            match self.skip_type_arguments(j) {
                Some(next) => j = next,
                None => return j + 1,
            }
        }

        if self.is_identifier(j) && self.is_op(j + 1, "(") {
            // Constructor.
            return self.method_header(j + 1);
        }
        if kind == TypeKind::Record && self.is_identifier(j) && self.is_op(j + 1, "{") {
            // Compact canonical constructor.
            self.frames.push(Frame::Block);
            return j + 2;
        }

        let Some(name) = self.parse_type(j) else {
            return j.max(at + 1);
        };
        if !self.is_identifier(name) {
            return name;
        }

        if self.is_op(name + 1, "(") {
            self.record(name, Role::Method);
            return self.method_header(name + 1);
        }

        if self.ends_declarator(name + 1) {
            let role = if (modifiers.is_static && modifiers.is_final)
                || matches!(kind, TypeKind::Interface | TypeKind::Annotation)
            {
                Role::Constant
            } else {
                Role::Field
            };
            self.record(name, role);
            self.frames.push(Frame::Declarators { role, depth: 0 });
            return name + 1;
        }

        name + 1
    }

    /// Whether the token after a declarator name fits a variable declaration.
    fn ends_declarator(&self, at: usize) -> bool {
        self.is_op(at, "=")
            || self.is_op(at, ";")
            || self.is_op(at, ",")
            || (self.is_op(at, "[") && self.is_op(at + 1, "]"))
    }

    fn at_statement_start(&self, at: usize) -> bool {
        let Some(previous) = at.checked_sub(1).and_then(|p| self.token(p)) else {
            return false;
        };
        match previous.text {
            "{" | "}" | ";" | ":" if previous.kind == TokenKind::Operator => true,
            "(" if previous.kind == TokenKind::Operator => {
                at >= 2 && (self.is_keyword(at - 2, "for") || self.is_keyword(at - 2, "try"))
            }
            _ => false,
        }
    }

    /// Tries to read a local declaration at a statement start.
    fn local_declaration(&mut self, at: usize) -> Option<usize> {
        let (j, _) = self.skip_modifiers(at);
        if self.is_type_declaration(j) {
            return Some(self.type_declaration(j));
        }
        // `yield value;` inside switch expressions.
        if self.is_word(j, "yield") {
            return None;
        }
        let name = self.parse_type(j)?;
        if !self.is_identifier(name) {
            return None;
        }

        if self.is_op(name + 1, ":") {
            // Enhanced for: `for (Type name : items)`.
            self.record(name, Role::LocalVariable);
            return Some(name + 2);
        }
        if !self.ends_declarator(name + 1) {
            return None;
        }
        self.record(name, Role::LocalVariable);
        self.frames.push(Frame::Declarators {
            role: Role::LocalVariable,
            depth: 0,
        });
        Some(name + 1)
    }

    fn block_token(&mut self, at: usize) -> usize {
        if self.at_statement_start(at)
            && let Some(next) = self.local_declaration(at)
        {
            return next;
        }

        let token = self.tokens[at];
        if token.is_operator("{") {
            return self.open_brace(at);
        }
        if token.is_operator("}") {
            self.frames.pop();
            return at + 1;
        }
        if token.is_keyword("instanceof") || token.is_keyword("case") {
            return self.after_pattern(at);
        }
        at + 1
    }

    fn declarator_token(&mut self, at: usize, role: Role, depth: usize) -> usize {
        let token = self.tokens[at];
        if token.kind == TokenKind::Keyword {
            if token.text == "instanceof" {
                return self.after_pattern(at);
            }
            return at + 1;
        }
        if token.kind != TokenKind::Operator {
            return at + 1;
        }

        match token.text {
            "(" | "[" => self.set_depth(depth + 1),
            ")" | "]" => {
                if depth == 0 {
                    // End of a `for (...)` or `try (...)` header.
                    self.frames.pop();
                } else {
                    self.set_depth(depth - 1);
                }
            }
            "{" => return self.open_brace(at),
            "}" => {
                // Unbalanced; let the enclosing frame consume it.
                self.frames.pop();
                return at;
            }
            ";" if depth == 0 => {
                self.frames.pop();
            }
            "," if depth == 0 && self.is_identifier(at + 1) && self.ends_declarator(at + 2) => {
                self.record(at + 1, role);
                return at + 2;
            }
            _ => {}
        }
        at + 1
    }

    fn set_depth(&mut self, new_depth: usize) {
        if let Some(Frame::Declarators { depth, .. }) = self.frames.last_mut() {
            *depth = new_depth;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> Vec<(String, Role)> {
        extract_occurrences(source)
            .unwrap()
            .into_iter()
            .map(|o| (o.name, o.role))
            .collect()
    }

    fn names(source: &str, role: Role) -> Vec<String> {
        extract(source)
            .into_iter()
            .filter(|(_, r)| *r == role)
            .map(|(name, _)| name)
            .collect()
    }

    const FIXTURE: &str = r#"public class TestClass {
    private int _privateVar = 1;    // Should be flagged (leading underscore)
    private int PascalCaseVar = 2;  // Should be flagged (PascalCase)
    private int snake_case_var = 3; // Should be flagged (snake_case)
    private int normalVar = 4;      // This is correct (camelCase)

    public void TestMethod() {      // Should be flagged (PascalCase method)
        int localVar = 5;           // This is correct
    }
}
"#;

    #[test]
    fn test_fixture_occurrences() {
        let occurrences = extract(FIXTURE);
        assert_eq!(
            occurrences,
            vec![
                ("TestClass".to_string(), Role::Class),
                ("_privateVar".to_string(), Role::Field),
                ("PascalCaseVar".to_string(), Role::Field),
                ("snake_case_var".to_string(), Role::Field),
                ("normalVar".to_string(), Role::Field),
                ("TestMethod".to_string(), Role::Method),
                ("localVar".to_string(), Role::LocalVariable),
            ]
        );
    }

    #[test]
    fn test_fixture_positions() {
        let occurrences = extract_occurrences(FIXTURE).unwrap();
        let private_var = &occurrences[1];
        assert_eq!((private_var.line, private_var.column), (2, 17));
        let method = &occurrences[5];
        assert_eq!((method.line, method.column), (7, 17));
        assert_eq!(&FIXTURE[method.range], "TestMethod");
    }

    #[test]
    fn test_empty_source() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_package_and_imports_are_skipped() {
        let source = "package com.example;\nimport java.util.List;\nclass A {}";
        assert_eq!(extract(source), vec![("A".to_string(), Role::Class)]);
    }

    #[test]
    fn test_constants() {
        let source = r#"
class A {
    public static final int MAX_SIZE = 10;
    static final String name = "x";
    static int counter;
    final int id = 1;
}
"#;
        assert_eq!(names(source, Role::Constant), ["MAX_SIZE", "name"]);
        assert_eq!(names(source, Role::Field), ["counter", "id"]);
    }

    #[test]
    fn test_interface_fields_are_constants() {
        let source = r#"
interface Limits {
    int MAX = 5;
    String label();
    default int twice(int x) { int doubled = x * 2; return doubled; }
}
"#;
        assert_eq!(names(source, Role::Constant), ["MAX"]);
        assert_eq!(names(source, Role::Method), ["label", "twice"]);
        assert_eq!(names(source, Role::LocalVariable), ["doubled"]);
    }

    #[test]
    fn test_multiple_declarators() {
        let source = r#"
class A {
    int a, b = 2, c[];
    void m() {
        int x = f(1, 2), y, z = 3;
    }
}
"#;
        assert_eq!(names(source, Role::Field), ["a", "b", "c"]);
        assert_eq!(names(source, Role::LocalVariable), ["x", "y", "z"]);
    }

    #[test]
    fn test_generic_types() {
        let source = r#"
class A<T extends Comparable<T>> {
    private Map<String, List<Integer>> byName = new HashMap<>();
    public <R> List<R> mapAll(Function<T, R> fn) {
        List<R> out = new ArrayList<>();
        Map.Entry<String, int[]>[] entries = null;
        return out;
    }
}
"#;
        assert_eq!(names(source, Role::Field), ["byName"]);
        assert_eq!(names(source, Role::Method), ["mapAll"]);
        assert_eq!(names(source, Role::LocalVariable), ["out", "entries"]);
    }

    #[test]
    fn test_constructors_and_parameters_are_not_reported() {
        let source = r#"
class Point {
    private final int x;
    public Point(int x) { this.x = x; }
    <T> Point(T t, int x) { this(x); }
}
"#;
        assert_eq!(
            extract(source),
            vec![
                ("Point".to_string(), Role::Class),
                ("x".to_string(), Role::Field),
            ]
        );
    }

    #[test]
    fn test_statements_are_not_declarations() {
        let source = r#"
class A {
    void m(int n) {
        n = 5;
        foo.bar(n);
        items.add(n);
        this.n = n;
        for (int i = 0, j = 1; i < n; i++) { total += i; }
        for (String s : names) { print(s); }
        if (a < b) { return; }
        label: while (true) { break label; }
        x.y.z = 3;
        Collections.<String>emptyList();
    }
}
"#;
        assert_eq!(names(source, Role::LocalVariable), ["i", "j", "s"]);
    }

    #[test]
    fn test_try_with_resources_and_catch() {
        let source = r#"
class A {
    void m() {
        try (var in = open(); Reader reader = wrap(in)) {
            int read = in.read();
        } catch (IOException e) {
            int code = 1;
        }
    }
}
"#;
        assert_eq!(names(source, Role::LocalVariable), ["in", "reader", "read", "code"]);
    }

    #[test]
    fn test_nested_and_local_types() {
        let source = r#"
public class Outer {
    static class Inner_Type { int value; }
    interface Callback { void call(); }
    enum Mode { FAST, SLOW }
    record Pair(int left, int right) {}
    @interface Marker { String value() default ""; }
    void m() {
        class LocalHelper { int count; }
        record LocalPoint(int x, int y) {}
    }
}
"#;
        assert_eq!(
            names(source, Role::Class),
            [
                "Outer",
                "Inner_Type",
                "Callback",
                "Mode",
                "Pair",
                "Marker",
                "LocalHelper",
                "LocalPoint"
            ]
        );
        assert_eq!(names(source, Role::Field), ["value", "count"]);
        assert_eq!(names(source, Role::Method), ["call", "value", "m"]);
    }

    #[test]
    fn test_enum_bodies() {
        let source = r#"
enum Planet {
    MERCURY(3.3e23, 2.4e6),
    EARTH(5.9e24, 6.3e6) {
        @Override double gravity() { double boost = 1.0; return boost; }
    },
    @Deprecated PLUTO(1.3e22, 1.1e6);

    private final double mass;
    private static final double G = 6.67e-11;

    Planet(double mass, double radius) { this.mass = mass; }
    double gravity() { return G * mass; }
}
"#;
        assert_eq!(names(source, Role::Class), ["Planet"]);
        assert_eq!(names(source, Role::Method), ["gravity", "gravity"]);
        assert_eq!(names(source, Role::Field), ["mass"]);
        assert_eq!(names(source, Role::Constant), ["G"]);
        assert_eq!(names(source, Role::LocalVariable), ["boost"]);
    }

    #[test]
    fn test_anonymous_classes_and_lambdas() {
        let source = r#"
class A {
    private Runnable task = new Runnable() {
        private int Calls;
        @Override
        public void run() { int tick_count = 0; }
    }, other = () -> { int inner = 1; };

    void m() {
        execute(new Callable<String>() {
            public String Call() { return "x"; }
        });
        list.forEach(item -> { String label = item.toString(); });
    }
}
"#;
        assert_eq!(names(source, Role::Field), ["task", "Calls", "other"]);
        assert_eq!(names(source, Role::Method), ["run", "m", "Call"]);
        assert_eq!(
            names(source, Role::LocalVariable),
            ["tick_count", "inner", "label"]
        );
    }

    #[test]
    fn test_annotations_and_modifiers() {
        let source = r#"
@SuppressWarnings({"unchecked", "rawtypes"})
public abstract sealed class Shape permits Circle {
    @Deprecated(since = "1.2") protected transient volatile int Legacy_field;
    public abstract double area();
    synchronized void lock() {
        synchronized (this) { @SuppressWarnings("x") final int guarded = 1; }
    }
}
non-sealed class Circle extends Shape {
    public double area() { return 0; }
}
"#;
        assert_eq!(names(source, Role::Class), ["Shape", "Circle"]);
        assert_eq!(names(source, Role::Field), ["Legacy_field"]);
        assert_eq!(names(source, Role::Method), ["area", "lock", "area"]);
        assert_eq!(names(source, Role::LocalVariable), ["guarded"]);
    }

    #[test]
    fn test_switch_and_patterns() {
        let source = r#"
class A {
    int m(Object o) {
        if (o instanceof String text && !text.isEmpty()) { return 1; }
        int result = switch (o.hashCode()) {
            case 1 -> 2;
            default -> {
                int fallback = 3;
                yield fallback;
            }
        };
        switch (result) {
            case 4:
                int inCase = 4;
                break;
        }
        return result;
    }
}
"#;
        assert_eq!(
            names(source, Role::LocalVariable),
            ["text", "result", "fallback", "inCase"]
        );
    }

    #[test]
    fn test_record_patterns() {
        let source = r#"
class A {
    int m(Object o) {
        if (o instanceof Point(int px, int py) && px > py) { return 1; }
        boolean nested = o instanceof Line(Point(var x1, var y1), Point end);
        return switch (o) {
            case Circle(Point(double cx, _), double Radius) when Radius > 0 -> 2;
            case Square sq -> 3;
            case RED -> 4;
            default -> 0;
        };
    }
}
"#;
        assert_eq!(
            names(source, Role::LocalVariable),
            ["px", "py", "nested", "x1", "y1", "end", "cx", "Radius", "sq"]
        );
        assert_eq!(names(source, Role::Method), ["m"]);
    }

    #[test]
    fn test_unicode_escaped_names() {
        let source = "class \\u0041 { int \\u0061b; void r\\u0075n() {} }";
        assert_eq!(
            extract(source),
            [
                ("A".to_string(), Role::Class),
                ("ab".to_string(), Role::Field),
                ("run".to_string(), Role::Method),
            ]
        );
    }

    #[test]
    fn test_array_initializers() {
        let source = r#"
class A {
    static final int[][] GRID = {{1, 2}, {3, 4}};
    String[] words = new String[] {"a", "b"};
    void m() { int[] xs = {1, 2, 3}; int count = xs.length; }
}
"#;
        assert_eq!(names(source, Role::Constant), ["GRID"]);
        assert_eq!(names(source, Role::Field), ["words"]);
        assert_eq!(names(source, Role::LocalVariable), ["xs", "count"]);
    }

    #[test]
    fn test_initializer_blocks() {
        let source = r#"
class A {
    static { int boot = 1; }
    { int instance = 2; }
}
"#;
        assert_eq!(names(source, Role::LocalVariable), ["boot", "instance"]);
    }

    #[test]
    fn test_unnamed_variable_is_skipped() {
        let source = "class A { void m() { for (var _ : items) {} int _ = 1; } }";
        assert!(names(source, Role::LocalVariable).is_empty());
    }

    #[test]
    fn test_lex_error_is_reported() {
        let err = extract_occurrences("class A { String s = \"unterminated; }").unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString(_)));
    }

    #[test]
    fn test_unbalanced_source_terminates() {
        // Missing closing braces and a stray one at top level.
        let source = "} class A { void m() { int x = (1; ";
        let occurrences = extract(source);
        assert_eq!(occurrences[0], ("A".to_string(), Role::Class));
    }
}

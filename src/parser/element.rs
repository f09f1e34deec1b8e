//! Web-component @ annotation parser.
//!
//! Extracts documentation from a widget source file written in the
//! `// @tag value` convention:
//!
//! - `// @element x-slider` opens the element block (events, parts, class)
//! - `// @property` / `// @method` open member blocks that end at the
//!   member's own source code
//! - plain `// ` comments inside a block become descriptions
//!
//! The source is tokenized in full first, then the token list is walked to
//! build one [`ElementMeta`]. Parsing is permissive: malformed annotations
//! degrade to default field values and never fail.

use crate::model::*;
use crate::scanner::{CharScanner, TokenScanner};

/// Tokens produced by the first pass over a widget source file.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `// @tag value`, value folded across continuation lines
    Annotation { tag: String, value: String },
    /// A `// ` comment block, folded the same way
    Comment { value: String },
    /// A run of non-comment source text
    Code { value: String },
    Eof,
}

// Continuation lines carry their text at a fixed distance after the `//`:
// wrapped annotation values sit under the tag (3 spaces), wrapped comment
// prose sits under the `// ` prefix (1 space). Zero spaces marks an empty
// comment line in either block. The two sets are distinct on purpose.
const ANNOTATION_CONTINUATION_INDENTS: &[usize] = &[0, 3];
const COMMENT_CONTINUATION_INDENTS: &[usize] = &[0, 1];

/// Parse one widget source file into its element metadata.
pub fn parse(input: &str) -> ElementMeta {
    let mut tokens = TokenScanner::new(tokenize(input));
    let mut meta = ElementMeta::default();

    loop {
        match tokens.read().clone() {
            Token::Annotation { tag, value } => match tag.as_str() {
                "element" => parse_element_block(&mut tokens, &mut meta, value),
                "property" => {
                    let property = parse_property_block(&mut tokens);
                    meta.properties.push(property);
                }
                "method" => {
                    let method = parse_method_block(&mut tokens);
                    meta.methods.push(method);
                }
                _ => {}
            },
            Token::Eof => break,
            _ => {}
        }
    }

    meta
}

// -- Tokenizer ----------------------------------------------------------------

/// Tokenize a widget source file. The token list always ends with `Eof`.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut scanner = CharScanner::new(input);
    let mut tokens = Vec::new();

    loop {
        scanner.eat_whitespace();
        if scanner.peek(1).is_none() {
            tokens.push(Token::Eof);
            break;
        }
        if scanner.peek(4) == Some("// @") {
            tokens.push(read_annotation(&mut scanner));
        } else if scanner.peek(3) == Some("// ") {
            tokens.push(read_comment(&mut scanner));
        } else {
            tokens.push(read_code(&mut scanner));
        }
    }

    tokens
}

/// Read `// @tag value`, folding continuation lines into the value.
fn read_annotation(scanner: &mut CharScanner) -> Token {
    scanner.read(4);

    let mut tag = String::new();
    while let Some(ch) = scanner.peek(1) {
        if ch == " " || ch == "\n" {
            break;
        }
        tag.push_str(scanner.read(1));
    }
    scanner.eat_spaces();

    let mut value = String::new();
    concat_line(&mut value, &read_line(scanner));
    fold_continuations(scanner, &mut value, ANNOTATION_CONTINUATION_INDENTS);

    Token::Annotation { tag, value }
}

/// Read a `// ` comment block, folding continuation lines.
fn read_comment(scanner: &mut CharScanner) -> Token {
    scanner.read(3);

    let mut value = String::new();
    concat_line(&mut value, &read_line(scanner));
    fold_continuations(scanner, &mut value, COMMENT_CONTINUATION_INDENTS);

    Token::Comment { value }
}

/// Fold subsequent comment lines into `value` while they match the block's
/// continuation indent set and do not open a new `@` tag. The cursor is
/// rewound to the end of the last folded line as soon as a non-matching
/// line is seen.
fn fold_continuations(scanner: &mut CharScanner, value: &mut String, indents: &[usize]) {
    loop {
        scanner.store_position();
        if scanner.peek(1) != Some("\n") {
            break;
        }
        scanner.read(1);
        scanner.eat_spaces();
        if scanner.peek(2) != Some("//") {
            scanner.restore_position();
            break;
        }
        scanner.read(2);
        let spaces = scanner.eat_spaces().len();
        if scanner.peek(1) == Some("@") {
            scanner.restore_position();
            break;
        }
        if !indents.contains(&spaces) {
            scanner.restore_position();
            break;
        }
        concat_line(value, &read_line(scanner));
    }
}

/// Read raw source text up to (but not including) the next line that begins
/// with `// ` after its indentation, or to end of input.
fn read_code(scanner: &mut CharScanner) -> Token {
    let mut value = String::new();

    loop {
        // Consume one line, newline included.
        loop {
            let ch = scanner.read(1);
            if ch.is_empty() {
                return Token::Code { value };
            }
            value.push_str(ch);
            if ch == "\n" {
                break;
            }
        }
        scanner.store_position();
        scanner.eat_spaces();
        let at_comment = scanner.peek(3) == Some("// ");
        scanner.restore_position();
        if at_comment {
            break;
        }
    }

    Token::Code { value }
}

/// Consume the rest of the current line, exclusive of the newline.
fn read_line(scanner: &mut CharScanner) -> String {
    let mut line = String::new();
    while let Some(ch) = scanner.peek(1) {
        if ch == "\n" {
            break;
        }
        line.push_str(scanner.read(1));
    }
    line
}

/// Join a folded line onto an accumulated value with a single newline; an
/// empty accumulator takes the line without a leading separator.
fn concat_line(value: &mut String, line: &str) {
    if value.is_empty() {
        value.push_str(line);
    } else {
        value.push('\n');
        value.push_str(line);
    }
}

// -- Token walker -------------------------------------------------------------

/// `@element` block: events and parts, terminated by the class declaration.
fn parse_element_block(tokens: &mut TokenScanner<Token>, meta: &mut ElementMeta, name: String) {
    meta.element_name = name;

    loop {
        match tokens.read().clone() {
            Token::Annotation { tag, value } => match tag.as_str() {
                "event" => {
                    let (name, description) = split_name_description(&value);
                    let (name, bubbles) = match name.strip_prefix('^') {
                        Some(stripped) => (stripped, true),
                        None => (name, false),
                    };
                    meta.events.push(EventMeta {
                        name: name.to_string(),
                        description: description.to_string(),
                        bubbles,
                    });
                }
                "part" => {
                    let (name, description) = split_name_description(&value);
                    meta.parts.push(PartMeta {
                        name: name.to_string(),
                        description: description.to_string(),
                    });
                }
                _ => {}
            },
            Token::Code { value } => {
                // The built-in dialog element is augmented rather than
                // subclassed, so no class declaration exists for it.
                meta.class_name = if meta.element_name == "dialog" {
                    "HTMLDialogElement".to_string()
                } else {
                    extract_class_name(&value)
                };
                break;
            }
            Token::Eof => break,
            _ => {}
        }
    }
}

/// `@property` block, terminated by the accessor's code.
fn parse_property_block(tokens: &mut TokenScanner<Token>) -> PropertyMeta {
    let mut property = PropertyMeta::default();
    let mut attribute: Option<String> = None;

    loop {
        match tokens.read().clone() {
            Token::Annotation { tag, value } => match tag.as_str() {
                "attribute" => attribute = Some(value),
                "type" => property.type_decl = Some(parse_type_decl(value)),
                "default" => property.default = Some(value),
                "readOnly" => property.read_only = true,
                _ => {}
            },
            Token::Comment { value } => property.description = value,
            Token::Code { value } => {
                property.property_name = extract_property_name(&value);
                break;
            }
            Token::Eof => break,
        }
    }

    property.attribute_name = match attribute {
        Some(name) if !name.is_empty() => Some(name),
        _ => Some(property.property_name.to_lowercase()),
    };

    property
}

/// `@method` block, terminated by the method's code.
fn parse_method_block(tokens: &mut TokenScanner<Token>) -> MethodMeta {
    let mut method = MethodMeta::default();

    loop {
        match tokens.read().clone() {
            Token::Annotation { tag, value } => {
                if tag == "type" {
                    method.type_decl = Some(value);
                }
            }
            Token::Comment { value } => method.description = value,
            Token::Code { value } => {
                method.name = extract_method_signature(&value);
                break;
            }
            Token::Eof => break,
        }
    }

    method
}

/// Split `name - description`; a missing description is the empty string.
fn split_name_description(value: &str) -> (&str, &str) {
    match value.split_once(" - ") {
        Some((name, description)) => (name, description),
        None => (value, ""),
    }
}

/// `string || number` → union of alternatives; anything else is one type.
fn parse_type_decl(value: String) -> TypeDecl {
    if value.contains(" || ") {
        TypeDecl::Union(value.split(" || ").map(str::to_string).collect())
    } else {
        TypeDecl::Single(value)
    }
}

/// Class name from a `class X extends Y` declaration: the text after
/// `"class "` up to the next space.
fn extract_class_name(code: &str) -> String {
    match code.find("class ") {
        Some(index) => {
            let rest = &code[index + 6..];
            let end = rest.find(' ').unwrap_or(rest.len());
            rest[..end].to_string()
        }
        None => String::new(),
    }
}

/// Accessor name from `get name(...)`: the text between `"get "` and the
/// following `"("`.
fn extract_property_name(code: &str) -> String {
    let Some(index) = code.find("get ") else {
        return String::new();
    };
    let rest = &code[index + 4..];
    match rest.find('(') {
        Some(end) => rest[..end].to_string(),
        None => String::new(),
    }
}

/// Method signature: the declaration text up through the closing paren of
/// the parameter list, located via the literal `") {\n"` marker.
fn extract_method_signature(code: &str) -> String {
    match code.find(") {\n") {
        Some(index) => code[..index + 1].to_string(),
        None => String::new(),
    }
}

pub mod block;
pub mod statement;

use statement::{
    Assignment, ClassDecl, Comparator, Condition, IfStatement, ObjectDecl, PrintStatement,
    Statement, Target, VariableDecl,
};

const DECLARATION_PREFIX: &str = "There is ";
const CLASS_PREFIX: &str = "There is a class ";
const VARIABLE_PREFIX: &str = "There is a variable ";
const OBJECT_PREFIXES: [&str; 2] = ["There is a ", "There is an "];
const LIST_HEADER_SUFFIX: &str = ", has:";
const IF_PREFIX: &str = "if ";
const IF_SUFFIX: &str = " then:";
const PRINT_PREFIX: &str = "print ";
const PRINT_SUFFIX: &str = " to console.";

/// The marker separating the true branch of a conditional from its false branch.
pub const ELSE_MARKER: &str = "else:";

type Recognizer = for<'src> fn(&'src str) -> Option<Statement<'src>>;

/// Recognizers in priority order. The first one to match wins.
const RECOGNIZERS: [Recognizer; 6] = [
    recognize_class_decl,
    recognize_object_decl,
    recognize_variable_decl,
    recognize_assignment,
    recognize_if,
    recognize_print,
];

pub fn is_identifier(text: &str) -> bool {
    !text.is_empty()
        && text
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Recognize the statement starting at a trimmed line. `None` means the line
/// is not a statement and has no effect.
pub fn recognize(content: &str) -> Option<Statement<'_>> {
    RECOGNIZERS
        .iter()
        .find_map(|recognizer| recognizer(content))
}

fn non_empty(text: &str) -> Option<&str> {
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}

fn identifier(text: &str) -> Option<&str> {
    is_identifier(text).then_some(text)
}

/// `<property> of <object>`, both plain identifiers.
pub fn parse_property_access(text: &str) -> Option<(&str, &str)> {
    let (property, object) = text.split_once(" of ")?;
    Some((identifier(property)?, identifier(object)?))
}

pub fn recognize_class_decl(content: &str) -> Option<Statement<'_>> {
    let name = content
        .strip_prefix(CLASS_PREFIX)?
        .strip_suffix(LIST_HEADER_SUFFIX)?;
    Some(Statement::ClassDecl(ClassDecl {
        name: identifier(name)?,
    }))
}

pub fn recognize_object_decl(content: &str) -> Option<Statement<'_>> {
    // A malformed class header is not an object of class `class`.
    if content.starts_with(CLASS_PREFIX) {
        return None;
    }
    let rest = OBJECT_PREFIXES
        .iter()
        .find_map(|prefix| content.strip_prefix(prefix))?
        .strip_suffix(LIST_HEADER_SUFFIX)?;
    let (class, name) = rest.split_once(" called ")?;
    Some(Statement::ObjectDecl(ObjectDecl {
        class: identifier(class)?,
        name: identifier(name)?,
    }))
}

pub fn recognize_variable_decl(content: &str) -> Option<Statement<'_>> {
    let rest = content.strip_prefix(VARIABLE_PREFIX)?.strip_suffix('.')?;
    let (declaration, initial) = rest.split_once(", is ")?;
    let (name, kind) = declaration.split_once(" of ")?;
    Some(Statement::VariableDecl(VariableDecl {
        name: identifier(name)?,
        kind: identifier(kind)?,
        initial: non_empty(initial)?,
    }))
}

pub fn recognize_assignment(content: &str) -> Option<Statement<'_>> {
    if content.starts_with(DECLARATION_PREFIX) {
        return None;
    }
    let body = content.strip_suffix('.')?;
    let (target, value) = body.split_once(" is ")?;
    let target = match parse_property_access(target) {
        Some((property, object)) => Target::Property { property, object },
        None => Target::Variable(identifier(target)?),
    };
    Some(Statement::Assignment(Assignment {
        target,
        value: non_empty(value)?,
    }))
}

pub fn recognize_if(content: &str) -> Option<Statement<'_>> {
    let condition = content.strip_prefix(IF_PREFIX)?.strip_suffix(IF_SUFFIX)?;
    Some(Statement::If(IfStatement {
        condition: non_empty(condition)?,
    }))
}

pub fn recognize_print(content: &str) -> Option<Statement<'_>> {
    let value = content
        .strip_prefix(PRINT_PREFIX)?
        .strip_suffix(PRINT_SUFFIX)?;
    Some(Statement::Print(PrintStatement {
        value: non_empty(value)?,
    }))
}

/// `a property <name> of <type>`; the leading `a property` is optional.
pub fn parse_class_property(item: &str) -> Option<(&str, &str)> {
    let item = item.strip_prefix("a property ").unwrap_or(item).trim();
    let (name, kind) = item.split_once(" of ")?;
    Some((identifier(name.trim())?, identifier(kind.trim())?))
}

/// `<property> is <expression>`.
pub fn parse_object_property(item: &str) -> Option<(&str, &str)> {
    let (name, value) = item.split_once(" is ")?;
    Some((identifier(name.trim())?, non_empty(value)?))
}

/// Split `<lhs> is <comparator> than <rhs>` at the right-most comparator.
pub fn parse_condition(text: &str) -> Option<Condition<'_>> {
    let (index, comparator) = Comparator::ALL
        .iter()
        .filter_map(|comparator| {
            text.rfind(comparator.phrase())
                .map(|index| (index, *comparator))
        })
        .max_by_key(|(index, _)| *index)?;
    let lhs = non_empty(&text[..index])?;
    let rhs = non_empty(&text[index + comparator.phrase().len()..])?;
    Some(Condition {
        lhs,
        comparator,
        rhs,
    })
}

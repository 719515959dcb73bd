/// A statement recognized from the first line of its text.
///
/// Class and object declarations only describe their header here; their
/// property lists are read from the following lines by the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'src> {
    ClassDecl(ClassDecl<'src>),
    ObjectDecl(ObjectDecl<'src>),
    VariableDecl(VariableDecl<'src>),
    Assignment(Assignment<'src>),
    If(IfStatement<'src>),
    Print(PrintStatement<'src>),
}

impl Statement<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Statement::ClassDecl(_) => "class declaration",
            Statement::ObjectDecl(_) => "object declaration",
            Statement::VariableDecl(_) => "variable declaration",
            Statement::Assignment(_) => "assignment",
            Statement::If(_) => "conditional",
            Statement::Print(_) => "print",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDecl<'src> {
    pub name: &'src str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectDecl<'src> {
    pub class: &'src str,
    pub name: &'src str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableDecl<'src> {
    pub name: &'src str,
    pub kind: &'src str,
    pub initial: &'src str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'src> {
    Variable(&'src str),
    Property { property: &'src str, object: &'src str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'src> {
    pub target: Target<'src>,
    pub value: &'src str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfStatement<'src> {
    pub condition: &'src str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintStatement<'src> {
    pub value: &'src str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Greater,
    Less,
    Equal,
}

impl Comparator {
    pub const ALL: [Comparator; 3] = [Comparator::Greater, Comparator::Less, Comparator::Equal];

    /// The connecting phrase between the two operands, e.g. ` is greater than `.
    pub fn phrase(&self) -> &'static str {
        match self {
            Comparator::Greater => " is greater than ",
            Comparator::Less => " is less than ",
            Comparator::Equal => " is equal than ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition<'src> {
    pub lhs: &'src str,
    pub comparator: Comparator,
    pub rhs: &'src str,
}

/// One continuation line of a class or object declaration list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLine<'src> {
    pub items: &'src str,
    pub is_last: bool,
}

impl<'src> ListLine<'src> {
    pub fn new(content: &'src str) -> Self {
        match content.strip_suffix('.') {
            Some(items) => Self {
                items: items.trim(),
                is_last: true,
            },
            None => Self {
                items: content,
                is_last: false,
            },
        }
    }

    /// The comma separated items of the line. Commas inside `"..."` do not
    /// separate items.
    pub fn items(&self) -> Vec<&'src str> {
        let mut items = Vec::new();
        let mut in_quotes = false;
        let mut start = 0;
        for (index, c) in self.items.char_indices() {
            match c {
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => {
                    items.push(&self.items[start..index]);
                    start = index + 1;
                }
                _ => {}
            }
        }
        items.push(&self.items[start..]);
        items
            .into_iter()
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect()
    }
}

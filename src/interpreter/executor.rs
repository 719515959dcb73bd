use super::SystemContext;
use crate::environment::Environment;
use crate::evaluator::ExpressionEvaluator;
use crate::parser::{
    self,
    block::extract_branches,
    statement::{
        Assignment, ClassDecl, IfStatement, ListLine, ObjectDecl, PrintStatement, Statement,
        Target, VariableDecl,
    },
};
use crate::source::Line;
use crate::value::{
    error::{RuntimeError, RuntimeErrorKind},
    Value,
};
use compact_str::{CompactString, ToCompactString};

/// Forward-only position over one line sequence.
#[derive(Debug)]
pub struct LineCursor<'a, 'src> {
    lines: &'a [Line<'src>],
    position: usize,
}

impl<'a, 'src> LineCursor<'a, 'src> {
    pub fn new(lines: &'a [Line<'src>]) -> Self {
        Self { lines, position: 0 }
    }

    pub fn next_line(&mut self) -> Option<Line<'src>> {
        let line = self.lines.get(self.position).copied()?;
        self.position += 1;
        Some(line)
    }

    pub fn remaining(&self) -> &'a [Line<'src>] {
        &self.lines[self.position..]
    }

    pub fn advance(&mut self, count: usize) {
        self.position = (self.position + count).min(self.lines.len());
    }

    /// Read the lines of a declaration list up to and including the line
    /// ending with `.`, or to the end of the sequence.
    pub fn take_list(&mut self) -> Vec<ListLine<'src>> {
        let mut list = Vec::new();
        while let Some(line) = self.next_line() {
            let list_line = ListLine::new(line.content());
            list.push(list_line);
            if list_line.is_last {
                break;
            }
        }
        list
    }
}

pub struct Executor<'run, C: SystemContext> {
    environment: &'run mut Environment,
    context: &'run mut C,
}

impl<'run, C> Executor<'run, C>
where
    C: SystemContext,
{
    pub fn new(environment: &'run mut Environment, context: &'run mut C) -> Self {
        Self {
            environment,
            context,
        }
    }

    /// Run a line sequence to its end with its own cursor.
    pub fn execute_lines(&mut self, lines: &[Line<'_>]) -> Result<(), RuntimeError> {
        let mut cursor = LineCursor::new(lines);
        while let Some(line) = cursor.next_line() {
            self.execute_line(line, &mut cursor)?;
        }
        Ok(())
    }

    fn execute_line<'src>(
        &mut self,
        line: Line<'src>,
        cursor: &mut LineCursor<'_, 'src>,
    ) -> Result<(), RuntimeError> {
        let Some(statement) = parser::recognize(line.content()) else {
            tracing::trace!(line = line.number, text = line.content(), "skipping line");
            return Ok(());
        };
        tracing::trace!(line = line.number, statement = statement.name(), "executing");

        match statement {
            Statement::ClassDecl(decl) => {
                self.execute_class_declaration(decl, cursor);
                Ok(())
            }
            Statement::ObjectDecl(decl) => self.execute_object_declaration(line, decl, cursor),
            Statement::VariableDecl(decl) => {
                self.execute_variable_declaration(decl);
                Ok(())
            }
            Statement::Assignment(stmt) => self.execute_assignment(line, stmt),
            Statement::If(stmt) => self.execute_if(line, stmt, cursor),
            Statement::Print(stmt) => {
                self.execute_print(stmt);
                Ok(())
            }
        }
    }

    fn evaluate(&self, expr: &str) -> Value {
        ExpressionEvaluator::evaluate_expression(expr, &*self.environment)
    }

    fn execute_class_declaration(&mut self, decl: ClassDecl, cursor: &mut LineCursor) {
        let mut properties = Vec::new();
        for list_line in cursor.take_list() {
            for item in list_line.items() {
                match parser::parse_class_property(item) {
                    Some((name, kind)) => {
                        properties.push((name.to_compact_string(), kind.to_compact_string()))
                    }
                    None => tracing::trace!(class = decl.name, item, "ignoring property item"),
                }
            }
        }
        tracing::debug!(class = decl.name, properties = properties.len(), "defined class");
        self.environment.define_class(decl.name, properties);
    }

    fn execute_object_declaration(
        &mut self,
        line: Line,
        decl: ObjectDecl,
        cursor: &mut LineCursor,
    ) -> Result<(), RuntimeError> {
        let mut values: Vec<(CompactString, Value)> = Vec::new();
        for list_line in cursor.take_list() {
            for item in list_line.items() {
                match parser::parse_object_property(item) {
                    Some((name, expr)) => {
                        values.push((name.to_compact_string(), self.evaluate(expr)))
                    }
                    None => tracing::trace!(object = decl.name, item, "ignoring property item"),
                }
            }
        }

        let class = self
            .environment
            .lookup_class(decl.class)
            .ok_or_else(|| RuntimeError {
                kind: RuntimeErrorKind::UnknownClass {
                    class: decl.class.to_compact_string(),
                    object: decl.name.to_compact_string(),
                },
                line: line.number,
                span: line.span,
            })?;

        for (name, _) in values.iter() {
            if !class.has_property(name) {
                tracing::debug!(
                    class = decl.class,
                    property = %name,
                    "property not declared by class"
                );
            }
        }

        let instance = self.environment.define_object(decl.name, class);
        for (name, value) in values {
            instance.set_property(&name, value);
        }
        tracing::debug!(object = decl.name, class = decl.class, "defined object");
        Ok(())
    }

    fn execute_variable_declaration(&mut self, decl: VariableDecl) {
        let value = self.evaluate(decl.initial);
        tracing::debug!(variable = decl.name, kind = decl.kind, %value, "defined variable");
        self.environment.define_variable(decl.name, value);
    }

    fn execute_assignment(&mut self, line: Line, stmt: Assignment) -> Result<(), RuntimeError> {
        let value = self.evaluate(stmt.value);
        match stmt.target {
            Target::Variable(name) => {
                self.environment.define_variable(name, value);
                Ok(())
            }
            Target::Property { property, object } => {
                let instance =
                    self.environment
                        .lookup_object_mut(object)
                        .ok_or_else(|| RuntimeError {
                            kind: RuntimeErrorKind::UnknownObject {
                                object: object.to_compact_string(),
                                property: property.to_compact_string(),
                            },
                            line: line.number,
                            span: line.span,
                        })?;
                instance.set_property(property, value);
                Ok(())
            }
        }
    }

    fn execute_if(
        &mut self,
        line: Line,
        stmt: IfStatement,
        cursor: &mut LineCursor,
    ) -> Result<(), RuntimeError> {
        let condition =
            ExpressionEvaluator::evaluate_condition(stmt.condition, &*self.environment);
        let extraction = extract_branches(cursor.remaining(), line.indent());
        cursor.advance(extraction.consumed);

        tracing::debug!(line = line.number, condition, "branching");
        let branch = if condition {
            &extraction.branches.success
        } else {
            &extraction.branches.failure
        };
        self.execute_lines(branch)
    }

    fn execute_print(&mut self, stmt: PrintStatement) {
        let value = self.evaluate(stmt.value);
        self.context.writeln(&value.to_string());
    }
}

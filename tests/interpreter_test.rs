use std::{
    fs::{read_dir, read_to_string},
    path::Path,
};

use color_eyre::{eyre::Context, Result};
use compact_str::CompactString;
use felice::{
    interpreter::{context::BufferedContext, Interpreter},
    value::{
        error::{RuntimeErrorKind, SourceError},
        formatter::{BasicFormatter, ValueFormatter},
        Value,
    },
};

#[test]
fn test_assignment() -> Result<()> {
    let input_dir = Path::new("./test_data/interpreter/assignment");
    test_engine(input_dir)
}

#[test]
fn test_class() -> Result<()> {
    let input_dir = Path::new("./test_data/interpreter/class");
    test_engine(input_dir)
}

#[test]
fn test_if() -> Result<()> {
    let input_dir = Path::new("./test_data/interpreter/if");
    test_engine(input_dir)
}

#[test]
fn test_miscellaneous() -> Result<()> {
    let input_dir = Path::new("./test_data/interpreter/miscellaneous");
    test_engine(input_dir)
}

#[test]
fn test_object() -> Result<()> {
    let input_dir = Path::new("./test_data/interpreter/object");
    test_engine(input_dir)
}

#[test]
fn test_print() -> Result<()> {
    let input_dir = Path::new("./test_data/interpreter/print");
    test_engine(input_dir)
}

#[test]
fn test_variable() -> Result<()> {
    let input_dir = Path::new("./test_data/interpreter/variable");
    test_engine(input_dir)
}

fn run(source: &str) -> (Interpreter<BufferedContext>, Result<(), String>) {
    let mut interpreter = Interpreter::new(BufferedContext::new());
    let result = interpreter
        .run(source)
        .map_err(|e| BasicFormatter.format_error(&e));
    (interpreter, result)
}

#[test]
fn object_properties_are_set_from_declaration() {
    let source = "\
There is a class Point, has:
    a property x of Number,
    a property y of Number.
There is a Point called origin, has:
    x is 0, y is 0.";
    let (interpreter, result) = run(source);
    assert_eq!(result, Ok(()));

    let environment = interpreter.environment();
    let origin = environment.lookup_object("origin").expect("origin exists");
    assert_eq!(origin.get_property("x"), Value::Integer(0));
    assert_eq!(origin.get_property("y"), Value::Integer(0));
    assert_eq!(origin.get_property("z"), Value::Null);

    let point = environment.lookup_class("Point").expect("Point exists");
    assert_eq!(origin.class, point);
    assert_eq!(
        point.properties().collect::<Vec<_>>(),
        vec![("x", "Number"), ("y", "Number")]
    );
}

#[test]
fn assigning_to_unknown_object_changes_nothing() {
    let source = "\
There is a variable x of Number, is 1.
x of ghost is 5.
x is 2.";
    let mut interpreter = Interpreter::new(BufferedContext::new());
    let error = interpreter.run(source).expect_err("ghost is not an object");
    assert_eq!(
        error.kind,
        RuntimeErrorKind::UnknownObject {
            object: CompactString::new("ghost"),
            property: CompactString::new("x"),
        }
    );
    assert_eq!(error.line, 2);
    assert_eq!(error.code(), "RT002");

    let environment = interpreter.environment();
    assert!(environment.lookup_object("ghost").is_none());
    assert_eq!(environment.lookup_variable("x"), Some(&Value::Integer(1)));
}

#[test]
fn unknown_class_leaves_no_instance() {
    let source = "\
There is a Ghost called g, has:
    x is 1.";
    let mut interpreter = Interpreter::new(BufferedContext::new());
    let error = interpreter.run(source).expect_err("Ghost is not a class");
    assert_eq!(error.code(), "RT001");
    assert_eq!(&source[error.span.range()], "There is a Ghost called g, has:");
    assert!(interpreter.environment().lookup_object("g").is_none());
}

#[test]
fn false_condition_without_else_has_no_effect() {
    let source = concat!(
        "if 1 is greater than 2 then:\n",
        "    x is 1.\n",
        "    print x to console.",
    );
    let (interpreter, result) = run(source);
    assert_eq!(result, Ok(()));
    assert!(interpreter.environment().lookup_variable("x").is_none());
    assert_eq!(interpreter.context().output(), "");
}

#[test]
fn state_persists_between_runs_of_one_interpreter() {
    let mut interpreter = Interpreter::new(BufferedContext::new());
    interpreter.run("x is 3.").expect("runs");
    interpreter.run("print x to console.").expect("runs");
    assert_eq!(interpreter.into_context().into_data(), "3\n");
}

#[test]
fn run_file_reports_missing_script() -> Result<()> {
    let mut interpreter = Interpreter::new(BufferedContext::new());
    interpreter.run_file(Path::new("./test_data/does_not_exist.fel"))?;
    let context = interpreter.into_context();
    assert_eq!(context.output(), "");
    assert_eq!(
        context.reports(),
        "File not found: ./test_data/does_not_exist.fel\n"
    );
    Ok(())
}

#[test]
fn run_file_executes_script() -> Result<()> {
    let mut interpreter = Interpreter::new(BufferedContext::new());
    interpreter.run_file(Path::new("./test_data/run_file/yes.fel"))?;
    assert_eq!(interpreter.into_context().into_data(), "yes\n");
    Ok(())
}

#[test]
fn run_file_surfaces_runtime_errors() {
    let mut interpreter = Interpreter::new(BufferedContext::new());
    let result = interpreter.run_file(Path::new("./test_data/run_file/ghost.fel"));
    match result {
        Err(SourceError::Runtime(error)) => {
            assert_eq!(error.line, 2);
            assert_eq!(error.code(), "RT002");
        }
        other => panic!("Expected a runtime error but got {other:?}"),
    }
    assert!(interpreter.environment().lookup_object("ghost").is_none());
}

#[test]
fn malformed_declarations_are_skipped() {
    let source = "\
There is a variable my var of Number, is 5.
There is a class called Foo, has:
    a property x of Number.
There is a Point called, has:
print \"ok\" to console.";
    let (interpreter, result) = run(source);
    assert_eq!(result, Ok(()));
    let environment = interpreter.environment();
    assert!(environment.lookup_variable("There").is_none());
    assert!(environment.lookup_class("class").is_none());
    assert!(environment.lookup_object("Foo").is_none());
    assert_eq!(interpreter.context().output(), "ok\n");
}

#[test]
fn quoted_commas_stay_inside_object_values() {
    let source = "\
There is a class Label, has:
    a property text of Text.
There is a Label called tag, has:
    text is \"a, b\", size is 2.
print text of tag to console.
print size of tag to console.";
    let (interpreter, result) = run(source);
    assert_eq!(result, Ok(()));
    assert_eq!(interpreter.into_context().into_data(), "a, b\n2\n");
}

struct TestCase {
    name: String,
    source: String,
    output: String,
    runtime_errors: String,
}

impl TestCase {
    pub fn check(&self) {
        let mut interpreter = Interpreter::new(BufferedContext::new());
        let result = interpreter.run(&self.source);
        let context = interpreter.into_context();

        if let Err(e) = result {
            let msg = BasicFormatter.format_error(&e);
            assert_eq!(
                self.runtime_errors, msg,
                "Failed test {} at runtime.",
                self.name,
            );
        } else {
            assert_eq!(
                self.runtime_errors, "",
                "Failed test {} by not raising an error.",
                self.name,
            );
        }
        let msg = context.into_data();
        assert_eq!(self.output, msg, "Failed test {} at print.", self.name);
    }
}

fn test_engine(input_dir: &Path) -> Result<()> {
    let mut succeeded = true;
    for entry in read_dir(input_dir).context("Failed to open input test data folder")? {
        let entry = entry?;
        let path = entry.path();

        let Some(extension) = path.extension() else {
            continue;
        };

        if extension != "fel" {
            continue;
        }

        println!("Parsing {path:?}");
        let test_case = parse_test_case(&path)?;
        println!("Checking {}", test_case.name);

        let res = std::panic::catch_unwind(|| {
            test_case.check();
        });
        if res.is_err() {
            println!("\tFails test case {}", test_case.name);
            succeeded = false;
        }
    }

    assert!(succeeded, "Some test cases in {input_dir:?} failed.");

    Ok(())
}

fn parse_test_case(input_path: &Path) -> Result<TestCase> {
    let test_name = AsRef::<Path>::as_ref(
        input_path
            .file_name()
            .expect("File name can't be none as the path is to a real file."),
    )
    .to_string_lossy();

    let input = read_to_string(input_path).context("Failed to open input test data file")?;

    let mut source_lines = Vec::new();
    let mut expected_outputs = Vec::new();
    let mut expected_runtime_errors = Vec::new();

    for (line_index, line) in input.lines().enumerate() {
        let code = if let Some(comment_index) = line.find("// expect:") {
            let expected = line[comment_index..]
                .strip_prefix("// expect:")
                .unwrap()
                .trim()
                .to_string();
            expected_outputs.push(expected);
            &line[..comment_index]
        } else if let Some(comment_index) = line.find("// expect runtime error:") {
            let expected = line[comment_index..]
                .strip_prefix("// expect runtime error:")
                .unwrap()
                .trim();
            expected_runtime_errors.push(format!("[line {}] {expected}", line_index + 1));
            &line[..comment_index]
        } else {
            line
        };
        source_lines.push(code.trim_end().to_string());
    }

    expected_outputs.push(String::new());
    Ok(TestCase {
        name: test_name.into_owned(),
        source: source_lines.join("\n"),
        output: expected_outputs.join("\n"),
        runtime_errors: expected_runtime_errors.join("\n"),
    })
}

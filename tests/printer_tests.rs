use tinyc::ast::{listing, to_source};
use tinyc::parse_source;
use tinyc::utils::errors::{TinyError, TinyResult};

const FACTORIAL: &str = "
{ Sample program in TINY language - computes factorial }
read x; { input an integer }
if 0 < x then { don't compute if x <= 0 }
  fact := 1;
  repeat
    fact := fact * x;
    x := x - 1
  until x = 0;
  write fact  { output factorial of x }
end
";

#[test]
fn test_listing_of_if_statement() {
    let tree = parse_source("if x<1 then write x end");
    let expected = "\
If
  Op: <
    Id: x
    Const: 1
  Write
    Id: x
";
    assert_eq!(listing(tree.root()), expected);
}

#[test]
fn test_listing_of_sequence_keeps_siblings_at_same_depth() {
    let tree = parse_source("read n; repeat n := n - 1 until n = 0; write n");
    let expected = "\
Read: n
Repeat
  Assign to: n
    Op: -
      Id: n
      Const: 1
  Op: =
    Id: n
    Const: 0
Write
  Id: n
";
    assert_eq!(listing(tree.root()), expected);
}

#[test]
fn test_listing_skips_absent_children() {
    let tree = parse_source("x:=");
    assert_eq!(listing(tree.root()), "Assign to: x\n");
}

#[test]
fn test_factorial_source_rendering() {
    let tree = parse_source(FACTORIAL);
    assert!(!tree.has_errors());
    let expected = "\
read x;
if 0 < x then
  fact := 1;
  repeat
    fact := fact * x;
    x := x - 1
  until x = 0;
  write fact
end
";
    assert_eq!(to_source(tree.root()), expected);
}

#[test]
fn test_rendered_source_parses_to_same_tree() {
    let first = parse_source(FACTORIAL);
    let rendered = to_source(first.root());
    let second = parse_source(&rendered);
    assert!(!second.has_errors());
    let (a, b) = (first.root().unwrap(), second.root().unwrap());
    assert!(a.as_node().structurally_eq(b.as_node()));
}

#[test]
fn test_else_branch_rendering() {
    let tree = parse_source("if a = (b < c) then write 1 else write (2 - 3) - 4 end");
    assert_eq!(
        to_source(tree.root()),
        "if a = (b < c) then\n  write 1\nelse\n  write (2 - 3) - 4\nend\n"
    );
}

#[test]
fn test_read_rejects_wrong_extension() -> TinyResult<()> {
    let result = tinyc::read(std::path::Path::new("program.txt"));
    match result {
        Err(TinyError::FileReadError(message)) => {
            assert!(message.contains(".tny"));
            Ok(())
        }
        other => panic!("Expected a FileReadError, but got: {:?}", other),
    }
}

#[test]
fn test_read_missing_file_is_io_error() -> TinyResult<()> {
    let result = tinyc::read(std::path::Path::new("definitely/not/here.tny"));
    assert!(matches!(result, Err(TinyError::IoError(_))));
    Ok(())
}

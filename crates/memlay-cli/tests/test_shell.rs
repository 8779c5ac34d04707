//! Integration tests for the memlay command shell.

use memlay_cli::{Config, Outcome, Shell, ShellError, run_script};
use memlay_core::{Error, TypeRegistry};

fn output(shell: &mut Shell, line: &str) -> String {
    match shell.execute(line) {
        Ok(Outcome::Output(text)) => text,
        other => panic!("expected output for {line:?}, got {other:?}"),
    }
}

#[test]
fn test_full_session() {
    let source = "\n\
        BOGUS\n\
        ATOMIC byte 1 1\n\
        ATOMIC short 2 2\n\
        STRUCT s1 byte short\n\
        UNION u1 byte short\n\
        DESCRIBE s1\n\
        DESCRIBE u1\n\
        DESCRIBE missing\n\
        ATOMIC bad 1\n\
        STRUCT bad\n\
        UNION bad\n\
        EXIT\n\
        DESCRIBE never_reached\n";

    let mut shell = Shell::new();
    let report = run_script(&mut shell, source);

    assert!(report.exited);
    assert_eq!(
        &report.outputs[..4],
        &[
            "Defined ATOMIC byte",
            "Defined ATOMIC short",
            "Defined STRUCT s1",
            "Defined UNION u1",
        ]
    );
    assert!(report.outputs[4].contains("[default] size: 4, waste: 1"));
    assert!(report.outputs[5].contains("overlap"));

    let failed: Vec<usize> = report.errors.iter().map(|(line, _)| *line).collect();
    assert_eq!(failed, vec![2, 9, 10, 11, 12]);
    assert!(matches!(report.errors[0].1, ShellError::UnknownCommand(_)));
    assert!(report.errors[1].1.to_string().contains("missing"));
    assert!(matches!(report.errors[2].1, ShellError::Usage(_)));
    assert!(report.errors[3].1.to_string().starts_with("usage: STRUCT"));
}

#[test]
fn test_errors_leave_registry_unchanged() {
    let mut shell = Shell::new();
    output(&mut shell, "ATOMIC char 1 1");

    let err = shell.execute("STRUCT broken char ghost").unwrap_err();
    assert!(matches!(
        err,
        ShellError::Registry(Error::UnknownType(ref name)) if name == "ghost"
    ));
    assert!(shell.execute("ATOMIC neg -1 4").is_err());
    assert!(matches!(
        shell.execute("ATOMIC x four 4"),
        Err(ShellError::InvalidNumber(_))
    ));

    assert_eq!(shell.registry().len(), 1);
    assert!(!shell.registry().contains("broken"));
}

#[test]
fn test_layout_command() {
    let mut shell = Shell::new();
    output(&mut shell, "ATOMIC char 1 1");
    output(&mut shell, "ATOMIC double 8 8");
    output(&mut shell, "STRUCT s2 char double char");

    let text = output(&mut shell, "LAYOUT s2 optimal");
    insta::assert_snapshot!(text, @r"
    s2: Layout (optimal):
      offset 0: double (size 8)
      offset 8: char (size 1)
      offset 9: char (size 1)
      trailing padding 6
      total size 16, waste 6
    ");

    assert!(output(&mut shell, "LAYOUT s2").contains("Layout (default)"));
    assert!(matches!(
        shell.execute("LAYOUT s2 sideways"),
        Err(ShellError::Registry(Error::InvalidParameter(_)))
    ));
    assert!(matches!(
        shell.execute("LAYOUT char"),
        Err(ShellError::Registry(Error::NotAStruct(_)))
    ));
}

#[test]
fn test_list_command() {
    let mut shell = Shell::new();
    output(&mut shell, "ATOMIC int 4 4");
    output(&mut shell, "UNION u int");

    assert_eq!(output(&mut shell, "LIST"), "int (atomic)\nu (union)");
}

#[test]
fn test_duplicate_definition_is_reported() {
    let mut shell = Shell::new();
    output(&mut shell, "ATOMIC int 4 4");

    let err = shell.execute("ATOMIC int 8 8").unwrap_err();
    assert_eq!(err.to_string(), "Type 'int' is already defined");
}

#[test]
fn test_prelude_shell() {
    let mut registry = TypeRegistry::new();
    Config::with_c_prelude().apply_prelude(&mut registry).unwrap();
    let mut shell = Shell::with_registry(registry);

    let text = output(&mut shell, "STRUCT point int int");
    assert_eq!(text, "Defined STRUCT point");
    assert!(output(&mut shell, "describe point").contains("[packed]  size: 8, waste: 0"));
}

#[test]
fn test_script_comments_are_skipped() {
    let mut shell = Shell::new();
    let report = run_script(&mut shell, "# scalar types\nATOMIC int 4 4\n  # indented\n");

    assert!(report.is_success());
    assert!(!report.exited);
    assert_eq!(report.outputs, vec!["Defined ATOMIC int".to_string()]);
}

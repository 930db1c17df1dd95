// tests/command_builder.rs

mod common;
use crate::common::{BASE, ProgramBuilder};

use multilaunch::errors::LaunchError;
use multilaunch::resolve::{CommandBuilder, InterpreterRule, InterpreterTable, serialize};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn serialize_appends_a_space_after_every_argument() {
    assert_eq!(serialize(&[]), "");
    assert_eq!(serialize(&["a".to_string(), "b".to_string()]), "a b ");
    // No quoting: spaces inside tokens pass straight through.
    assert_eq!(serialize(&["hello world".to_string()]), "hello world ");
}

#[test]
fn python_script_in_current_directory() -> TestResult {
    let builder = CommandBuilder::new(BASE);
    let program = ProgramBuilder::new("./run.py").arg("--x").build();

    let cmd = builder.build(&program)?;

    assert_eq!(cmd.run_directory, "./");
    assert_eq!(cmd.working_directory_change, "cd ./ && ");
    assert_eq!(cmd.interpreter_prefix, "python");
    assert_eq!(cmd.absolute_executable_path, format!("{BASE}/run.py"));
    assert_eq!(cmd.argument_string, "--x ");
    assert_eq!(
        cmd.command_line(),
        format!("cd ./ && python {BASE}/run.py --x ")
    );
    assert_eq!(cmd.to_string(), cmd.command_line());
    Ok(())
}

#[test]
fn self_executing_program_has_no_prefix() -> TestResult {
    let builder = CommandBuilder::new(BASE);
    let program = ProgramBuilder::new("a.exe").run_directory("sub").build();

    let cmd = builder.build(&program)?;

    assert_eq!(cmd.interpreter_prefix, "");
    assert_eq!(cmd.command_line(), format!("cd sub && {BASE}/a.exe "));
    Ok(())
}

#[test]
fn original_casing_is_kept_in_the_command() -> TestResult {
    let builder = CommandBuilder::new(BASE);
    let program = ProgramBuilder::new("../Tools/Deploy.PS1")
        .run_directory("../Tools")
        .args(&["-Env", "Prod"])
        .build();

    let cmd = builder.build(&program)?;

    assert_eq!(
        cmd.command_line(),
        "cd ../Tools && powershell /home/user/projects/Tools/Deploy.PS1 -Env Prod "
    );
    Ok(())
}

#[test]
fn run_directory_does_not_affect_path_resolution() -> TestResult {
    let builder = CommandBuilder::new(BASE);
    let program = ProgramBuilder::new("./b.py").run_directory("/somewhere/else").build();

    let cmd = builder.build(&program)?;

    assert_eq!(cmd.absolute_executable_path, format!("{BASE}/b.py"));
    assert_eq!(cmd.working_directory_change, "cd /somewhere/else && ");
    Ok(())
}

#[test]
fn unsupported_extension_fails() {
    let builder = CommandBuilder::new(BASE);
    let program = ProgramBuilder::new("tool.bin").build();

    match builder.build(&program) {
        Err(LaunchError::UnsupportedInterpreter { path }) => assert_eq!(path, "tool.bin"),
        other => panic!("expected UnsupportedInterpreter, got {other:?}"),
    }
}

#[test]
fn unsupported_is_reported_before_path_problems() {
    // Dispatch runs before resolution, so a bad extension wins over a bad path.
    let builder = CommandBuilder::new("/a");
    let program = ProgramBuilder::new("../../../tool.bin").build();

    assert!(matches!(
        builder.build(&program),
        Err(LaunchError::UnsupportedInterpreter { .. })
    ));
}

#[test]
fn traversal_above_root_fails() {
    let builder = CommandBuilder::new("/a");
    let program = ProgramBuilder::new("../../x.exe").build();

    assert!(matches!(
        builder.build(&program),
        Err(LaunchError::InvalidPath { requested: 2, available: 1, .. })
    ));
}

#[test]
fn empty_path_is_malformed() {
    let builder = CommandBuilder::new(BASE);
    let program = ProgramBuilder::new("").run_directory("sub").build();

    assert!(matches!(
        builder.build(&program),
        Err(LaunchError::MalformedDescriptor(_))
    ));
}

#[test]
fn custom_table_is_used_for_dispatch() -> TestResult {
    let table = InterpreterTable::builtin()
        .with_rule(InterpreterRule::interpreter(".rb", "ruby", "Ruby"));
    let builder = CommandBuilder::with_interpreters(BASE, table);
    let program = ProgramBuilder::new("./tasks.rb").arg("seed").build();

    let cmd = builder.build(&program)?;

    assert_eq!(cmd.command_line(), format!("cd ./ && ruby {BASE}/tasks.rb seed "));
    Ok(())
}

#[test]
fn upper_case_extension_dispatches_and_keeps_casing() -> TestResult {
    let builder = CommandBuilder::new(BASE);
    let program = ProgramBuilder::new("./Scripts/Setup.PY").build();

    let cmd = builder.build(&program)?;

    assert_eq!(cmd.interpreter_prefix, "python");
    assert_eq!(cmd.absolute_executable_path, format!("{BASE}/Scripts/Setup.PY"));
    Ok(())
}

#[test]
fn custom_rule_markers_are_case_insensitive() -> TestResult {
    let table = InterpreterTable::empty()
        .with_rule(InterpreterRule::interpreter(".JS", "node", "JavaScript"));
    let builder = CommandBuilder::with_interpreters(BASE, table);

    let cmd = builder.build(&ProgramBuilder::new("App.Js").build())?;

    assert_eq!(cmd.command_line(), format!("cd ./ && node {BASE}/App.Js "));
    Ok(())
}

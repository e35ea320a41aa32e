// Integration tests for the Monty interpreter

use monty::interpreter::engine::{ExecutionState, Interpreter, InterpreterConfig};
use monty::interpreter::errors::MontyError;
use monty::memory::stack::Mode;
use monty::parser::ast::Instruction;
use monty::parser::reader::parse_program;

/// Run `source` and return the printed output with the result
fn run_source(source: &str) -> (String, Result<(), MontyError>) {
    let program = parse_program(source);
    let mut interpreter = Interpreter::new(Vec::<u8>::new());
    let result = interpreter.run(&program);
    let output = String::from_utf8(interpreter.into_output()).expect("output is UTF-8");
    (output, result)
}

#[test]
fn test_push_pall() {
    let (output, result) = run_source("push 3\npush 5\npall\n");

    assert_eq!(result, Ok(()));
    assert_eq!(output, "5\n3\n");
}

#[test]
fn test_pall_empty_prints_nothing() {
    let (output, result) = run_source("pall\n");

    assert_eq!(result, Ok(()));
    assert_eq!(output, "");
}

#[test]
fn test_queue_mode_pall_in_push_order() {
    let (output, result) = run_source("queue\npush 1\npush 2\npush 3\npall\n");

    assert_eq!(result, Ok(()));
    assert_eq!(output, "1\n2\n3\n");
}

#[test]
fn test_stack_mode_pall_in_reverse_order() {
    let pushes: String = (1..=10).map(|n| format!("push {n}\n")).collect();
    let (output, _) = run_source(&format!("{pushes}pall\n"));

    let expected: String = (1..=10).rev().map(|n| format!("{n}\n")).collect();
    assert_eq!(output, expected);
}

#[test]
fn test_mode_switch_mid_program() {
    let source = "push 1\npush 2\nqueue\npush 3\npush 4\nstack\npush 5\npall\n";
    let (output, result) = run_source(source);

    assert_eq!(result, Ok(()));
    assert_eq!(output, "5\n2\n1\n3\n4\n");
}

#[test]
fn test_queue_pop_removes_oldest() {
    let (output, _) = run_source("queue\npush 1\npush 2\npop\npint\n");
    assert_eq!(output, "2\n");
}

#[test]
fn test_pint() {
    let (output, result) = run_source("push 1\npush 2\npint\npush 3\npint\n");

    assert_eq!(result, Ok(()));
    assert_eq!(output, "2\n3\n");
}

#[test]
fn test_pint_empty() {
    let (output, result) = run_source("pint\n");

    assert_eq!(result, Err(MontyError::EmptyStackOnPrint { line: 1 }));
    assert_eq!(output, "");
}

#[test]
fn test_pop() {
    let (output, result) = run_source("push 1\npush 2\npush 3\npop\npall\n");

    assert_eq!(result, Ok(()));
    assert_eq!(output, "2\n1\n");
}

#[test]
fn test_pop_empty() {
    let (output, result) = run_source("push 1\npop\npop\n");

    assert_eq!(result, Err(MontyError::EmptyStackOnPop { line: 3 }));
    assert_eq!(output, "");
}

#[test]
fn test_swap() {
    let (output, result) = run_source("push 1\npush 2\npush 3\nswap\npall\n");

    assert_eq!(result, Ok(()));
    assert_eq!(output, "2\n3\n1\n");
}

#[test]
fn test_swap_too_short() {
    let (_, result) = run_source("push 1\nswap\n");

    assert_eq!(
        result,
        Err(MontyError::StackTooShort {
            line: 2,
            opcode: "swap"
        })
    );
}

#[test]
fn test_push_missing_argument() {
    let (_, result) = run_source("push\n");
    assert_eq!(result, Err(MontyError::PushMissingArgument { line: 1 }));
}

#[test]
fn test_push_invalid_arguments() {
    for arg in ["abc", "1x", "+3", "-", "4.2", "99999999999"] {
        let (_, result) = run_source(&format!("push 1\npush {arg}\n"));
        assert_eq!(
            result,
            Err(MontyError::PushMissingArgument { line: 2 }),
            "argument {arg:?}"
        );
    }
}

#[test]
fn test_push_negative() {
    let (output, result) = run_source("push -12\npint\n");

    assert_eq!(result, Ok(()));
    assert_eq!(output, "-12\n");
}

#[test]
fn test_pchar() {
    let (output, result) = run_source("push 65\npchar\n");

    assert_eq!(result, Ok(()));
    assert_eq!(output, "A\n");
}

#[test]
fn test_pchar_bounds() {
    let (output, result) = run_source("push 0\npchar\npush 127\npchar\n");
    assert_eq!(result, Ok(()));
    assert_eq!(output, "\0\n\x7f\n");

    let (_, result) = run_source("push 200\npchar\n");
    assert_eq!(result, Err(MontyError::ValueOutOfAsciiRange { line: 2 }));

    let (_, result) = run_source("push -1\npchar\n");
    assert_eq!(result, Err(MontyError::ValueOutOfAsciiRange { line: 2 }));

    let (_, result) = run_source("push 128\npchar\n");
    assert_eq!(result, Err(MontyError::ValueOutOfAsciiRange { line: 2 }));
}

#[test]
fn test_pchar_empty() {
    let (_, result) = run_source("pchar\n");
    assert_eq!(result, Err(MontyError::EmptyStackOnString { line: 1 }));
}

#[test]
fn test_pstr() {
    // front to back: 72 101 108 108 111
    let source = "push 111\npush 108\npush 108\npush 101\npush 72\npstr\n";
    let (output, result) = run_source(source);

    assert_eq!(result, Ok(()));
    assert_eq!(output, "Hello\n");
}

#[test]
fn test_pstr_stops_at_zero_and_out_of_range() {
    let (output, _) = run_source("push 66\npush 0\npush 65\npstr\n");
    assert_eq!(output, "A\n");

    let (output, _) = run_source("push 66\npush 300\npush 65\npstr\n");
    assert_eq!(output, "A\n");

    let (output, _) = run_source("push 66\npush -4\npush 65\npstr\n");
    assert_eq!(output, "A\n");
}

#[test]
fn test_pstr_empty_prints_newline() {
    let (output, result) = run_source("pstr\n");

    assert_eq!(result, Ok(()));
    assert_eq!(output, "\n");
}

#[test]
fn test_rotl() {
    let (output, _) = run_source("push 1\npush 2\npush 3\nrotl\npall\n");
    assert_eq!(output, "2\n1\n3\n");
}

#[test]
fn test_rotr() {
    let (output, _) = run_source("push 1\npush 2\npush 3\nrotr\npall\n");
    assert_eq!(output, "1\n3\n2\n");
}

#[test]
fn test_rotations_on_short_containers() {
    let (output, result) = run_source("rotl\nrotr\npush 9\nrotl\nrotr\npall\n");

    assert_eq!(result, Ok(()));
    assert_eq!(output, "9\n");
}

#[test]
fn test_unknown_instruction_keeps_prior_effects() {
    let source = "push 1\npall\nfoo\npush 2\npall\n";
    let program = parse_program(source);
    let mut interpreter = Interpreter::new(Vec::<u8>::new());

    let result = interpreter.run(&program);

    assert_eq!(
        result,
        Err(MontyError::UnknownInstruction {
            line: 3,
            name: "foo".to_string()
        })
    );
    assert_eq!(interpreter.stack().to_vec(), vec![1]);
    assert_eq!(interpreter.state(), ExecutionState::Failed);
    assert_eq!(interpreter.instructions_executed(), 2);
    assert_eq!(interpreter.output().as_slice(), b"1\n");
}

#[test]
fn test_unknown_instruction_line_counts_blank_lines() {
    let (_, result) = run_source("push 1\n\n  \nbar 2\n");

    assert_eq!(
        result,
        Err(MontyError::UnknownInstruction {
            line: 4,
            name: "bar".to_string()
        })
    );
}

#[test]
fn test_comments_are_skipped() {
    let (output, result) = run_source("# setup\npush 4\n   # more\npall\n");

    assert_eq!(result, Ok(()));
    assert_eq!(output, "4\n");
}

#[test]
fn test_whitespace_tolerance() {
    let (output, result) = run_source("   push    7   \n\t\tpall\t\n\n");

    assert_eq!(result, Ok(()));
    assert_eq!(output, "7\n");
}

#[test]
fn test_halted_interpreter_ignores_instructions() {
    let mut interpreter = Interpreter::new(Vec::<u8>::new());

    let err = interpreter.step(&Instruction::new("pop", None, 1));
    assert_eq!(err, Err(MontyError::EmptyStackOnPop { line: 1 }));
    assert!(interpreter.is_halted());

    let after = interpreter.step(&Instruction::new("push", Some("1".to_string()), 2));
    assert_eq!(after, Ok(()));
    assert!(interpreter.stack().is_empty());
    assert_eq!(interpreter.current_line(), 1);
}

#[test]
fn test_finished_state() {
    let mut interpreter = Interpreter::new(Vec::<u8>::new());
    assert_eq!(interpreter.state(), ExecutionState::Running);

    interpreter.run(&parse_program("push 1\n")).unwrap();

    assert_eq!(interpreter.state(), ExecutionState::Finished);
    assert!(interpreter.is_halted());
}

#[test]
fn test_finished_interpreter_ignores_instructions() {
    let mut interpreter = Interpreter::new(Vec::<u8>::new());
    interpreter.run(&parse_program("push 1\n")).unwrap();

    let after = interpreter.step(&Instruction::new("push", Some("2".to_string()), 2));

    assert_eq!(after, Ok(()));
    assert_eq!(interpreter.stack().to_vec(), vec![1]);
    assert_eq!(interpreter.instructions_executed(), 1);
    assert_eq!(interpreter.state(), ExecutionState::Finished);
}

#[test]
fn test_initial_queue_mode() {
    let config = InterpreterConfig {
        initial_mode: Mode::Queue,
    };
    let mut interpreter = Interpreter::with_config(Vec::<u8>::new(), config);

    interpreter
        .run(&parse_program("push 1\npush 2\npall\n"))
        .unwrap();

    assert_eq!(interpreter.mode(), Mode::Queue);
    assert_eq!(interpreter.output().as_slice(), b"1\n2\n");
}

#[test]
fn test_push_pop_round_trip() {
    let mut interpreter = Interpreter::new(Vec::<u8>::new());
    interpreter
        .run(&parse_program("push 4\npush 8\n"))
        .unwrap();
    let before = (interpreter.stack().len(), interpreter.stack().front());

    let mut interpreter = Interpreter::new(Vec::<u8>::new());
    interpreter
        .run(&parse_program("push 4\npush 8\npush -3\npop\n"))
        .unwrap();

    assert_eq!(
        (interpreter.stack().len(), interpreter.stack().front()),
        before
    );
}

#[test]
fn test_run_accepts_owned_instructions() {
    let instructions = vec![
        Instruction::new("push", Some("2".to_string()), 1),
        Instruction::new("pint", None, 2),
    ];
    let mut interpreter = Interpreter::new(Vec::<u8>::new());

    interpreter.run(instructions).unwrap();

    assert_eq!(interpreter.output().as_slice(), b"2\n");
}

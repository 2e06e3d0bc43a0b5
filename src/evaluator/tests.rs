use super::*;
use crate::{Compile, compile};

#[test]
fn test_program_accessors() {
    let program = compile("3.5").expect("Should compile");
    assert_eq!(program.instructions(), &[Instruction::PushConst(0)]);
    assert_eq!(program.constants(), &[3.5]);
    assert_eq!(program.required_stack_depth(), 1);
    assert_eq!(program.source(), "3.5");
    assert_eq!(program.instruction_count(), 1);
    assert!(!program.uses_variable());
    assert_eq!(program.evaluate(0.0), 3.5);
}

#[test]
fn test_every_const_index_in_range() {
    let program = compile("1 + 2.5*x - sin(3)/4e1 + (5 - 6)^7").expect("Should compile");
    for instr in program.instructions() {
        if let Instruction::PushConst(idx) = instr {
            assert!(*idx < program.constants().len());
        }
    }
    assert_eq!(program.constants().len(), 7);
}

#[test]
fn test_many_literals_are_not_truncated() {
    // Well beyond any 8-bit index space
    let src = (0..300).map(|i| i.to_string()).collect::<Vec<_>>().join("+");
    let program = compile(&src).expect("Should compile");
    assert_eq!(program.constants().len(), 300);
    assert_eq!(program.evaluate(0.0), f64::from(299 * 300 / 2));
}

#[test]
fn test_uses_variable_from_bytecode() {
    assert!(compile("sin(X)").expect("Should compile").uses_variable());
    assert!(!compile("exp(2)").expect("Should compile").uses_variable());
}

#[test]
fn test_display_listing() {
    let program = compile("sin(2*x) + 1").expect("Should compile");
    assert_eq!(program.to_string(), "2 x * sin 1 +");

    let program = compile("-x^0.5").expect("Should compile");
    assert_eq!(program.to_string(), "x 0.5 ^ neg");
}

#[test]
fn test_debug_summary() {
    let program = compile("x+1").expect("Should compile");
    let debug = format!("{program:?}");
    assert!(debug.contains("CompiledProgram"));
    assert!(debug.contains("instruction_count: 3"));
    assert!(debug.contains("stack_size: 2"));
}

#[test]
fn test_stack_depth_matches_trace() {
    // Replay the program, tracking depth by hand
    for src in ["1+2*3-4/5", "x^2^3", "(x+1)*(x-1)/(x*x+1)", "sin(cos(x)*2)-3"] {
        let program = compile(src).expect("Should compile");
        let mut depth = 0_usize;
        let mut peak = 0_usize;
        for instr in program.instructions() {
            match instr {
                Instruction::PushConst(_) | Instruction::PushVariable => depth += 1,
                Instruction::Binary(_) => depth -= 1,
                Instruction::Unary(_) => {}
            }
            peak = peak.max(depth);
        }
        assert_eq!(depth, 1, "{src}");
        assert_eq!(program.required_stack_depth(), peak, "{src}");
    }
}

#[test]
fn test_program_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CompiledProgram>();
}

#[test]
fn test_concurrent_evaluation() {
    let program = compile("x^3 - 2*x").expect("Should compile");
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let program = &program;
                scope.spawn(move || {
                    (0..100)
                        .map(|i| {
                            let x = f64::from(t * 100 + i) / 10.0;
                            program.evaluate(x) - (x * x * x - 2.0 * x)
                        })
                        .fold(0.0_f64, |acc, d| acc.max(d.abs()))
                })
            })
            .collect();
        for handle in handles {
            let max_err = handle.join().expect("thread panicked");
            assert!(max_err < 1e-6);
        }
    });
}

#[test]
fn test_builder_depth_limit() {
    let src = "sqrt(abs(sin(x)))";
    assert!(Compile::new().max_depth(3).compile_str(src).is_ok());
    assert!(Compile::new().max_depth(2).compile_str(src).is_err());
}

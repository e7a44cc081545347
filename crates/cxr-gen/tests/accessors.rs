//! Properties of the full accessor set.

use std::collections::HashSet;

use cxr_gen::{
    CallOrder, CppLambda, Generator, MaxDepth, Names, Op, OpSequence, Renderer, Sequences,
    Template, expected_fragment_count, generate,
};

/// Straightforward recursive enumeration used as a reference.
fn reference_sequences(max_depth: usize) -> Vec<Vec<Op>> {
    fn walk(prefix: Vec<Op>, max_depth: usize, out: &mut Vec<Vec<Op>>) {
        if !prefix.is_empty() {
            out.push(prefix.clone());
        }
        if prefix.len() < max_depth {
            for op in [Op::Head, Op::Tail] {
                let mut next = prefix.clone();
                next.push(op);
                walk(next, max_depth, out);
            }
        }
    }

    let mut out = Vec::new();
    walk(Vec::new(), max_depth, &mut out);
    out
}

fn is_accessor_name(name: &str, max_len: usize) -> bool {
    let Some(letters) = name.strip_prefix('c').and_then(|s| s.strip_suffix('r')) else {
        return false;
    };
    !letters.is_empty()
        && letters.len() <= max_len
        && letters.chars().all(|c| c == 'a' || c == 'd')
}

#[test]
fn test_matches_recursive_enumeration() {
    for depth in 0..=8 {
        let lazy: Vec<Vec<Op>> = Sequences::new(MaxDepth::new(depth))
            .map(|seq| seq.ops().to_vec())
            .collect();
        assert_eq!(lazy, reference_sequences(depth), "depth {depth}");
    }
}

#[test]
fn test_fragment_count() {
    for depth in 0..=10 {
        let fragments = generate(depth, CppLambda::default()).unwrap();
        let expected = (1usize << (depth + 1)) - 2;
        assert_eq!(fragments.len(), expected, "depth {depth}");
        assert_eq!(
            expected_fragment_count(MaxDepth::new(depth as usize)),
            Some(expected)
        );
    }
}

#[test]
fn test_names_are_unique_and_well_formed() {
    for depth in 1..=6 {
        let mut seen = HashSet::new();
        for seq in Sequences::new(MaxDepth::new(depth)) {
            let name = seq.name();
            assert!(is_accessor_name(&name, depth), "{name}");
            assert_eq!(name.len() - 2, seq.len());
            assert!(seen.insert(name.clone()), "duplicate accessor {name}");
        }
    }
}

#[test]
fn test_depth_two_order() {
    let names: Vec<String> = generate(2, Names)
        .unwrap()
        .into_iter()
        .map(|line| line.trim_end().to_owned())
        .collect();
    assert_eq!(names, ["car", "caar", "cadr", "cdr", "cdar", "cddr"]);
}

#[test]
fn test_car_chains_one_head_call() {
    let car = OpSequence::new(&[Op::Head]).unwrap();
    let code = CppLambda::default().render(&car);
    assert!(code.starts_with("Variable(\"car\","));
    assert_eq!(code.matches(".car()").count(), 1);
    assert_eq!(code.matches(".cdr()").count(), 0);
}

#[test]
fn test_cadr_applies_tail_then_head() {
    let cadr = OpSequence::new(&[Op::Head, Op::Tail]).unwrap();
    let code = CppLambda::default().render(&cadr);
    assert!(code.contains("FIRST_ARG(args).cdr().car()"), "{code}");
}

#[test]
fn test_output_is_idempotent() {
    let generator = Generator::new(MaxDepth::REFERENCE, CppLambda::default());
    let mut first = Vec::new();
    let mut second = Vec::new();
    generator.write_to(&mut first).unwrap();
    generator.write_to(&mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_negative_depth_fails_without_output() {
    assert!(generate(-1, Names).is_err());
    assert!(generate(i64::MIN, Names).is_err());
}

#[test]
fn test_every_template_covers_the_same_accessors() {
    for template in [Template::CppLambda, Template::RustClosure, Template::Names] {
        let renderer = template.renderer(CallOrder::Conventional);
        let fragments = generate(4, &renderer).unwrap();
        assert_eq!(fragments.len(), 30, "{template:?}");
        assert!(fragments[29].contains("cddddr"), "{template:?}");
    }
}

#[test]
fn test_cpp_depth_two_snapshot() {
    let output = generate(2, CppLambda::default()).unwrap().concat();
    insta::assert_snapshot!(output);
}

#[test]
fn test_reference_names_snapshot() {
    let output = generate(4, Names).unwrap().concat();
    insta::assert_snapshot!(output);
}

//! End-to-end behaviour of the compilation state.

mod common;

use insta::assert_snapshot;
use kiln::{CompilationState, Module, SourceLocation, Span};
use kiln_tir::{CodeObject, GetStringPrototype, InstructionKind, SendObjectMessage, used_registers};
use kiln_types::TypePredicates;

#[test]
fn test_store_and_query_core_module() {
    let mut state = CompilationState::new(common::config_for(&[]));

    assert!(!state.module_exists("core"));
    state.store_module(Module::new("core", "core.kiln"));

    assert!(state.module_exists("core"));
    assert_eq!(state.module("core").unwrap().name.as_str(), "core");
    assert!(!state.has_diagnostics());
}

#[test]
fn test_second_store_replaces_first() {
    let mut state = CompilationState::new(common::config_for(&[]));
    let first = Module::new("core", "a/core.kiln").with_source("first");
    let second = Module::new("core", "b/core.kiln").with_source("second");

    state.store_module(first);
    state.store_module(second.clone());

    assert_eq!(state.module("core"), Some(&second));
}

#[test]
fn test_module_body_uses_state_types() {
    let mut state = CompilationState::new(common::config_for(&[]));
    let location = SourceLocation::new("main.kiln", 1, 1, Span::new(0, 13));

    let string_type = state.typedb().string_type();
    let mut body = CodeObject::new("main", location.clone());
    let prototype = body.allocate_register(string_type);
    body.push(GetStringPrototype::new(prototype, location.clone()));
    let result = body.allocate_register(string_type);
    body.push(SendObjectMessage::new(
        result,
        prototype,
        "new".to_owned(),
        vec![],
        location,
    ));

    state.store_module(Module::new("main", "main.kiln").with_body(body));

    let module = state.module("main").unwrap();
    let first = &module.body.instructions()[0];
    assert_eq!(first.kind(), InstructionKind::GetStringPrototype);
    assert!(state.typedb().get(first.register().unwrap().ty).is_regular_object());
    assert_eq!(used_registers(&module.body.instructions()[1]), [prototype]);
}

#[test]
fn test_diagnostics_quote_module_source() {
    let mut state = CompilationState::new(common::config_for(&[]));
    state.store_module(
        Module::new("main", "main.kiln").with_source("import std::missing\nlet x = 1\n"),
    );
    state.diagnostics_mut().module_not_found_error(
        "std::missing",
        SourceLocation::new("main.kiln", 1, 8, Span::new(7, 19)),
    );

    let mut sink = Vec::new();
    state.emit_diagnostics(&mut sink).unwrap();
    let output = String::from_utf8(sink).unwrap();

    assert!(output.contains("The module std::missing could not be found"));
    assert!(output.contains("import std::missing"));
}

#[test]
fn test_diagnostics_without_source() {
    let mut state = CompilationState::new(common::config_for(&[]));
    let location = SourceLocation::new("<command line>", 1, 1, Span::default());
    state
        .diagnostics_mut()
        .module_not_found_error("std::missing", location.clone());
    state
        .diagnostics_mut()
        .type_error("String", "Integer", location);

    assert_snapshot!(state.render_diagnostics(), @r"
    error: The module std::missing could not be found
      --> <command line>:1:1
    error: Expected a value of type String instead of Integer
      --> <command line>:1:1
    ");
}

#[test]
fn test_diagnostics_on_non_ascii_source() {
    let mut state = CompilationState::new(common::config_for(&[]));
    state.store_module(Module::new("café", "café.kiln").with_source("let crème = 'é'"));

    // Spans from a producer may point past the end or between the bytes of 'é'.
    for span in [Span::new(50, 60), Span::new(15, 15), Span::new(7, 7)] {
        state
            .diagnostics_mut()
            .warning("suspicious literal", SourceLocation::new("café.kiln", 1, 1, span));
    }

    let rendered = state.render_diagnostics();
    assert!(rendered.matches("suspicious literal").count() >= 3, "{rendered}");
    assert!(rendered.contains("let crème = 'é'"), "{rendered}");

    let mut sink = Vec::new();
    state.emit_diagnostics(&mut sink).unwrap();
    assert_eq!(String::from_utf8(sink).unwrap(), rendered);
}

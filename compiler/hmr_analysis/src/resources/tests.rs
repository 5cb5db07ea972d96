use super::*;
use crate::InMemoryProgram;
use pretty_assertions::assert_eq;

#[test]
fn template_and_style_bindings_are_merged() {
    let mut program = InMemoryProgram::new();
    let a = ClassId::new(1);
    let b = ClassId::new(2);
    let c = ClassId::new(3);
    program.bind_template_file("src/app/foo.html", a);
    program.bind_template_file("src/app/foo.html", b);
    program.bind_style_file("src/app/foo.html", b);
    program.bind_style_file("src/app/foo.html", c);

    assert_eq!(
        components_for_resource(&program, "src/app/foo.html"),
        vec![a, b, c]
    );
}

#[test]
fn style_only_binding() {
    let mut program = InMemoryProgram::new();
    let a = ClassId::new(1);
    program.bind_style_file("src/app/foo.css", a);
    assert_eq!(components_for_resource(&program, "src/app/foo.css"), vec![a]);
}

#[test]
fn unbound_path_is_not_a_resource() {
    let program = InMemoryProgram::new();
    assert!(components_for_resource(&program, "src/app/foo.ts").is_empty());
}

#[test]
fn works_through_a_trait_object() {
    let mut program = InMemoryProgram::new();
    program.bind_template_file("t.html", ClassId::new(9));
    let inspector: &dyn ProgramInspector = &program;
    assert_eq!(
        components_for_resource(inspector, "t.html"),
        vec![ClassId::new(9)]
    );
}

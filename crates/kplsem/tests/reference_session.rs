use kpl_semantics::driver::declare_reference_program;
use kpl_semantics::{
    DeclChecker, ObjectKind, ParamMode, SymTab, TeardownReport, Type, compare_type,
};
use pretty_assertions::assert_eq;

const EXPECTED_DUMP: &str = "\
Program PRG
    Const c1 = 10
    Const c2 = 'a'
    Type t1 = Arr(10,Int)
    Var v1 : Int
    Var v2 : Arr(10,Arr(10,Int))
    Function f : Int
        Param p1 : Int
        Param VAR p2 : Char
    Procedure p
        Param v1 : Int
        Const c1 = 'a'
        Const c3 = 10
        Type t1 = Int
        Type t2 = Arr(10,Int)
        Var v2 : Arr(10,Int)
        Var v3 : Char
";

#[test]
fn test_reference_dump() {
    let mut table = SymTab::new();
    let program = declare_reference_program(&mut table).unwrap();

    assert_eq!(table.program(), Some(program));
    assert_eq!(table.current_scope(), None);
    assert_eq!(table.dump_program(), EXPECTED_DUMP);
}

#[test]
fn test_reference_routines() {
    let mut table = SymTab::new();
    let program = declare_reference_program(&mut table).unwrap();
    let root = table.body_scope(program).unwrap();

    let func = table.find_in_scope(root, "f").unwrap();
    assert_eq!(table.object(func).kind(), ObjectKind::Function);
    let params = table.params(func).unwrap();
    assert_eq!(params.len(), 2);
    assert_eq!(table.object(params[1]).param_mode(), Some(ParamMode::ByReference));

    // Parameter list and body scope refer to the same objects
    let body = table.body_scope(func).unwrap();
    assert_eq!(table.scope(body).objects(), params);

    let proc = table.find_in_scope(root, "p").unwrap();
    let proc_body = table.body_scope(proc).unwrap();
    let inner_v2 = table.find_in_scope(proc_body, "v2").unwrap();
    let outer_v2 = table.find_in_scope(root, "v2").unwrap();
    assert_ne!(inner_v2, outer_v2);
    assert!(compare_type(
        table.declared_type(inner_v2).unwrap(),
        &Type::array(10, Type::int())
    ));
    assert!(!compare_type(
        table.declared_type(inner_v2).unwrap(),
        table.declared_type(outer_v2).unwrap()
    ));
}

#[test]
fn test_reference_lookup_after_reentering() {
    let mut table = SymTab::new();
    let program = declare_reference_program(&mut table).unwrap();
    let root = table.body_scope(program).unwrap();
    let proc = table.find_in_scope(root, "p").unwrap();

    table.enter_block(root).unwrap();
    table.enter_block(table.body_scope(proc).unwrap()).unwrap();
    let checker = DeclChecker::new(&table);
    assert!(checker.check_declared_type("t2").is_ok());
    assert!(checker.check_declared_function("f").is_ok());
    assert!(checker.check_declared_procedure("WRITEC").is_ok());
    assert!(checker.check_fresh_ident("c1").is_err());
    assert!(checker.check_fresh_ident("c2").is_ok());
}

#[test]
fn test_reference_teardown() {
    let mut table = SymTab::new();
    declare_reference_program(&mut table).unwrap();

    let report = table.clean().unwrap();
    assert_eq!(
        report,
        TeardownReport {
            // 7 built-in objects + program + 16 declarations
            objects: 24,
            // 5 built-in bodies + program, f and p
            scopes: 8,
            type_nodes: 22,
            constants: 4,
            orphan_objects: 0,
            orphan_scopes: 0,
        }
    );
}

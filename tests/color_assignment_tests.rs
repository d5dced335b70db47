use huelog::{
    generate_hex_color, hsv_to_rgb, name_seed, ColorLogger, ColorRegistry, LogError, MemorySink,
    Rgb, TypeIdentity, TypeKey,
};
use std::cell::RefCell;
use std::rc::Rc;

struct Foo {
    _id: u32,
}

impl TypeIdentity for Foo {
    fn type_key(&self) -> TypeKey {
        TypeKey::of::<Foo>()
    }
}

#[test]
fn test_two_instances_of_foo_get_identical_colors() {
    let first = Foo { _id: 1 };
    let second = Foo { _id: 2 };
    assert_eq!(first.type_key().name(), "Foo");
    assert_eq!(name_seed(first.type_key().name()), 292);

    let a = generate_hex_color(first.type_key().name());
    let b = generate_hex_color(second.type_key().name());
    assert_eq!(a, b);
}

#[test]
fn test_set_color_then_log_uses_override_verbatim() {
    let generated = Rc::new(RefCell::new(Vec::new()));
    let seen = generated.clone();
    let mut logger = ColorLogger::new(MemorySink::new()).with_generator(move |name: &str| {
        seen.borrow_mut().push(name.to_string());
        generate_hex_color(name)
    });

    logger.set_color(&TypeKey::of::<Foo>(), "ABCDEF");
    logger.log(&Foo { _id: 7 }, "hello").unwrap();

    let line = &logger.sink().lines()[0];
    assert!(line.contains("ABCDEF"));
    assert!(line.ends_with("[Foo]</color> hello"));
    assert!(generated.borrow().is_empty());
}

#[test]
fn test_generator_runs_once_per_type_until_overridden() {
    let generated = Rc::new(RefCell::new(Vec::new()));
    let seen = generated.clone();
    let mut logger = ColorLogger::new(MemorySink::new()).with_generator(move |name: &str| {
        seen.borrow_mut().push(name.to_string());
        generate_hex_color(name)
    });

    for i in 0..5 {
        logger.log(&Foo { _id: i }, "tick").unwrap();
        logger.log("Bar", "tock").unwrap();
    }

    assert_eq!(*generated.borrow(), vec!["Foo".to_string(), "Bar".to_string()]);

    let lines = logger.sink().lines();
    assert_eq!(lines.len(), 10);
    assert!(lines.iter().step_by(2).all(|line| line == &lines[0]));

    logger.set_color(&TypeKey::of::<Foo>(), "112233");
    logger.log(&Foo { _id: 9 }, "after override").unwrap();
    logger.log("Bar", "still memoized").unwrap();

    assert_eq!(generated.borrow().len(), 2);
    let lines = logger.sink().lines();
    assert_eq!(lines[10], "<color=#112233>[Foo]</color> after override");
    assert_eq!(lines[11], lines[1].replace("tock", "still memoized"));
}

#[test]
fn test_registry_add_duplicate_is_an_error_but_set_color_is_not() {
    let mut registry = ColorRegistry::new();
    registry.add(TypeKey::named("Foo"), "000000").unwrap();
    assert!(matches!(
        registry.add(TypeKey::named("Foo"), "111111"),
        Err(LogError::DuplicateType { .. })
    ));

    registry.set_color(TypeKey::named("Foo"), "222222");
    assert_eq!(registry.get(&TypeKey::named("Foo")), Some("222222"));
}

#[test]
fn test_hue_wraparound_examples() {
    for (sat, value) in [(0.3, 1.0), (0.8, 0.6), (1.0, 1.0)] {
        let base = hsv_to_rgb(330.0, sat, value);
        assert_eq!(hsv_to_rgb(-30.0, sat, value), base);
        assert_eq!(hsv_to_rgb(690.0, sat, value), base);
    }
}

#[test]
fn test_extreme_inputs_stay_clamped() {
    assert_eq!(hsv_to_rgb(1.0e9, 0.5, 0.0), Rgb::BLACK);
    let gray = hsv_to_rgb(-1.0e9, 0.0, 0.25);
    assert_eq!(gray.red, gray.green);
    assert_eq!(gray.green, gray.blue);

    let color = hsv_to_rgb(-12345.678, 1.0, 1.0);
    assert!(color.red == 255 || color.green == 255 || color.blue == 255);
}

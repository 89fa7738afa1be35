mod common;

use common::{
    EvenForm, F32Form, F64Form, Figure, FigureForm, HexWord, I64Form, PairForm, Scalar,
    ScalarForm, SumForm, TextForm, VecForm,
};
use json_form::{
    from_deserializer, from_literal, literal, to_string, to_string_pretty, ArrayForm, Error,
    Form, Literal, LiteralForm, NumberLiteral, ObjectForm, Shape,
};
use std::sync::Arc;
use std::thread;

fn number(text: &str) -> Literal {
    Literal::Number(text.parse().unwrap())
}

fn from_json<F: Form>(form: &F, json: &str) -> json_form::Result<Option<F::Target>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    from_deserializer(form, &mut deserializer)
}

#[test]
fn test_elements_keep_order() {
    let form = VecForm(I64Form);
    let items = from_literal(&form, literal!([3, 1, 2])).unwrap().unwrap();
    assert_eq!(items, vec![Some(3), Some(1), Some(2)]);
}

#[test]
fn test_empty_array_is_canonical_empty() {
    assert_eq!(
        from_literal(&VecForm(I64Form), literal!([])).unwrap(),
        Some(vec![])
    );
    assert_eq!(from_literal(&SumForm, literal!([])).unwrap(), Some(0));
}

#[test]
fn test_null_elements_reach_builder() {
    let items = from_literal(&VecForm(TextForm), literal!(["a", null, "c"]))
        .unwrap()
        .unwrap();
    assert_eq!(items, vec![Some("a".to_string()), None, Some("c".to_string())]);
}

#[test]
fn test_null_is_never_an_error() {
    assert_eq!(from_literal(&I64Form, Literal::Null).unwrap(), None);
    assert_eq!(from_literal(&FigureForm::Circle, Literal::Null).unwrap(), None);
    assert_eq!(from_literal(&PairForm, Literal::Null).unwrap(), None);
}

#[test]
fn test_in_place_and_new_value_builders() {
    let tree = literal!([1, 2, 3, null, 4]);
    assert_eq!(
        from_literal(&VecForm(I64Form), tree.clone()).unwrap().unwrap().len(),
        5
    );
    assert_eq!(from_literal(&SumForm, tree).unwrap(), Some(10));
}

#[test]
fn test_builder_can_pause_between_elements() {
    let form = VecForm(I64Form);
    let builder = form.array_builder().unwrap();
    let builder = form.append_element(builder, Some(1)).unwrap();
    let parked = form.append_element(builder, None).unwrap();

    // resume later with nothing but the parked builder
    let resumed = form.append_element(parked, Some(3)).unwrap();
    assert_eq!(
        form.build_array(resumed).unwrap(),
        Some(vec![Some(1), None, Some(3)])
    );
}

#[test]
fn test_rejecting_append_surfaces_error() {
    let err = from_literal(&EvenForm, literal!([2, 4, 5, 6])).unwrap_err();
    assert_eq!(err.path(), Some("/2"));
    assert_eq!(err.inner().to_string(), "rejected: odd element 5");

    let err = from_literal(&EvenForm, literal!([2, null])).unwrap_err();
    assert!(matches!(err.inner(), Error::Form { .. }));
}

#[test]
fn test_fixed_arity_builder() {
    assert_eq!(from_literal(&PairForm, literal!([4, 5])).unwrap(), Some((4, 5)));

    let err = from_literal(&PairForm, literal!([1, 2, 3])).unwrap_err();
    assert_eq!(err.path(), Some("/2"));

    let err = from_literal(&PairForm, literal!([1])).unwrap_err();
    assert_eq!(err.path(), None);
    assert_eq!(err.to_string(), "rejected: pair with 1 elements");
}

#[test]
fn test_unresolved_shape_names_target() {
    let err = from_literal(&I64Form, literal!("7")).unwrap_err();
    match err {
        Error::Unresolved { shape, target } => {
            assert_eq!(shape, Shape::String);
            assert_eq!(target, "i64");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_refinement_selects_variant_fields() {
    let tree = literal!({"type": "circle", "radius": 2});
    assert_eq!(
        from_literal(&FigureForm::Any, tree).unwrap(),
        Some(Figure::Circle { radius: 2.0 })
    );
}

#[test]
fn test_refinement_is_not_retroactive() {
    // radius arrives before the discriminant and stays an unknown extra
    let tree = literal!({"radius": 2, "type": "circle"});
    let err = from_literal(&FigureForm::Any, tree).unwrap_err();
    assert_eq!(err.to_string(), "rejected: circle without radius");
}

#[test]
fn test_last_refinement_wins() {
    let tree = literal!({
        "type": "circle",
        "type": "rect",
        "width": 3,
        "height": 1.5,
    });
    assert_eq!(
        from_literal(&FigureForm::Any, tree).unwrap(),
        Some(Figure::Rect {
            width: 3.0,
            height: 1.5
        })
    );
}

#[test]
fn test_unrefined_object_keeps_extras() {
    let tree = literal!({"type": "hexagon", "sides": 6, "tags": ["x"]});
    assert_eq!(
        from_literal(&FigureForm::Any, tree).unwrap(),
        Some(Figure::Unknown {
            kind: Some("hexagon".to_string()),
            extras: vec![
                ("sides".to_string(), literal!(6)),
                ("tags".to_string(), literal!(["x"])),
            ],
        })
    );
}

#[test]
fn test_unknown_field_policies() {
    let err = from_literal(&FigureForm::Any, literal!({"type": "circle", "color": "red"}))
        .unwrap_err();
    assert_eq!(err.path(), Some("/color"));

    let rect = from_literal(
        &FigureForm::Any,
        literal!({"type": "rect", "color": "red", "width": 1, "height": 2}),
    )
    .unwrap();
    assert_eq!(
        rect,
        Some(Figure::Rect {
            width: 1.0,
            height: 2.0
        })
    );
}

#[test]
fn test_field_value_error_is_located() {
    let err = from_literal(&FigureForm::Circle, literal!({"radius": "big"})).unwrap_err();
    assert_eq!(err.path(), Some("/radius"));
    assert!(matches!(
        err.inner(),
        Error::Unresolved {
            shape: Shape::String,
            ..
        }
    ));
}

#[test]
fn test_root_form_builds_catch_all() {
    let form = FigureForm::Any;
    let parts = form.object_builder().unwrap();
    assert!(matches!(
        form.build_object(parts).unwrap(),
        Some(Figure::Unknown { .. })
    ));
}

#[test]
fn test_hexadecimal_width_preserved() {
    assert_eq!(
        from_literal(&HexWord, number("0x00FF")).unwrap().as_deref(),
        Some("00FF")
    );
    assert_eq!(
        from_literal(&HexWord, number("0xFF")).unwrap().as_deref(),
        Some("FF")
    );
    assert!(from_literal(&HexWord, literal!(255)).is_err());
}

#[test]
fn test_hexadecimal_falls_back_to_integer_form() {
    assert_eq!(from_literal(&I64Form, number("0x10")).unwrap(), Some(16));
    assert_eq!(
        from_literal(&I64Form, number("0xFFFFFFFFFFFFFFFF")).unwrap(),
        Some(-1)
    );
}

#[test]
fn test_big_integer_needs_wide_form() {
    let big = "123456789012345678901234567890";
    assert_eq!(
        from_literal(&F64Form, number(big)).unwrap(),
        Some(big.parse::<f64>().unwrap())
    );
    assert!(from_literal(&I64Form, number(big)).is_err());
}

#[test]
fn test_float_paths_by_precision() {
    let single = from_literal(&VecForm(F32Form), literal!([0.1, 1.5]))
        .unwrap()
        .unwrap();
    assert_eq!(to_string(&VecForm(F32Form), &single).unwrap(), "[0.1,1.5]");

    let double = vec![Some(f64::from(0.1_f32)), Some(1.5)];
    assert_eq!(
        to_string(&VecForm(F64Form), &double).unwrap(),
        "[0.10000000149011612,1.5]"
    );
}

#[test]
fn test_identity_narrowing_for_two_shapes() {
    let form = VecForm(ScalarForm);
    let items = from_literal(&form, literal!([1, "one", null])).unwrap().unwrap();
    assert_eq!(
        items,
        vec![
            Some(Scalar::Int(1)),
            Some(Scalar::Text("one".to_string())),
            None
        ]
    );
    assert_eq!(to_string(&form, &items).unwrap(), r#"[1,"one",null]"#);
    assert!(from_literal(&ScalarForm, literal!(true)).is_err());
}

#[test]
fn test_shared_form_across_threads() {
    let form = Arc::new(VecForm(I64Form));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let form = Arc::clone(&form);
            thread::spawn(move || {
                let tree = Literal::Array(vec![Literal::from(i); 3]);
                from_literal(&form, tree).unwrap().unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let expected = i64::try_from(i).unwrap();
        assert_eq!(handle.join().unwrap(), vec![Some(expected); 3]);
    }
}

#[test]
fn test_figure_round_trip() {
    for figure in [
        Figure::Circle { radius: 2.0 },
        Figure::Rect {
            width: 1.25,
            height: 3.0,
        },
        Figure::Unknown {
            kind: None,
            extras: vec![("n".to_string(), literal!([1, "x"]))],
        },
    ] {
        let json = to_string(&FigureForm::Any, &figure).unwrap();
        assert_eq!(from_json(&FigureForm::Any, &json).unwrap(), Some(figure));
    }
}

#[test]
fn test_figure_pretty() {
    let json = to_string_pretty(&FigureForm::Any, &Figure::Circle { radius: 0.5 }).unwrap();
    assert_eq!(json, "{\n  \"type\": \"circle\",\n  \"radius\": 0.5\n}");
}

#[test]
fn test_literal_round_trip_through_serde_json() {
    let json = r#"{"a":[1,-2,3.5,"x",true,null],"b":{"c":18446744073709551615},"a":{}}"#;
    let tree = from_json(&LiteralForm, json).unwrap().unwrap();
    assert_eq!(
        tree.get("b").and_then(|b| b.get("c")),
        Some(&Literal::Number(NumberLiteral::BigInteger(
            "18446744073709551615".to_string()
        )))
    );
    assert_eq!(to_string(&LiteralForm, &tree).unwrap(), json);
}

#[test]
fn test_deserializer_errors_surface() {
    let err = from_json(&LiteralForm, "[1,").unwrap_err();
    assert!(matches!(err, Error::Form { .. }));
}

#[test]
fn test_write_error_is_located() {
    let figure = Figure::Circle { radius: f64::NAN };
    let err = to_string(&FigureForm::Any, &figure).unwrap_err();
    assert_eq!(err.path(), Some("/radius"));
    assert!(matches!(err.inner(), Error::NotNumeric(_)));
}

const WIDE_INTEGER: &str = "123456789012345678901234567890123456789012";

#[cfg(not(feature = "arbitrary_precision"))]
#[test]
fn test_wide_integer_from_serde_json_reads_as_f64() {
    let tree = from_json(&LiteralForm, WIDE_INTEGER).unwrap().unwrap();
    let number = tree.as_number().unwrap();
    assert!(!number.is_integer());
    assert_ne!(tree, number_literal(WIDE_INTEGER));
}

#[cfg(feature = "arbitrary_precision")]
#[test]
fn test_wide_numbers_from_serde_json_keep_digits() {
    let tree = from_json(&LiteralForm, WIDE_INTEGER).unwrap();
    assert_eq!(tree, Some(number_literal(WIDE_INTEGER)));

    let json = r#"[3.14159265358979323846264338327950288,-0.0,2E-7]"#;
    let tree = from_json(&LiteralForm, json).unwrap().unwrap();
    assert_eq!(
        tree,
        Literal::Array(vec![
            number("3.14159265358979323846264338327950288"),
            number("-0.0"),
            number("2E-7"),
        ])
    );
    assert_eq!(to_string(&LiteralForm, &tree).unwrap(), json);
}

#[cfg(feature = "arbitrary_precision")]
#[test]
fn test_raw_number_token_is_validated() {
    let json = r#"{"$serde_json::private::Number": "0x+F"}"#;
    assert!(from_json(&LiteralForm, json).is_err());
}

fn number_literal(text: &str) -> Literal {
    Literal::Number(NumberLiteral::BigInteger(text.to_string()))
}

/// Builds a [`Literal`](crate::Literal) tree with JSON-like syntax.
///
/// Object keys keep their order and duplicates. Any other expression goes
/// through `Literal::from`, so integers become integer literals, floats
/// decimal literals and booleans the identifiers `true` and `false`.
/// Inside arrays and objects, a negative number needs parentheses, as in
/// `[1, (-2)]`.
///
/// ```rust
/// use json_form::{literal, Literal};
///
/// let tree = literal!({"id": 7, "tags": ["a", null], "ok": true});
/// assert_eq!(tree.get("ok"), Some(&Literal::Identifier("true".into())));
/// ```
#[macro_export]
macro_rules! literal {
    (null) => {
        $crate::Literal::Null
    };

    (true) => {
        $crate::Literal::Identifier(::std::string::String::from("true"))
    };

    (false) => {
        $crate::Literal::Identifier(::std::string::String::from("false"))
    };

    ([]) => {
        $crate::Literal::Array(::std::vec::Vec::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Literal::Array(vec![$($crate::literal!($elem)),*])
    };

    ({}) => {
        $crate::Literal::Object(::std::vec::Vec::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {
        $crate::Literal::Object(vec![
            $((::std::string::String::from($key), $crate::literal!($value))),*
        ])
    };

    ($e:expr) => {{
        #[allow(unused_parens)]
        let value = $e;
        $crate::Literal::from(value)
    }};
}

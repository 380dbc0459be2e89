/// Builds a [`Value`](crate::Value) tree from literal syntax.
///
/// Sequences and maps built this way carry dynamic element types, matching
/// what the serde bridge produces.
///
/// # Examples
///
/// ```rust
/// use litrep::{lit, Value};
///
/// let data = lit!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["rust", "serde"]
/// });
///
/// if let Value::Map { entries, .. } = data {
///     assert_eq!(entries.len(), 3);
/// }
/// ```
#[macro_export]
macro_rules! lit {
    // Handle nil
    (nil) => {
        $crate::Value::Nil
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty sequence
    ([]) => {
        $crate::Value::seq($crate::TypeDesc::dynamic(), vec![])
    };

    // Handle non-empty sequence
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::seq($crate::TypeDesc::dynamic(), vec![$($crate::lit!($elem)),*])
    };

    // Handle empty map
    ({}) => {
        $crate::Value::map_of($crate::TypeDesc::dynamic(), $crate::TypeDesc::dynamic(), vec![])
    };

    // Handle non-empty map
    ({ $($key:literal : $value:tt),* $(,)? }) => {
        $crate::Value::map_of(
            $crate::TypeDesc::dynamic(),
            $crate::TypeDesc::dynamic(),
            vec![$(($crate::Value::from($key), $crate::lit!($value))),*],
        )
    };

    // Fallback: anything with a From conversion
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

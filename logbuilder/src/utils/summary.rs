use std::any::type_name;
use std::fmt::Debug;

/// Longest representation logged verbatim, in characters.
pub const MAX_REPR_LEN: usize = 40;

/// `Debug` rendering of `value`, or `<TYPE> of len N` when the rendering is
/// longer than [`MAX_REPR_LEN`].
pub fn describe<T: Debug + ?Sized>(value: &T) -> String {
    let repr = format!("{:?}", value);
    let len = repr.chars().count();
    if len > MAX_REPR_LEN {
        placeholder::<T>(len)
    } else {
        repr
    }
}

/// `key=value`, or `key=<TYPE> of len N` where `N` counts the whole pair.
pub(crate) fn describe_keyword<T: Debug + ?Sized>(key: &str, value: &T) -> String {
    let pair = format!("{}={:?}", key, value);
    let len = pair.chars().count();
    if len > MAX_REPR_LEN {
        format!("{}={}", key, placeholder::<T>(len))
    } else {
        pair
    }
}

fn placeholder<T: ?Sized>(len: usize) -> String {
    format!("<{}> of len {}", type_name::<T>(), len)
}

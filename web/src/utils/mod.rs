//! Small pure helpers shared by the components.

mod classes;
mod format;

pub use classes::{ClassValue, merge_classes};
pub use format::{
    DEFAULT_ADDRESS_CHARS, round_to_decimal_places, round_to_two_decimal_places,
    shorten_address, shorten_address_default,
};

/// Build a class string from any mix of `&str`, `String` and `Option`s of
/// them, then resolve Tailwind conflicts so the last utility wins.
///
/// ```rust
/// use bondfi_web::cn;
///
/// let open = true;
/// assert_eq!(cn!("px-2 py-1 text-sm", open.then_some("p-4")), "text-sm p-4");
/// ```
#[macro_export]
macro_rules! cn {
    ($($value:expr),* $(,)?) => {{
        let mut raw = ::std::string::String::new();
        $( $crate::utils::ClassValue::append_to(&$value, &mut raw); )*
        $crate::utils::merge_classes(&raw)
    }};
}

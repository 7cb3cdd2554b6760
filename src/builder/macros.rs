//! Macros for declaring state identity keys.

/// Declare a field-less enum usable as a state id.
///
/// The enum derives everything a [`StateId`](crate::core::StateId) needs plus
/// `Copy` and serde support, gets a `name()` accessor and a `Display` impl
/// printing the variant name.
///
/// # Example
///
/// ```
/// use navstack::state_ids;
///
/// state_ids! {
///     pub enum Screen {
///         Home,
///         Settings,
///         About,
///     }
/// }
///
/// assert_eq!(Screen::Settings.name(), "Settings");
/// assert_eq!(Screen::About.to_string(), "About");
/// ```
#[macro_export]
macro_rules! state_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Variant name, for display and logging.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

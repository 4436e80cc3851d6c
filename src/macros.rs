//! Macros for declaring phase enums.

/// Generate a fieldless enum together with its [`State`](crate::core::State)
/// implementation.
///
/// Variants listed under `error:` report `is_error() == true`.
///
/// # Example
///
/// ```
/// use abacus::core::State;
/// use abacus::state_enum;
///
/// state_enum! {
///     pub enum DisplayMode {
///         Normal,
///         Blinking,
///         Fault,
///     }
///     error: [Fault]
/// }
///
/// assert_eq!(DisplayMode::Blinking.name(), "Blinking");
/// assert!(DisplayMode::Fault.is_error());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestPhase {
            Ready,
            Busy,
            Broken,
        }
        error: [Broken]
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestPhase::Ready.name(), "Ready");
        assert!(!TestPhase::Ready.is_error());
        assert!(!TestPhase::Busy.is_error());
        assert!(TestPhase::Broken.is_error());
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicPhase {
                A,
                B,
            }
        }

        let _phase = PublicPhase::A;
    }

    #[test]
    fn state_enum_works_without_error_list() {
        state_enum! {
            enum MinimalPhase {
                One,
                Two,
            }
        }

        assert!(!MinimalPhase::One.is_error());
        assert!(!MinimalPhase::Two.is_error());
    }
}

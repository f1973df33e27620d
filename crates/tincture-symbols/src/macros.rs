/// Declares a closed, frozen enumeration of symbolic codes.
///
/// Every variant carries its numeric code and the global name under which
/// theme scripts see it. The generated API is identical for every table so
/// that both directions (`name <-> code`) stay in lockstep.
macro_rules! symbol_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal => $script:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $code,
            )+
        }

        impl $name {
            /// Every variant, ordered by code.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Returns the frozen numeric code.
            pub const fn code(self) -> i64 {
                self as i64
            }

            /// Looks up a variant by numeric code.
            pub fn from_code(code: i64) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Returns the global name theme scripts use for this variant.
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $script,)+
                }
            }

            /// Looks up a variant by its script-visible global name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($script => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::SymbolError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| $crate::SymbolError::UnknownName(s.to_string()))
            }
        }

        impl TryFrom<i64> for $name {
            type Error = $crate::SymbolError;

            fn try_from(code: i64) -> Result<Self, Self::Error> {
                Self::from_code(code).ok_or($crate::SymbolError::UnknownCode { kind: $kind, code })
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> i64 {
                value.code()
            }
        }
    };
}

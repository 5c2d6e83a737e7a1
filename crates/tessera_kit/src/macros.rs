/// Give a closed enum a stable lowercase name, `Display`, `FromStr` and an
/// `ALL` list, so it can be read from config files and command lines.
macro_rules! named_enum {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Every value, in declaration order
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Stable lowercase name
            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|value| value.name().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| $crate::error::ParseError::Unknown {
                        kind: stringify!($ty),
                        value: wanted.to_string(),
                        expected: $ty::ALL
                            .iter()
                            .map(|value| value.name())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

//! Declarative macros for the field-based score types.
//!
//! Both score types are plain structs of `i64` levels listed from highest to
//! lowest priority. These macros generate the impls that depend only on that
//! field list: lexicographic ordering, arithmetic and slash-separated parsing.

/// Generates `Ord`, `PartialOrd`, `Add`, `AddAssign`, `Sub`, `Neg` and `Sum`.
///
/// Arithmetic saturates at the `i64` bounds on every level. Fields must be listed highest priority first; the ordering compares them
/// in that order. The constructor must accept fields in the same order.
///
/// # Usage
/// ```ignore
/// impl_score_ops!(HardSoftScore { hard, soft } => of);
/// ```
macro_rules! impl_score_ops {
    ($type:ident { $($field:ident),+ } => $ctor:ident) => {
        impl Ord for $type {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                std::cmp::Ordering::Equal
                    $(.then_with(|| self.$field.cmp(&other.$field)))+
            }
        }

        impl PartialOrd for $type {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl std::ops::Add for $type {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                $type::$ctor( $(self.$field.saturating_add(other.$field)),+ )
            }
        }

        impl std::ops::AddAssign for $type {
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }

        impl std::ops::Sub for $type {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                $type::$ctor( $(self.$field.saturating_sub(other.$field)),+ )
            }
        }

        impl std::ops::Neg for $type {
            type Output = Self;

            fn neg(self) -> Self {
                $type::$ctor( $(self.$field.saturating_neg()),+ )
            }
        }

        impl std::iter::Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold($type::ZERO, |acc, s| acc + s)
            }
        }
    };
}

/// Generates the `ParseableScore` impl for the `"Xhard/Ysoft"` format.
///
/// Each field maps to a suffix label (e.g., `hard => "hard"`).
///
/// # Usage
/// ```ignore
/// impl_score_parse!(HardSoftScore { hard => "hard", soft => "soft" } => of);
/// ```
macro_rules! impl_score_parse {
    ($type:ident { $($field:ident => $suffix:literal),+ } => $ctor:ident) => {
        impl $crate::score::traits::ParseableScore for $type {
            fn parse(s: &str) -> Result<Self, $crate::score::traits::ScoreParseError> {
                let s = s.trim();
                let suffixes: &[&str] = &[ $($suffix),+ ];
                let mut parts = s.split('/');

                if s.split('/').count() != suffixes.len() {
                    return Err($crate::score::traits::ScoreParseError {
                        message: format!(
                            "Invalid {} format '{}': expected {} parts separated by '/'",
                            stringify!($type), s, suffixes.len()
                        ),
                    });
                }

                $(
                    let $field = {
                        let part = parts.next().unwrap_or_default().trim();
                        let digits = part.strip_suffix($suffix).ok_or_else(|| {
                            $crate::score::traits::ScoreParseError {
                                message: format!(
                                    "{} part '{}' must end with '{}'",
                                    stringify!($field), part, $suffix
                                ),
                            }
                        })?;
                        digits.parse::<i64>().map_err(|e| {
                            $crate::score::traits::ScoreParseError {
                                message: format!("Invalid {} score '{}': {}", $suffix, digits, e),
                            }
                        })?
                    };
                )+

                Ok($type::$ctor( $($field),+ ))
            }

            fn to_string_repr(&self) -> String {
                let parts: Vec<String> = vec![ $(format!("{}{}", self.$field, $suffix)),+ ];
                parts.join("/")
            }
        }
    };
}

//! Closed sets of choices for enum-valued draft fields.

/// A closed set of options a user picks one of.
///
/// Selections are stored in a [`Draft`](super::Draft) by their stable key so
/// the draft itself stays untyped; [`Draft::choice`](super::Draft::choice)
/// turns the key back into the enum.
pub trait Selection: Copy + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// Every option, in display order.
    const ALL: &'static [Self];

    /// Stable key used for storage and serialization.
    fn key(&self) -> &'static str;

    /// Human readable label.
    fn label(&self) -> &'static str;

    /// Parse a stored key back into the option.
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.key() == key)
    }
}

/// Generate a [`Selection`] enum with stable keys.
///
/// # Example
///
/// ```
/// use trailhead::selection_enum;
/// use trailhead::draft::Selection;
///
/// selection_enum! {
///     pub enum Vibe {
///         Quiet => "quiet",
///         Lively => "lively",
///     }
/// }
///
/// assert_eq!(Vibe::Lively.key(), "lively");
/// assert_eq!(Vibe::from_key("quiet"), Some(Vibe::Quiet));
/// assert_eq!(Vibe::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! selection_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $key)]
                $variant
            ),*
        }

        impl $crate::draft::Selection for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn key(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key),*
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::draft::Selection::label(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::Selection;

    selection_enum! {
        enum Weather {
            Sunny => "sunny",
            Rainy => "rainy",
            Windy => "windy",
        }
    }

    #[test]
    fn keys_round_trip() {
        for option in Weather::ALL {
            assert_eq!(Weather::from_key(option.key()), Some(*option));
        }
        assert_eq!(Weather::from_key("snowy"), None);
    }

    #[test]
    fn labels_use_variant_names() {
        assert_eq!(Weather::Rainy.label(), "Rainy");
        assert_eq!(Weather::Windy.to_string(), "Windy");
    }

    #[test]
    fn serde_uses_keys() {
        let json = serde_json::to_string(&Weather::Sunny).unwrap();
        assert_eq!(json, "\"sunny\"");
    }
}

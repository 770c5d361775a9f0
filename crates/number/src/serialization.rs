use {
    crate::Dec,
    serde::{
        Deserialize,
        Deserializer,
        Serialize,
        Serializer,
        de::{self, Visitor},
    },
    std::fmt,
};

/// Serialized in the fixed precision wire format, e.g. `"0.010000000000000000"`.
impl Serialize for Dec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Accepts any decimal string with at most 18 fractional digits.
impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DecVisitor;

        impl Visitor<'_> for DecVisitor {
            type Value = Dec;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a decimal number encoded as a string")
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                s.parse()
                    .map_err(|err| E::custom(format!("failed to decode {s:?} as decimal: {err}")))
            }
        }

        deserializer.deserialize_str(DecVisitor)
    }
}

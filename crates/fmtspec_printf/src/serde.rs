use std::fmt;

use serde::{
    de::{self, SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Serialize,
};

use crate::flags::FormatFlags;

impl Serialize for FormatFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.names().count()))?;
        for name in self.names() {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

struct FormatFlagsVisitor {}

impl FormatFlagsVisitor {
    fn new() -> Self {
        FormatFlagsVisitor {}
    }
}

impl<'de> Visitor<'de> for FormatFlagsVisitor {
    type Value = FormatFlags;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a list of flag names")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut flags = FormatFlags::empty();
        while let Some(name) = access.next_element::<String>()? {
            let flag = FormatFlags::from_name(&name).ok_or_else(|| {
                <A::Error as de::Error>::custom(format!("unknown flag `{}`", name))
            })?;
            flags.insert(flag);
        }
        Ok(flags)
    }
}

impl<'de> Deserialize<'de> for FormatFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(FormatFlagsVisitor::new())
    }
}

use std::fmt;

use super::field::RecordField;

/// Writes the human-readable dump of a record.
///
/// The output is `{Label: value,Label: value}`: present fields only, in
/// declaration order, separated by a bare comma. A record with no present
/// field dumps as `{}`. Works like [`fmt::DebugStruct`]: create it, feed it
/// fields, then call [`Describer::finish`].
pub struct Describer<'a, 'b: 'a> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b: 'a> Describer<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        let result = f.write_str("{");
        Self {
            f,
            result,
            has_fields: false,
        }
    }

    /// Adds a field to the dump if it is present.
    pub fn field<T: RecordField>(&mut self, label: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            if self.result.is_ok() {
                self.result = self.write_entry(label, value);
            }
            self.has_fields = true;
        }
        self
    }

    fn write_entry<T: RecordField>(&mut self, label: &str, value: &T) -> fmt::Result {
        if self.has_fields {
            self.f.write_str(",")?;
        }
        write!(self.f, "{}: ", label)?;
        value.describe_value(self.f)
    }

    pub fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.f.write_str("}")
    }
}

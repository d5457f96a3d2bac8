//! The [`Record`] capability trait.

use crate::value::Value;

/// A record that can be shown in a [`ListView`](crate::ListView).
///
/// The engine never knows what a record *is*; it only asks for field values
/// by name. Unknown or missing fields return [`Value::None`].
///
/// # Example
///
/// ```
/// use boxoffice_view::{Record, Value, Number};
///
/// struct Venue {
///     name: String,
///     capacity: u32,
///     city: Option<String>,
/// }
///
/// impl Record for Venue {
///     fn field(&self, name: &str) -> Value<'_> {
///         match name {
///             "name" => Value::String(&self.name),
///             "capacity" => Value::Number(Number::from(self.capacity)),
///             "city" => self.city.as_deref().into(),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns the value of a field for filtering and sorting.
    fn field(&self, name: &str) -> Value<'_>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Value<'_> {
        (**self).field(name)
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn field(&self, name: &str) -> Value<'_> {
        (**self).field(name)
    }
}

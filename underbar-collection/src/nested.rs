/// An arbitrarily nested sequence: either a scalar or a list of further nested values.
/// This is the input shape of `flatten`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Nested<T> {

    /// A scalar element
    Item(T),

    /// A nested list
    List(Vec<Nested<T>>),
}

impl <T> Nested<T> {

    /// Wraps a scalar
    pub fn item(value: T) -> Self {
        Nested::Item(value)
    }

    /// Wraps a list of nested values
    pub fn list(values: Vec<Nested<T>>) -> Self {
        Nested::List(values)
    }

    /// Wraps a flat list of scalars
    pub fn flat(values: Vec<T>) -> Self {
        Nested::List(values.into_iter().map(Nested::Item).collect())
    }

    /// Whether this is a list rather than a scalar
    pub fn is_list(&self) -> bool {
        match *self {
            Nested::List(_) => true,
            Nested::Item(_) => false
        }
    }
}

/// Alias for a vector of Edit
/// Result of the Myers diff function
pub type Diff<T> = Vec<Edit<T>>;

/// One step of a shortest edit script:
/// new (Insert)
/// removed (Delete)
/// equal (Equal)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Insert(T),
    Delete(T),
    Equal(T),
}

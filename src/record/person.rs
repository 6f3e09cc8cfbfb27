/// A value that can be stored in a [`ChainedHashTable`](crate::hash::ChainedHashTable).
///
/// The names form the key used for hashing and ordering, which means that they must not change
/// while the value is held by a table. Implementors should only hand out the names, never allow
/// them to be edited in place.
pub trait Person {
    fn first_name(&self) -> &str;

    fn last_name(&self) -> &str;

    /// The identifier used to tell apart people with the same name.
    fn id(&self) -> i32;
}

impl<P: Person + ?Sized> Person for &P {
    fn first_name(&self) -> &str {
        (**self).first_name()
    }

    fn last_name(&self) -> &str {
        (**self).last_name()
    }

    fn id(&self) -> i32 {
        (**self).id()
    }
}

impl<P: Person + ?Sized> Person for Box<P> {
    fn first_name(&self) -> &str {
        (**self).first_name()
    }

    fn last_name(&self) -> &str {
        (**self).last_name()
    }

    fn id(&self) -> i32 {
        (**self).id()
    }
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

// Each node is owned by the link before it, so unlinking a node can't leave its predecessor
// pointing at freed memory.
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub const fn new(value: T, next: Link<T>) -> Node<T> {
        Node {
            value,
            next,
        }
    }
}

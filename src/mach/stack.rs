/// ## Unbounded LIFO
///
/// Popping an empty stack is not an error here. POP faults and RET
/// halts on the same condition, so the caller decides.

#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Stack<T> {
        Stack { vec: vec![] }
    }
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack::default()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    /// Bottom first.
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }
    pub fn push(&mut self, val: T) {
        self.vec.push(val);
    }
    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }
}

/// An ordered set of alternatives with one selected.
///
/// `select` always indexes into `choices` when there are any; cycling
/// wraps around in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chooser<T> {
    choices: Vec<T>,
    select: usize,
}

impl<T> Chooser<T> {
    pub fn new(choices: Vec<T>) -> Self {
        Self { choices, select: 0 }
    }

    pub fn choices(&self) -> &[T] {
        &self.choices
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.select
    }

    /// More than one alternative to cycle through
    pub fn is_cyclable(&self) -> bool {
        self.choices.len() > 1
    }

    pub fn chosen(&self) -> Option<&T> {
        self.choices.get(self.select)
    }

    /// Move the selection by `step`, wrapping. Returns whether it moved.
    pub fn cycle(&mut self, step: isize) -> bool {
        if !self.is_cyclable() || step == 0 {
            return false;
        }
        let len = self.choices.len() as isize;
        let next = (self.select as isize + step).rem_euclid(len) as usize;
        let moved = next != self.select;
        self.select = next;
        moved
    }
}

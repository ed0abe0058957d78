use crate::filters::EncodedFilter;

#[derive(Debug, PartialEq)]
pub enum Submission<'a> {
    /// The filter differs from the last accepted one and replaces it.
    Changed(&'a EncodedFilter),
    /// Identical to the last accepted filter; nothing downstream should run.
    Unchanged,
}

/// Remembers the last accepted filter of one form.
#[derive(Debug, Default)]
pub struct FilterSession {
    current: Option<EncodedFilter>,
    generation: u64,
}

impl FilterSession {
    pub fn submit(&mut self, filter: EncodedFilter) -> Submission<'_> {
        if self.current.as_ref() == Some(&filter) {
            return Submission::Unchanged;
        }

        self.generation += 1;
        let current = self.current.insert(filter);
        Submission::Changed(current)
    }

    /// Number of accepted changes so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

use crate::language::Sequence;

use super::builder::BuildError;

/// An entry on the sequence stack. Markers separate nested scopes:
///
/// ```text
/// [root, Marker, group, branch, Marker, inner, ...]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Marker,
    Scope(Sequence),
}

/// The in-progress sequences of a sentence being built. The top of the stack
/// is where leaves are attached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct SequenceStack {
    entries: Vec<Entry>,
}

impl SequenceStack {
    pub(crate) fn new() -> SequenceStack {
        SequenceStack {
            entries: Vec::new(),
        }
    }

    /// Discard everything and start again from the given root sequence.
    pub(crate) fn reset(&mut self, root: Sequence) {
        self.entries
            .clear();
        self.entries
            .push(Entry::Scope(root));
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries
            .is_empty()
    }

    /// Begin a deeper nesting level, as for a group or optional.
    pub(crate) fn push_scope(&mut self, sequence: Sequence) {
        self.entries
            .push(Entry::Marker);
        self.entries
            .push(Entry::Scope(sequence));
    }

    /// Begin a new branch of the alternative in the current scope. No marker
    /// is pushed; the branch is folded back into its scope when the next
    /// branch begins or when the scope is popped.
    pub(crate) fn push_branch(&mut self, sequence: Sequence) {
        self.entries
            .push(Entry::Scope(sequence));
    }

    pub(crate) fn current_target(&mut self) -> Result<&mut Sequence, BuildError> {
        match self
            .entries
            .last_mut()
        {
            Some(Entry::Scope(sequence)) => Ok(sequence),
            Some(Entry::Marker) => Err(BuildError::MarkerOnTop),
            None => Err(BuildError::EmptyStack),
        }
    }

    /// The sequence that opened the innermost scope, that is, the one
    /// immediately above the nearest marker. Any open branch is first folded
    /// back into it.
    pub(crate) fn enclosing_target(&mut self) -> Result<&mut Sequence, BuildError> {
        if self.is_empty() {
            return Err(BuildError::EmptyStack);
        }

        let marker = self
            .marker_position()
            .ok_or(BuildError::MissingMarker)?;

        self.fold_branches(marker)?;

        match self
            .entries
            .get_mut(marker + 1)
        {
            Some(Entry::Scope(sequence)) => Ok(sequence),
            _ => Err(BuildError::EmptyScope),
        }
    }

    /// Close the innermost scope, removing everything down to and including
    /// the nearest marker, and hand back the sequence that opened it.
    pub(crate) fn pop_scope(&mut self) -> Result<Sequence, BuildError> {
        if self
            .entries
            .len()
            < 2
        {
            return Err(BuildError::BadStack);
        }

        let marker = self
            .marker_position()
            .ok_or(BuildError::MissingMarker)?;

        self.fold_branches(marker)?;

        let sequence = match self
            .entries
            .pop()
        {
            Some(Entry::Scope(sequence)) => sequence,
            _ => return Err(BuildError::EmptyScope),
        };

        match self
            .entries
            .pop()
        {
            Some(Entry::Marker) => Ok(sequence),
            _ => Err(BuildError::MissingMarker),
        }
    }

    /// Remove the root sequence, which must be the only thing left.
    pub(crate) fn take_root(&mut self) -> Result<Sequence, BuildError> {
        let open = self
            .entries
            .iter()
            .filter(|entry| matches!(entry, Entry::Marker))
            .count();
        if open > 0 {
            return Err(BuildError::UnbalancedScopes(open));
        }

        match self
            .entries
            .len()
        {
            0 => Err(BuildError::EmptyStack),
            1 => match self
                .entries
                .pop()
            {
                Some(Entry::Scope(root)) => Ok(root),
                _ => Err(BuildError::EmptyStack),
            },
            _ => Err(BuildError::BadStack),
        }
    }

    fn marker_position(&self) -> Option<usize> {
        self.entries
            .iter()
            .rposition(|entry| matches!(entry, Entry::Marker))
    }

    /// Attach any branches sitting above the scope that opened at `marker`
    /// to that scope, in the order they were begun.
    fn fold_branches(&mut self, marker: usize) -> Result<(), BuildError> {
        let mut branches = Vec::new();

        while self
            .entries
            .len()
            > marker + 2
        {
            match self
                .entries
                .pop()
            {
                Some(Entry::Scope(branch)) => branches.push(branch),
                _ => return Err(BuildError::BadStack),
            }
        }

        if branches.is_empty() {
            return Ok(());
        }

        match self
            .entries
            .last_mut()
        {
            Some(Entry::Scope(scope)) => {
                scope
                    .items
                    .extend(
                        branches
                            .into_iter()
                            .rev()
                            .map(Into::into),
                    );
                Ok(())
            }
            _ => Err(BuildError::EmptyScope),
        }
    }
}

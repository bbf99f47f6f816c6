use serde::{Deserialize, Serialize};

use super::fragment::Fragment;
use super::ids::IdGenerator;

const EXPORT_SEPARATOR: &str = "\n\n---\n\n";

/// An ordered, exclusively owned sequence of fragments being edited.
///
/// A thread is never left empty by construction; `remove` may empty it, in
/// which case the scorer falls back to its neutral analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    fragments: Vec<Fragment>,
}

impl Thread {
    /// A fresh thread with a single empty fragment.
    pub fn new(ids: &mut impl IdGenerator) -> Self {
        Self {
            fragments: vec![Fragment::new(ids.next_id(), String::new())],
        }
    }

    pub fn from_fragments(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// Wrap bodies produced elsewhere (a remote generator, a file) with fresh ids.
    pub fn from_bodies<S: Into<String>>(
        bodies: impl IntoIterator<Item = S>,
        ids: &mut impl IdGenerator,
    ) -> Self {
        let fragments: Vec<Fragment> = bodies
            .into_iter()
            .map(|body| Fragment::new(ids.next_id(), body))
            .collect();

        if fragments.is_empty() {
            return Self::new(ids);
        }

        Self { fragments }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Append an empty fragment and return its id.
    pub fn push_empty(&mut self, ids: &mut impl IdGenerator) -> String {
        let id = ids.next_id();
        self.fragments.push(Fragment::new(id.clone(), String::new()));
        id
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.fragments.len();
        self.fragments.retain(|f| f.id != id);
        self.fragments.len() != before
    }

    /// Replace a fragment's body in place.
    pub fn update(&mut self, id: &str, content: impl Into<String>) -> bool {
        match self.fragments.iter_mut().find(|f| f.id == id) {
            Some(fragment) => {
                fragment.content = content.into();
                true
            }
            None => false,
        }
    }

    /// Move the fragment at `from` so it ends up at index `to`.
    pub fn move_fragment(&mut self, from: usize, to: usize) -> bool {
        let len = self.fragments.len();
        if from >= len || to >= len {
            return false;
        }
        if from != to {
            let fragment = self.fragments.remove(from);
            self.fragments.insert(to, fragment);
        }
        true
    }

    pub fn total_chars(&self) -> usize {
        self.fragments.iter().map(Fragment::char_count).sum()
    }

    /// Render the thread as numbered posts ready to paste.
    pub fn export(&self) -> String {
        let total = self.fragments.len();
        self.fragments
            .iter()
            .enumerate()
            .map(|(index, fragment)| format!("{}/{}\n{}", index + 1, total, fragment.content))
            .collect::<Vec<_>>()
            .join(EXPORT_SEPARATOR)
    }
}

use crate::lang::ast::BasicLine;
use std::collections::{btree_map, BTreeMap};

/// Label and physical-line indices into a program's line vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    labels: BTreeMap<u64, usize>,
    physical: BTreeMap<usize, usize>,
}

impl Listing {
    pub fn build(lines: &[BasicLine]) -> Listing {
        let mut listing = Listing::default();
        for (index, line) in lines.iter().enumerate() {
            if let Some(previous) = listing.labels.insert(line.label, index) {
                tracing::trace!(
                    label = line.label,
                    previous = lines[previous].position.line,
                    current = line.position.line,
                    "duplicate label, last one wins"
                );
            }
            listing.physical.insert(line.position.line, index);
        }
        listing
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, label: u64) -> Option<usize> {
        self.labels.get(&label).copied()
    }

    /// Index of the line starting on 1-based physical line `line`.
    pub fn physical(&self, line: usize) -> Option<usize> {
        self.physical.get(&line).copied()
    }

    pub fn labels(&self) -> btree_map::Iter<'_, u64, usize> {
        self.labels.iter()
    }
}

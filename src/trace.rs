//! Step-by-step trace of a FLAMES reading.
//!
//! These types capture every intermediate value of a reading, from the
//! normalized names through each ring elimination, so a front end can show
//! how the result was reached.

use crate::flames::{RING, Relationship, Symbol, cancel_common, normalize, removal_index};

/// One deletion from the elimination ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EliminationStep {
    /// Ring contents before this deletion.
    pub ring_before: Vec<Symbol>,
    /// Position in `ring_before` that was removed.
    pub removed_index: usize,
    pub removed: Symbol,
    /// Where counting resumes on the shrunken ring.
    pub cursor_after: usize,
}

/// Complete trace of a reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlamesTrace {
    pub normalized_first: String,
    pub normalized_second: String,
    pub remaining_first: String,
    pub remaining_second: String,
    pub count: usize,
    /// Empty when `count` is zero.
    pub steps: Vec<EliminationStep>,
    pub survivor: Symbol,
}

impl FlamesTrace {
    pub fn relationship(&self) -> Relationship {
        self.survivor.relationship()
    }

    /// Render the trace as human-readable lines.
    pub fn lines(&self) -> Vec<String> {
        let mut out = vec![
            format!(
                "Normalized: {:?} / {:?}",
                self.normalized_first, self.normalized_second
            ),
            format!(
                "Remaining:  {:?} / {:?}",
                self.remaining_first, self.remaining_second
            ),
            format!("Count:      {}", self.count),
        ];

        if self.steps.is_empty() {
            out.push("All letters cancelled, result is F".to_string());
        }
        for (i, step) in self.steps.iter().enumerate() {
            let ring: String = step.ring_before.iter().map(|s| s.letter()).collect();
            out.push(format!(
                "Step {}: {} -> remove {} at {}",
                i + 1,
                ring,
                step.removed,
                step.removed_index
            ));
        }
        out.push(format!("Survivor:   {}", self.survivor));
        out
    }
}

/// Compute a reading and record every intermediate value.
///
/// The survivor always agrees with [`crate::compute_relationship`].
pub fn trace(name1: &str, name2: &str) -> FlamesTrace {
    let normalized_first = normalize(name1);
    let normalized_second = normalize(name2);
    let (remaining_first, remaining_second) = cancel_common(&normalized_first, &normalized_second);
    let count = remaining_first.len() + remaining_second.len();

    let mut steps = Vec::new();
    let survivor = if count == 0 {
        Symbol::F
    } else {
        let mut ring = RING.to_vec();
        let mut cursor = 0;
        while ring.len() > 1 {
            let ring_before = ring.clone();
            let idx = removal_index(cursor, count, ring.len());
            let removed = ring.remove(idx);
            cursor = idx % ring.len();
            steps.push(EliminationStep {
                ring_before,
                removed_index: idx,
                removed,
                cursor_after: cursor,
            });
        }
        ring[0]
    };

    FlamesTrace {
        normalized_first,
        normalized_second,
        remaining_first,
        remaining_second,
        count,
        steps,
        survivor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flames::compute_relationship;

    #[test]
    fn test_trace_structure() {
        let t = trace("David", "Sara");
        assert_eq!(t.normalized_first, "david");
        assert_eq!(t.normalized_second, "sara");
        assert_eq!(t.count, 7);
        // Six symbols shrink to one in five deletions
        assert_eq!(t.steps.len(), 5);
        assert_eq!(t.steps[0].ring_before.len(), 6);
        assert_eq!(t.steps[4].ring_before.len(), 2);
        assert_eq!(t.survivor, Symbol::E);
    }

    #[test]
    fn test_trace_removal_order() {
        // Count 3 removes A, S, M, L, E in turn
        let t = trace("", "Bob");
        let removed: Vec<Symbol> = t.steps.iter().map(|s| s.removed).collect();
        assert_eq!(
            removed,
            vec![Symbol::A, Symbol::S, Symbol::M, Symbol::L, Symbol::E]
        );
        assert_eq!(t.steps[1].removed_index, 4);
        assert_eq!(t.steps[1].cursor_after, 0);
    }

    #[test]
    fn test_trace_zero_count_has_no_steps() {
        let t = trace("Anna", "nana");
        assert_eq!(t.count, 0);
        assert!(t.steps.is_empty());
        assert_eq!(t.relationship(), Relationship::Friends);
    }

    #[test]
    fn test_trace_agrees_with_engine() {
        let pairs = [
            ("Harry", "Sally"),
            ("Romeo", "Juliet"),
            ("Alice", "Bob"),
            ("x", ""),
            ("Zz", "zzzzzzzzzzzzzzz"),
        ];
        for (a, b) in pairs {
            assert_eq!(trace(a, b).relationship(), compute_relationship(a, b));
        }
    }

    #[test]
    fn test_trace_lines() {
        let lines = trace("", "Bob").lines();
        assert_eq!(lines[2], "Count:      3");
        assert_eq!(lines[3], "Step 1: FLAMES -> remove A at 2");
        assert_eq!(lines.last().unwrap(), "Survivor:   F");

        let lines = trace("a", "A").lines();
        assert!(lines.iter().any(|l| l.contains("All letters cancelled")));
    }
}

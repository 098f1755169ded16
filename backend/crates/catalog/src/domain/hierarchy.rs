//! Category Hierarchy Rules
//!
//! Pure functions enforcing the tree invariants:
//! - depth is bounded at [`MAX_DEPTH`] (roots are level 1)
//! - `ancestors` is exactly the parent's chain with the parent appended
//! - `level` is `parent.level + 1` (1 for roots)
//! - a node never appears in its own ancestor chain
//!
//! The backend derives `(ancestors, level)` from the authoritative parent
//! record on every write. Caller-supplied values are only ever *verified*
//! against the derived ancestry, never stored as-is.

use uuid::Uuid;

use crate::domain::entities::Category;

/// Maximum tree depth. A node at this level cannot be a parent.
pub const MAX_DEPTH: i16 = 3;

/// Hierarchy rule violations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HierarchyError {
    /// The chosen parent sits at the maximum depth already
    #[error("parent is at level {parent_level}; the tree is bounded at {MAX_DEPTH} levels")]
    DepthExceeded { parent_level: i16 },

    /// A node cannot be its own parent
    #[error("a category cannot be its own parent")]
    SelfParent,

    /// The chosen parent lies inside the node's own subtree
    #[error("reparenting under the category's own subtree would create a cycle")]
    CycleDetected,

    /// Submitted ancestors disagree with the chain derived from the parent
    #[error("submitted ancestors do not match the parent's chain (expected {expected:?}, got {submitted:?})")]
    AncestorMismatch {
        expected: Vec<Uuid>,
        submitted: Vec<Uuid>,
    },

    /// Submitted level disagrees with the level derived from the parent
    #[error("submitted level {submitted} does not match derived level {expected}")]
    LevelMismatch { expected: i16, submitted: i16 },
}

/// Derived placement of a node in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ancestry {
    /// Chain of ancestor ids, root-first, exclusive of the node itself
    pub ancestors: Vec<Uuid>,
    /// Depth in the tree, root = 1
    pub level: i16,
}

impl Ancestry {
    /// Verify caller-asserted derived fields against this ancestry.
    ///
    /// `None` means the caller did not assert a value; absent fields are
    /// filled from the derivation, never rejected.
    pub fn verify_submitted(
        &self,
        ancestors: Option<&[Uuid]>,
        level: Option<i16>,
    ) -> Result<(), HierarchyError> {
        if let Some(submitted) = ancestors {
            if submitted != self.ancestors.as_slice() {
                return Err(HierarchyError::AncestorMismatch {
                    expected: self.ancestors.clone(),
                    submitted: submitted.to_vec(),
                });
            }
        }

        if let Some(submitted) = level {
            if submitted != self.level {
                return Err(HierarchyError::LevelMismatch {
                    expected: self.level,
                    submitted,
                });
            }
        }

        Ok(())
    }
}

/// Derive `(ancestors, level)` from the authoritative parent record.
///
/// `None` derives a root placement. A parent already at [`MAX_DEPTH`]
/// cannot accept children.
pub fn derive_ancestry(parent: Option<&Category>) -> Result<Ancestry, HierarchyError> {
    match parent {
        None => Ok(Ancestry {
            ancestors: Vec::new(),
            level: 1,
        }),
        Some(parent) => {
            if parent.level >= MAX_DEPTH {
                return Err(HierarchyError::DepthExceeded {
                    parent_level: parent.level,
                });
            }

            let mut ancestors = parent.ancestors.clone();
            ancestors.push(parent.id);

            Ok(Ancestry {
                ancestors,
                level: parent.level + 1,
            })
        }
    }
}

/// Check that moving `node_id` under `parent` cannot create a cycle.
///
/// The parent's own chain is authoritative: if the node appears in it
/// (or is the parent itself), the move is rejected.
pub fn check_reparent(node_id: Uuid, parent: &Category) -> Result<(), HierarchyError> {
    if parent.id == node_id {
        return Err(HierarchyError::SelfParent);
    }
    if parent.ancestors.contains(&node_id) {
        return Err(HierarchyError::CycleDetected);
    }
    Ok(())
}

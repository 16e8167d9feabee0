//! Recursive, reference-following diff of two definition graphs.
//!
//! [`ModelDiff`] is built once per pair of definition tables and then fed any
//! number of root model pairs; every call adds to the same three lists.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use crate::diff::key_diff::MapKeyDiff;
use crate::diff::model::ModelDiffResult;
use crate::diff::options::{DiffOptions, RefExpansion};
use crate::errors::{Result, SchemaDiffError};
use crate::model::{DefinitionTable, ElProperty, Model, ModelIndex, Property};
use crate::{log_op_end, log_op_error, log_op_start};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Side {
    Left,
    Right,
}

/// Identity of a table member on one side. Left and right identities never collide.
type ModelKey = (Side, ModelIndex);

/// A model being diffed, with its identity when it belongs to a table.
#[derive(Clone, Copy)]
struct Node<'m> {
    key: Option<ModelKey>,
    model: &'m Model,
}

/// Accumulating diff between an old (left) and new (right) definition table.
pub struct ModelDiff<'a> {
    left_definitions: &'a DefinitionTable,
    right_definitions: &'a DefinitionTable,
    options: DiffOptions,
    increased: Vec<ElProperty>,
    missing: Vec<ElProperty>,
    changed: Vec<ElProperty>,
}

impl<'a> ModelDiff<'a> {
    /// Start a diff against the given tables with default options.
    pub fn with_definitions(left: &'a DefinitionTable, right: &'a DefinitionTable) -> Self {
        Self::with_options(left, right, DiffOptions::default())
    }

    pub fn with_options(
        left: &'a DefinitionTable,
        right: &'a DefinitionTable,
        options: DiffOptions,
    ) -> Self {
        Self {
            left_definitions: left,
            right_definitions: right,
            options,
            increased: Vec::new(),
            missing: Vec::new(),
            changed: Vec::new(),
        }
    }

    /// Diff two root models, paths starting at the root.
    ///
    /// Roots borrowed from the tables keep their identity, so a definition
    /// that refers back to the root stops at the root. A root that is not a
    /// table member (a clone, or a model built elsewhere) has no identity: a
    /// reference back to its definition enters the table's copy once more
    /// before the cycle stops. Pass table members by borrow, or use
    /// [`ModelDiff::diff_definitions`], to diff a definition as itself.
    pub fn diff(&mut self, left: Option<&Model>, right: Option<&Model>) -> &mut Self {
        self.diff_at(left, right, None)
    }

    /// Diff two root models, every path prefixed with `parent_el`.
    ///
    /// Root identity works as in [`ModelDiff::diff`].
    pub fn diff_at(
        &mut self,
        left: Option<&Model>,
        right: Option<&Model>,
        parent_el: Option<&str>,
    ) -> &mut Self {
        let start = Instant::now();
        log_op_start!("diff", parent_el = parent_el.unwrap_or_default());

        let left = left.map(|model| Node {
            key: self
                .left_definitions
                .index_of(model)
                .map(|index| (Side::Left, index)),
            model,
        });
        let right = right.map(|model| Node {
            key: self
                .right_definitions
                .index_of(model)
                .map(|index| (Side::Right, index)),
            model,
        });
        self.diff_nodes(left, right, parent_el, &mut BTreeSet::new());

        self.log_end("diff", start);
        self
    }

    /// Diff the definition `left_name` of the left table against
    /// `right_name` of the right table.
    ///
    /// A name missing from one table diffs as an absent model.
    ///
    /// # Errors
    ///
    /// `DefinitionNotFound` if neither table has its name.
    pub fn diff_definitions(&mut self, left_name: &str, right_name: &str) -> Result<&mut Self> {
        let start = Instant::now();
        log_op_start!("diff_definitions", definition = left_name);

        let left = self.resolve(Side::Left, left_name);
        let right = self.resolve(Side::Right, right_name);
        if left.is_none() && right.is_none() {
            let name = if left_name == right_name {
                left_name.to_string()
            } else {
                format!("{}, {}", left_name, right_name)
            };
            let err = SchemaDiffError::DefinitionNotFound { name };
            log_op_error!(
                "diff_definitions",
                err.clone(),
                duration_ms = elapsed_ms(start)
            );
            return Err(err);
        }
        self.diff_nodes(left, right, None, &mut BTreeSet::new());

        self.log_end("diff_definitions", start);
        Ok(self)
    }

    pub fn increased(&self) -> &[ElProperty] {
        &self.increased
    }

    pub fn missing(&self) -> &[ElProperty] {
        &self.missing
    }

    pub fn changed(&self) -> &[ElProperty] {
        &self.changed
    }

    pub fn is_empty(&self) -> bool {
        self.increased.is_empty() && self.missing.is_empty() && self.changed.is_empty()
    }

    pub fn into_result(self) -> ModelDiffResult {
        ModelDiffResult {
            increased: self.increased,
            missing: self.missing,
            changed: self.changed,
        }
    }

    fn log_end(&self, op: &str, start: Instant) {
        log_op_end!(
            op,
            duration_ms = elapsed_ms(start),
            increased_len = self.increased.len(),
            missing_len = self.missing.len(),
            changed_len = self.changed.len()
        );
    }

    fn table(&self, side: Side) -> &'a DefinitionTable {
        match side {
            Side::Left => self.left_definitions,
            Side::Right => self.right_definitions,
        }
    }

    /// Look a reference up in its own side's table.
    fn resolve(&self, side: Side, name: &str) -> Option<Node<'a>> {
        let resolved = self.table(side).resolve(name);
        if resolved.is_none() {
            tracing::debug!(reference = name, side = ?side, "unresolved reference skipped");
        }
        resolved.map(|(index, model)| Node {
            key: Some((side, index)),
            model,
        })
    }

    /// `visited` holds the models being expanded on the current path only:
    /// entries are added before descending and removed on the way back.
    fn diff_nodes<'m>(
        &mut self,
        left: Option<Node<'m>>,
        right: Option<Node<'m>>,
        parent_el: Option<&str>,
        visited: &mut BTreeSet<ModelKey>,
    ) where
        'a: 'm,
    {
        let seen = |node: Option<Node<'m>>| {
            node.and_then(|n| n.key)
                .is_some_and(|key| visited.contains(&key))
        };
        if (left.is_none() && right.is_none()) || seen(left) || seen(right) {
            tracing::trace!(parent_el = parent_el.unwrap_or_default(), "diff boundary");
            return;
        }

        let left_props = left.map(|n| &n.model.properties);
        let right_props = right.map(|n| &n.model.properties);
        let properties = MapKeyDiff::diff(left_props, right_props);

        let added = self.build_el_properties(
            &properties.increased,
            parent_el,
            Side::Right,
            &mut Vec::new(),
        );
        self.increased.extend(added);
        let removed =
            self.build_el_properties(&properties.missing, parent_el, Side::Left, &mut Vec::new());
        self.missing.extend(removed);

        let entered: Vec<ModelKey> = [left, right]
            .into_iter()
            .flatten()
            .filter_map(|n| n.key)
            .filter(|key| visited.insert(*key))
            .collect();

        for key in properties.shared_keys {
            let (Some(left_prop), Some(right_prop)) = (
                left_props.and_then(|p| p.get(key)),
                right_props.and_then(|p| p.get(key)),
            ) else {
                continue;
            };
            let el = el_path(parent_el, key);

            match (left_prop, right_prop) {
                (Property::Reference(left_ref), Property::Reference(right_ref)) => {
                    let left_child = self.resolve(Side::Left, left_ref);
                    let right_child = self.resolve(Side::Right, right_ref);
                    self.diff_nodes(left_child, right_child, Some(el.as_str()), visited);
                }
                (left_prop, right_prop) if left_prop != right_prop => {
                    self.changed.push(ElProperty::new(el, left_prop.clone()));
                }
                _ => {}
            }
        }

        for key in entered {
            visited.remove(&key);
        }
    }

    /// Result entries for fields present on one side only.
    ///
    /// Leaves are reported as-is. A reference is replaced by the fields of
    /// the model it names, one level down; `expanding` holds the definition
    /// names already being expanded on this path so cycles stop.
    fn build_el_properties(
        &self,
        properties: &BTreeMap<&String, &Property>,
        parent_el: Option<&str>,
        side: Side,
        expanding: &mut Vec<String>,
    ) -> Vec<ElProperty> {
        let mut result = Vec::new();

        for (name, property) in properties {
            match property {
                Property::Leaf(_) => {
                    result.push(ElProperty::new(el_path(parent_el, name), (*property).clone()));
                }
                Property::Reference(reference) => {
                    if expanding.iter().any(|n| n == reference) {
                        continue;
                    }
                    let Some(target) = self.resolve(side, reference) else {
                        continue;
                    };

                    let nested: BTreeMap<&String, &Property> =
                        target.model.properties.iter().collect();
                    let el = el_path(parent_el, name);
                    expanding.push(reference.clone());
                    let expanded =
                        self.build_el_properties(&nested, Some(el.as_str()), side, expanding);
                    expanding.pop();
                    result.extend(expanded);

                    if self.options.ref_expansion == RefExpansion::FirstOnly {
                        return result;
                    }
                }
            }
        }
        result
    }
}

/// `parent.name`, or just `name` at the root
fn el_path(parent_el: Option<&str>, name: &str) -> String {
    match parent_el {
        Some(parent) => format!("{}.{}", parent, name),
        None => name.to_string(),
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

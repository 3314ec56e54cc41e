//! Connection search, clearing, gravity and field-to-field diffs.
//!
//! Every function here is pure with respect to its field argument: it
//! returns a [`DiffBatch`] for the caller to apply. The one exception is
//! [`gravitate`], a thin convenience that computes and applies gravity.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use tsumo_core::{Dimension, FieldError, FieldObject, Position};

use crate::diff::{Diff, DiffBatch};
use crate::field::Field;

/// A maximal set of 4-connected cells of one kind.
///
/// Group contents are compared as sets; the iteration order reflects the
/// search and carries no meaning.
pub type Group = IndexSet<Position>;

/// Connected groups keyed by target kind, in the order targets were given.
pub type Connections = IndexMap<FieldObject, Vec<Group>>;

/// Which rows a connection search may visit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Skip hidden rows entirely: hidden cells neither start nor extend a group.
    #[default]
    VisibleOnly,
    /// Search every row.
    IncludeHidden,
}

impl Visibility {
    fn admits(self, dimension: &Dimension, position: Position) -> bool {
        match self {
            Self::VisibleOnly => !dimension.is_hidden(position),
            Self::IncludeHidden => true,
        }
    }
}

/// Find the connected groups of each target kind.
///
/// Every position is visited exactly once. A position whose kind is a
/// target and which passes `visibility` seeds a depth-first search through
/// same-kind 4-neighbours; the component is kept if it has at least
/// `min_size` cells. No position appears in two groups.
///
/// The returned map has an entry (possibly empty) for every target.
///
/// # Examples
///
/// ```
/// use tsumo_core::{Dimension, FieldObject, Position};
/// use tsumo_field::algorithm::find_connections;
/// use tsumo_field::{Field, Visibility};
///
/// let mut field = Field::new(Dimension::default());
/// for row in 0..4 {
///     field.set(Position::new(row, 2), FieldObject::Red);
/// }
/// let found = find_connections(&field, &[FieldObject::Red], 4, Visibility::VisibleOnly);
/// assert_eq!(found[&FieldObject::Red].len(), 1);
/// assert_eq!(found[&FieldObject::Red][0].len(), 4);
/// ```
pub fn find_connections(
    field: &Field,
    targets: &[FieldObject],
    min_size: usize,
    visibility: Visibility,
) -> Connections {
    let dimension = field.dimension();
    let mut result: Connections = targets.iter().map(|&t| (t, Vec::new())).collect();
    let mut visited = vec![false; dimension.cell_count()];

    for (index, seed) in dimension.positions().enumerate() {
        if visited[index] {
            continue;
        }
        visited[index] = true;

        let target = field.get(seed).unwrap_or_default();
        if !result.contains_key(&target) || !visibility.admits(&dimension, seed) {
            continue;
        }

        let mut group = Group::new();
        let mut stack = vec![seed];
        while let Some(current) = stack.pop() {
            group.insert(current);
            for neighbour in current.neighbours(&dimension) {
                let Some(i) = dimension.primitive(neighbour) else {
                    continue;
                };
                if visited[i]
                    || field.get(neighbour) != Some(target)
                    || !visibility.admits(&dimension, neighbour)
                {
                    continue;
                }
                visited[i] = true;
                stack.push(neighbour);
            }
        }

        if group.len() >= min_size {
            if let Some(groups) = result.get_mut(&target) {
                groups.push(group);
            }
        }
    }

    result
}

/// Every position of every group, flattened in map order.
pub fn flatten_connections(connections: &Connections) -> Vec<Position> {
    connections
        .values()
        .flat_map(|groups| groups.iter().flat_map(|g| g.iter().copied()))
        .collect()
}

/// Compute the transforms caused by clearing `positions`.
///
/// Each cleared position proposes `cleared` for itself and
/// `adjacent_cleared` for each in-bounds 4-neighbour. Proposals for the
/// same position compose: a later proposal starts from the kind produced
/// by earlier ones, not from the field. Positions whose final kind equals
/// their original kind yield no diff. Out-of-bounds inputs are skipped and
/// repeated inputs count once.
///
/// Diffs are ordered by the first time each position was touched.
///
/// When a kind's `adjacent_cleared` is not the identity and several clears
/// overlap, the result can depend on input order.
///
/// All positions address `field`. To clear across several fields, call this
/// once per field; each call only reads the field it is given.
pub fn clearing_diff<I>(field: &Field, positions: I) -> DiffBatch
where
    I: IntoIterator<Item = Position>,
{
    let dimension = field.dimension();
    let cleared: IndexSet<Position> = positions
        .into_iter()
        .filter(|p| dimension.contains(*p))
        .collect();

    // position -> (original kind, pending kind)
    let mut pending: IndexMap<Position, (FieldObject, FieldObject)> = IndexMap::new();
    let mut propose = |position: Position, transition: fn(FieldObject, Position) -> FieldObject| {
        let Some(original) = field.get(position) else {
            return;
        };
        let entry = pending.entry(position).or_insert((original, original));
        entry.1 = transition(entry.1, position);
    };

    for &position in &cleared {
        propose(position, FieldObject::cleared);
        for neighbour in position.neighbours(&dimension) {
            propose(neighbour, FieldObject::adjacent_cleared);
        }
    }

    pending
        .into_iter()
        .filter(|(_, (from, to))| from != to)
        .map(|(position, (from, to))| Diff::transform(position, from, to))
        .collect()
}

/// Compute the exchanges that let every falling cell come to rest.
///
/// Per column, a scan cursor walks up every row while a landing cursor
/// marks the lowest slot that can still receive a cell. Empty cells are
/// skipped. A gravity-immune cell moves the landing cursor just above
/// itself, so nothing falls through it. Any other cell is exchanged down
/// to the landing cursor (if not already there) and the cursor advances.
///
/// The field is not mutated; swaps are tracked in an override map so that
/// later scans see earlier exchanges. Applying the result in order leaves
/// a field for which this function returns an empty batch.
pub fn gravitational_diff(field: &Field) -> DiffBatch {
    let dimension = field.dimension();
    let mut overrides: HashMap<Position, FieldObject> = HashMap::new();
    let kind_at = |overrides: &HashMap<Position, FieldObject>, position: Position| {
        overrides
            .get(&position)
            .copied()
            .or_else(|| field.get(position))
            .unwrap_or_default()
    };

    let mut diffs = DiffBatch::new();
    for column in 0..dimension.columns() as i32 {
        let mut landing = Position::new(0, column);
        for row in 0..dimension.rows() as i32 {
            let scan = Position::new(row, column);
            let kind = kind_at(&overrides, scan);
            if kind == FieldObject::Empty {
                continue;
            }
            if kind.is_gravity_immune() {
                landing = scan.above();
                continue;
            }
            let landing_kind = kind_at(&overrides, landing);
            if kind != landing_kind {
                diffs.push(Diff::exchange(scan, landing));
                overrides.insert(scan, landing_kind);
                overrides.insert(landing, kind);
            }
            landing = landing.above();
        }
    }
    diffs
}

/// Apply gravity to `field` in place, returning the diffs that were applied.
pub fn gravitate(field: &mut Field) -> DiffBatch {
    let diffs = gravitational_diff(field);
    diffs.apply(field);
    diffs
}

/// One transform per position whose kind differs between `from` and `to`.
///
/// Applying the result to `from` yields `to`. Positions are compared in
/// column-major, bottom-to-top order.
///
/// # Errors
///
/// Returns [`FieldError::IncomparableDimensions`] if the fields do not
/// share a dimension; no partial diff is produced.
pub fn diff(from: &Field, to: &Field) -> Result<DiffBatch, FieldError> {
    if from.dimension() != to.dimension() {
        return Err(FieldError::IncomparableDimensions {
            left: from.dimension(),
            right: to.dimension(),
        });
    }
    Ok(from
        .cells()
        .zip(to.cells())
        .filter(|((_, a), (_, b))| a != b)
        .map(|((position, a), (_, b))| Diff::transform(position, a, b))
        .collect())
}

//! Tsu chain resolution.

use tsumo_core::{Dimension, FieldObject};
use tsumo_field::algorithm::{
    clearing_diff, find_connections, flatten_connections, gravitational_diff,
};
use tsumo_field::{Connections, DiffBatch, Field, Visibility};

use crate::error::RuleError;
use crate::rule::Rule;
use crate::score::Score;

/// One clearing link of a chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainStep {
    /// 1-based position of this link in the chain.
    pub chain: u32,
    /// The groups that cleared.
    pub connections: Connections,
    /// Transforms caused by the clear.
    pub cleared: DiffBatch,
    /// Score of the clear.
    pub score: Score,
    /// Exchanges that settled the field after the clear.
    pub fell: DiffBatch,
}

/// Everything that happened while resolving a field to rest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainReport {
    /// Exchanges that settled floating objects before the first clear.
    pub settled: DiffBatch,
    /// Clearing links in order.
    pub steps: Vec<ChainStep>,
}

impl ChainReport {
    /// Number of links; 0 when nothing cleared.
    pub fn chain_count(&self) -> u32 {
        self.steps.last().map_or(0, |s| s.chain)
    }

    /// Sum of every link's `base × bonus`.
    pub fn total_points(&self) -> u64 {
        self.steps
            .iter()
            .fold(0u64, |sum, s| sum.saturating_add(s.score.total()))
    }

    /// Every diff in application order, for replaying the resolution.
    pub fn diffs(&self) -> DiffBatch {
        let mut all = self.settled.clone();
        for step in &self.steps {
            all.extend_from(&step.cleared);
            all.extend_from(&step.fell);
        }
        all
    }
}

/// A field played under a Tsu [`Rule`].
///
/// # Examples
///
/// ```
/// use tsumo_core::{Dimension, FieldObject, Position};
/// use tsumo_game::{Rule, TsuGame};
///
/// let mut game = TsuGame::new(Rule::default(), Dimension::default()).unwrap();
/// // Four reds with a blue wedged in: the blue falls, then the reds clear.
/// for row in 0..3 {
///     game.field_mut().set(Position::new(row, 0), FieldObject::Red);
/// }
/// game.field_mut().set(Position::new(0, 1), FieldObject::Red);
/// game.field_mut().set(Position::new(5, 1), FieldObject::Blue);
///
/// let report = game.resolve();
/// assert_eq!(report.chain_count(), 1);
/// assert_eq!(game.field().get(Position::new(0, 1)), Some(FieldObject::Blue));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TsuGame {
    rule: Rule,
    field: Field,
    chain: u32,
}

impl TsuGame {
    /// A game on an empty field.
    ///
    /// # Errors
    ///
    /// Any [`RuleError`] from [`Rule::validate`].
    pub fn new(rule: Rule, dimension: Dimension) -> Result<Self, RuleError> {
        Self::with_field(rule, Field::new(dimension))
    }

    /// A game on an existing field.
    ///
    /// # Errors
    ///
    /// Any [`RuleError`] from [`Rule::validate`].
    pub fn with_field(rule: Rule, field: Field) -> Result<Self, RuleError> {
        rule.validate()?;
        Ok(Self {
            rule,
            field,
            chain: 0,
        })
    }

    /// The rule in play.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// The field.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Mutable access to the field, e.g. to drop new pieces.
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    /// Links cleared since the last [`resolve`](Self::resolve) started.
    pub fn chain(&self) -> u32 {
        self.chain
    }

    /// Visible color groups large enough to clear.
    pub fn connections(&self) -> Connections {
        find_connections(
            &self.field,
            &FieldObject::COLORS,
            self.rule.min_clear_connection as usize,
            Visibility::VisibleOnly,
        )
    }

    /// Transforms that clearing the current connections would cause.
    pub fn clear(&self) -> DiffBatch {
        clearing_diff(&self.field, flatten_connections(&self.connections()))
    }

    /// Exchanges that would bring the field to rest.
    pub fn gravitate(&self) -> DiffBatch {
        gravitational_diff(&self.field)
    }

    /// Clear the current connections, score them as the next link and let
    /// the field fall. Returns `None`, leaving the field untouched, when
    /// nothing clears.
    ///
    /// The field is expected to be at rest; [`resolve`](Self::resolve)
    /// takes care of that.
    pub fn step(&mut self) -> Option<ChainStep> {
        let connections = self.connections();
        if connections.values().all(Vec::is_empty) {
            return None;
        }
        let cleared = clearing_diff(&self.field, flatten_connections(&connections));
        self.chain += 1;
        let score = self.rule.points(self.chain, &connections, &cleared);
        cleared.apply(&mut self.field);
        let fell = gravitational_diff(&self.field);
        fell.apply(&mut self.field);

        tracing::debug!(
            chain = self.chain,
            groups = connections.values().map(Vec::len).sum::<usize>(),
            cleared = cleared.len(),
            fell = fell.len(),
            base = score.base,
            bonus = score.bonus,
            "chain step"
        );

        Some(ChainStep {
            chain: self.chain,
            connections,
            cleared,
            score,
            fell,
        })
    }

    /// Settle the field and clear links until nothing more clears.
    pub fn resolve(&mut self) -> ChainReport {
        self.chain = 0;
        let settled = gravitational_diff(&self.field);
        settled.apply(&mut self.field);
        let mut steps = Vec::new();
        while let Some(step) = self.step() {
            steps.push(step);
        }
        tracing::debug!(chain = self.chain, "field at rest");
        ChainReport { settled, steps }
    }
}

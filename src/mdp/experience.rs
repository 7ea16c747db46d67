use log::{debug, warn};

use crate::{
    assert_positive,
    ds::{Table2, Table3},
    util::{check_equal_general, copy_table_3d, Grid3},
};

use super::Transition;

/// How the marginal sums are rebuilt after a bulk import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BulkImport {
    /// Zero the marginal before summing over the imported table, so it always matches it
    #[default]
    Recompute,
    /// Add the imported table's sums on top of the current marginal
    ///
    /// Only consistent when importing into a fresh or [reset](Experience::reset) accumulator:
    /// whatever the marginal held before is never subtracted out.
    Accumulate,
}

/// Configuration for an [`Experience`]
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceConfig {
    /// Number of states of the world
    ///
    /// **Default**: `1`
    pub states: usize,
    /// Number of actions available to the agent
    ///
    /// **Default**: `1`
    pub actions: usize,
    /// Marginal rebuild strategy for [`set_visits`](Experience::set_visits) and
    /// [`set_rewards`](Experience::set_rewards)
    ///
    /// **Default**: [`BulkImport::Recompute`]
    pub bulk_import: BulkImport,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            states: 1,
            actions: 1,
            bulk_import: BulkImport::default(),
        }
    }
}

/// Keeps track of recorded transitions and the rewards they produced
///
/// For every transition `(s, a) -> s1` this counts how many times it happened and sums the
/// reward gained across those occurrences. It does not store individual events, so past
/// transitions cannot be replayed from it.
///
/// Alongside the dense `S × A × S` tables it maintains their sums over the last axis, so that
/// `visits_sum(s, a) == Σ visits(s, a, s1)` and `reward_sum(s, a) == Σ reward(s, a, s1)` hold
/// after every [`record`](Experience::record).
///
/// Indices are trusted on the recording and query paths. An index past the end of a table
/// panics; any other out-of-range component is caught by a debug assertion only. Use the
/// `try_*` accessors for checked reads.
#[derive(Debug, Clone)]
pub struct Experience {
    s: usize,
    a: usize,
    visits: Table3<u64>,
    visits_sum: Table2<u64>,
    rewards: Table3<f64>,
    rewards_sum: Table2<f64>,
    /// Σ|r| per `(s, a)`, bounds the rounding error between `rewards_sum` and the row sums
    rewards_abs: Table2<f64>,
    bulk_import: BulkImport,
}

impl PartialEq for Experience {
    fn eq(&self, other: &Self) -> bool {
        self.s == other.s
            && self.a == other.a
            && self.visits == other.visits
            && self.visits_sum == other.visits_sum
            && self.rewards == other.rewards
            && self.rewards_sum == other.rewards_sum
            && self.bulk_import == other.bulk_import
    }
}

impl Experience {
    /// Initialize an empty `Experience` for `s` states and `a` actions
    ///
    /// **Panics** if `s` or `a` is zero
    pub fn new(s: usize, a: usize) -> Self {
        Self::from_config(ExperienceConfig {
            states: s,
            actions: a,
            ..Default::default()
        })
    }

    /// Initialize an empty `Experience` from a full configuration
    ///
    /// **Panics** if `config.states` or `config.actions` is zero
    pub fn from_config(config: ExperienceConfig) -> Self {
        assert_positive!(config.states);
        assert_positive!(config.actions);
        let ExperienceConfig {
            states: s,
            actions: a,
            bulk_import,
        } = config;
        debug!("allocating {s}x{a}x{s} experience tables");

        Self {
            s,
            a,
            visits: Table3::new(s, a, s),
            visits_sum: Table2::new(s, a),
            rewards: Table3::new(s, a, s),
            rewards_sum: Table2::new(s, a),
            rewards_abs: Table2::new(s, a),
            bulk_import,
        }
    }

    /// Record one occurrence of `(s, a) -> s1` with reward `rew`
    pub fn record(&mut self, s: usize, a: usize, s1: usize, rew: f64) {
        self.visits[(s, a, s1)] += 1;
        self.visits_sum[(s, a)] += 1;
        self.rewards[(s, a, s1)] += rew;
        self.rewards_sum[(s, a)] += rew;
        self.rewards_abs[(s, a)] += rew.abs();
    }

    /// Record a [`Transition`]
    pub fn record_transition(&mut self, transition: &Transition) {
        let &Transition {
            state,
            action,
            next_state,
            reward,
        } = transition;
        self.record(state, action, next_state, reward);
    }

    /// Zero all visits and rewards
    ///
    /// Afterwards the accumulator is indistinguishable from a new one with the same shape.
    pub fn reset(&mut self) {
        debug!("resetting {}x{} experience", self.s, self.a);
        self.visits.fill(0);
        self.visits_sum.fill(0);
        self.rewards.fill(0.0);
        self.rewards_sum.fill(0.0);
        self.rewards_abs.fill(0.0);
    }

    /// Overwrite the visits table with an external `S × A × S` container
    ///
    /// The container's dimensions are not checked. A container smaller than `S × A × S`
    /// panics on the first access past its end; a larger one is read only in its leading region.
    /// The marginal sums are then rebuilt according to the configured [`BulkImport`].
    pub fn set_visits<V, T>(&mut self, v: &V)
    where
        V: Grid3<T> + ?Sized,
        u64: From<T>,
    {
        debug!("importing {}x{}x{} visits table", self.s, self.a, self.s);
        copy_table_3d(v, &mut self.visits, self.s, self.a, self.s);

        match self.bulk_import {
            BulkImport::Recompute => self.visits_sum.fill(0),
            BulkImport::Accumulate => {
                if self.visits_sum.as_slice().iter().any(|&n| n != 0) {
                    warn!("accumulating imported visits on nonzero sums; sums no longer match the table");
                }
            }
        }

        for s in 0..self.s {
            for a in 0..self.a {
                self.visits_sum[(s, a)] += self.visits.row(s, a).iter().sum::<u64>();
            }
        }
    }

    /// Overwrite the rewards table with an external `S × A × S` container
    ///
    /// Same contract as [`set_visits`](Experience::set_visits).
    pub fn set_rewards<R, T>(&mut self, r: &R)
    where
        R: Grid3<T> + ?Sized,
        f64: From<T>,
    {
        debug!("importing {}x{}x{} rewards table", self.s, self.a, self.s);
        copy_table_3d(r, &mut self.rewards, self.s, self.a, self.s);

        match self.bulk_import {
            BulkImport::Recompute => {
                self.rewards_sum.fill(0.0);
                self.rewards_abs.fill(0.0);
            }
            BulkImport::Accumulate => {
                if self.rewards_sum.as_slice().iter().any(|&x| x != 0.0) {
                    warn!("accumulating imported rewards on nonzero sums; sums no longer match the table");
                }
            }
        }

        for s in 0..self.s {
            for a in 0..self.a {
                let row = self.rewards.row(s, a);
                self.rewards_sum[(s, a)] += row.iter().sum::<f64>();
                self.rewards_abs[(s, a)] += row.iter().map(|r| r.abs()).sum::<f64>();
            }
        }
    }

    /// Number of recorded visits of `(s, a) -> s1`
    pub fn visits(&self, s: usize, a: usize, s1: usize) -> u64 {
        self.visits[(s, a, s1)]
    }

    /// Number of recorded transitions starting from `(s, a)`
    pub fn visits_sum(&self, s: usize, a: usize) -> u64 {
        self.visits_sum[(s, a)]
    }

    /// Cumulative reward obtained from `(s, a) -> s1`
    pub fn reward(&self, s: usize, a: usize, s1: usize) -> f64 {
        self.rewards[(s, a, s1)]
    }

    /// Total reward obtained from transitions starting from `(s, a)`
    pub fn reward_sum(&self, s: usize, a: usize) -> f64 {
        self.rewards_sum[(s, a)]
    }

    /// Checked [`visits`](Experience::visits), `None` if any index is out of range
    pub fn try_visits(&self, s: usize, a: usize, s1: usize) -> Option<u64> {
        self.visits.get(s, a, s1).copied()
    }

    /// Checked [`visits_sum`](Experience::visits_sum), `None` if any index is out of range
    pub fn try_visits_sum(&self, s: usize, a: usize) -> Option<u64> {
        self.visits_sum.get(s, a).copied()
    }

    /// Checked [`reward`](Experience::reward), `None` if any index is out of range
    pub fn try_reward(&self, s: usize, a: usize, s1: usize) -> Option<f64> {
        self.rewards.get(s, a, s1).copied()
    }

    /// Checked [`reward_sum`](Experience::reward_sum), `None` if any index is out of range
    pub fn try_reward_sum(&self, s: usize, a: usize) -> Option<f64> {
        self.rewards_sum.get(s, a).copied()
    }

    pub fn visit_table(&self) -> &Table3<u64> {
        &self.visits
    }

    pub fn visit_sum_table(&self) -> &Table2<u64> {
        &self.visits_sum
    }

    pub fn reward_table(&self) -> &Table3<f64> {
        &self.rewards
    }

    pub fn reward_sum_table(&self) -> &Table2<f64> {
        &self.rewards_sum
    }

    /// Number of states of the world
    pub fn states(&self) -> usize {
        self.s
    }

    /// Number of actions available to the agent
    pub fn actions(&self) -> usize {
        self.a
    }

    /// Total number of recorded transitions
    pub fn total_visits(&self) -> u64 {
        self.visits_sum.as_slice().iter().sum()
    }

    /// Whether no visit has been recorded or imported
    pub fn is_empty(&self) -> bool {
        self.visits.as_slice().iter().all(|&n| n == 0)
    }

    /// Whether both marginal tables match the sums over their dense tables
    ///
    /// Visit counts must match exactly. The reward marginal and the row sum add the same
    /// rewards in a different order, so they may differ by the rounding error of `n` additions:
    /// `|row - sum| <= 2(n + S)·ε·Σ|r|`, with `n` the visit count of `(s, a)`.
    pub fn check_invariant(&self) -> bool {
        (0..self.s).all(|s| {
            (0..self.a).all(|a| {
                let visits = self.visits.row(s, a).iter().sum::<u64>();
                visits == self.visits_sum[(s, a)] && self.reward_sum_matches(s, a)
            })
        })
    }

    fn reward_sum_matches(&self, s: usize, a: usize) -> bool {
        let row = self.rewards.row(s, a).iter().sum::<f64>();
        let sum = self.rewards_sum[(s, a)];
        if check_equal_general(row, sum) {
            return true;
        }
        let terms = self.visits_sum[(s, a)] as f64 + self.s as f64;
        (row - sum).abs() <= 2.0 * terms * f64::EPSILON * self.rewards_abs[(s, a)]
    }
}

impl Extend<Transition> for Experience {
    fn extend<I: IntoIterator<Item = Transition>>(&mut self, iter: I) {
        for t in iter {
            self.record_transition(&t);
        }
    }
}

impl<'a> Extend<&'a Transition> for Experience {
    fn extend<I: IntoIterator<Item = &'a Transition>>(&mut self, iter: I) {
        for t in iter {
            self.record_transition(t);
        }
    }
}

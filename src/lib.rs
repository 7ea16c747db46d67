//! Incremental transition statistics for discrete Markov decision processes
//!
//! [`Experience`](mdp::Experience) counts every `(state, action, next_state)` transition it is
//! fed and sums the rewards they produced, keeping per-`(state, action)` marginals alongside so
//! model-based methods can estimate transition probabilities and expected rewards in O(1).
//!
//! ```
//! use mdp_experience::mdp::Experience;
//!
//! let mut exp = Experience::new(2, 2);
//! exp.record(0, 0, 1, 1.0);
//! exp.record(0, 0, 1, 1.0);
//! exp.record(0, 0, 0, -1.0);
//!
//! assert_eq!(exp.visits(0, 0, 1), 2);
//! assert_eq!(exp.visits_sum(0, 0), 3);
//! assert_eq!(exp.reward_sum(0, 0), 1.0);
//! ```

/// Dense tables
pub mod ds;

/// Experience accumulation for discrete MDPs
pub mod mdp;

/// Conversions to other numeric representations
#[cfg(feature = "tensor")]
pub mod traits;

/// Numeric utilities
pub mod util;

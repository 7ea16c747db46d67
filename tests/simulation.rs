//! Drives an accumulator with a known random MDP and checks the estimates it supports.

use rand::{distributions::WeightedIndex, prelude::*, rngs::StdRng};
use rand_distr::Normal;

use mdp_experience::mdp::{Experience, Transition};

const S: usize = 3;
const A: usize = 2;
const STEPS: usize = 30_000;

/// Transition probabilities `P[s][a][s1]`
const P: [[[f64; S]; A]; S] = [
    [[0.7, 0.2, 0.1], [0.0, 0.5, 0.5]],
    [[1.0, 0.0, 0.0], [0.3, 0.3, 0.4]],
    [[0.1, 0.1, 0.8], [0.25, 0.25, 0.5]],
];

/// Expected rewards `R[s][a][s1]`
const R: [[[f64; S]; A]; S] = [
    [[1.0, -1.0, 0.0], [0.0, 2.0, 3.0]],
    [[0.5, 0.0, 0.0], [-2.0, 1.0, 4.0]],
    [[0.0, 1.5, -0.5], [2.5, 0.0, 1.0]],
];

fn simulate(rng: &mut StdRng) -> Vec<Transition> {
    let noise = Normal::new(0.0, 0.1).unwrap();
    let mut state = 0;
    (0..STEPS)
        .map(|_| {
            let action = rng.gen_range(0..A);
            let next_state = WeightedIndex::new(P[state][action])
                .unwrap()
                .sample(rng);
            let reward = R[state][action][next_state] + noise.sample(rng);
            let t = Transition::new(state, action, next_state, reward);
            state = next_state;
            t
        })
        .collect()
}

#[test]
fn estimates_converge_to_model() {
    let mut rng = StdRng::seed_from_u64(42);
    let transitions = simulate(&mut rng);

    let mut exp = Experience::new(S, A);
    exp.extend(&transitions);
    assert_eq!(exp.total_visits(), STEPS as u64);

    for s in 0..S {
        for a in 0..A {
            let n = exp.visits_sum(s, a);
            assert!(n > 1_000, "every pair is visited often, ({s}, {a}) got {n}");

            for s1 in 0..S {
                let visits = exp.visits(s, a, s1);
                let p_hat = visits as f64 / n as f64;
                assert!(
                    (p_hat - P[s][a][s1]).abs() < 0.05,
                    "P({s1} | {s}, {a}) estimated as {p_hat}, expected {}",
                    P[s][a][s1]
                );

                if visits > 100 {
                    let r_hat = exp.reward(s, a, s1) / visits as f64;
                    assert!(
                        (r_hat - R[s][a][s1]).abs() < 0.05,
                        "R({s}, {a}, {s1}) estimated as {r_hat}, expected {}",
                        R[s][a][s1]
                    );
                } else {
                    assert_eq!(P[s][a][s1], 0.0, "only impossible transitions are unseen");
                }
            }
        }
    }
}

#[test]
fn reward_marginals_track_float_sums() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut exp = Experience::new(S, A);
    for t in simulate(&mut rng) {
        exp.record_transition(&t);
    }

    assert!(exp.check_invariant(), "noisy float rewards keep the marginals consistent");

    for s in 0..S {
        for a in 0..A {
            let row: f64 = exp.reward_table().row(s, a).iter().sum();
            let sum = exp.reward_sum(s, a);
            assert!(
                (row - sum).abs() <= 1e-9 * row.abs().max(1.0),
                "marginal {sum} drifted from row sum {row} for ({s}, {a})"
            );
        }
    }
}

//! # Rule Induction
//!
//! A greedy separate-and-conquer rule learner (IREP family) for binary
//! classification over numeric features.
//!
//! ## Key Features
//!
//! - **Grow/prune protocol**: rules are grown on a random two thirds of the
//!   remaining data using FOIL gain and pruned on the held-out third
//! - **Index-list narrowing**: every subset is a list of row indices into one
//!   immutable [`dataset::Dataset`]
//! - **Reproducible**: the only randomness is a seeded `StdRng` owned by the learner
//!
//! ## Example
//!
//! ```rust,ignore
//! use rule_induction::estimator::IrepClassifier;
//!
//! let x = vec![vec![1.0], vec![3.0], vec![6.0], vec![8.0], vec![10.0]];
//! let y = vec![false, false, true, true, true];
//!
//! let mut clf = IrepClassifier::new(3, 2.0 / 3.0, Some(7));
//! clf.fit_matrix(&x, &y)?;
//! let predictions = clf.predict_matrix(&x)?;
//! println!("{}", clf.describe());
//! ```

// Module declarations
pub mod conf;
pub mod dataframe;
pub mod dataset;
pub mod estimator;
pub mod grow;
pub mod learner;
pub mod metrics;
pub mod prune;
pub mod rules;
pub mod split;

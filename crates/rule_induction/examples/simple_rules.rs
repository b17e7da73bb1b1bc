use estimator_api::api::Estimator;
use polars::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rule_induction::estimator::IrepClassifier;
use rule_induction::metrics::{accuracy, precision, recall, take_rows, train_test_split};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Two informative features and a couple of noise columns. The concept is
/// `(x1 > 6 AND x2 < 4) OR x1 < 1.5`.
fn generate_sample(n_samples: usize) -> (Vec<Vec<f64>>, Vec<bool>) {
    let mut rows = Vec::with_capacity(n_samples);
    let mut labels = Vec::with_capacity(n_samples);

    for i in 0..n_samples {
        let x1 = ((i * 37) % 100) as f64 / 10.0;
        let x2 = ((i * 53 + 11) % 80) as f64 / 10.0;
        let noise_a = ((i * 13 + 7) % 50) as f64 / 5.0;
        let noise_b = if (i + 3) % 5 == 0 { 10.0 } else { 5.0 };

        rows.push(vec![x1, x2, noise_a, noise_b]);
        labels.push((x1 > 6.0 && x2 < 4.0) || x1 < 1.5);
    }
    (rows, labels)
}

fn to_frames(rows: &[Vec<f64>], labels: &[bool]) -> (DataFrame, DataFrame) {
    let names = ["x1", "x2", "noise_0", "noise_1"];
    let columns: Vec<Column> = names
        .iter()
        .enumerate()
        .map(|(j, name)| {
            let values: Vec<f64> = rows.iter().map(|r| r[j]).collect();
            Series::new(PlSmallStr::from_str(name), values).into()
        })
        .collect();
    let x = DataFrame::new(columns).unwrap();
    let y = DataFrame::new(vec![
        Series::new(PlSmallStr::from_static("target"), labels.to_vec()).into(),
    ])
    .unwrap();
    (x, y)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Simple Rules (Polars) ===");

    let (rows, labels) = generate_sample(300);
    let mut rng = StdRng::seed_from_u64(7);
    let (train_idx, test_idx) = train_test_split(rows.len(), 0.3, &mut rng);

    let (x_train, y_train) = to_frames(&take_rows(&rows, &train_idx), &take_rows(&labels, &train_idx));
    let (x_test, _) = to_frames(&take_rows(&rows, &test_idx), &take_rows(&labels, &test_idx));
    let y_test = take_rows(&labels, &test_idx);

    println!(
        "Train shape: {{ rows: {}, cols: {} }}, test rows: {}",
        x_train.height(),
        x_train.width(),
        x_test.height()
    );

    let mut clf = IrepClassifier::new(
        5,          // max_bad_rules
        2.0 / 3.0,  // grow_ratio
        Some(42),   // seed
    );

    println!("\nFitting rule set...");
    let start_time = Instant::now();
    clf.fit(&x_train, &y_train).unwrap();
    println!("Fitting took: {:?}", start_time.elapsed());

    println!("\n=== Results ===");
    println!("Stop reason: {:?}", clf.stop_reason());
    println!("{}", clf.describe());

    println!("Attempts:");
    for (i, rec) in clf.history().iter().enumerate() {
        println!(
            "  {:>2}. pool={} grow={} prune={} grown_len={} p={} n={} accepted={}",
            i,
            rec.pool_size,
            rec.grow_size,
            rec.prune_size,
            rec.grown_length,
            rec.positives,
            rec.negatives,
            rec.accepted
        );
    }

    let preds_df = clf.predict(&x_test).unwrap();
    let y_pred: Vec<bool> = preds_df
        .column("target")
        .expect("predicted target column")
        .as_materialized_series()
        .bool()
        .expect("boolean predictions")
        .into_no_null_iter()
        .collect();

    let fmt_score = |s: Option<f64>| s.map_or("n/a".to_string(), |v| format!("{:.4}", v));
    println!("\nHeld-out scores:");
    println!("  accuracy  = {}", fmt_score(accuracy(&y_test, &y_pred)));
    println!("  precision = {}", fmt_score(precision(&y_test, &y_pred)));
    println!("  recall    = {}", fmt_score(recall(&y_test, &y_pred)));
}
